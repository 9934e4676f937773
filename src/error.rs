// SPDX-License-Identifier: MPL-2.0
use crate::video_player::RequestKind;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Content(ContentError),
    /// A best-effort media request (play, fullscreen, picture-in-picture) was rejected.
    MediaRequest { kind: RequestKind, reason: String },
    /// A player consumer was used without a provider in scope.
    MissingProvider { component: String },
    /// Bad command-line arguments.
    Cli(String),
}

/// Problems found while reading an article file.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentError {
    /// The file does not start with a `+++` front matter block.
    MissingFrontMatter,

    /// The front matter block is opened but never closed.
    UnterminatedFrontMatter,

    /// The front matter is not valid TOML or lacks a required field.
    InvalidFrontMatter(String),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::MissingFrontMatter => write!(f, "missing +++ front matter"),
            ContentError::UnterminatedFrontMatter => write!(f, "unterminated front matter"),
            ContentError::InvalidFrontMatter(msg) => write!(f, "invalid front matter: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Content(e) => write!(f, "Content Error: {}", e),
            Error::MediaRequest { kind, reason } => {
                write!(f, "Media request {:?} rejected: {}", kind, reason)
            }
            Error::MissingProvider { component } => write!(
                f,
                "`{}` must be rendered inside a video player provider",
                component
            ),
            Error::Cli(e) => write!(f, "Invalid arguments: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ContentError> for Error {
    fn from(err: ContentError) -> Self {
        Error::Content(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Cli(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
