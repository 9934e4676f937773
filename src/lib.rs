// SPDX-License-Identifier: MPL-2.0
//! `folio` provides the interactive pieces of a personal blog: a headless
//! video player control layer with interchangeable iced skins, and a
//! scroll-spy table of contents for long articles.
//!
//! - [`video_player`] - Player state store, shortcuts, seek bar, idle timer
//! - [`toc`] - Active-heading tracking while an article scrolls
//! - [`content`] - Article loading and table-of-contents extraction
//! - [`ui`] - Player skins
//! - [`config`] - `settings.toml` persistence

#![doc(html_root_url = "https://docs.rs/folio/0.3.0")]

pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod toc;
pub mod ui;
pub mod video_player;

#[cfg(test)]
mod test_utils;
