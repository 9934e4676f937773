// SPDX-License-Identifier: MPL-2.0
//! Player status.
//!
//! A single enum summarizing what the media element is doing. The status is
//! always derived from native media events, never set by callers.

/// Represents the current playback status of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerStatus {
    /// Media is loaded but playback has never started.
    #[default]
    Idle,
    /// Media is currently playing.
    Playing,
    /// Media is paused at the current position.
    Paused,
    /// Playback reached the end of the media.
    Ended,
    /// Playback stalled waiting for data.
    Waiting,
    /// Media is seeking to a new position.
    Seeking,
}

impl PlayerStatus {
    /// Returns true if the media is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the media is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true if playback reached the end.
    #[must_use]
    pub fn is_ended(self) -> bool {
        matches!(self, Self::Ended)
    }

    /// Returns true for transient states that show a spinner.
    #[must_use]
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Waiting | Self::Seeking)
    }
}
