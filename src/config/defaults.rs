// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Idle**: Controls auto-hide timeout
//! - **Volume**: Playback volume and keyboard step
//! - **Seek**: Keyboard seek step
//! - **Table of contents**: Scroll-spy activation line

use crate::domain::ui::newtypes::{activation_bounds, idle_bounds};
use crate::domain::video::newtypes::{seek_step_bounds, volume_bounds, volume_step_bounds};

// ==========================================================================
// Idle Defaults
// ==========================================================================

/// Default delay before player controls hide (in milliseconds).
pub const DEFAULT_IDLE_TIMEOUT_MS: u64 = idle_bounds::DEFAULT_MS;

/// Minimum idle timeout (in milliseconds).
pub const MIN_IDLE_TIMEOUT_MS: u64 = idle_bounds::MIN_MS;

/// Maximum idle timeout (in milliseconds).
pub const MAX_IDLE_TIMEOUT_MS: u64 = idle_bounds::MAX_MS;

/// Keep controls visible while paused.
pub const DEFAULT_PREVENT_IDLE_WHEN_PAUSED: bool = true;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f64 = volume_bounds::DEFAULT;

/// Minimum volume level.
pub const MIN_VOLUME: f64 = volume_bounds::MIN;

/// Maximum volume level.
pub const MAX_VOLUME: f64 = volume_bounds::MAX;

/// Volume adjustment per ArrowUp/ArrowDown press.
pub const DEFAULT_VOLUME_STEP: f64 = volume_step_bounds::DEFAULT;

// ==========================================================================
// Seek Defaults
// ==========================================================================

/// Default keyboard seek step in seconds (arrow keys).
pub const DEFAULT_KEYBOARD_SEEK_STEP_SECS: f64 = seek_step_bounds::DEFAULT;

/// Minimum keyboard seek step in seconds.
pub const MIN_KEYBOARD_SEEK_STEP_SECS: f64 = seek_step_bounds::MIN;

/// Maximum keyboard seek step in seconds.
pub const MAX_KEYBOARD_SEEK_STEP_SECS: f64 = seek_step_bounds::MAX;

// ==========================================================================
// Table of Contents Defaults
// ==========================================================================

/// Distance of the activation line below the viewport top (pixels).
pub const DEFAULT_TOC_TOP_OFFSET_PX: f64 = activation_bounds::DEFAULT_PX;

/// Whether the table of contents shows an "Introduction" pseudo-entry.
pub const DEFAULT_TOC_SHOW_INTRO: bool = false;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_IDLE_TIMEOUT_MS > 0);
    assert!(MAX_IDLE_TIMEOUT_MS >= MIN_IDLE_TIMEOUT_MS);
    assert!(DEFAULT_IDLE_TIMEOUT_MS >= MIN_IDLE_TIMEOUT_MS);
    assert!(DEFAULT_IDLE_TIMEOUT_MS <= MAX_IDLE_TIMEOUT_MS);

    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    assert!(DEFAULT_VOLUME_STEP > 0.0);

    assert!(MIN_KEYBOARD_SEEK_STEP_SECS > 0.0);
    assert!(DEFAULT_KEYBOARD_SEEK_STEP_SECS >= MIN_KEYBOARD_SEEK_STEP_SECS);
    assert!(DEFAULT_KEYBOARD_SEEK_STEP_SECS <= MAX_KEYBOARD_SEEK_STEP_SECS);

    assert!(DEFAULT_TOC_TOP_OFFSET_PX >= 0.0);
};
