// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for video playback values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Volume
// =============================================================================

/// Volume bounds (0.0 to 1.0, mirroring the native media element).
pub mod volume_bounds {
    /// Minimum volume level.
    pub const MIN: f64 = 0.0;
    /// Maximum volume level.
    pub const MAX: f64 = 1.0;
    /// Default volume level.
    pub const DEFAULT: f64 = 1.0;
}

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// Muting is tracked separately by the player; a muted player keeps its
/// stored volume so that unmuting restores it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f64);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    ///
    /// `NaN` is treated as silence.
    #[must_use]
    pub fn new(volume: f64) -> Self {
        if volume.is_nan() {
            return Self(volume_bounds::MIN);
        }
        Self(volume.clamp(volume_bounds::MIN, volume_bounds::MAX))
    }

    /// Returns the volume value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true if volume is effectively silent (below audible threshold).
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 < 0.001
    }

    /// Adds `delta` (which may be negative), clamping to the valid range.
    #[must_use]
    pub fn offset(self, delta: f64) -> Self {
        Self::new(self.0 + delta)
    }

    /// Returns true if this is the minimum volume.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= volume_bounds::MIN
    }

    /// Returns true if this is the maximum volume.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= volume_bounds::MAX
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::DEFAULT)
    }
}

// =============================================================================
// VolumeStep
// =============================================================================

/// Keyboard volume step bounds.
pub mod volume_step_bounds {
    /// Minimum step.
    pub const MIN: f64 = 0.01;
    /// Maximum step.
    pub const MAX: f64 = 0.5;
    /// Default step (ArrowUp/ArrowDown).
    pub const DEFAULT: f64 = 0.1;
}

/// Amount added or removed by one volume key press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeStep(f64);

impl VolumeStep {
    /// Creates a new volume step, clamping to valid range.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(volume_step_bounds::MIN, volume_step_bounds::MAX))
    }

    /// Returns the value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for VolumeStep {
    fn default() -> Self {
        Self(volume_step_bounds::DEFAULT)
    }
}

// =============================================================================
// PlaybackRate
// =============================================================================

/// Playback rate bounds and allowed presets.
pub mod rate_bounds {
    /// Slowest allowed rate.
    pub const MIN: f64 = 0.5;
    /// Fastest allowed rate.
    pub const MAX: f64 = 2.0;
    /// Normal speed.
    pub const DEFAULT: f64 = 1.0;
    /// Every rate a player may be set to, ascending.
    pub const PRESETS: &[f64] = &[0.5, 0.75, 1.0, 1.25, 1.5, 2.0];
}

/// Playback rate, always one of [`rate_bounds::PRESETS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    /// Creates a playback rate by snapping to the nearest preset.
    ///
    /// Ties resolve to the slower preset. Non-finite input yields normal speed.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        if !rate.is_finite() {
            return Self::default();
        }
        let mut best = rate_bounds::PRESETS[0];
        for &preset in rate_bounds::PRESETS {
            if (preset - rate).abs() < (best - rate).abs() {
                best = preset;
            }
        }
        Self(best)
    }

    /// Returns the rate value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the next faster preset, or self if at maximum.
    #[must_use]
    pub fn increase(self) -> Self {
        let next = rate_bounds::PRESETS
            .iter()
            .find(|&&r| r > self.0 + 0.001)
            .copied()
            .unwrap_or(self.0);
        Self(next)
    }

    /// Returns the next slower preset, or self if at minimum.
    #[must_use]
    pub fn decrease(self) -> Self {
        let prev = rate_bounds::PRESETS
            .iter()
            .rev()
            .find(|&&r| r < self.0 - 0.001)
            .copied()
            .unwrap_or(self.0);
        Self(prev)
    }

    /// Returns true if this is the minimum rate.
    #[must_use]
    pub fn is_min(self) -> bool {
        (self.0 - rate_bounds::MIN).abs() < 0.001
    }

    /// Returns true if this is the maximum rate.
    #[must_use]
    pub fn is_max(self) -> bool {
        (self.0 - rate_bounds::MAX).abs() < 0.001
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self(rate_bounds::DEFAULT)
    }
}

// =============================================================================
// KeyboardSeekStep
// =============================================================================

/// Keyboard seek step bounds (in seconds).
pub mod seek_step_bounds {
    /// Minimum seek step.
    pub const MIN: f64 = 0.5;
    /// Maximum seek step.
    pub const MAX: f64 = 30.0;
    /// Default seek step (ArrowLeft/ArrowRight).
    pub const DEFAULT: f64 = 5.0;
}

/// Keyboard seek step in seconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0.5–30.0 seconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardSeekStep(f64);

impl KeyboardSeekStep {
    /// Creates a new keyboard seek step, clamping to valid range.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(seek_step_bounds::MIN, seek_step_bounds::MAX))
    }

    /// Returns the value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the step as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f64(self.0)
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= seek_step_bounds::MIN
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= seek_step_bounds::MAX
    }
}

impl Default for KeyboardSeekStep {
    fn default() -> Self {
        Self(seek_step_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_clamps_to_unit_range() {
        assert_eq!(Volume::new(-0.5).value(), 0.0);
        assert_eq!(Volume::new(1.5).value(), 1.0);
        assert_eq!(Volume::new(0.4).value(), 0.4);
        assert_eq!(Volume::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn volume_offset_clamps() {
        assert_eq!(Volume::new(0.95).offset(0.1).value(), 1.0);
        assert_eq!(Volume::new(0.05).offset(-0.1).value(), 0.0);
        assert!(Volume::new(1.0).is_max());
        assert!(Volume::new(0.0).is_min());
        assert!(Volume::new(0.0).is_silent());
    }

    #[test]
    fn playback_rate_snaps_to_presets() {
        assert_eq!(PlaybackRate::new(1.1).value(), 1.0);
        assert_eq!(PlaybackRate::new(1.2).value(), 1.25);
        assert_eq!(PlaybackRate::new(0.1).value(), 0.5);
        assert_eq!(PlaybackRate::new(16.0).value(), 2.0);
        assert_eq!(PlaybackRate::new(f64::INFINITY).value(), 1.0);
    }

    #[test]
    fn playback_rate_steps_through_presets() {
        let rate = PlaybackRate::default();
        assert_eq!(rate.increase().value(), 1.25);
        assert_eq!(rate.decrease().value(), 0.75);
        assert!(PlaybackRate::new(2.0).increase().is_max());
        assert!(PlaybackRate::new(0.5).decrease().is_min());
    }

    #[test]
    fn seek_step_clamps_and_converts() {
        assert_eq!(KeyboardSeekStep::new(0.0).value(), seek_step_bounds::MIN);
        assert_eq!(KeyboardSeekStep::new(100.0).value(), seek_step_bounds::MAX);
        assert_eq!(KeyboardSeekStep::default().value(), 5.0);
        assert_eq!(
            KeyboardSeekStep::new(2.5).as_duration(),
            Duration::from_secs_f64(2.5)
        );
    }

    #[test]
    fn volume_step_defaults_to_a_tenth() {
        assert_eq!(VolumeStep::default().value(), 0.1);
        assert_eq!(VolumeStep::new(5.0).value(), volume_step_bounds::MAX);
    }
}
