// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// IdleTimeout
// =============================================================================

/// Idle timeout bounds (in milliseconds).
pub mod idle_bounds {
    /// Minimum idle timeout.
    pub const MIN_MS: u64 = 500;
    /// Maximum idle timeout.
    pub const MAX_MS: u64 = 30_000;
    /// Default idle timeout.
    pub const DEFAULT_MS: u64 = 3_000;
}

/// Delay without pointer or keyboard activity before player controls hide.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0.5–30 seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleTimeout(u64);

impl IdleTimeout {
    /// Creates a new idle timeout in milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(value: u64) -> Self {
        Self(value.clamp(idle_bounds::MIN_MS, idle_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for IdleTimeout {
    fn default() -> Self {
        Self(idle_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// ActivationOffset
// =============================================================================

/// Scroll-spy activation line bounds (pixels below the viewport top).
pub mod activation_bounds {
    /// Minimum offset.
    pub const MIN_PX: f64 = 0.0;
    /// Maximum offset.
    pub const MAX_PX: f64 = 1_000.0;
    /// Default offset.
    pub const DEFAULT_PX: f64 = 150.0;
}

/// Distance of the scroll-spy activation line below the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationOffset(f64);

impl ActivationOffset {
    /// Creates a new offset in pixels, clamping to valid range.
    #[must_use]
    pub fn new(px: f64) -> Self {
        if px.is_nan() {
            return Self::default();
        }
        Self(px.clamp(activation_bounds::MIN_PX, activation_bounds::MAX_PX))
    }

    /// Returns the offset in pixels.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for ActivationOffset {
    fn default() -> Self {
        Self(activation_bounds::DEFAULT_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_timeout_clamps_to_valid_range() {
        assert_eq!(IdleTimeout::from_millis(0).as_millis(), idle_bounds::MIN_MS);
        assert_eq!(
            IdleTimeout::from_millis(u64::MAX).as_millis(),
            idle_bounds::MAX_MS
        );
        assert_eq!(
            IdleTimeout::from_millis(2_500).as_duration(),
            Duration::from_millis(2_500)
        );
    }

    #[test]
    fn idle_timeout_default() {
        assert_eq!(IdleTimeout::default().as_millis(), 3_000);
    }

    #[test]
    fn activation_offset_clamps() {
        assert_eq!(ActivationOffset::new(-20.0).value(), 0.0);
        assert_eq!(ActivationOffset::new(5_000.0).value(), 1_000.0);
        assert_eq!(ActivationOffset::new(f64::NAN).value(), 150.0);
        assert_eq!(ActivationOffset::new(114.0).value(), 114.0);
    }
}
