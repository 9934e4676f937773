// SPDX-License-Identifier: MPL-2.0
//! Time formatting and ratio helpers for player controls.
//!
//! All times are `f64` seconds, matching the native media element.

/// Formats a time in MM:SS or HH:MM:SS format.
///
/// Negative and non-finite values display as zero.
///
/// # Examples
///
/// ```
/// use folio::video_player::time_units::format_time;
///
/// assert_eq!(format_time(125.0), "02:05");
/// assert_eq!(format_time(3665.0), "01:01:05");
/// ```
pub fn format_time(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() {
        seconds.max(0.0) as u64
    } else {
        0
    };
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Returns `part / whole` clamped to `[0, 1]`, or `0` for an empty whole.
///
/// # Examples
///
/// ```
/// use folio::video_player::time_units::ratio;
///
/// assert_eq!(ratio(30.0, 120.0), 0.25);
/// assert_eq!(ratio(5.0, 0.0), 0.0);
/// ```
#[inline]
pub fn ratio(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 || !whole.is_finite() || !part.is_finite() {
        return 0.0;
    }
    (part / whole).clamp(0.0, 1.0)
}

/// Formats a playback rate for display, e.g. `1.25x`.
pub fn format_rate(rate: f64) -> String {
    let fixed = format!("{:.2}", rate);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{}x", trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_handles_zero() {
        assert_eq!(format_time(0.0), "00:00");
    }

    #[test]
    fn format_time_handles_minutes() {
        assert_eq!(format_time(125.0), "02:05");
    }

    #[test]
    fn format_time_handles_hours() {
        assert_eq!(format_time(3665.0), "01:01:05");
    }

    #[test]
    fn format_time_handles_negative_and_nan() {
        assert_eq!(format_time(-10.0), "00:00");
        assert_eq!(format_time(f64::NAN), "00:00");
    }

    #[test]
    fn ratio_clamps() {
        assert_eq!(ratio(150.0, 100.0), 1.0);
        assert_eq!(ratio(-1.0, 100.0), 0.0);
        assert_eq!(ratio(1.0, f64::INFINITY), 0.0);
    }

    #[test]
    fn format_rate_trims_trailing_zeros() {
        assert_eq!(format_rate(1.0), "1x");
        assert_eq!(format_rate(2.0), "2x");
        assert_eq!(format_rate(1.5), "1.5x");
        assert_eq!(format_rate(1.25), "1.25x");
        assert_eq!(format_rate(0.75), "0.75x");
        assert_eq!(format_rate(0.5), "0.5x");
    }
}
