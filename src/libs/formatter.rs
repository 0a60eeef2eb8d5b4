//! Formatting helpers for report cells and terminal output.
//!
//! ## Format Specifications
//!
//! - **Clock times**: `HH:MM`, zero-padded (`07:45`)
//! - **Hours**: shortest decimal form (`8`, `4`, `0.5`, `0.75`)
//! - **Durations**: `HH:MM`, negative durations clamp to `00:00`
//!
//! ```rust
//! use shiftgen::libs::formatter::{format_duration, format_hours};
//! use chrono::Duration;
//!
//! assert_eq!(format_hours(0.75), "0.75");
//! assert_eq!(format_duration(&Duration::minutes(510)), "08:30");
//! ```

use chrono::{Duration, NaiveTime};

/// Formats a clock time as `HH:MM`.
pub fn format_clock(time: &NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Formats an hour count without trailing zeros.
pub fn format_hours(hours: f64) -> String {
    // Display for f64 already prints 8.0 as "8" and 0.75 as "0.75".
    format!("{}", hours)
}

/// Formats a duration as `HH:MM`.
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_without_trailing_zeros() {
        assert_eq!(format_hours(8.0), "8");
        assert_eq!(format_hours(0.0), "0");
        assert_eq!(format_hours(0.5), "0.5");
        assert_eq!(format_hours(1.0), "1");
    }

    #[test]
    fn clock_is_zero_padded() {
        assert_eq!(format_clock(&NaiveTime::from_hms_opt(7, 5, 0).unwrap()), "07:05");
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(&Duration::zero()), "00:00");
        assert_eq!(format_duration(&(Duration::hours(8) + Duration::minutes(45))), "08:45");
        assert_eq!(format_duration(&Duration::minutes(-30)), "00:00");
    }
}
