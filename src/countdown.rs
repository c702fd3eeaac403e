//! Midnight Countdown
//!
//! Time remaining until the next local midnight, formatted `H:MM:SS`.
//!
//! The functions are pure over a [`NaiveDateTime`] so tests can pin the clock;
//! the app samples `Local::now()` once a second and recomputes from absolute
//! time, so the display self-corrects with no cumulative drift.

use std::time::Duration;

use chrono::NaiveDateTime;

/// Time remaining until the next midnight after `now`, floored to the
/// enclosing whole second when formatted.
pub fn time_until_reset(now: NaiveDateTime) -> Duration {
    let next_midnight = now
        .date()
        .succ_opt()
        .and_then(|d| d.and_hms_opt(0, 0, 0));

    match next_midnight {
        Some(midnight) => (midnight - now).to_std().unwrap_or(Duration::ZERO),
        // Only reachable at chrono's maximum representable date
        None => Duration::ZERO,
    }
}

/// Format a remaining duration as `H:MM:SS`.
///
/// Hours are unpadded and reduced modulo 24, so exactly at midnight the full
/// 24-hour remainder displays as `0:00:00`.
pub fn format_reset(remaining: Duration) -> String {
    let total = remaining.as_secs();
    let hours = (total / 3600) % 24;
    let minutes = (total / 60) % 60;
    let seconds = total % 60;
    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}

/// The countdown string for the header, e.g. `7:41:09`.
pub fn reset_countdown(now: NaiveDateTime) -> String {
    format_reset(time_until_reset(now))
}
