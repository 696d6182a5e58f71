//! Wall-clock arithmetic for the daily status recheck
//!
//! The recheck runs once at startup, again at the next local midnight, and
//! every [`RECHECK_PERIOD`] after that.

use chrono::{DateTime, Duration, TimeZone};

pub const RECHECK_PERIOD: std::time::Duration = std::time::Duration::from_secs(24 * 60 * 60);

/// Start of the next calendar day in `now`'s time zone.
///
/// When midnight does not exist locally (DST gap), falls back to 24 hours
/// from `now`.
pub fn next_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    now.date_naive()
        .succ_opt()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .and_then(|midnight| now.timezone().from_local_datetime(&midnight).earliest())
        .unwrap_or_else(|| now.clone() + Duration::hours(24))
}

/// Time left until [`next_midnight`].
pub fn until_next_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> std::time::Duration {
    (next_midnight(now) - now.clone())
        .to_std()
        .unwrap_or(std::time::Duration::ZERO)
}
