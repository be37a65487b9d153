//! Content-day derivation
//!
//! All daily content is keyed by the calendar date in a fixed +09:00 offset,
//! regardless of where a server instance runs. The key and the day-of-year
//! variant selector are derived from the same offset so they can never
//! disagree about which day it is.

use chrono::{DateTime, Datelike, FixedOffset, Utc};

/// Fixed offset (hours east of UTC) used for all content-day computation.
pub const CONTENT_OFFSET_HOURS: i32 = 9;

fn content_offset() -> FixedOffset {
    FixedOffset::east_opt(CONTENT_OFFSET_HOURS * 3600).expect("+09:00 is a valid offset")
}

/// Derive the content-day key (`YYYY-MM-DD`) for an instant.
///
/// Pure function of the instant; stable for any two calls within the same
/// second. The key advances exactly once every 24 hours, at midnight +09:00.
pub fn content_day(now: DateTime<Utc>) -> String {
    now.with_timezone(&content_offset())
        .format("%Y-%m-%d")
        .to_string()
}

/// Derive the 1-based ordinal day of the year for an instant, in the same
/// +09:00 offset as [`content_day`].
///
/// Used only to alternate content variants (odd/even day); never used as a
/// cache or store key, so the year-boundary reset cannot collide keys.
pub fn day_of_year(now: DateTime<Utc>) -> u32 {
    now.with_timezone(&content_offset()).ordinal()
}

/// Capability trait for reading the current time.
///
/// Production code uses [`SystemClock`]; tests inject a manual clock so the
/// content day can be advanced deterministically.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;

    /// The content-day key for the current instant.
    fn today_key(&self) -> String {
        content_day(self.now())
    }

    /// The day-of-year variant selector for the current instant.
    fn day_of_year(&self) -> u32 {
        day_of_year(self.now())
    }
}

/// Wall-clock implementation of [`Clock`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
