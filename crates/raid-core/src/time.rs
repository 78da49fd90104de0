//! Raid time resolution
//!
//! Parses the free-text time argument of the hosting command into an absolute
//! timestamp. Two forms are accepted:
//!
//! - `H[:MM]` - a wall-clock time today in the reference timezone, with a
//!   single 12-hour roll-forward when the result would already be in the past
//!   (resolves AM/PM ambiguity without an explicit meridiem);
//! - a bare integer - a duration in minutes from now.
//!
//! Anything else is an `InvalidTimeFormat`. The near-future window bound is a
//! separate predicate enforced by the hosting flow, so "too far in the future"
//! stays a distinct rejection from a malformed string.

use chrono::{DateTime, Duration, TimeZone, Timelike};
use regex::Regex;
use std::sync::OnceLock;

use crate::error::DomainError;

/// Default reference timezone for wall-clock inputs
pub const DEFAULT_TIMEZONE: chrono_tz::Tz = chrono_tz::America::New_York;

/// Resolved times at or beyond this lead time are rejected as too far ahead
pub const MAX_LEAD_MINUTES: i64 = 105;

/// Hour + optional separator + 2-digit minute, or a bare integer duration.
/// The hour group is lazy so `730` splits as 7:30 rather than 73:0.
fn time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?:(\d{1,2}?)\D*(\d{2})|(\d+))$").expect("time pattern is valid")
    })
}

/// Resolve a raw time argument against the given "now"
///
/// `now` carries the reference timezone; the result stays in that timezone.
pub fn resolve<Tz: TimeZone>(input: &str, now: &DateTime<Tz>) -> Result<DateTime<Tz>, DomainError> {
    let invalid = || DomainError::InvalidTimeFormat(input.trim().to_string());

    let captures = time_pattern().captures(input.trim()).ok_or_else(invalid)?;
    let field = |index: usize| {
        captures
            .get(index)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .unwrap_or(0)
    };
    let (hour, minute) = (field(1), field(2));

    // Is it a wall-clock time? (hour 0 falls through to the duration branch)
    if hour > 0 {
        // `with_*` also returns None when the wall clock does not exist in the
        // reference timezone (DST spring-forward skips an hour), so such an
        // input surfaces as a format failure instead of a shifted time.
        let time = now
            .clone()
            .with_hour(hour)
            .and_then(|t| t.with_minute(minute))
            .and_then(|t| t.with_second(0))
            .and_then(|t| t.with_nanosecond(0))
            .ok_or_else(invalid)?;

        if time < *now {
            return Ok(time + Duration::hours(12));
        }
        return Ok(time);
    }

    // It must be a duration in minutes. The grammar puts no length cap on the
    // bare-integer form, so the conversion and the arithmetic stay checked.
    let minutes = captures
        .get(3)
        .map_or(Ok(0), |m| m.as_str().parse::<i64>().map_err(|_| invalid()))?;
    let offset = Duration::try_minutes(minutes).ok_or_else(invalid)?;
    now.clone().checked_add_signed(offset).ok_or_else(invalid)
}

/// Check the near-future window invariant
///
/// A resolved time at or beyond `now + window` may not be scheduled; strictly
/// inside the window is fine.
pub fn is_too_far_ahead<Tz: TimeZone>(
    time: &DateTime<Tz>,
    now: &DateTime<Tz>,
    window: Duration,
) -> bool {
    time.clone().signed_duration_since(now.clone()) >= window
}
