// Campaign countdown and expiry tracking
use crate::models::{ClockTime, ExpireDuration};
use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of the current wall-clock time
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock, matching how operators enter campaign dates
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Compute the duration between a start and an end date/time pair.
///
/// Each date is combined with its time of day (seconds forced to zero).
/// A missing date, a time that does not form a valid instant, or an end
/// that precedes the start all yield the zero duration. Hours are not
/// capped at 24; minutes and seconds are always in `0..60`.
pub fn calculate(
    start_date: Option<NaiveDate>,
    start_time: ClockTime,
    end_date: Option<NaiveDate>,
    end_time: ClockTime,
) -> ExpireDuration {
    let start = start_date.and_then(|date| start_time.on(date));
    let end = end_date.and_then(|date| end_time.on(date));

    match (start, end) {
        (Some(start), Some(end)) => ExpireDuration::between(start, end),
        _ => ExpireDuration::ZERO,
    }
}

/// Duration left between now and `end`, zero once `end` has passed
pub fn remaining_until(clock: &dyn Clock, end: NaiveDateTime) -> ExpireDuration {
    ExpireDuration::between(clock.now(), end)
}

pub fn format_time_remaining(remaining: &ExpireDuration) -> String {
    if remaining.is_zero() {
        return "ENDED".to_string();
    }

    if remaining.hours > 0 {
        format!("{}h {}m", remaining.hours, remaining.minutes)
    } else if remaining.minutes > 0 {
        format!("{}m {}s", remaining.minutes, remaining.seconds)
    } else {
        format!("{}s", remaining.seconds)
    }
}

pub fn is_expiring_soon(remaining: &ExpireDuration, threshold_hours: i64) -> bool {
    let seconds = remaining.total_seconds();
    seconds > 0 && seconds < threshold_hours.saturating_mul(3600)
}
