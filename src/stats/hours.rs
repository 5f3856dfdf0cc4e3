//! Worked-hours calculation from clock times

use chrono::{NaiveTime, Timelike};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parse a clock time written as `HH:MM` or `HH:MM:SS`.
pub fn parse_clock(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

fn minutes_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Worked minutes between two clock times.
///
/// A check-out earlier than the check-in is an overnight shift and wraps exactly once.
/// The result never goes below zero.
pub fn worked_minutes(
    check_in: NaiveTime,
    check_out: NaiveTime,
    break_minutes: Option<i32>,
    other_minutes: Option<i32>,
) -> i64 {
    let start = minutes_since_midnight(check_in);
    let mut end = minutes_since_midnight(check_out);
    if end < start {
        end += MINUTES_PER_DAY;
    }

    let worked = end - start - i64::from(break_minutes.unwrap_or(0))
        + i64::from(other_minutes.unwrap_or(0));
    worked.max(0)
}

/// Worked hours for parsed clock times, formatted with two decimals.
pub fn compute_hours_from_times(
    check_in: Option<NaiveTime>,
    check_out: Option<NaiveTime>,
    break_minutes: Option<i32>,
    other_minutes: Option<i32>,
) -> String {
    let minutes = match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => {
            worked_minutes(check_in, check_out, break_minutes, other_minutes)
        }
        _ => 0,
    };
    format!("{:.2}", minutes as f64 / 60.0)
}

/// Worked hours for `HH:MM` clock strings, formatted with two decimals.
///
/// Missing or unparseable clock times yield `"0.00"`.
pub fn compute_hours(
    check_in: Option<&str>,
    check_out: Option<&str>,
    break_minutes: Option<i32>,
    other_minutes: Option<i32>,
) -> String {
    compute_hours_from_times(
        check_in.and_then(parse_clock),
        check_out.and_then(parse_clock),
        break_minutes,
        other_minutes,
    )
}

/// `8.5` -> `"8h30min"`
pub fn format_hour_min(decimal_hours: f64) -> String {
    let total_minutes = (decimal_hours.max(0.0) * 60.0).round() as i64;
    format!("{}h{:02}min", total_minutes / 60, total_minutes % 60)
}
