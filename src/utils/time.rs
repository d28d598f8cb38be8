//! Time utilities: parsing HH:MM in its usual spellings, hour computations,
//! formatting.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub const TIME_OUTPUT_FORMAT: &str = "%H:%M";

/// Accepted textual time formats, tried in this order.
/// The last one covers cells written as `08:30:00` by other tools.
pub const TIME_FORMATS: [&str; 5] = ["%H:%M", "%I:%M%p", "%H.%M", "%I.%M%p", "%H:%M:%S"];

pub fn parse_time(t: &str) -> AppResult<NaiveTime> {
    let t = t.trim();

    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(t, fmt).ok())
        .ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn format_time(t: &NaiveTime) -> String {
    t.format(TIME_OUTPUT_FORMAT).to_string()
}

/// Length of the interval in fractional hours (08:30 -> 11:00 = 2.5).
/// Seconds count too: cells written as 08:30:30 are accepted.
pub fn hours_between(start: NaiveTime, end: NaiveTime) -> f64 {
    (end - start).num_seconds() as f64 / 3600.0
}

/// Parse a "HH:MM-HH:MM" slot as found in the configuration file.
pub fn parse_time_range(s: &str) -> AppResult<(NaiveTime, NaiveTime)> {
    let (a, b) = s
        .split_once('-')
        .ok_or_else(|| AppError::InvalidTime(format!("'{}' is not a START-END range", s)))?;

    let start = parse_time(a)?;
    let end = parse_time(b)?;

    if end <= start {
        return Err(AppError::InvalidTime(format!(
            "'{}' ends before it starts",
            s.trim()
        )));
    }

    Ok((start, end))
}

/// Hours rendered without useless decimals: 2.5 -> "2.5", 3.0 -> "3".
pub fn format_hours(hours: f64) -> String {
    let rounded = (hours * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}
