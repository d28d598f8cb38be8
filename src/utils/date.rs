//! Date utilities: tolerant parsing of user/sheet dates, month bounds and
//! weekday expansion.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};

/// Canonical format written back to the sheet.
pub const DATE_OUTPUT_FORMAT: &str = "%d/%m/%Y";

/// Accepted textual date formats, tried in this order.
///
/// Day first, then one separator used on both sides (`/`, `-`, `.`), a numeric,
/// abbreviated or full month name, and a two or four digit year.
/// `%y` comes before `%Y` so that `04/03/24` lands in 2024 and not in year 24.
pub const DATE_FORMATS: [&str; 18] = [
    "%d/%m/%y",
    "%d/%m/%Y",
    "%d/%b/%y",
    "%d/%b/%Y",
    "%d/%B/%y",
    "%d/%B/%Y",
    "%d-%m-%y",
    "%d-%m-%Y",
    "%d-%b-%y",
    "%d-%b-%Y",
    "%d-%B-%y",
    "%d-%B-%Y",
    "%d.%m.%y",
    "%d.%m.%Y",
    "%d.%b.%y",
    "%d.%b.%Y",
    "%d.%B.%y",
    "%d.%B.%Y",
];

/// Parse a date trying every entry of [`DATE_FORMATS`] in order.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    let s = s.trim();

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format(DATE_OUTPUT_FORMAT).to_string()
}

/// Start/end dates displayed by the sheet for the month being tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBounds {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthBounds {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if start > end {
            return Err(AppError::InvalidDate(format!(
                "month starts on {} but ends on {}",
                format_date(&start),
                format_date(&end)
            )));
        }
        Ok(Self { start, end })
    }

    /// Inclusive on both ends.
    pub fn contains(&self, d: &NaiveDate) -> bool {
        *d >= self.start && *d <= self.end
    }

    /// Intersect `[from, to]` with the month. `None` when they don't overlap.
    pub fn clamp(&self, from: NaiveDate, to: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        let first = from.max(self.start);
        let last = to.min(self.end);

        if first <= last {
            Some((first, last))
        } else {
            None
        }
    }
}

/// Every date in `[first, last]` (both included) falling on one of `days`.
pub fn working_dates(first: NaiveDate, last: NaiveDate, days: &[Weekday]) -> Vec<NaiveDate> {
    first
        .iter_days()
        .take_while(|d| *d <= last)
        .filter(|d| days.contains(&d.weekday()))
        .collect()
}

/// Outcome of parsing a free-text list of weekday names.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WeekdayList {
    pub days: Vec<Weekday>,
    pub unknown: Vec<String>,
}

/// Parse "Monday, wed" / "mon tue" into weekdays.
///
/// Commas take precedence as separator; without commas the input is split on
/// whitespace. Full and abbreviated English names are accepted, any case.
/// Duplicates are dropped, order of first appearance is kept.
pub fn parse_weekdays(input: &str) -> WeekdayList {
    let tokens: Vec<&str> = if input.contains(',') {
        input.split(',').map(str::trim).collect()
    } else {
        input.split_whitespace().collect()
    };

    let mut out = WeekdayList::default();

    for token in tokens.into_iter().filter(|t| !t.is_empty()) {
        match token.parse::<Weekday>() {
            Ok(day) => {
                if !out.days.contains(&day) {
                    out.days.push(day);
                }
            }
            Err(_) => out.unknown.push(token.to_string()),
        }
    }

    out
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
