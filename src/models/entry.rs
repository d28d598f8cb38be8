use crate::utils::date::format_date;
use crate::utils::time::{format_hours, format_time, hours_between};
use chrono::{NaiveDate, NaiveTime};

/// One row of the timesheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassEntry {
    pub name: String,     // ⇔ "Class"
    pub date: NaiveDate,  // ⇔ "Date" (text DD/MM/YYYY)
    pub start: NaiveTime, // ⇔ "Start time" (text HH:MM)
    pub end: NaiveTime,   // ⇔ "End time" (text HH:MM)
    pub hours: f64,       // ⇔ "Hour" (number)
}

impl ClassEntry {
    /// Build a new entry, `hours` is always derived from the two times.
    pub fn new(name: &str, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            name: name.to_string(),
            date,
            start,
            end,
            hours: hours_between(start, end),
        }
    }

    pub fn date_str(&self) -> String {
        format_date(&self.date)
    }

    pub fn start_str(&self) -> String {
        format_time(&self.start)
    }

    pub fn end_str(&self) -> String {
        format_time(&self.end)
    }

    /// Fields as shown in the numbered listing.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.date_str(),
            self.start_str(),
            self.end_str(),
            format_hours(self.hours),
        ]
    }
}
