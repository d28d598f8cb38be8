use crate::errors::AppResult;
use crate::utils::time::{format_time, parse_time_range};
use chrono::NaiveTime;

/// A named class time, e.g. the usual morning slot 08:30-11:00.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub label: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    /// Build a slot from a "HH:MM-HH:MM" range.
    pub fn from_range(label: &str, range: &str) -> AppResult<Self> {
        let (start, end) = parse_time_range(range)?;
        Ok(Self {
            label: label.to_string(),
            start,
            end,
        })
    }

    /// Menu text: "Usual morning slot (08:30-11:00)"
    pub fn menu_label(&self) -> String {
        format!(
            "{} ({}-{})",
            self.label,
            format_time(&self.start),
            format_time(&self.end)
        )
    }
}
