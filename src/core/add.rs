use crate::models::ClassEntry;
use crate::utils::date::{MonthBounds, working_dates};
use chrono::{NaiveDate, NaiveTime, Weekday};
use tracing::debug;

/// When a new class takes place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recurrence {
    Once(NaiveDate),
    Repeating {
        from: NaiveDate,
        to: NaiveDate,
        days: Vec<Weekday>,
    },
}

/// Everything the user told us about the class to add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClass {
    pub name: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub recurrence: Recurrence,
}

/// High-level business logic for adding classes.
pub struct AddLogic;

impl AddLogic {
    /// Expand `class` into one entry per date, restricted to the month bounds.
    ///
    /// A one-off class outside the month and a repeating range that does not
    /// overlap it both give an empty list.
    pub fn build(class: &NewClass, bounds: &MonthBounds) -> Vec<ClassEntry> {
        let dates = match &class.recurrence {
            Recurrence::Once(date) => {
                if bounds.contains(date) {
                    vec![*date]
                } else {
                    Vec::new()
                }
            }
            Recurrence::Repeating { from, to, days } => match bounds.clamp(*from, *to) {
                Some((first, last)) => working_dates(first, last, days),
                None => Vec::new(),
            },
        };

        debug!(class = %class.name, ?dates, "working dates");

        dates
            .into_iter()
            .map(|d| ClassEntry::new(&class.name, d, class.start, class.end))
            .collect()
    }

    /// Append the new rows; returns how many were added.
    pub fn apply(entries: &mut Vec<ClassEntry>, class: &NewClass, bounds: &MonthBounds) -> usize {
        let new_rows = Self::build(class, bounds);
        let added = new_rows.len();
        entries.extend(new_rows);
        added
    }
}
