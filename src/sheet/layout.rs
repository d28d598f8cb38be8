//! Where things are in a timesheet: month bounds cell and header row.

use super::cell_text;
use crate::errors::{AppError, AppResult};
use crate::models::Field;
use crate::utils::date::{MonthBounds, parse_date};
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;
use umya_spreadsheet::Worksheet;

const MONTH_DATE_PATTERN: &str = r"\d{2}/\d{2}/\d{4}";

/// Column of each [`Field`] plus the row holding the headers.
///
/// Built once per load by [`SheetLayout::locate`]; every field is guaranteed
/// to be present.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub header_row: u32,
    pub bounds: MonthBounds,
    columns: HashMap<Field, u32>,
}

impl SheetLayout {
    pub fn locate(ws: &Worksheet) -> AppResult<Self> {
        let bounds = find_month_bounds(ws)?;

        let (class_col, header_row) = find_text(ws, Field::Class.title())
            .ok_or_else(|| AppError::HeaderNotFound(Field::Class.title().to_string()))?;

        let mut columns = HashMap::new();
        columns.insert(Field::Class, class_col);

        for field in Field::ALL.iter().filter(|f| **f != Field::Class) {
            let col = find_in_row(ws, header_row, field)
                .ok_or_else(|| AppError::HeaderNotFound(field.title().to_string()))?;
            columns.insert(*field, col);
        }

        debug!(
            sheet = ws.get_name(),
            header_row,
            ?columns,
            start = %bounds.start,
            end = %bounds.end,
            "layout located"
        );

        Ok(Self {
            header_row,
            bounds,
            columns,
        })
    }

    pub fn column(&self, field: Field) -> u32 {
        // locate() inserisce sempre tutti i campi
        self.columns.get(&field).copied().unwrap_or_default()
    }

    pub fn first_data_row(&self) -> u32 {
        self.header_row + 1
    }

    /// First row below the table whose Date cell is empty.
    pub fn first_free_row(&self, ws: &Worksheet) -> u32 {
        let col = self.column(Field::Date);
        let mut row = self.first_data_row();

        while !cell_text(ws, col, row).trim().is_empty() {
            row += 1;
        }
        row
    }
}

/// Column-major search for a cell whose text equals `needle`, ignoring case.
pub fn find_text(ws: &Worksheet, needle: &str) -> Option<(u32, u32)> {
    find_cell(ws, |text| text.trim().eq_ignore_ascii_case(needle.trim()))
}

/// Column-major search (A1, A2, ..., B1, ...) for the first matching cell.
pub fn find_cell<F>(ws: &Worksheet, pred: F) -> Option<(u32, u32)>
where
    F: Fn(&str) -> bool,
{
    let max_col = ws.get_highest_column();
    let max_row = ws.get_highest_row();

    for col in 1..=max_col {
        for row in 1..=max_row {
            let text = cell_text(ws, col, row);
            if !text.is_empty() && pred(&text) {
                return Some((col, row));
            }
        }
    }

    None
}

fn find_in_row(ws: &Worksheet, row: u32, field: &Field) -> Option<u32> {
    (1..=ws.get_highest_column()).find(|col| field.matches_title(&cell_text(ws, *col, row)))
}

/// The first cell holding two DD/MM/YYYY dates gives the month bounds.
pub fn find_month_bounds(ws: &Worksheet) -> AppResult<MonthBounds> {
    let re = Regex::new(MONTH_DATE_PATTERN).map_err(|e| AppError::Other(e.to_string()))?;

    let (col, row) = find_cell(ws, |text| re.find_iter(text).count() >= 2)
        .ok_or_else(|| AppError::MonthBoundsNotFound(ws.get_name().to_string()))?;

    let text = cell_text(ws, col, row);
    let dates: Vec<&str> = re.find_iter(&text).map(|m| m.as_str()).collect();

    debug!(cell = %text, ?dates, "month bounds cell");

    MonthBounds::new(parse_date(dates[0])?, parse_date(dates[1])?)
}
