//! Load the data rows of a timesheet into [`ClassEntry`] values.

use super::excel_date::{serial_to_date, serial_to_time};
use super::layout::SheetLayout;
use super::{cell_text, column_letter};
use crate::errors::{AppError, AppResult};
use crate::models::{ClassEntry, Field};
use crate::utils::date::parse_date;
use crate::utils::time::{hours_between, parse_time};
use chrono::{NaiveDate, NaiveTime};
use tracing::debug;
use umya_spreadsheet::Worksheet;

/// Raw content of a cell: native numbers (dates/times are serials) or text.
#[derive(Debug, Clone, PartialEq)]
enum CellData {
    Empty,
    Number(f64),
    Text(String),
}

fn cell_data(ws: &Worksheet, col: u32, row: u32) -> CellData {
    let Some(cell) = ws.get_cell((col, row)) else {
        return CellData::Empty;
    };

    if let Some(n) = cell.get_value_number() {
        return CellData::Number(n);
    }

    let text = cell.get_value().trim().to_string();
    if text.is_empty() {
        CellData::Empty
    } else {
        CellData::Text(text)
    }
}

/// Read every row from the first data row down to the first empty Date cell.
pub fn read_entries(ws: &Worksheet, layout: &SheetLayout) -> AppResult<Vec<ClassEntry>> {
    let mut entries = Vec::new();
    let mut row = layout.first_data_row();

    loop {
        let date_col = layout.column(Field::Date);
        let date = match cell_data(ws, date_col, row) {
            CellData::Empty => break,
            data => read_date(data, &coordinate(date_col, row))?,
        };

        let start_col = layout.column(Field::StartTime);
        let end_col = layout.column(Field::EndTime);
        let start = read_time(cell_data(ws, start_col, row), &coordinate(start_col, row))?;
        let end = read_time(cell_data(ws, end_col, row), &coordinate(end_col, row))?;

        let hours = match cell_data(ws, layout.column(Field::Hour), row) {
            CellData::Number(n) => n,
            CellData::Text(t) => t.parse::<f64>().unwrap_or_else(|_| hours_between(start, end)),
            CellData::Empty => hours_between(start, end),
        };

        let entry = ClassEntry {
            name: cell_text(ws, layout.column(Field::Class), row)
                .trim()
                .to_string(),
            date,
            start,
            end,
            hours,
        };

        debug!(row, ?entry, "row read");
        entries.push(entry);
        row += 1;
    }

    debug!(count = entries.len(), "rows read");
    Ok(entries)
}

/// Sheet row and date of every entry falling outside the month bounds.
///
/// `entries` must be in sheet order, as returned by [`read_entries`].
pub fn rows_outside_month(entries: &[ClassEntry], layout: &SheetLayout) -> Vec<(u32, NaiveDate)> {
    let first = layout.first_data_row();

    entries
        .iter()
        .enumerate()
        .filter(|(_, e)| !layout.bounds.contains(&e.date))
        .map(|(i, e)| (first + i as u32, e.date))
        .collect()
}

fn read_date(data: CellData, at: &str) -> AppResult<NaiveDate> {
    match data {
        CellData::Number(n) => {
            serial_to_date(n).ok_or_else(|| AppError::InvalidDate(format!("{n} in cell {at}")))
        }
        CellData::Text(t) => {
            parse_date(&t).map_err(|_| AppError::InvalidDate(format!("'{t}' in cell {at}")))
        }
        CellData::Empty => Err(AppError::InvalidDate(format!("empty cell {at}"))),
    }
}

fn read_time(data: CellData, at: &str) -> AppResult<NaiveTime> {
    match data {
        CellData::Number(n) => {
            serial_to_time(n).ok_or_else(|| AppError::InvalidTime(format!("{n} in cell {at}")))
        }
        CellData::Text(t) => {
            parse_time(&t).map_err(|_| AppError::InvalidTime(format!("'{t}' in cell {at}")))
        }
        CellData::Empty => Err(AppError::InvalidTime(format!("empty cell {at}"))),
    }
}

fn coordinate(col: u32, row: u32) -> String {
    format!("{}{}", column_letter(col), row)
}
