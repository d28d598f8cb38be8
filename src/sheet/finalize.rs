//! Total hours formula appended when the session ends.

use super::column_letter;
use super::layout::SheetLayout;
use crate::models::Field;
use tracing::debug;
use umya_spreadsheet::Worksheet;

/// Excel's default column width, in characters.
const DEFAULT_COLUMN_WIDTH: f64 = 8.43;

/// Where the total label and the SUM formula were written.
#[derive(Debug, Clone, PartialEq)]
pub struct TotalCells {
    pub label: (u32, u32),
    pub formula: (u32, u32),
    pub formula_text: String,
}

/// Place the `SUM` of the Hour column two columns right of the Hour header,
/// with `label` one row above it.
///
/// A header sitting on row 1 has no room above: the label then takes the
/// header row and the formula moves one column further right.
pub fn append_total(ws: &mut Worksheet, layout: &SheetLayout, label: &str) -> TotalCells {
    let hour_col = layout.column(Field::Hour);
    let header_row = layout.header_row;
    let total_col = hour_col + 2;

    let first = layout.first_data_row();
    // nessuna riga: la somma copre solo la prima riga (vuota), quindi 0
    let last = layout.first_free_row(ws).saturating_sub(1).max(first);

    let letter = column_letter(hour_col);
    let formula_text = format!("SUM({letter}{first}:{letter}{last})");

    let (label_cell, formula_cell) = if header_row > 1 {
        ((total_col, header_row - 1), (total_col, header_row))
    } else {
        ((total_col, header_row), (total_col + 1, header_row))
    };

    ws.get_cell_mut(label_cell).set_value(label);
    ws.get_cell_mut(formula_cell).set_formula(formula_text.as_str());
    fit_column_to_text(ws, label_cell.0, label);

    debug!(
        sheet = ws.get_name(),
        formula = %formula_text,
        ?label_cell,
        ?formula_cell,
        "total appended"
    );

    TotalCells {
        label: label_cell,
        formula: formula_cell,
        formula_text,
    }
}

/// Widen `col` so that `text` fits, never below the default width.
pub fn fit_column_to_text(ws: &mut Worksheet, col: u32, text: &str) {
    let width = (text.chars().count() as f64).max(DEFAULT_COLUMN_WIDTH);
    ws.get_column_dimension_by_number_mut(&col).set_width(width);
}
