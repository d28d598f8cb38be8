//! Reconciliation: the in-memory rows replace the data rows of the sheet.

use super::layout::SheetLayout;
use crate::models::{ClassEntry, Field};
use tracing::debug;
use umya_spreadsheet::Worksheet;

/// Sort `entries` by date and overwrite the table with them.
///
/// Rows that were occupied before and are now past the end of the table are
/// cleared. Returns the number of cleared rows.
pub fn write_entries(ws: &mut Worksheet, layout: &SheetLayout, entries: &mut [ClassEntry]) -> u32 {
    // sort stabile: a parità di data resta l'ordine di inserimento
    entries.sort_by_key(|e| e.date);

    let first = layout.first_data_row();

    for field in Field::ALL {
        let col = layout.column(field);

        for (i, entry) in entries.iter().enumerate() {
            let cell = ws.get_cell_mut((col, first + i as u32));
            match field {
                // set_value indovina il tipo: "007" diventerebbe 7
                Field::Class => cell.set_value_string(entry.name.as_str()),
                Field::Date => cell.set_value_string(entry.date_str()),
                Field::StartTime => cell.set_value_string(entry.start_str()),
                Field::EndTime => cell.set_value_string(entry.end_str()),
                Field::Hour => cell.set_value_number(entry.hours),
            };
        }
    }

    // dove finiva il contenuto nella colonna Date prima della riscrittura
    let free_row = layout.first_free_row(ws);
    let new_end = first + entries.len() as u32;
    let to_clear = free_row.saturating_sub(new_end);

    for row in new_end..free_row {
        for field in Field::ALL {
            ws.get_cell_mut((layout.column(field), row))
                .set_value_string("");
        }
    }

    debug!(
        sheet = ws.get_name(),
        written = entries.len(),
        cleared = to_clear,
        "sheet reconciled"
    );

    to_clear
}
