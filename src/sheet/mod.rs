//! Workbook access.
//!
//! Everything that touches `umya_spreadsheet` lives under this module: the
//! rest of the crate only sees [`Workbook`], [`layout::SheetLayout`] and
//! [`crate::models::ClassEntry`].

pub mod excel_date;
pub mod finalize;
pub mod layout;
pub mod reader;
pub mod writer;

use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};
use tracing::debug;
use umya_spreadsheet::{Spreadsheet, Worksheet, reader as xlsx_reader, writer as xlsx_writer};

pub use layout::SheetLayout;

/// An opened workbook, kept in memory until [`Workbook::save_as`].
pub struct Workbook {
    book: Spreadsheet,
    path: PathBuf,
}

impl Workbook {
    /// Read an `.xlsx` file. A missing or unreadable file is fatal.
    pub fn open(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("workbook not found: {}", path.display()),
            )));
        }

        let book = xlsx_reader::xlsx::read(path).map_err(|e| {
            AppError::Spreadsheet(format!("failed to open {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), "workbook loaded");

        Ok(Self {
            book,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.book
            .get_sheet_collection()
            .iter()
            .map(|ws| ws.get_name().to_string())
            .collect()
    }

    /// Name of the sheet that is active when the file is opened.
    pub fn active_sheet_name(&self) -> String {
        self.book.get_active_sheet().get_name().to_string()
    }

    pub fn sheet(&self, name: &str) -> AppResult<&Worksheet> {
        self.book
            .get_sheet_by_name(name)
            .ok_or_else(|| AppError::SheetNotFound(name.to_string()))
    }

    pub fn sheet_mut(&mut self, name: &str) -> AppResult<&mut Worksheet> {
        self.book
            .get_sheet_by_name_mut(name)
            .ok_or_else(|| AppError::SheetNotFound(name.to_string()))
    }

    /// Write the whole workbook to `target`; the source file is left untouched.
    pub fn save_as(&self, target: &Path) -> AppResult<()> {
        xlsx_writer::xlsx::write(&self.book, target).map_err(|e| {
            AppError::Spreadsheet(format!("failed to save {}: {}", target.display(), e))
        })?;

        debug!(path = %target.display(), "workbook saved");
        Ok(())
    }
}

/// Text of a cell, empty string when the cell does not exist.
pub(crate) fn cell_text(ws: &Worksheet, col: u32, row: u32) -> String {
    ws.get_cell((col, row))
        .map(|c| c.get_value().into_owned())
        .unwrap_or_default()
}

/// 1 -> "A", 27 -> "AA".
pub fn column_letter(col: u32) -> String {
    let mut result = String::new();
    let mut n = col;

    while n > 0 {
        n -= 1;
        let c = (b'A' + (n % 26) as u8) as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}
