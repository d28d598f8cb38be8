//! Unified application error type.
//! All modules (sheet, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    // ---------------------------
    // Workbook-related
    // ---------------------------
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Header cell '{0}' not found in sheet")]
    HeaderNotFound(String),

    #[error("No cell with the month start/end dates (DD/MM/YYYY) found in sheet '{0}'")]
    MonthBoundsNotFound(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
