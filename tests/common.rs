#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use autotimesheet::errors::{AppError, AppResult};
use autotimesheet::ui::prompt::Prompter;
use std::collections::VecDeque;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use umya_spreadsheet::{Spreadsheet, Worksheet};

pub const HEADERS: [&str; 5] = ["Class", "Date", "Start time", "End time", "Hour"];
pub const MARCH_2024: &str = "01/03/2024 - 31/03/2024";

pub fn ats() -> Command {
    cargo_bin_cmd!("autotimesheet")
}

/// Create a unique path inside the system temp dir and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_autotimesheet.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Fill `ws` like the usual monthly template:
/// title in A1, month bounds in A2, headers on row 4, data from row 5.
pub fn fill_timesheet(ws: &mut Worksheet, month: &str, rows: &[[&str; 5]]) {
    ws.get_cell_mut("A1").set_value("Class timesheet");
    ws.get_cell_mut("A2").set_value(format!("Month: {}", month));

    for (i, h) in HEADERS.iter().enumerate() {
        ws.get_cell_mut((i as u32 + 1, 4u32)).set_value(*h);
    }

    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            ws.get_cell_mut((c as u32 + 1, r as u32 + 5)).set_value(*value);
        }
    }
}

pub fn timesheet(month: &str, rows: &[[&str; 5]]) -> Spreadsheet {
    let mut book = umya_spreadsheet::new_file();
    fill_timesheet(book.get_active_sheet_mut(), month, rows);
    book
}

pub fn save(book: &Spreadsheet, path: &Path) {
    umya_spreadsheet::writer::xlsx::write(book, path).expect("write workbook");
}

pub fn load(path: &Path) -> Spreadsheet {
    umya_spreadsheet::reader::xlsx::read(path).expect("read workbook")
}

/// Text of a cell by A1 reference, "" when missing.
pub fn value(ws: &Worksheet, coordinate: &str) -> String {
    ws.get_cell(coordinate)
        .map(|c| c.get_value().to_string())
        .unwrap_or_default()
}

/// Prompter replaying canned answers.
///
/// `select` picks the first item starting with the answer, `confirm` accepts
/// "yes"/"y". Running out of answers is an error, so a test can never hang.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> AppResult<String> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| AppError::Other(format!("no scripted answer for '{}'", prompt)))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, prompt: &str, items: &[String]) -> AppResult<usize> {
        let answer = self.next(prompt)?;
        items
            .iter()
            .position(|item| item.starts_with(&answer))
            .ok_or_else(|| AppError::InvalidSelection(format!("'{}' not in {:?}", answer, items)))
    }

    fn input(&mut self, prompt: &str) -> AppResult<String> {
        self.next(prompt)
    }

    fn confirm(&mut self, prompt: &str) -> AppResult<bool> {
        let answer = self.next(prompt)?;
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }
}
