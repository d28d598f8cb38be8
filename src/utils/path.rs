//! Path utilities: expand ~, build the name of the completed workbook.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Insert `tag` right before the extension of `file`.
///
/// `march.xlsx` + `[COMPLETED]` -> `march[COMPLETED].xlsx`.
/// A file without extension simply gets the tag appended.
pub fn completed_file_name(file: &Path, tag: &str) -> PathBuf {
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let name = match file.extension() {
        Some(ext) => format!("{stem}{tag}.{}", ext.to_string_lossy()),
        None => format!("{stem}{tag}"),
    };

    file.with_file_name(name)
}
