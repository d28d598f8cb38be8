use crate::errors::{AppError, AppResult};
use crate::models::ClassEntry;
use std::collections::BTreeSet;
use tracing::debug;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Parse "1, 3" / "1 3" (1-based, as listed to the user) into 0-based
    /// positions. Every number must point to an existing row.
    pub fn parse_selection(input: &str, row_count: usize) -> AppResult<BTreeSet<usize>> {
        let tokens: Vec<&str> = if input.contains(',') {
            input.split(',').map(str::trim).collect()
        } else {
            input.split_whitespace().collect()
        };

        let mut positions = BTreeSet::new();

        for token in tokens.into_iter().filter(|t| !t.is_empty()) {
            let n: usize = token
                .parse()
                .map_err(|_| AppError::InvalidSelection(format!("'{}' is not a row number", token)))?;

            if n == 0 || n > row_count {
                return Err(AppError::InvalidSelection(format!(
                    "row {} does not exist (1-{})",
                    n, row_count
                )));
            }

            positions.insert(n - 1);
        }

        if positions.is_empty() {
            return Err(AppError::InvalidSelection("no row number given".into()));
        }

        Ok(positions)
    }

    /// Remove exactly the rows at `positions`, keeping the order of the others.
    /// Rows with the same content as a removed one are left alone.
    pub fn apply(entries: &mut Vec<ClassEntry>, positions: &BTreeSet<usize>) -> Vec<ClassEntry> {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(entries.len());

        for (i, entry) in entries.drain(..).enumerate() {
            if positions.contains(&i) {
                removed.push(entry);
            } else {
                kept.push(entry);
            }
        }

        *entries = kept;

        debug!(?positions, removed = removed.len(), "rows removed");
        removed
    }
}
