//! Even distribution of scripts into page columns.
//!
//! With `F` files and `N` columns every column holds `ceil(F / N)` files,
//! filled left to right; the trailing columns take whatever remains and may
//! be empty. Exactly `N` columns are always produced.

use crate::core::error::{IndexError, Result};
use crate::core::script_kind::ScriptFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column<'a> {
    pub index: usize,
    pub files: &'a [ScriptFile],
}

impl Column<'_> {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Number of files placed in every full column
pub fn per_column(total: usize, column_count: usize) -> usize {
    total.div_ceil(column_count)
}

pub fn partition(files: &[ScriptFile], column_count: usize) -> Result<Vec<Column<'_>>> {
    if column_count == 0 {
        return Err(IndexError::invalid_column_count(column_count));
    }

    let total = files.len();
    let size = per_column(total, column_count);

    let columns = (0..column_count)
        .map(|index| {
            let start = (index * size).min(total);
            let end = ((index + 1) * size).min(total);
            Column {
                index,
                files: &files[start..end],
            }
        })
        .collect();

    Ok(columns)
}
