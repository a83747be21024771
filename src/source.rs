//! Tabular data sources
//!
//! The viewer only needs two things from a workbook: the list of sheet names
//! and one sheet loaded as a table. [`ExcelSource`](crate::excel::ExcelSource)
//! reads a file on every call; [`MemorySource`] holds tables in memory.

use crate::error::{ViewerError, ViewerResult};
use crate::types::SheetTable;

pub trait DataSource {
    /// Sheet names in workbook order
    fn sheet_names(&self) -> ViewerResult<Vec<String>>;

    /// Load one sheet by its exact name
    fn load_sheet(&self, name: &str) -> ViewerResult<SheetTable>;
}

/// In-memory workbook, mostly for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    sheets: Vec<SheetTable>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, sheet: SheetTable) -> Self {
        self.sheets.push(sheet);
        self
    }
}

impl DataSource for MemorySource {
    fn sheet_names(&self) -> ViewerResult<Vec<String>> {
        Ok(self.sheets.iter().map(|s| s.name.clone()).collect())
    }

    fn load_sheet(&self, name: &str) -> ViewerResult<SheetTable> {
        self.sheets
            .iter()
            .find(|s| s.name == name)
            .cloned()
            .ok_or_else(|| ViewerError::SheetLoadFailure {
                sheet: name.to_string(),
                reason: "no such sheet".to_string(),
            })
    }
}

impl<S: DataSource + ?Sized> DataSource for &S {
    fn sheet_names(&self) -> ViewerResult<Vec<String>> {
        (**self).sheet_names()
    }

    fn load_sheet(&self, name: &str) -> ViewerResult<SheetTable> {
        (**self).load_sheet(name)
    }
}
