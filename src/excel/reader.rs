//! Workbook reader - Excel/ODS file → [`SheetTable`]

use crate::error::{ViewerError, ViewerResult};
use crate::source::DataSource;
use crate::types::{CellValue, SheetTable};
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads sheets from a workbook on disk.
///
/// The file is reopened on every call, so edits to the workbook show up on
/// the next selection without restarting anything.
#[derive(Debug, Clone)]
pub struct ExcelSource {
    path: PathBuf,
}

impl ExcelSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn open(&self) -> ViewerResult<Sheets<BufReader<File>>> {
        if !self.path.exists() {
            return Err(ViewerError::ResourceMissing(self.path.clone()));
        }
        open_workbook_auto(&self.path).map_err(|e| ViewerError::SheetListUnreadable(e.to_string()))
    }
}

impl DataSource for ExcelSource {
    fn sheet_names(&self) -> ViewerResult<Vec<String>> {
        let workbook = self.open()?;
        let names = workbook.sheet_names();
        debug!(path = %self.path.display(), sheets = names.len(), "listed sheets");
        Ok(names)
    }

    fn load_sheet(&self, name: &str) -> ViewerResult<SheetTable> {
        let mut workbook = self.open()?;
        let range = workbook
            .worksheet_range(name)
            .map_err(|e| ViewerError::SheetLoadFailure {
                sheet: name.to_string(),
                reason: e.to_string(),
            })?;
        let table = range_to_table(name, &range);
        debug!(
            sheet = name,
            columns = table.columns.len(),
            rows = table.row_count(),
            "loaded sheet"
        );
        Ok(table)
    }
}

/// Convert a used range into a table: first row is the header
pub fn range_to_table(name: &str, range: &Range<Data>) -> SheetTable {
    let mut rows = range.rows();

    let Some(header) = rows.next() else {
        return SheetTable::new(name, Vec::new());
    };
    let columns = header_names(header);
    let mut table = SheetTable::new(name, columns);

    for row in rows {
        let cells: Vec<CellValue> = row.iter().map(convert_cell).collect();
        // Fully blank rows carry no student
        if cells.iter().all(CellValue::is_empty) {
            continue;
        }
        table.push_row(cells);
    }

    table
}

/// Trimmed header names; blanks become `Unnamed: N`, repeats get `.1`, `.2`, …
fn header_names(header: &[Data]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut names = Vec::with_capacity(header.len());

    for (idx, cell) in header.iter().enumerate() {
        let text = convert_cell(cell).raw_text();
        let base = match text.trim() {
            "" => format!("Unnamed: {}", idx),
            t => t.to_string(),
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while seen.contains(&name) {
            name = format!("{}.{}", base, suffix);
            suffix += 1;
        }
        seen.insert(name.clone());
        names.push(name);
    }

    names
}

/// Map a calamine cell to a [`CellValue`]
pub fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Error(e) => CellValue::Error(e.to_string()),
        Data::DateTime(dt) => {
            if dt.is_duration() {
                return CellValue::Number(dt.as_f64());
            }
            match dt.as_datetime() {
                Some(value) => CellValue::DateTime(value.format("%Y-%m-%d %H:%M:%S").to_string()),
                None => CellValue::Number(dt.as_f64()),
            }
        }
        Data::DateTimeIso(s) => CellValue::DateTime(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
