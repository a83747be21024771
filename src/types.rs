use serde::{Deserialize, Serialize};

//==============================================================================
// Cell values
//==============================================================================

/// Typed value of a single cell as delivered by a data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
    /// Date/time already rendered as `YYYY-MM-DD HH:MM:SS`
    DateTime(String),
    /// Excel error code such as `#DIV/0!`
    Error(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Plain string form of the value, without any normalization.
    ///
    /// This is what identity fields (name, admission number) are shown as,
    /// and what student names are matched against.
    pub fn raw_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Boolean(true) => "True".to_string(),
            CellValue::Boolean(false) => "False".to_string(),
            CellValue::DateTime(s) => s.clone(),
            CellValue::Error(e) => e.clone(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

//==============================================================================
// Sheets
//==============================================================================

/// One worksheet loaded as a table of rows with named columns
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding or truncating it to the column count
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(row);
    }

    /// Index of a column by exact (trimmed) name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&CellValue::Empty)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// A sheet label split into its (group, subgroup) hierarchy.
///
/// For a label such as `"MGKVP 1"` the group is the university and the
/// subgroup the semester number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SheetIdentifier {
    pub group: String,
    pub subgroup: String,
    pub original: String,
}

//==============================================================================
// Student results
//==============================================================================

/// One attribute/subject column of a student row, already normalized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// The selected row of a sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub admission_no: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_name: Option<String>,
    pub attributes: Vec<Attribute>,
}

/// Everything a presentation surface needs to render one selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentReport {
    pub title: String,
    pub university: String,
    pub semester: String,
    pub sheet: String,
    /// Column headers used for the identity lines, in display order
    pub identity_labels: IdentityLabels,
    pub student: StudentRecord,
}

/// Configured header names of the identity columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityLabels {
    pub student_name: String,
    pub admission_no: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_text() {
        assert_eq!(CellValue::Empty.raw_text(), "");
        assert_eq!(CellValue::Number(7.0).raw_text(), "7");
        assert_eq!(CellValue::Number(7.5).raw_text(), "7.5");
        assert_eq!(CellValue::Boolean(true).raw_text(), "True");
        assert_eq!(CellValue::from(" Asha ").raw_text(), " Asha ");
    }

    #[test]
    fn test_push_row_pads_to_header() {
        let mut table = SheetTable::new("S", vec!["A".into(), "B".into(), "C".into()]);
        table.push_row(vec![CellValue::from("x")]);
        assert_eq!(table.rows[0].len(), 3);
        assert!(table.cell(0, 2).is_empty());
        assert!(table.cell(5, 0).is_empty());
    }

    #[test]
    fn test_column_index_trims_query() {
        let table = SheetTable::new("S", vec!["Student Name".into(), "Maths".into()]);
        assert_eq!(table.column_index(" Maths "), Some(1));
        assert_eq!(table.column_index("English"), None);
    }
}
