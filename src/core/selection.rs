//! Cascading selection: university → semester → sheet → student row
//!
//! Tie-breaks are first-match-wins in both places where the data can be
//! ambiguous: two sheet labels parsing to the same (group, subgroup) pair
//! resolve to the one that comes first in workbook order, and duplicate
//! student names resolve to the first matching row.

use crate::config::ColumnConfig;
use crate::core::normalizer::normalize;
use crate::core::sheet_identifier::parse_sheet_label;
use crate::error::{ViewerError, ViewerResult};
use crate::types::{Attribute, SheetIdentifier, SheetTable, StudentRecord};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};
use tracing::warn;

//==============================================================================
// Sheet catalog
//==============================================================================

/// Parsed sheet labels of one workbook, in workbook order
#[derive(Debug, Clone, Default)]
pub struct SheetCatalog {
    identifiers: Vec<SheetIdentifier>,
}

impl SheetCatalog {
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let identifiers = labels
            .into_iter()
            .map(|label| parse_sheet_label(label.as_ref()))
            .collect();
        Self { identifiers }
    }

    pub fn identifiers(&self) -> &[SheetIdentifier] {
        &self.identifiers
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Distinct groups, sorted
    pub fn groups(&self) -> Vec<&str> {
        self.identifiers
            .iter()
            .map(|id| id.group.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct subgroups of one group, in numeric order (empty first)
    pub fn subgroups(&self, group: &str) -> Vec<&str> {
        let mut subgroups: Vec<&str> = self
            .identifiers
            .iter()
            .filter(|id| id.group == group)
            .map(|id| id.subgroup.as_str())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        subgroups.sort_by(|a, b| compare_subgroups(a, b));
        subgroups
    }

    /// Sheet for a (group, subgroup) pair; the first one in workbook order wins
    pub fn resolve(&self, group: &str, subgroup: &str) -> Option<&SheetIdentifier> {
        let mut matches = self
            .identifiers
            .iter()
            .filter(|id| id.group == group && id.subgroup == subgroup);
        let first = matches.next()?;

        let shadowed: Vec<&str> = matches.map(|id| id.original.as_str()).collect();
        if !shadowed.is_empty() {
            warn!(
                sheet = %first.original,
                ?shadowed,
                "several sheets map to the same university/semester, using the first"
            );
        }
        Some(first)
    }

    /// Like [`resolve`](Self::resolve) but with an error naming what was missing
    pub fn require(&self, group: &str, subgroup: &str) -> ViewerResult<&SheetIdentifier> {
        if !self.identifiers.iter().any(|id| id.group == group) {
            return Err(ViewerError::Selection(format!(
                "University '{}' not found",
                group
            )));
        }
        self.resolve(group, subgroup).ok_or_else(|| {
            ViewerError::Selection(format!(
                "Semester '{}' not found for university '{}'",
                subgroup, group
            ))
        })
    }

    /// (group, subgroup) pairs claimed by more than one sheet
    pub fn duplicates(&self) -> Vec<(&str, &str)> {
        let mut seen = HashSet::new();
        let mut reported = BTreeSet::new();
        for id in &self.identifiers {
            let key = (id.group.as_str(), id.subgroup.as_str());
            if !seen.insert(key) {
                reported.insert(key);
            }
        }
        reported.into_iter().collect()
    }
}

/// Digit strings compare by numeric value so that "10" sorts after "2" and
/// "01" before "2". Equal values ("01", "1") fall back to the raw text.
fn compare_subgroups(a: &str, b: &str) -> Ordering {
    let (x, y) = (a.trim_start_matches('0'), b.trim_start_matches('0'));
    x.len()
        .cmp(&y.len())
        .then_with(|| x.cmp(y))
        .then_with(|| a.cmp(b))
}

//==============================================================================
// Student roster
//==============================================================================

/// A loaded sheet whose required columns have been checked
#[derive(Debug, Clone)]
pub struct StudentRoster {
    table: SheetTable,
    name_col: usize,
    admission_col: usize,
    father_col: Option<usize>,
}

impl StudentRoster {
    /// Validate the sheet against the configured identity columns
    pub fn new(table: SheetTable, columns: &ColumnConfig) -> ViewerResult<Self> {
        let require = |column: &str| {
            table
                .column_index(column)
                .ok_or_else(|| ViewerError::SchemaViolation {
                    sheet: table.name.clone(),
                    column: column.trim().to_string(),
                })
        };
        let name_col = require(&columns.student_name)?;
        let admission_col = require(&columns.admission_no)?;
        let father_col = columns
            .father_name
            .as_deref()
            .and_then(|c| table.column_index(c));

        Ok(Self {
            table,
            name_col,
            admission_col,
            father_col,
        })
    }

    pub fn sheet_name(&self) -> &str {
        &self.table.name
    }

    pub fn has_father_name(&self) -> bool {
        self.father_col.is_some()
    }

    /// Distinct student names in sheet order; rows with a blank name are skipped
    pub fn student_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        (0..self.table.row_count())
            .map(|row| self.table.cell(row, self.name_col).raw_text())
            .filter(|name| !name.trim().is_empty())
            .filter(|name| seen.insert(name.clone()))
            .collect()
    }

    /// Names of the attribute/subject columns, in sheet order
    pub fn attribute_columns(&self) -> Vec<&str> {
        self.attributes().map(|(_, name)| name).collect()
    }

    /// The row of the named student; the first matching row wins
    pub fn find(&self, student: &str) -> Option<StudentRecord> {
        let mut rows = (0..self.table.row_count())
            .filter(|&row| self.table.cell(row, self.name_col).raw_text() == student);
        let row = rows.next()?;

        let duplicates = rows.count();
        if duplicates > 0 {
            warn!(
                sheet = %self.table.name,
                student,
                duplicates,
                "student name appears more than once, using the first row"
            );
        }

        Some(self.record(row))
    }

    pub fn require(&self, student: &str) -> ViewerResult<StudentRecord> {
        self.find(student).ok_or_else(|| {
            ViewerError::Selection(format!(
                "Student '{}' not found in sheet '{}'",
                student, self.table.name
            ))
        })
    }

    fn record(&self, row: usize) -> StudentRecord {
        let attributes = self
            .attributes()
            .map(|(idx, name)| Attribute {
                name: name.to_string(),
                value: normalize(self.table.cell(row, idx)),
            })
            .collect();

        StudentRecord {
            name: self.table.cell(row, self.name_col).raw_text(),
            admission_no: self.table.cell(row, self.admission_col).raw_text(),
            father_name: self
                .father_col
                .map(|col| self.table.cell(row, col).raw_text()),
            attributes,
        }
    }

    /// (column index, header) of every non-identity column, in sheet order
    fn attributes(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.table
            .columns
            .iter()
            .enumerate()
            .filter(|(idx, _)| !self.is_identity_column(*idx))
            .map(|(idx, name)| (idx, name.as_str()))
    }

    fn is_identity_column(&self, idx: usize) -> bool {
        idx == self.name_col || idx == self.admission_col || Some(idx) == self.father_col
    }
}
