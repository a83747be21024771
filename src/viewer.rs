//! Selection pipeline
//!
//! list sheets → parse labels → pick university/semester → load sheet →
//! find student row → normalize → [`StudentReport`].
//!
//! Nothing is cached: every call goes back to the data source, so each
//! interaction sees the workbook as it is on disk at that moment.

use crate::config::ViewerConfig;
use crate::core::{SheetCatalog, StudentRoster};
use crate::error::ViewerResult;
use crate::excel::ExcelSource;
use crate::source::DataSource;
use crate::types::{IdentityLabels, StudentRecord, StudentReport};
use tracing::debug;

pub struct Viewer<S> {
    source: S,
    config: ViewerConfig,
}

impl Viewer<ExcelSource> {
    /// Viewer over the workbook named in the configuration
    pub fn from_config(config: ViewerConfig) -> Self {
        let source = ExcelSource::new(&config.workbook);
        Self { source, config }
    }
}

impl<S: DataSource> Viewer<S> {
    pub fn new(source: S, config: ViewerConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn catalog(&self) -> ViewerResult<SheetCatalog> {
        let names = self.source.sheet_names()?;
        let catalog = SheetCatalog::from_labels(&names);
        debug!(sheets = names.len(), "parsed sheet labels");
        Ok(catalog)
    }

    pub fn universities(&self) -> ViewerResult<Vec<String>> {
        Ok(self
            .catalog()?
            .groups()
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    pub fn semesters(&self, university: &str) -> ViewerResult<Vec<String>> {
        Ok(self
            .catalog()?
            .subgroups(university)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    /// Load and validate the sheet for a university/semester pair
    pub fn roster(&self, university: &str, semester: &str) -> ViewerResult<StudentRoster> {
        let catalog = self.catalog()?;
        let sheet = catalog.require(university, semester)?;
        debug!(university, semester, sheet = %sheet.original, "loading sheet");
        let table = self.source.load_sheet(&sheet.original)?;
        StudentRoster::new(table, &self.config.columns)
    }

    pub fn students(&self, university: &str, semester: &str) -> ViewerResult<Vec<String>> {
        Ok(self.roster(university, semester)?.student_names())
    }

    /// Full report for one student
    pub fn report(
        &self,
        university: &str,
        semester: &str,
        student: &str,
    ) -> ViewerResult<StudentReport> {
        let roster = self.roster(university, semester)?;
        let record = roster.require(student)?;
        Ok(self.build_report(university, semester, &roster, record))
    }

    /// Report for a roster the caller already loaded (interactive flow)
    pub fn build_report(
        &self,
        university: &str,
        semester: &str,
        roster: &StudentRoster,
        student: StudentRecord,
    ) -> StudentReport {
        let columns = &self.config.columns;
        StudentReport {
            title: self.config.title.clone(),
            university: university.to_string(),
            semester: semester.to_string(),
            sheet: roster.sheet_name().to_string(),
            identity_labels: IdentityLabels {
                student_name: columns.student_name.trim().to_string(),
                admission_no: columns.admission_no.trim().to_string(),
                father_name: columns
                    .father_name
                    .as_ref()
                    .filter(|_| roster.has_father_name())
                    .map(|c| c.trim().to_string()),
            },
            student,
        }
    }
}
