//! Viewer configuration
//!
//! Loaded from a YAML file (`marksheet.yaml` by default). Every field has a
//! default, so an empty file or no file at all gives a working setup.

use crate::error::{ViewerError, ViewerResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "marksheet.yaml";

/// Main viewer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Workbook holding one sheet per university/semester
    pub workbook: PathBuf,
    /// Heading shown above the selectors
    pub title: String,
    /// Banner image shown above the heading
    pub banner: Option<PathBuf>,
    pub columns: ColumnConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            workbook: PathBuf::from("Marksheet Nov Sessional 2025.xlsx"),
            title: "Result Sessional Odd Sem 2025".to_string(),
            banner: Some(PathBuf::from("header.png")),
            columns: ColumnConfig::default(),
        }
    }
}

/// Header names of the identity columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    pub student_name: String,
    pub admission_no: String,
    /// Shown separately when the sheet has it
    pub father_name: Option<String>,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            student_name: "Student Name".to_string(),
            admission_no: "Admission No.".to_string(),
            father_name: Some("Father Name".to_string()),
        }
    }
}

impl ViewerConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ViewerResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut config: ViewerConfig = if content.trim().is_empty() {
            ViewerConfig::default()
        } else {
            serde_yaml::from_str(&content)?
        };

        // Relative workbook/banner paths are relative to the config file
        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if config.workbook.is_relative() {
                config.workbook = base.join(&config.workbook);
            }
            if let Some(banner) = config.banner.as_mut().filter(|b| b.is_relative()) {
                *banner = base.join(&*banner);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Explicit file, else `marksheet.yaml` in the working directory, else defaults
    pub fn load(explicit: Option<&Path>) -> ViewerResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            Self::from_file(default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Replace the workbook path (command-line override)
    pub fn with_workbook(mut self, workbook: Option<PathBuf>) -> Self {
        if let Some(path) = workbook {
            self.workbook = path;
        }
        self
    }

    pub fn validate(&self) -> ViewerResult<()> {
        let student = self.columns.student_name.trim();
        let admission = self.columns.admission_no.trim();

        if student.is_empty() {
            return Err(ViewerError::Config(
                "columns.student_name must not be empty".to_string(),
            ));
        }
        if admission.is_empty() {
            return Err(ViewerError::Config(
                "columns.admission_no must not be empty".to_string(),
            ));
        }
        if student == admission {
            return Err(ViewerError::Config(format!(
                "columns.student_name and columns.admission_no are both '{}'",
                student
            )));
        }
        if self.workbook.as_os_str().is_empty() {
            return Err(ViewerError::Config("workbook path is empty".to_string()));
        }
        Ok(())
    }
}
