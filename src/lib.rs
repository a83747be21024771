//! Marksheet Viewer - exam results by university, semester and student
//!
//! Reads a workbook whose sheets are named `"<UNIVERSITY> <SEMESTER>"`,
//! lets a caller narrow down to one sheet and one student, and produces that
//! student's details with every subject score normalized for display.
//!
//! # Features
//!
//! - Sheet labels parsed into a university → semester hierarchy
//! - Tolerant cell normalization (`85` → `85.0`, `"1,234.5"` → `1234.5`,
//!   `"90%"` → `90.0`, grades and remarks kept verbatim)
//! - Excel/ODS input via calamine, report export to .xlsx
//! - Terminal CLI (`marksheet`) and JSON HTTP API (`marksheet-server`)
//!
//! # Example
//!
//! ```no_run
//! use marksheet_viewer::config::ViewerConfig;
//! use marksheet_viewer::viewer::Viewer;
//!
//! let viewer = Viewer::from_config(ViewerConfig::default());
//!
//! for university in viewer.universities()? {
//!     println!("{}: {:?}", university, viewer.semesters(&university)?);
//! }
//!
//! let report = viewer.report("MGKVP", "1", "Asha Verma")?;
//! for attribute in &report.student.attributes {
//!     println!("{} = {}", attribute.name, attribute.value);
//! }
//! # Ok::<(), marksheet_viewer::error::ViewerError>(())
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod excel;
pub mod source;
pub mod types;
pub mod viewer;

// Re-export commonly used types
pub use crate::core::{normalize, normalize_str, parse_sheet_label};
pub use error::{ViewerError, ViewerResult};
pub use types::{Attribute, CellValue, SheetIdentifier, SheetTable, StudentRecord, StudentReport};
