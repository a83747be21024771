//! Excel I/O
//!
//! - Reader: workbook (.xlsx/.xls/.ods) → sheet tables, via calamine
//! - Exporter: student report → .xlsx, via rust_xlsxwriter

mod exporter;
mod reader;

pub use exporter::ReportExporter;
pub use reader::{convert_cell, range_to_table, ExcelSource};
