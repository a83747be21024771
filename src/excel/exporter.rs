//! Report exporter - [`StudentReport`] → Excel (.xlsx)

use crate::error::{ViewerError, ViewerResult};
use crate::types::StudentReport;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// Writes one student report to a single-sheet workbook
pub struct ReportExporter<'a> {
    report: &'a StudentReport,
}

impl<'a> ReportExporter<'a> {
    pub fn new(report: &'a StudentReport) -> Self {
        Self { report }
    }

    /// Export the report to an Excel .xlsx file
    pub fn export(&self, output_path: &Path) -> ViewerResult<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name("Result")
            .map_err(|e| ViewerError::Export(format!("Failed to set worksheet name: {}", e)))?;

        self.write_report(worksheet)?;

        workbook
            .save(output_path)
            .map_err(|e| ViewerError::Export(format!("Failed to save Excel file: {}", e)))?;
        Ok(())
    }

    fn write_report(&self, worksheet: &mut Worksheet) -> ViewerResult<()> {
        let bold = Format::new().set_bold();
        let report = self.report;
        let labels = &report.identity_labels;
        let student = &report.student;

        let mut row: u32 = 0;
        write(worksheet, row, 0, &report.title, Some(&bold))?;
        row += 1;
        write(worksheet, row, 0, "Sheet", Some(&bold))?;
        write(worksheet, row, 1, &report.sheet, None)?;
        row += 2;

        let mut identity = vec![
            (labels.student_name.as_str(), student.name.as_str()),
            (labels.admission_no.as_str(), student.admission_no.as_str()),
        ];
        if let (Some(label), Some(value)) = (&labels.father_name, &student.father_name) {
            identity.push((label.as_str(), value.as_str()));
        }
        for (label, value) in identity {
            write(worksheet, row, 0, label, Some(&bold))?;
            write(worksheet, row, 1, value, None)?;
            row += 1;
        }
        row += 1;

        write(worksheet, row, 0, "Attribute / Subject", Some(&bold))?;
        write(worksheet, row, 1, "Value", Some(&bold))?;
        row += 1;
        for attribute in &student.attributes {
            write(worksheet, row, 0, &attribute.name, None)?;
            write(worksheet, row, 1, &attribute.value, None)?;
            row += 1;
        }

        worksheet
            .set_column_width(0, 28)
            .and_then(|ws| ws.set_column_width(1, 24))
            .map_err(|e| ViewerError::Export(format!("Failed to size columns: {}", e)))?;
        Ok(())
    }
}

fn write(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    text: &str,
    format: Option<&Format>,
) -> ViewerResult<()> {
    let result = match format {
        Some(format) => worksheet.write_string_with_format(row, col, text, format),
        None => worksheet.write_string(row, col, text),
    };
    result
        .map(|_| ())
        .map_err(|e| ViewerError::Export(format!("Failed to write cell: {}", e)))
}
