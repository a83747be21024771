//! Terminal and JSON rendering of selections and reports

use crate::core::SheetCatalog;
use crate::error::ViewerResult;
use crate::types::StudentReport;
use colored::Colorize;
use std::io::Write;
use std::path::Path;

const ATTRIBUTE_HEADER: &str = "Attribute / Subject";
const VALUE_HEADER: &str = "Value";

/// Shown in place of an empty semester
pub const NO_SEMESTER: &str = "(none)";

pub fn semester_label(semester: &str) -> &str {
    if semester.is_empty() {
        NO_SEMESTER
    } else {
        semester
    }
}

/// Heading shown above every view
pub fn write_title<W: Write>(out: &mut W, title: &str) -> std::io::Result<()> {
    writeln!(out, "{}", title.bold().green())?;
    writeln!(out, "{}", "─".repeat(title.chars().count().max(20)))
}

/// Banner image line under the title; nothing when no banner is configured
pub fn write_banner<W: Write>(out: &mut W, banner: Option<&Path>) -> std::io::Result<()> {
    let Some(path) = banner else {
        return Ok(());
    };
    if path.is_file() {
        writeln!(out, "   {} {}", "Banner:".dimmed(), path.display())
    } else {
        writeln!(
            out,
            "   {} {} {}",
            "Banner:".dimmed(),
            path.display(),
            "(not found)".yellow()
        )
    }
}

/// Universities with their semesters
pub fn write_catalog<W: Write>(out: &mut W, catalog: &SheetCatalog) -> std::io::Result<()> {
    if catalog.is_empty() {
        writeln!(out, "{}", "No sheets found in workbook".yellow())?;
        return Ok(());
    }
    for university in catalog.groups() {
        let semesters: Vec<&str> = catalog
            .subgroups(university)
            .into_iter()
            .map(semester_label)
            .collect();
        writeln!(
            out,
            "   {} {}",
            university.bright_blue().bold(),
            format!("[{}]", semesters.join(", ")).cyan()
        )?;
    }
    for (university, semester) in catalog.duplicates() {
        writeln!(
            out,
            "   {} several sheets map to {} {}, the first one is used",
            "⚠️".yellow(),
            university,
            semester_label(semester)
        )?;
    }
    Ok(())
}

/// Student options of one sheet
pub fn write_students<W: Write>(out: &mut W, students: &[String]) -> std::io::Result<()> {
    if students.is_empty() {
        writeln!(out, "{}", "No students in this sheet".yellow())?;
    }
    for (idx, student) in students.iter().enumerate() {
        writeln!(out, "   {:>3}. {}", idx + 1, student)?;
    }
    Ok(())
}

/// Student details followed by the attribute table
pub fn write_report<W: Write>(out: &mut W, report: &StudentReport) -> std::io::Result<()> {
    let labels = &report.identity_labels;
    let student = &report.student;

    writeln!(out)?;
    writeln!(out, "{}", "Student Details".bold().underline())?;
    writeln!(out, "   {} {}", format!("{}:", labels.student_name).bold(), student.name)?;
    writeln!(
        out,
        "   {} {}",
        format!("{}:", labels.admission_no).bold(),
        student.admission_no
    )?;
    if let (Some(label), Some(value)) = (&labels.father_name, &student.father_name) {
        writeln!(out, "   {} {}", format!("{}:", label).bold(), value)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", "Attributes / Subjects".bold().underline())?;
    write_table(out, report)
}

fn write_table<W: Write>(out: &mut W, report: &StudentReport) -> std::io::Result<()> {
    let attributes = &report.student.attributes;
    let name_width = attributes
        .iter()
        .map(|a| a.name.chars().count())
        .chain(std::iter::once(ATTRIBUTE_HEADER.len()))
        .max()
        .unwrap_or(0);
    let value_width = attributes
        .iter()
        .map(|a| a.value.chars().count())
        .chain(std::iter::once(VALUE_HEADER.len()))
        .max()
        .unwrap_or(0);

    writeln!(
        out,
        "   {}  {}",
        pad(ATTRIBUTE_HEADER, name_width).bold(),
        pad(VALUE_HEADER, value_width).bold()
    )?;
    writeln!(
        out,
        "   {}  {}",
        "─".repeat(name_width),
        "─".repeat(value_width)
    )?;
    for attribute in attributes {
        writeln!(
            out,
            "   {}  {}",
            pad(&attribute.name, name_width).cyan(),
            attribute.value
        )?;
    }
    Ok(())
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

/// Pretty JSON for scripting
pub fn write_json<W: Write, T: serde::Serialize>(out: &mut W, value: &T) -> ViewerResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
