use crate::cli::prompt::choose;
use crate::cli::render::{
    semester_label, write_banner, write_catalog, write_json, write_report, write_students,
    write_title,
};
use crate::config::ViewerConfig;
use crate::error::ViewerResult;
use crate::excel::ReportExporter;
use crate::source::DataSource;
use crate::viewer::Viewer;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Output format for `show` and `students`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Execute the list command - universities and their semesters
pub fn list(config: ViewerConfig) -> ViewerResult<()> {
    let viewer = Viewer::from_config(config);
    let mut out = io::stdout().lock();
    list_with(&viewer, &mut out)
}

fn list_with<S: DataSource, W: Write>(viewer: &Viewer<S>, out: &mut W) -> ViewerResult<()> {
    write_title(out, &viewer.config().title)?;
    let catalog = viewer.catalog()?;
    write_catalog(out, &catalog)?;
    Ok(())
}

/// Execute the students command - student options of one sheet
pub fn students(
    config: ViewerConfig,
    university: String,
    semester: String,
    format: OutputFormat,
) -> ViewerResult<()> {
    let viewer = Viewer::from_config(config);
    let mut out = io::stdout().lock();
    students_with(&viewer, &mut out, &university, &semester, format)
}

fn students_with<S: DataSource, W: Write>(
    viewer: &Viewer<S>,
    out: &mut W,
    university: &str,
    semester: &str,
    format: OutputFormat,
) -> ViewerResult<()> {
    let names = viewer.students(university, semester)?;
    match format {
        OutputFormat::Json => write_json(out, &names)?,
        OutputFormat::Human => {
            writeln!(
                out,
                "{} {} {}",
                "Students of".bold(),
                university.bright_blue().bold(),
                semester_label(semester).bright_blue().bold()
            )?;
            write_students(out, &names)?;
        }
    }
    Ok(())
}

/// Execute the show command - one student's report
pub fn show(
    config: ViewerConfig,
    university: String,
    semester: String,
    student: String,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ViewerResult<()> {
    let viewer = Viewer::from_config(config);
    let mut out = io::stdout().lock();
    show_with(
        &viewer,
        &mut out,
        &university,
        &semester,
        &student,
        format,
        output,
    )
}

fn show_with<S: DataSource, W: Write>(
    viewer: &Viewer<S>,
    out: &mut W,
    university: &str,
    semester: &str,
    student: &str,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ViewerResult<()> {
    let report = viewer.report(university, semester, student)?;

    match format {
        OutputFormat::Json => write_json(out, &report)?,
        OutputFormat::Human => {
            write_title(out, &report.title)?;
            write_banner(out, viewer.config().banner.as_deref())?;
            writeln!(
                out,
                "   {} {}   {} {}",
                "University:".bold(),
                report.university.bright_blue(),
                "Semester:".bold(),
                semester_label(&report.semester).bright_blue()
            )?;
            write_report(out, &report)?;
        }
    }

    if let Some(path) = output {
        ReportExporter::new(&report).export(&path)?;
        if format == OutputFormat::Human {
            writeln!(out)?;
            writeln!(
                out,
                "{} {}",
                "✅ Report written to".bold().green(),
                path.display()
            )?;
        }
    }
    Ok(())
}

/// Execute the browse command - interactive university → semester → student
pub fn browse(config: ViewerConfig) -> ViewerResult<()> {
    let viewer = Viewer::from_config(config);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    browse_with(&viewer, &mut input, &mut out)
}

fn browse_with<S: DataSource, R: BufRead, W: Write>(
    viewer: &Viewer<S>,
    input: &mut R,
    out: &mut W,
) -> ViewerResult<()> {
    write_title(out, &viewer.config().title)?;
    write_banner(out, viewer.config().banner.as_deref())?;

    let catalog = viewer.catalog()?;
    let universities: Vec<String> = catalog.groups().into_iter().map(str::to_string).collect();
    let Some(u) = choose(input, out, "Select University", &universities)? else {
        return Ok(());
    };
    let university = &universities[u];

    let semesters: Vec<String> = catalog
        .subgroups(university)
        .into_iter()
        .map(str::to_string)
        .collect();
    let labels: Vec<String> = semesters
        .iter()
        .map(|s| semester_label(s).to_string())
        .collect();
    // A broken sheet only affects its own semester; ask again
    let (semester, roster) = loop {
        let Some(s) = choose(input, out, "Select Semester", &labels)? else {
            return Ok(());
        };
        let semester = &semesters[s];
        match viewer.roster(university, semester) {
            Ok(roster) => break (semester, roster),
            Err(e) if e.is_selection_scoped() => {
                writeln!(out, "{} {}", "⚠️".yellow(), e.to_string().yellow())?;
            }
            Err(e) => return Err(e),
        }
    };
    let students = roster.student_names();
    let Some(n) = choose(input, out, "Select Student", &students)? else {
        return Ok(());
    };

    let record = roster.require(&students[n])?;
    let report = viewer.build_report(university, semester, &roster, record);
    write_report(out, &report)?;
    Ok(())
}
