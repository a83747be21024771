use clap::{Parser, Subcommand};
use colored::Colorize;
use marksheet_viewer::cli::{self, OutputFormat};
use marksheet_viewer::config::ViewerConfig;
use marksheet_viewer::error::ViewerResult;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "marksheet")]
#[command(about = "Browse exam marksheets by university, semester and student.")]
#[command(long_about = "Marksheet - exam results viewer

Reads a workbook with one sheet per university and semester. Sheet names
follow the convention '<UNIVERSITY> <SEMESTER>', e.g. 'MGKVP 1'.

COMMANDS:
  list      - Universities and their semesters
  students  - Students of one university/semester sheet
  show      - One student's details and subject scores
  browse    - Interactive university → semester → student selection

CONFIGURATION:
  marksheet.yaml in the working directory (or --config FILE):

  workbook: \"Marksheet Nov Sessional 2025.xlsx\"
  title: \"Result Sessional Odd Sem 2025\"
  columns:
    student_name: \"Student Name\"
    admission_no: \"Admission No.\"
    father_name: \"Father Name\"

EXAMPLES:
  marksheet list
  marksheet students -u MGKVP -s 1
  marksheet show -u MGKVP -s 1 -n \"Asha Verma\"
  marksheet show -u MGKVP -s 1 -n \"Asha Verma\" --format json
  marksheet browse")]
#[command(version)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long, global = true, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Workbook to read (overrides the configuration)
    #[arg(short, long, global = true, env = "MARKSHEET_WORKBOOK")]
    workbook: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List universities and their semesters
    List,

    /// List the students of one university/semester sheet
    Students {
        /// University (sheet name prefix)
        #[arg(short, long)]
        university: String,

        /// Semester number (omit for sheets without one)
        #[arg(short, long, default_value = "")]
        semester: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    #[command(long_about = "Show one student's details and subject scores.

Identity columns (student name, admission number, father's name) are shown
as they appear in the sheet. Every other column is listed as an attribute:
numbers are shown with one decimal place (85 → 85.0, 1,234.5 → 1234.5,
90% → 90.0), anything else (grades, 'Absent') is shown unchanged.

If a student name appears more than once in a sheet, the first row is used.

EXAMPLE:
  marksheet show -u MGKVP -s 1 -n \"Asha Verma\" -o asha.xlsx")]
    /// Show one student's details and subject scores
    Show {
        /// University (sheet name prefix)
        #[arg(short, long)]
        university: String,

        /// Semester number (omit for sheets without one)
        #[arg(short, long, default_value = "")]
        semester: String,

        /// Student name, exactly as in the sheet
        #[arg(short = 'n', long)]
        student: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Also write the report to an Excel file (.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Interactively pick university, semester and student
    Browse,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "marksheet_viewer=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("MARKSHEET_LOG").unwrap_or_else(|_| default.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> ViewerResult<()> {
    let config = ViewerConfig::load(cli.config.as_deref())?.with_workbook(cli.workbook);
    config.validate()?;

    match cli.command {
        Commands::List => cli::list(config),

        Commands::Students {
            university,
            semester,
            format,
        } => cli::students(config, university, semester, format),

        Commands::Show {
            university,
            semester,
            student,
            format,
            output,
        } => cli::show(config, university, semester, student, format, output),

        Commands::Browse => cli::browse(config),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "❌".red(), e.to_string().red());
        std::process::exit(1);
    }
}
