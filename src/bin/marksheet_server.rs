//! Marksheet API Server binary
//!
//! JSON HTTP API for browsing exam results by university, semester and
//! student.

use clap::Parser;
use marksheet_viewer::api::{run_api_server, server::ApiConfig};
use marksheet_viewer::config::ViewerConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "marksheet-server")]
#[command(version)]
#[command(about = "Marksheet API Server - JSON HTTP API for exam results")]
#[command(long_about = r#"
Marksheet API Server - JSON HTTP API for exam results

Endpoints:
  - GET /api/v1/universities
  - GET /api/v1/semesters?university=U
  - GET /api/v1/students?university=U&semester=S
  - GET /api/v1/result?university=U&semester=S&student=NAME

Additional endpoints:
  - GET  /health           - Health check
  - GET  /version          - Server version info
  - GET  /banner           - Banner image
  - GET  /                 - API documentation

The workbook is reopened on every request, so edits show up immediately.

Example usage:
  marksheet-server                           # Start on localhost:8080
  marksheet-server --host 0.0.0.0 --port 3000 --workbook marks.xlsx

  curl "http://localhost:8080/api/v1/result?university=MGKVP&semester=1&student=Asha"
"#)]
struct Args {
    /// Host address to bind to (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "MARKSHEET_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "MARKSHEET_PORT")]
    port: u16,

    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Workbook to serve (overrides the configuration)
    #[arg(short, long, env = "MARKSHEET_WORKBOOK")]
    workbook: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let viewer = ViewerConfig::load(args.config.as_deref())?.with_workbook(args.workbook);
    viewer.validate()?;

    let config = ApiConfig {
        host: args.host,
        port: args.port,
    };

    run_api_server(config, viewer).await
}
