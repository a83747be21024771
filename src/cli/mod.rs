//! CLI command handlers

pub mod commands;
pub mod prompt;
pub mod render;

pub use commands::{browse, list, show, students, OutputFormat};
