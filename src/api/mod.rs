//! Marksheet API Server module
//!
//! JSON HTTP API over the selection pipeline.
//! Run with `marksheet-server`.

pub mod handlers;
pub mod server;

pub use server::{router, run_api_server};
