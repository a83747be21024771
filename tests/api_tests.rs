//! API integration tests
//!
//! Drive the axum router in-process with `tower::ServiceExt::oneshot`.

mod common;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use marksheet_viewer::api::handlers::ApiResponse;
use marksheet_viewer::api::router;
use marksheet_viewer::api::server::AppState;
use marksheet_viewer::config::ViewerConfig;
use marksheet_viewer::StudentReport;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

fn state(dir: &TempDir) -> Arc<AppState> {
    let workbook = common::write_marksheet(dir.path());
    let mut config = ViewerConfig::default().with_workbook(Some(workbook));
    config.banner = None;
    Arc::new(AppState::new(config))
}

async fn get<T: DeserializeOwned>(state: Arc<AppState>, uri: &str) -> (StatusCode, ApiResponse<T>) {
    let response = router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ═══════════════════════════════════════════════════════════════════════════
// INFO ENDPOINTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_health() {
    let dir = TempDir::new().unwrap();
    let (status, body) = get::<serde_json::Value>(state(&dir), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.success);
    assert_eq!(body.data.unwrap()["status"], "healthy");
}

#[tokio::test]
async fn test_root_lists_endpoints() {
    let dir = TempDir::new().unwrap();
    let (status, body) = get::<serde_json::Value>(state(&dir), "/").await;
    assert_eq!(status, StatusCode::OK);
    let data = body.data.unwrap();
    assert_eq!(data["title"], "Result Sessional Odd Sem 2025");
    assert!(data["endpoints"].as_array().unwrap().len() >= 7);
}

#[tokio::test]
async fn test_banner_not_configured() {
    let dir = TempDir::new().unwrap();
    let (status, body) = get::<serde_json::Value>(state(&dir), "/banner").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!body.success);
}

#[tokio::test]
async fn test_banner_served_with_mime() {
    let dir = TempDir::new().unwrap();
    let banner = dir.path().join("header.png");
    std::fs::write(&banner, b"\x89PNG fake").unwrap();
    let mut config = ViewerConfig::default();
    config.banner = Some(banner);

    let response = router(Arc::new(AppState::new(config)))
        .oneshot(Request::builder().uri("/banner").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "image/png");
}

// ═══════════════════════════════════════════════════════════════════════════
// SELECTION ENDPOINTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_universities_and_semesters() {
    let dir = TempDir::new().unwrap();
    let state = state(&dir);

    let (status, body) = get::<Vec<String>>(state.clone(), "/api/v1/universities").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.data.unwrap(), vec!["BHU", "MGKVP"]);

    let (_, body) = get::<Vec<String>>(state, "/api/v1/semesters?university=MGKVP").await;
    assert_eq!(body.data.unwrap(), vec!["1", "2"]);
}

#[tokio::test]
async fn test_students() {
    let dir = TempDir::new().unwrap();
    let (status, body) =
        get::<Vec<String>>(state(&dir), "/api/v1/students?university=MGKVP&semester=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.data.unwrap(), vec!["Asha Verma", "Ravi Kumar"]);
}

#[tokio::test]
async fn test_result() {
    let dir = TempDir::new().unwrap();
    let (status, body) = get::<StudentReport>(
        state(&dir),
        "/api/v1/result?university=MGKVP&semester=1&student=Asha%20Verma",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let report = body.data.unwrap();
    assert_eq!(report.student.admission_no, "101");
    assert_eq!(report.student.attributes[0].value, "78.2");
}

#[tokio::test]
async fn test_error_statuses() {
    let dir = TempDir::new().unwrap();
    let state = state(&dir);

    let (status, body) = get::<serde_json::Value>(
        state.clone(),
        "/api/v1/result?university=MGKVP&semester=1&student=Nobody",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.error.unwrap().contains("Nobody"));

    let (status, _) =
        get::<serde_json::Value>(state, "/api/v1/students?university=BHU&semester=1").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let mut config = ViewerConfig::default().with_workbook(Some(dir.path().join("gone.xlsx")));
    config.banner = None;
    let (status, body) =
        get::<serde_json::Value>(Arc::new(AppState::new(config)), "/api/v1/universities").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.error.unwrap().contains("Excel file not found"));
}
