//! API request handlers
//!
//! Handlers for all REST API endpoints.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::server::AppState;
use crate::error::{ViewerError, ViewerResult};
use crate::excel::ExcelSource;
use crate::viewer::Viewer;

/// Standard API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            request_id: Uuid::new_v4().to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            request_id: Uuid::new_v4().to_string(),
            data: None,
            error: Some(message.into()),
        }
    }
}

/// HTTP status for a viewer error
pub fn status_for(error: &ViewerError) -> StatusCode {
    match error {
        ViewerError::Selection(_) => StatusCode::NOT_FOUND,
        ViewerError::SchemaViolation { .. } | ViewerError::SheetLoadFailure { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ViewerError::ResourceMissing(_) | ViewerError::SheetListUnreadable(_) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn respond<T: Serialize>(result: ViewerResult<T>) -> Response {
    match result {
        Ok(data) => Json(ApiResponse::ok(data)).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "request failed");
            (status_for(&e), Json(ApiResponse::<T>::err(e.to_string()))).into_response()
        }
    }
}

/// Run a viewer query off the async runtime; the workbook is reopened per call
async fn with_viewer<T, F>(state: &AppState, query: F) -> Response
where
    T: Serialize + Send + 'static,
    F: FnOnce(&Viewer<ExcelSource>) -> ViewerResult<T> + Send + 'static,
{
    let config = state.viewer.clone();
    let joined = tokio::task::spawn_blocking(move || {
        let viewer = Viewer::from_config(config);
        query(&viewer)
    })
    .await;

    match joined {
        Ok(result) => respond(result),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::err(format!("Worker failed: {}", e))),
        )
            .into_response(),
    }
}

/// Root endpoint response
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub title: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

fn endpoint(path: &str, description: &str) -> EndpointInfo {
    EndpointInfo {
        path: path.to_string(),
        method: "GET".to_string(),
        description: description.to_string(),
    }
}

/// GET / - Root info
pub async fn root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = RootResponse {
        name: "Marksheet API Server".to_string(),
        version: state.version.clone(),
        title: state.viewer.title.clone(),
        endpoints: vec![
            endpoint("/health", "Health check endpoint"),
            endpoint("/version", "Get server version"),
            endpoint("/banner", "Banner image shown above the title"),
            endpoint("/api/v1/universities", "Universities found in the workbook"),
            endpoint("/api/v1/semesters?university=U", "Semesters of one university"),
            endpoint(
                "/api/v1/students?university=U&semester=S",
                "Students of one university/semester sheet",
            ),
            endpoint(
                "/api/v1/result?university=U&semester=S&student=NAME",
                "Details and subject scores of one student",
            ),
        ],
    };
    Json(ApiResponse::ok(response))
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
    }))
}

/// Version response
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResponse {
    pub version: String,
}

/// GET /version - Server version
pub async fn version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(VersionResponse {
        version: state.version.clone(),
    }))
}

/// GET /banner - Configured banner image
pub async fn banner(State(state): State<Arc<AppState>>) -> Response {
    let Some(path) = state.viewer.banner.clone() else {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::err("No banner configured")),
        )
            .into_response();
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, image_mime(&path))], bytes).into_response(),
        Err(e) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::err(format!(
                "Banner {} unavailable: {}",
                path.display(),
                e
            ))),
        )
            .into_response(),
    }
}

fn image_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// GET /api/v1/universities
pub async fn universities(State(state): State<Arc<AppState>>) -> Response {
    with_viewer(&state, |viewer| viewer.universities()).await
}

#[derive(Debug, Deserialize)]
pub struct SemestersQuery {
    pub university: String,
}

/// GET /api/v1/semesters?university=U
pub async fn semesters(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SemestersQuery>,
) -> Response {
    with_viewer(&state, move |viewer| viewer.semesters(&query.university)).await
}

#[derive(Debug, Deserialize)]
pub struct StudentsQuery {
    pub university: String,
    #[serde(default)]
    pub semester: String,
}

/// GET /api/v1/students?university=U&semester=S
pub async fn students(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StudentsQuery>,
) -> Response {
    with_viewer(&state, move |viewer| {
        viewer.students(&query.university, &query.semester)
    })
    .await
}

#[derive(Debug, Deserialize)]
pub struct ResultQuery {
    pub university: String,
    #[serde(default)]
    pub semester: String,
    pub student: String,
}

/// GET /api/v1/result?university=U&semester=S&student=NAME
pub async fn result(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ResultQuery>,
) -> Response {
    with_viewer(&state, move |viewer| {
        viewer.report(&query.university, &query.semester, &query.student)
    })
    .await
}
