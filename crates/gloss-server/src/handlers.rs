//! HTTP request handlers for the validation service.
//!
//! Implements the upload, validation, and health endpoints using axum.

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use gloss_domain::{DocumentError, UploadedFile, ValidationReport};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::config::ServerConfig;
use gloss_extractor::ValidationService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Validation pipeline, shared read-only across requests
    pub service: Arc<ValidationService>,
    /// Server configuration (limits, failure messages)
    pub config: Arc<ServerConfig>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Formats the server can ingest, in adapter priority order
    pub supported_formats: Vec<String>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
///
/// Each variant carries the client-facing message, already resolved
/// against the configured failure messages.
#[derive(Debug)]
pub enum AppError {
    /// No adapter claims the uploaded file
    UnsupportedMediaType(String),
    /// An adapter claimed the file but could not parse its bytes
    MalformedDocument(String),
    /// The document contained no knowledge blocks
    NoBlocksFound(String),
    /// The multipart form carried no file field
    MissingFile(String),
    /// The upload exceeds the configured size cap
    PayloadTooLarge(String),
    /// Internal server error
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::UnsupportedMediaType(msg) => (StatusCode::UNSUPPORTED_MEDIA_TYPE, msg),
            AppError::MalformedDocument(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NoBlocksFound(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::MissingFile(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
            AppError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

/// POST /validate - Validate the knowledge blocks in an uploaded document
///
/// Expects a multipart form with a `file` field. Returns the validation
/// report as JSON, or a failure status per the configured messages.
async fn validate_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ValidationReport>, AppError> {
    let file = read_upload(&mut multipart, &state.config).await?;

    info!("Processing file: {}", file.filename);

    // The pipeline is CPU-bound; keep it off the async workers.
    let service = Arc::clone(&state.service);
    let report = tokio::task::spawn_blocking(move || service.validate_document(&file))
        .await
        .map_err(|e| {
            error!("Validation task failed: {}", e);
            AppError::InternalError(state.config.error_messages.internal_error.clone())
        })?
        .map_err(|e| match e {
            DocumentError::UnsupportedMediaType(ref media_type) => {
                error!("Unsupported file type: {}", media_type);
                AppError::UnsupportedMediaType(state.config.error_messages.unsupported_type.clone())
            }
            DocumentError::Malformed { .. } => {
                warn!("Document processing failed: {}", e);
                AppError::MalformedDocument(e.to_string())
            }
        })?;

    if report.blocks_found == 0 {
        warn!("No valid JSON blocks found");
        return Err(AppError::NoBlocksFound(
            state.config.error_messages.no_blocks.clone(),
        ));
    }

    Ok(Json(report))
}

/// Pull the `file` field out of the multipart form
async fn read_upload(
    multipart: &mut Multipart,
    config: &ServerConfig,
) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!("Malformed multipart body: {}", e);
        AppError::MissingFile(config.error_messages.missing_file.clone())
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let media_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(|e| {
            warn!("Failed to read upload body: {}", e);
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge(config.error_messages.payload_too_large.clone())
            } else {
                AppError::InternalError(config.error_messages.internal_error.clone())
            }
        })?;

        if data.len() > config.max_upload_bytes {
            return Err(AppError::PayloadTooLarge(
                config.error_messages.payload_too_large.clone(),
            ));
        }

        return Ok(UploadedFile::new(filename, media_type, data.to_vec()));
    }

    Err(AppError::MissingFile(
        config.error_messages.missing_file.clone(),
    ))
}

/// GET / - Redirect to the upload page
async fn root() -> Redirect {
    Redirect::temporary("/upload")
}

/// GET /upload - Single-file upload page
async fn upload_page() -> Html<&'static str> {
    Html(include_str!("upload.html"))
}

/// GET /health - Service health and supported formats
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    let supported_formats = state
        .service
        .supported_formats()
        .into_iter()
        .map(str::to_string)
        .collect();

    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        supported_formats,
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    let body_limit = state.config.body_limit_bytes();

    AxumRouter::new()
        .route("/", get(root))
        .route("/upload", get(upload_page))
        .route("/validate", post(validate_document))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
