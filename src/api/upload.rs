use crate::config::AppConfig;
use crate::errors::ApiError;
use crate::state::AppState;
use anyhow::Result;
use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;
use tracing::debug;

/// Multipart field that carries the uploaded file.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub filename: String,
}

/// `POST /upload` plus read-only static serving of the upload directory at `/uploads`.
pub async fn create_router(config: &AppConfig) -> Result<Router<AppState>> {
    let body_limit = match config.upload.max_bytes {
        Some(max) => DefaultBodyLimit::max(max),
        None => DefaultBodyLimit::disable(),
    };

    let router = Router::new()
        .route("/upload", post(upload_file).layer(body_limit))
        .nest_service("/uploads", ServeDir::new(&config.upload.dir));

    Ok(router)
}

async fn upload_file(
    State(app_state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            debug!("Upload without multipart body: {}", rejection);
            return Err(ApiError::NoFileProvided);
        }
    };

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let original_name = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };

        let filename = app_state
            .file_store
            .store(&original_name, field)
            .await
            .map_err(ApiError::from_upload_error)?;
        return Ok((StatusCode::CREATED, Json(UploadResponse { filename })));
    }

    Err(ApiError::NoFileProvided)
}
