use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No file provided")]
    NoFileProvided,
    #[error("Either letterNumber or aktaNotaris must be provided")]
    MissingReference,
    #[error("Surat not found")]
    SuratNotFound,
    #[error("Invalid multipart body: {0}")]
    Multipart(#[from] MultipartError),
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NoFileProvided | ApiError::MissingReference => StatusCode::BAD_REQUEST,
            ApiError::SuratNotFound => StatusCode::NOT_FOUND,
            ApiError::Multipart(e) => e.status(),
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Surfaces multipart stream failures (such as an exceeded body limit)
    /// with their own status instead of a 500.
    pub fn from_upload_error(err: anyhow::Error) -> Self {
        match err.downcast::<MultipartError>() {
            Ok(multipart) => ApiError::Multipart(multipart),
            Err(err) => ApiError::Internal(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match &self {
            ApiError::Internal(e) => {
                error!("Request failed: {:#}", e);
                "Internal server error".to_string()
            }
            ApiError::Multipart(e) => e.body_text(),
            other => other.to_string(),
        };

        (status, Json(json!({ "error": error_message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NoFileProvided.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MissingReference.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::SuratNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("disk full")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
