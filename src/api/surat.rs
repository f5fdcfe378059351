use crate::errors::ApiError;
use crate::models::{NewSurat, Surat, SuratUpdate};
use crate::state::AppState;
use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn create_router() -> Result<Router<AppState>> {
    let router = Router::new()
        .route("/", get(list_surat).post(create_surat))
        .route("/{id}", put(update_surat).delete(delete_surat));

    Ok(router)
}

// Reads the leading run of digits, so "1abc" and "2.5" address records 1 and 2.
// Paths without leading digits match no record.
fn parse_id(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let digits = trimmed.find(|c: char| !c.is_ascii_digit()).unwrap_or(trimmed.len());
    trimmed[..digits].parse().ok()
}

async fn list_surat(State(app_state): State<AppState>) -> Json<Vec<Surat>> {
    Json(app_state.surat_repository.list_surat().await)
}

async fn create_surat(
    State(app_state): State<AppState>,
    Json(payload): Json<NewSurat>,
) -> Result<(StatusCode, Json<Surat>), ApiError> {
    if !payload.has_reference() {
        return Err(ApiError::MissingReference);
    }

    let surat = app_state.surat_repository.create_surat(payload).await;
    Ok((StatusCode::CREATED, Json(surat)))
}

async fn update_surat(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<SuratUpdate>,
) -> Result<Json<Surat>, ApiError> {
    let id = parse_id(&id).ok_or(ApiError::SuratNotFound)?;

    match app_state.surat_repository.update_surat(id, payload).await {
        Some(surat) => Ok(Json(surat)),
        None => Err(ApiError::SuratNotFound),
    }
}

async fn delete_surat(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Json<MessageResponse> {
    if let Some(id) = parse_id(&id) {
        app_state.surat_repository.delete_surat(id).await;
    }

    Json(MessageResponse { message: "Surat deleted successfully".to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("1"), Some(1));
        assert_eq!(parse_id(" 42 "), Some(42));
        assert_eq!(parse_id("1abc"), Some(1));
        assert_eq!(parse_id("2.5"), Some(2));
        assert_eq!(parse_id("007"), Some(7));
        assert_eq!(parse_id("-1"), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("3f2c9a1e-0000-4000-8000-000000000000"), Some(3));
    }
}
