use crate::config::{AppConfig, ServerConfig, StoreConfig, UploadConfig};
use crate::state::AppState;
use std::path::Path;

/// Configuration rooted in `upload_dir`, independent of the process environment.
pub fn test_config(upload_dir: &Path, seed_sample_data: bool) -> AppConfig {
    AppConfig {
        server: ServerConfig { host: "127.0.0.1".to_string(), port: 0 },
        upload: UploadConfig { dir: upload_dir.to_string_lossy().into_owned(), max_bytes: None },
        store: StoreConfig { seed_sample_data },
    }
}

/// Isolated application state for a single test.
pub fn create_test_app_state(upload_dir: &Path, seed_sample_data: bool) -> AppState {
    AppState::new(test_config(upload_dir, seed_sample_data))
}
