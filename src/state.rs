use crate::config::AppConfig;
use crate::repositories::SuratRepository;
use crate::services::FileStore;
use std::sync::Arc;

// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub surat_repository: Arc<SuratRepository>,
    pub file_store: Arc<FileStore>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let surat_repository = if config.store.seed_sample_data {
            SuratRepository::with_sample_data()
        } else {
            SuratRepository::new()
        };

        Self {
            surat_repository: Arc::new(surat_repository),
            file_store: Arc::new(FileStore::new(&config.upload.dir)),
            config,
        }
    }
}
