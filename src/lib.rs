pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;

// Always available for integration tests but marked as test-only
#[cfg(any(test, debug_assertions))]
pub mod test_utils;

pub use config::AppConfig;
pub use errors::ApiError;
pub use state::AppState;
