use axum::Router;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

use quizfeed_api::{config::Config, create_router, services::AppState};

/// Writes a throwaway question file and returns its path.
pub fn write_store(contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("quizfeed-test-{}.json", Uuid::new_v4()));
    std::fs::write(&path, contents).expect("Failed to write test question store");
    path
}

/// Builds the full application router backed by the given question file.
pub fn create_test_app(questions_path: &Path) -> Router {
    // Initialize tracing for tests
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        questions_path: questions_path.to_string_lossy().into_owned(),
        quiz_db_path: "database/Quizz.db".to_string(),
    };

    create_router(Arc::new(AppState::new(config)))
}
