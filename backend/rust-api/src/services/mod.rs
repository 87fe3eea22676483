use crate::config::Config;

pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        // The store is read per request, so a missing file is not fatal
        // here; it will surface as a 500 on /questions until it appears.
        if !std::path::Path::new(&config.questions_path).exists() {
            tracing::warn!(
                "Question store not found at startup: {}",
                config.questions_path
            );
        }

        Self { config }
    }
}

pub mod store_service;
