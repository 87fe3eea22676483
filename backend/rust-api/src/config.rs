use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub listen_addr: String,
    pub questions_path: String,
    pub quiz_db_path: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        // Determine environment (defaults to dev)
        let env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // Build configuration from config/*.toml + ENV overrides
        let config_builder = config::Config::builder()
            .add_source(
                config::File::with_name(&format!("config/{}", env)).required(false), // Allow missing config file, fallback to ENV
            )
            // Override with environment variables (prefix: APP_)
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        let settings = config_builder.build()?;

        let listen_addr = settings
            .get_string("server.listen_addr")
            .or_else(|_| env::var("LISTEN_ADDR"))
            .unwrap_or_else(|_| "0.0.0.0:8000".to_string());

        let questions_path = settings
            .get_string("store.questions_path")
            .or_else(|_| env::var("QUESTIONS_PATH"))
            .unwrap_or_else(|_| "database/questions.json".to_string());

        let quiz_db_path = settings
            .get_string("store.quiz_db_path")
            .or_else(|_| env::var("QUIZ_DB_PATH"))
            .unwrap_or_else(|_| "database/Quizz.db".to_string());

        Ok(Config {
            listen_addr,
            questions_path,
            quiz_db_path,
        })
    }
}
