use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use crate::{
    metrics,
    services::{
        store_service::{shuffle_questions, QuestionStore},
        AppState,
    },
};

/// `GET /questions`: the full store, reshuffled on every call.
///
/// Every record appears exactly once; there is no subsetting. A store or
/// validation failure fails the whole request rather than returning a
/// partial list.
pub async fn get_questions(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let store = QuestionStore::new(&state.config.questions_path);

    match store.load_all().await {
        Ok(mut items) => {
            metrics::STORE_LOADS_TOTAL
                .with_label_values(&["success"])
                .inc();

            shuffle_questions(&mut items, &mut rand::rng());

            metrics::QUESTIONS_SERVED_TOTAL.inc_by(items.len() as u64);
            tracing::debug!("Serving {} questions", items.len());

            Ok((StatusCode::OK, Json(items)))
        }
        Err(e) => {
            metrics::STORE_LOADS_TOTAL
                .with_label_values(&["error"])
                .inc();
            tracing::error!("Failed to load question store: {}", e);

            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
