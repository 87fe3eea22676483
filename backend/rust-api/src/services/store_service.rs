use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use validator::Validate;

use crate::models::QuizItem;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("question store unavailable: {0}")]
    StoreUnavailable(#[source] std::io::Error),
    #[error("malformed record in question store: {0}")]
    MalformedRecord(String),
}

/// Read-only view of the durable question store. The file is re-read on
/// every load; nothing is cached between requests.
pub struct QuestionStore {
    path: PathBuf,
}

impl QuestionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Materializes every stored record. The whole load is rejected when
    /// any record fails the QuizItem shape or the correct-label invariant;
    /// there is no partial-success path.
    pub async fn load_all(&self) -> Result<Vec<QuizItem>, StoreError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(StoreError::StoreUnavailable)?;

        let items: Vec<QuizItem> =
            serde_json::from_str(&raw).map_err(|e| StoreError::MalformedRecord(e.to_string()))?;

        for item in &items {
            item.validate().map_err(|_| {
                StoreError::MalformedRecord(format!(
                    "record {}: correct_answer {:?} is not an answer label",
                    item.id, item.correct_answer
                ))
            })?;
        }

        Ok(items)
    }
}

/// Uniform random permutation of the full feed, in place. Generic over the
/// RNG so tests can drive it with a seeded generator.
pub fn shuffle_questions<R: Rng + ?Sized>(items: &mut [QuizItem], rng: &mut R) {
    items.shuffle(rng);
}
