use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::{Validate, ValidationError};

/// One quiz record as persisted in the question store.
///
/// `answers` maps short labels ("A", "B", ...) to answer text; the label
/// set is not fixed in size or content across records. `correct_answer`
/// must name one of those labels, which is checked when the store is
/// loaded rather than trusted from the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = validate_correct_label))]
pub struct QuizItem {
    pub id: i64,
    pub theme: String,
    pub question: String,
    pub answers: HashMap<String, String>,
    pub correct_answer: String,
}

fn validate_correct_label(item: &QuizItem) -> Result<(), ValidationError> {
    if item.answers.contains_key(&item.correct_answer) {
        Ok(())
    } else {
        Err(ValidationError::new("correct_answer_not_an_answer_label"))
    }
}
