//! The note model.

use serde::{Deserialize, Serialize};

use crate::calc::{EvaluationResult, evaluate_note_expressions};

/// A single note: a title plus free-form multi-line content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier, assigned by the store.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Free-form body text; lines may end in arithmetic expressions.
    #[serde(default)]
    pub content: String,
}

impl Note {
    /// Create a note with the given identity and text.
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// Extract and evaluate the arithmetic expressions in this note's content.
    ///
    /// Recomputed fresh on every call; nothing is cached on the note.
    pub fn evaluation(&self) -> EvaluationResult {
        evaluate_note_expressions(&self.content)
    }

    /// The sum of all expression results in this note.
    pub fn total(&self) -> f64 {
        self.evaluation().total
    }

    /// Case-insensitive match against title and content.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query) || self.content.to_lowercase().contains(&query)
    }
}
