//! askmemo public interface
//!
//! Result types handed to renderers (and serialized for `--json`), plus the
//! crate-level error type.

use crate::loader::LoadError;
use serde::Serialize;
use thiserror::Error;

/// Display metadata of a referenced note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteCard {
    pub identifier: String,
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,
}

/// A ranked note with the excerpt shown for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub card: NoteCard,
    /// Sum of occurrence counts of every question token; always > 0
    pub score: usize,
    /// Window of the original body around the first token hit
    pub excerpt: String,
}

/// Everything needed to render an answer.
///
/// An empty `references` list is the "no match" outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    /// The question, trimmed
    pub question: String,
    pub tokens: Vec<String>,
    /// At most `ranking::MAX_MATCHES`, best first
    pub references: Vec<Reference>,
}

impl Answer {
    pub fn has_matches(&self) -> bool {
        !self.references.is_empty()
    }
}

/// Error type for askmemo operations
#[derive(Debug, Error)]
pub enum AskError {
    #[error("Question is empty")]
    EmptyQuestion,
    #[error(transparent)]
    Load(#[from] LoadError),
}
