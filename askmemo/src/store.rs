//! NoteStore - owns a note source and the current corpus snapshot.
//!
//! Reload Model:
//! A reload builds a complete `Corpus` before swapping it in, so a question
//! sees either the previous snapshot or the new one, never a partial load.
//! A failed reload leaves the previous snapshot in place. Questions are
//! answered against an `Arc<Corpus>` taken from the store, not against the
//! store itself.

use crate::corpus::{answer_question, Corpus};
use crate::interface::{Answer, AskError};
use crate::loader::{load_notes, LoadResult, NoteSource};
use parking_lot::RwLock;
use std::sync::Arc;

pub struct NoteStore {
    source: Box<dyn NoteSource>,
    corpus: RwLock<Arc<Corpus>>,
}

impl NoteStore {
    /// Create a store with an empty corpus; call `reload` to fill it.
    pub fn new(source: impl NoteSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            corpus: RwLock::new(Arc::new(Corpus::default())),
        }
    }

    /// Create a store and load its notes.
    pub async fn open(source: impl NoteSource + 'static) -> Result<Self, AskError> {
        let store = Self::new(source);
        store.reload().await?;
        Ok(store)
    }

    /// Load every note again and swap the new corpus in. Returns the note count.
    pub async fn reload(&self) -> LoadResult<usize> {
        let notes = match load_notes(self.source.as_ref()).await {
            Ok(notes) => notes,
            Err(e) => {
                tracing::warn!(error = %e, "note reload failed, keeping previous notes");
                return Err(e);
            }
        };

        let corpus = Arc::new(Corpus::new(notes));
        let note_count = corpus.len();
        *self.corpus.write() = corpus;
        tracing::info!(note_count, "notes loaded");
        Ok(note_count)
    }

    /// The current corpus snapshot
    pub fn snapshot(&self) -> Arc<Corpus> {
        Arc::clone(&self.corpus.read())
    }

    pub fn ask(&self, question: &str) -> Result<Answer, AskError> {
        answer_question(question, &self.snapshot())
    }
}
