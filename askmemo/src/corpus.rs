//! The corpus: an immutable, ordered snapshot of loaded notes.
//!
//! Queries take the corpus as an explicit argument; nothing on the query path
//! reads shared mutable state.

use crate::interface::{Answer, AskError, Reference};
use crate::models::Note;
use crate::ranking::{score_notes, Match};
use crate::search::create_reference;
use crate::text::tokenize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    notes: Vec<Note>,
}

impl Corpus {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Rank notes against an already tokenized question.
    pub fn rank<'a>(&'a self, tokens: &'a [String]) -> Vec<Match<'a>> {
        score_notes(&self.notes, tokens)
    }

    /// Tokenize `question`, rank the notes and cut an excerpt for each match.
    pub fn search(&self, question: &str) -> Vec<Reference> {
        let tokens = tokenize(question);
        self.search_tokens(&tokens)
    }

    fn search_tokens(&self, tokens: &[String]) -> Vec<Reference> {
        let matches = self.rank(tokens);
        tracing::debug!(
            token_count = tokens.len(),
            note_count = self.notes.len(),
            match_count = matches.len(),
            "ranked notes"
        );
        matches.iter().map(create_reference).collect()
    }
}

impl FromIterator<Note> for Corpus {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Answer `question` from `corpus`.
///
/// The question is trimmed; an empty question is the caller's mistake and is
/// rejected. No matching note is a normal outcome: the answer simply carries
/// no references.
pub fn answer_question(question: &str, corpus: &Corpus) -> Result<Answer, AskError> {
    let question = question.trim();
    if question.is_empty() {
        return Err(AskError::EmptyQuestion);
    }

    let tokens = tokenize(question);
    tracing::debug!(question, tokens = ?tokens, "tokenized question");
    let references = corpus.search_tokens(&tokens);

    Ok(Answer {
        question: question.to_string(),
        tokens,
        references,
    })
}
