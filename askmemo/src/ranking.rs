//! Literal occurrence scoring.
//!
//! A note's score is the sum, over every question token, of how often the token
//! occurs in the note's normalized body. Zero-score notes are dropped, the rest
//! are ordered best first with ties kept in corpus order, and only the top
//! `MAX_MATCHES` survive.

use crate::models::Note;

/// Maximum number of matches returned for a question.
pub const MAX_MATCHES: usize = 5;

/// A note paired with its score and the tokens that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub note: &'a Note,
    pub score: usize,
    /// Question tokens, in tokenizer order (excerpts anchor on the first hit)
    pub tokens: &'a [String],
}

/// Count non-overlapping occurrences of `token` in `text`, left to right.
/// After each hit the search resumes past the hit, so `"aa"` occurs once in `"aaa"`.
pub fn count_occurrences(text: &str, token: &str) -> usize {
    if token.is_empty() {
        return 0;
    }
    text.matches(token).count()
}

/// Score of one note against a token set.
pub fn score_note(note: &Note, tokens: &[String]) -> usize {
    let body = note.searchable_body();
    tokens
        .iter()
        .map(|token| count_occurrences(body, token))
        .sum()
}

/// Rank `notes` against `tokens`: drop zero scores, sort best first (stable),
/// keep the top `MAX_MATCHES`.
pub fn score_notes<'a>(notes: &'a [Note], tokens: &'a [String]) -> Vec<Match<'a>> {
    let mut matches: Vec<Match<'a>> = notes
        .iter()
        .filter_map(|note| {
            let score = score_note(note, tokens);
            (score > 0).then_some(Match { note, score, tokens })
        })
        .collect();

    // sort_by is stable: equal scores stay in corpus order.
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(MAX_MATCHES);
    matches
}
