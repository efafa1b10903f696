//! askmemo - ask your own notes a question
//!
//! Finds notes whose text overlaps with a free-text question and renders a
//! templated answer pointing back to the best matches. Matching is literal:
//! Latin words plus overlapping 2/3-character grams of Japanese text, scored by
//! occurrence counts against an immutable in-memory corpus snapshot.

pub mod config;
pub mod corpus;
pub mod interface;
pub mod loader;
pub mod models;
pub mod ranking;
pub mod render;
pub mod search;
mod store;
pub mod text;

pub use corpus::{answer_question, Corpus};
pub use interface::*;
pub use store::NoteStore;
