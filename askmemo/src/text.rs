//! Text normalization and tokenization for mixed Latin/Japanese notes.
//!
//! There is no dictionary. Latin text splits into alphanumeric words; runs of
//! Japanese script are cut into overlapping 2- and 3-character grams so that
//! substring overlap approximates word overlap.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Whitespace runs, including the ideographic space (U+3000).
static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\u{3000}\s]+").unwrap()
});

/// ASCII punctuation and symbols: `!`..`/`, `:`..`@`, `[`..`` ` ``, `{`..`~`
static ASCII_PUNCTUATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[!-/:-@\[-`{-~]").unwrap()
});

/// Full-width and CJK punctuation commonly found in Japanese notes
static CJK_PUNCTUATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[。、！？・「」『』（）()\[\]【】]").unwrap()
});

static LATIN_WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-z0-9]+").unwrap()
});

/// Hiragana, katakana (U+3040..U+30FF) and CJK ideographs (U+4E00..U+9FAF)
static JAPANESE_RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\u{3040}-\u{30FF}\u{4E00}-\u{9FAF}]+").unwrap()
});

/// Chunks up to this many chars are kept whole instead of split into grams.
pub const SHORT_CHUNK_MAX_CHARS: usize = 3;

/// Canonicalize text for comparison: lowercase, single spaces, no punctuation.
///
/// Total and idempotent: `normalize_text(&normalize_text(x)) == normalize_text(x)`.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let collapsed = WHITESPACE_REGEX.replace_all(&lowered, " ");
    let without_ascii = ASCII_PUNCTUATION_REGEX.replace_all(&collapsed, "");
    let without_cjk = CJK_PUNCTUATION_REGEX.replace_all(&without_ascii, "");
    // Stripping "!" out of "a ! b" leaves two spaces behind.
    WHITESPACE_REGEX
        .replace_all(&without_cjk, " ")
        .trim()
        .to_string()
}

/// Derive the deduplicated search tokens of `text`.
///
/// Latin words come first in order of appearance, then Japanese chunks and
/// grams in order of appearance. The order is stable for a given input, which
/// matters because excerpts anchor on the first token found.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = normalize_text(text);
    let mut tokens = TokenSet::default();

    for word in LATIN_WORD_REGEX.find_iter(&normalized) {
        tokens.insert(word.as_str().to_string());
    }
    for chunk in JAPANESE_RUN_REGEX.find_iter(&normalized) {
        push_chunk_grams(chunk.as_str(), &mut tokens);
    }

    tokens.into_vec()
}

/// Add a Japanese chunk either whole (short chunks) or as overlapping grams.
fn push_chunk_grams(chunk: &str, tokens: &mut TokenSet) {
    let chars: Vec<char> = chunk.chars().collect();
    if chars.len() <= SHORT_CHUNK_MAX_CHARS {
        tokens.insert(chunk.to_string());
        return;
    }

    for start in 0..chars.len() - 1 {
        tokens.insert(chars[start..start + 2].iter().collect());
        if start + 3 <= chars.len() {
            tokens.insert(chars[start..start + 3].iter().collect());
        }
    }
}

/// Insertion-ordered set of non-empty tokens.
#[derive(Default)]
struct TokenSet {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl TokenSet {
    fn insert(&mut self, token: String) {
        if token.is_empty() || self.seen.contains(&token) {
            return;
        }
        self.seen.insert(token.clone());
        self.ordered.push(token);
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}
