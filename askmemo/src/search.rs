//! Excerpt extraction around the first question token found in a note.
//!
//! The hit offset is measured in the normalized body but applied to the
//! original body. Normalization drops punctuation and collapses whitespace, so
//! for punctuation-heavy text the window can drift away from the actual hit.
//! Offsets are counted in chars, never bytes.

use crate::interface::Reference;
use crate::models::Note;
use crate::ranking::Match;

/// Chars of body shown when no token is found
pub const EXCERPT_PREVIEW_CHARS: usize = 200;
/// Chars kept before the hit offset
pub const EXCERPT_CONTEXT_BEFORE: usize = 80;
/// Chars kept from the hit offset onwards
pub const EXCERPT_CONTEXT_AFTER: usize = 120;

/// Marks a window that does not reach the start or the end of the body
pub const ELLIPSIS: char = '\u{2026}';

/// Char offset of the first token (in `tokens` order) found in `normalized`.
pub fn find_first_hit(normalized: &str, tokens: &[String]) -> Option<usize> {
    tokens
        .iter()
        .filter(|token| !token.is_empty())
        .find_map(|token| normalized.find(token.as_str()))
        .map(|byte_pos| normalized[..byte_pos].chars().count())
}

/// Bounded excerpt of `note.body()` around the first token hit.
///
/// Without a hit this is the first `EXCERPT_PREVIEW_CHARS` chars (plus an
/// ellipsis when the body is longer). With a hit it is the window
/// `[hit - EXCERPT_CONTEXT_BEFORE, hit + EXCERPT_CONTEXT_AFTER)` clamped to the
/// body, with an ellipsis on each side that was cut.
pub fn create_excerpt(note: &Note, tokens: &[String]) -> String {
    excerpt_around(note.body(), note.searchable_body(), tokens)
}

fn excerpt_around(body: &str, normalized: &str, tokens: &[String]) -> String {
    let body_chars: Vec<char> = body.chars().collect();
    let body_len = body_chars.len();

    let Some(hit) = find_first_hit(normalized, tokens) else {
        let mut preview: String = body_chars.iter().take(EXCERPT_PREVIEW_CHARS).collect();
        if body_len > EXCERPT_PREVIEW_CHARS {
            preview.push(ELLIPSIS);
        }
        return preview;
    };

    let end = (hit + EXCERPT_CONTEXT_AFTER).min(body_len);
    // The normalized offset may point past the end of a shorter original body.
    let start = hit.saturating_sub(EXCERPT_CONTEXT_BEFORE).min(end);

    let mut excerpt = String::with_capacity((end - start + 2) * 4);
    if start > 0 {
        excerpt.push(ELLIPSIS);
    }
    excerpt.extend(&body_chars[start..end]);
    if end < body_len {
        excerpt.push(ELLIPSIS);
    }
    excerpt
}

/// Create a Reference (card + score + excerpt) from a ranked match
pub(crate) fn create_reference(m: &Match<'_>) -> Reference {
    Reference {
        card: m.note.to_card(),
        score: m.score,
        excerpt: create_excerpt(m.note, m.tokens),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenize;

    fn note(body: &str) -> Note {
        Note::new("n.md", "n", "2024-01-01", vec![], body)
    }

    fn excerpt(body: &str, question: &str) -> String {
        create_excerpt(&note(body), &tokenize(question))
    }

    #[test]
    fn test_find_first_hit_uses_token_order() {
        let tokens = vec!["world".to_string(), "hello".to_string()];
        assert_eq!(find_first_hit("hello world", &tokens), Some(6));
        let tokens = vec!["missing".to_string(), "hello".to_string()];
        assert_eq!(find_first_hit("hello world", &tokens), Some(0));
    }

    #[test]
    fn test_find_first_hit_counts_chars_not_bytes() {
        let tokens = vec!["計画".to_string()];
        assert_eq!(find_first_hit("今日は計画", &tokens), Some(3));
    }

    #[test]
    fn test_find_first_hit_none() {
        assert_eq!(find_first_hit("hello", &["bye".to_string()]), None);
        assert_eq!(find_first_hit("hello", &[]), None);
    }

    #[test]
    fn test_no_hit_short_body_returned_whole() {
        assert_eq!(excerpt("Short body.", "unrelated"), "Short body.");
    }

    #[test]
    fn test_no_hit_long_body_truncated() {
        let body = "x".repeat(250);
        let result = excerpt(&body, "unrelated");
        assert_eq!(result.chars().count(), EXCERPT_PREVIEW_CHARS + 1);
        assert!(result.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_no_hit_exactly_preview_length() {
        let body = "y".repeat(EXCERPT_PREVIEW_CHARS);
        assert_eq!(excerpt(&body, "unrelated"), body);
    }

    #[test]
    fn test_hit_near_start_has_no_leading_ellipsis() {
        let body = format!("target {}", "z".repeat(300));
        let result = excerpt(&body, "target");
        assert!(result.starts_with("target"));
        assert!(result.ends_with(ELLIPSIS));
        assert_eq!(result.chars().count(), EXCERPT_CONTEXT_AFTER + 1);
    }

    #[test]
    fn test_hit_in_middle_is_windowed() {
        let body = format!("{} target {}", "a".repeat(150), "b".repeat(300));
        let result = excerpt(&body, "target");
        assert!(result.starts_with(ELLIPSIS));
        assert!(result.ends_with(ELLIPSIS));
        assert!(result.contains("target"));
        assert_eq!(
            result.chars().count(),
            EXCERPT_CONTEXT_BEFORE + EXCERPT_CONTEXT_AFTER + 2
        );
    }

    #[test]
    fn test_hit_near_end_has_no_trailing_ellipsis() {
        let body = format!("{} target", "a".repeat(150));
        let result = excerpt(&body, "target");
        assert!(result.starts_with(ELLIPSIS));
        assert!(result.ends_with("target"));
    }

    #[test]
    fn test_japanese_hit() {
        let body = "転職を考えている。今は留まるべきか。";
        let result = excerpt(body, "転職すべきか");
        assert_eq!(result, body);
    }

    #[test]
    fn test_offset_drift_from_stripped_punctuation() {
        // 200 punctuation chars vanish from the normalized body, so the hit
        // offset (0) lands at the start of the original body, not on "needle".
        let body = format!("{}needle{}", "!".repeat(200), "-".repeat(300));
        let result = excerpt(&body, "needle");
        assert!(!result.starts_with(ELLIPSIS));
        assert!(!result.contains("needle"));
        assert_eq!(result.chars().count(), EXCERPT_CONTEXT_AFTER + 1);
    }

    #[test]
    fn test_hit_offset_past_original_end() {
        // Lowercasing "İ" yields two chars, so the normalized body is longer
        // and the hit (char 201) lies beyond the 105-char original.
        let body = format!("{} tail", "İ".repeat(100));
        assert_eq!(find_first_hit(note(&body).searchable_body(), &tokenize("tail")), Some(201));
        assert_eq!(excerpt(&body, "tail"), ELLIPSIS.to_string());
    }

    #[test]
    fn test_create_reference() {
        let n = Note::new("a.md", "A", "2024-02-02", vec!["tag".into()], "hello world");
        let tokens = tokenize("world");
        let m = Match { note: &n, score: 1, tokens: &tokens };
        let reference = create_reference(&m);
        assert_eq!(reference.card.title, "A");
        assert_eq!(reference.score, 1);
        assert_eq!(reference.excerpt, "hello world");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn excerpt_length_is_bounded(body in ".{0,600}", question in "[a-zあ-ん]{1,8}") {
                let result = excerpt(&body, &question);
                let limit = EXCERPT_PREVIEW_CHARS.max(EXCERPT_CONTEXT_BEFORE + EXCERPT_CONTEXT_AFTER) + 2;
                prop_assert!(result.chars().count() <= limit);
            }
        }
    }
}
