//! Core data model: a note loaded from the notes directory.

use crate::interface::NoteCard;
use crate::loader::split_front_matter;
use crate::text::normalize_text;

/// A loaded note. Immutable once built, so `searchable_body` can never drift
/// from `normalize_text(body)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    identifier: String,
    title: String,
    date: String,
    tags: Vec<String>,
    body: String,
    searchable_body: String,
}

impl Note {
    pub fn new(
        identifier: impl Into<String>,
        title: impl Into<String>,
        date: impl Into<String>,
        tags: Vec<String>,
        body: impl Into<String>,
    ) -> Self {
        let body = body.into();
        let searchable_body = normalize_text(&body);
        Self {
            identifier: identifier.into(),
            title: title.into(),
            date: date.into(),
            tags,
            body,
            searchable_body,
        }
    }

    /// Build a note from a markdown file with optional front matter.
    ///
    /// `title` and `date` fall back to the file name without its `.md`
    /// extension; `tags` is a comma-separated list.
    pub fn from_markdown(file: &str, content: &str) -> Self {
        let (front_matter, body) = split_front_matter(content);
        let stem = file.strip_suffix(".md").unwrap_or(file);

        let title = front_matter.get("title").unwrap_or(stem);
        let date = front_matter.get("date").unwrap_or(stem);
        let tags = front_matter
            .get("tags")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self::new(file, title, date, tags, body)
    }

    /// Stable handle, usually the source file name
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The original text, untouched (used for excerpts)
    pub fn body(&self) -> &str {
        &self.body
    }

    /// `normalize_text(body)`, computed once at construction
    pub fn searchable_body(&self) -> &str {
        &self.searchable_body
    }

    /// Display metadata for a reference card
    pub fn to_card(&self) -> NoteCard {
        NoteCard {
            identifier: self.identifier.clone(),
            title: self.title.clone(),
            date: self.date.clone(),
            tags: self.tags.clone(),
        }
    }
}
