//! Note loading
//!
//! A notes directory holds an `index.json` (a JSON array of file names) and
//! one markdown file per note. Every file is fetched concurrently; the load
//! either produces every note in index order or fails as a whole.

use crate::config::AskConfig;
use crate::models::Note;
use async_trait::async_trait;
use futures::future::try_join_all;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

const FRONT_MATTER_FENCE: &str = "---";
const BYTE_ORDER_MARK: char = '\u{FEFF}';

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("メモ一覧の取得に失敗しました。({}: {source})", .path.display())]
    IndexUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("メモ一覧の形式が正しくありません。({}: {source})", .path.display())]
    InvalidIndex {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{file} の取得に失敗しました。({source})")]
    NoteUnavailable {
        file: String,
        source: std::io::Error,
    },
    #[error("{file} の取得に失敗しました。")]
    UnknownNote { file: String },
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Where notes come from. Implementations only fetch raw text; parsing into
/// `Note`s happens in `load_notes`.
#[async_trait]
pub trait NoteSource: Send + Sync {
    /// File names of every note, in index order
    async fn list_files(&self) -> LoadResult<Vec<String>>;

    /// Raw content (front matter + body) of one note file
    async fn fetch(&self, file: &str) -> LoadResult<String>;
}

/// Notes stored as files under a directory next to an index file.
#[derive(Debug, Clone)]
pub struct FsNoteSource {
    root: PathBuf,
    index_file: String,
}

impl FsNoteSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            index_file: crate::config::DEFAULT_INDEX_FILE.to_string(),
        }
    }

    pub fn from_config(config: &AskConfig) -> Self {
        Self::new(&config.notes_dir).with_index_file(&config.index_file)
    }

    pub fn with_index_file(mut self, index_file: impl Into<String>) -> Self {
        self.index_file = index_file.into();
        self
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

#[async_trait]
impl NoteSource for FsNoteSource {
    async fn list_files(&self) -> LoadResult<Vec<String>> {
        let path = self.root.join(&self.index_file);
        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| LoadError::IndexUnavailable { path: path.clone(), source })?;
        serde_json::from_str(&raw).map_err(|source| LoadError::InvalidIndex { path, source })
    }

    async fn fetch(&self, file: &str) -> LoadResult<String> {
        tokio::fs::read_to_string(self.root.join(file))
            .await
            .map_err(|source| LoadError::NoteUnavailable { file: file.to_string(), source })
    }
}

/// Notes held in memory as `(file name, raw content)` pairs, in index order.
#[derive(Debug, Clone, Default)]
pub struct MemoryNoteSource {
    files: Vec<(String, String)>,
}

impl MemoryNoteSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.push((file.into(), content.into()));
        self
    }
}

#[async_trait]
impl NoteSource for MemoryNoteSource {
    async fn list_files(&self) -> LoadResult<Vec<String>> {
        Ok(self.files.iter().map(|(file, _)| file.clone()).collect())
    }

    async fn fetch(&self, file: &str) -> LoadResult<String> {
        self.files
            .iter()
            .find(|(name, _)| name == file)
            .map(|(_, content)| content.clone())
            .ok_or_else(|| LoadError::UnknownNote { file: file.to_string() })
    }
}

/// Fetch and parse every note listed by `source`, preserving index order.
pub async fn load_notes(source: &dyn NoteSource) -> LoadResult<Vec<Note>> {
    let files = source.list_files().await?;
    tracing::debug!(file_count = files.len(), "fetching notes");

    try_join_all(files.iter().map(|file| async move {
        let content = source.fetch(file).await?;
        Ok::<_, LoadError>(Note::from_markdown(file, &content))
    }))
    .await
}

/// `key: value` metadata from a note's front matter block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: HashMap<String, String>,
}

impl FrontMatter {
    /// Value for `key`, if present and non-empty
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Split `content` into front matter and body.
///
/// The block runs from a leading `---` to the next `---`. Each line is split
/// at its first `:`; lines without one, or with nothing before it, are
/// skipped. Without a complete block the whole content is the body.
/// A leading byte order mark is dropped first.
pub fn split_front_matter(content: &str) -> (FrontMatter, &str) {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    let mut front_matter = FrontMatter::default();
    if !content.starts_with(FRONT_MATTER_FENCE) {
        return (front_matter, content);
    }
    let fence_len = FRONT_MATTER_FENCE.len();
    let Some(end) = content[fence_len..]
        .find(FRONT_MATTER_FENCE)
        .map(|pos| pos + fence_len)
    else {
        return (front_matter, content);
    };

    for line in content[fence_len..end].trim().lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        front_matter
            .fields
            .insert(key.trim().to_string(), value.trim().to_string());
    }

    let body = content[end + fence_len..].trim();
    (front_matter, body)
}
