//! Loading notes from a directory on disk and reloading them through the store.

use askmemo::loader::{load_notes, FsNoteSource, LoadError};
use askmemo::{AskError, NoteStore};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_notes(dir: &Path, files: &[(&str, &str)]) {
    let names: Vec<&str> = files.iter().map(|(name, _)| *name).collect();
    fs::write(dir.join("index.json"), serde_json::to_string(&names).unwrap()).unwrap();
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
}

fn sample_notes_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../data/notes")
}

// ─── Loading ────────────────────────────────────────────────────

#[tokio::test]
async fn test_loads_in_index_order_with_front_matter() {
    let dir = TempDir::new().unwrap();
    write_notes(
        dir.path(),
        &[
            ("z.md", "---\ntitle: 最後\ndate: 2024-06-01\ntags: 仕事, , 計画\n---\n本文です"),
            ("a.md", "no front matter"),
        ],
    );

    let notes = load_notes(&FsNoteSource::new(dir.path())).await.unwrap();
    assert_eq!(notes.len(), 2);

    assert_eq!(notes[0].identifier(), "z.md");
    assert_eq!(notes[0].title(), "最後");
    assert_eq!(notes[0].date(), "2024-06-01");
    assert_eq!(notes[0].tags(), ["仕事", "計画"]);
    assert_eq!(notes[0].body(), "本文です");

    assert_eq!(notes[1].title(), "a");
    assert_eq!(notes[1].date(), "a");
    assert!(notes[1].tags().is_empty());
    assert_eq!(notes[1].body(), "no front matter");
}

#[tokio::test]
async fn test_note_with_byte_order_mark_keeps_front_matter() {
    let dir = TempDir::new().unwrap();
    write_notes(
        dir.path(),
        &[("bom.md", "\u{FEFF}---\ntitle: 転職メモ\ntags: 仕事\n---\n本文です")],
    );

    let notes = load_notes(&FsNoteSource::new(dir.path())).await.unwrap();
    assert_eq!(notes[0].title(), "転職メモ");
    assert_eq!(notes[0].tags(), ["仕事"]);
    assert_eq!(notes[0].body(), "本文です");
    assert!(!notes[0].searchable_body().contains("title"));
}

#[tokio::test]
async fn test_custom_index_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("list.json"), r#"["only.md"]"#).unwrap();
    fs::write(dir.path().join("only.md"), "hello").unwrap();

    let source = FsNoteSource::new(dir.path()).with_index_file("list.json");
    let notes = load_notes(&source).await.unwrap();
    assert_eq!(notes.len(), 1);
}

#[tokio::test]
async fn test_missing_index() {
    let dir = TempDir::new().unwrap();
    let err = load_notes(&FsNoteSource::new(dir.path())).await.unwrap_err();
    assert!(matches!(err, LoadError::IndexUnavailable { .. }));
    assert!(err.to_string().starts_with("メモ一覧の取得に失敗しました。"));
}

#[tokio::test]
async fn test_index_not_a_list() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.json"), r#"{"notes": []}"#).unwrap();
    let err = load_notes(&FsNoteSource::new(dir.path())).await.unwrap_err();
    assert!(matches!(err, LoadError::InvalidIndex { .. }));
}

#[tokio::test]
async fn test_missing_note_fails_whole_load() {
    let dir = TempDir::new().unwrap();
    write_notes(dir.path(), &[("present.md", "here")]);
    fs::write(dir.path().join("index.json"), r#"["present.md", "absent.md"]"#).unwrap();

    let err = load_notes(&FsNoteSource::new(dir.path())).await.unwrap_err();
    match err {
        LoadError::NoteUnavailable { ref file, .. } => {
            assert_eq!(file, "absent.md");
            assert!(err.to_string().starts_with("absent.md の取得に失敗しました。"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_empty_index() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.json"), "[]").unwrap();
    let store = NoteStore::open(FsNoteSource::new(dir.path())).await.unwrap();
    assert!(store.snapshot().is_empty());
    assert!(!store.ask("anything").unwrap().has_matches());
}

// ─── Store ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_reload_picks_up_changes() {
    let dir = TempDir::new().unwrap();
    write_notes(dir.path(), &[("a.md", "rust")]);
    let store = NoteStore::open(FsNoteSource::new(dir.path())).await.unwrap();
    assert_eq!(store.snapshot().len(), 1);

    write_notes(dir.path(), &[("a.md", "rust"), ("b.md", "rust rust")]);
    assert_eq!(store.reload().await.unwrap(), 2);

    let answer = store.ask("rust").unwrap();
    assert_eq!(answer.references[0].card.identifier, "b.md");
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_notes() {
    let dir = TempDir::new().unwrap();
    write_notes(dir.path(), &[("a.md", "計画を立てる")]);
    let store = NoteStore::open(FsNoteSource::new(dir.path())).await.unwrap();

    fs::remove_file(dir.path().join("a.md")).unwrap();
    let err = store.reload().await.unwrap_err();
    assert!(matches!(err, LoadError::NoteUnavailable { .. }));

    assert_eq!(store.snapshot().len(), 1);
    assert!(store.ask("計画").unwrap().has_matches());
}

#[tokio::test]
async fn test_open_missing_dir() {
    let dir = TempDir::new().unwrap();
    let result = NoteStore::open(FsNoteSource::new(dir.path().join("nope"))).await;
    assert!(matches!(result, Err(AskError::Load(LoadError::IndexUnavailable { .. }))));
}

// ─── Sample data ────────────────────────────────────────────────

#[tokio::test]
async fn test_sample_notes_load() {
    let store = NoteStore::open(FsNoteSource::new(sample_notes_dir())).await.unwrap();
    let corpus = store.snapshot();
    assert_eq!(corpus.len(), 6);
    assert_eq!(corpus.notes()[5].title(), "reading-log");
}

#[tokio::test]
async fn test_sample_notes_answer_career_question() {
    let store = NoteStore::open(FsNoteSource::new(sample_notes_dir())).await.unwrap();
    let answer = store.ask("転職すべきか").unwrap();

    let ids: Vec<&str> = answer.references.iter().map(|r| r.card.identifier.as_str()).collect();
    assert_eq!(ids.first(), Some(&"2024-01-08-career.md"));
    assert!(ids.contains(&"2024-04-20-weekly-review.md"));
    assert_eq!(answer.references[0].card.tags, vec!["仕事", "キャリア"]);
}
