//! Generate a notes directory with many long notes for performance testing.
//!
//! Writes one markdown file per note plus an `index.json` listing them, in the
//! same layout the loader reads.
//!
//! Usage:
//!     cargo run --release --bin generate-perf-notes [output_dir]
//!
//! Default output: ../data/perf-notes

use anyhow::{Context, Result};
use chrono::{Duration, Local};
use rand::seq::SliceRandom;
use rand::Rng;
use std::env;
use std::path::PathBuf;

/// Number of notes to generate
const NUM_NOTES: usize = 400;

/// Minimum body size in chars
const MIN_BODY_CHARS: usize = 1_000;

/// Maximum body size in chars
const MAX_BODY_CHARS: usize = 20_000;

/// Number of extra-long notes (10k+ chars)
const LONG_NOTE_COUNT: usize = 40;

/// Dates are spread over this many days before today
const DATE_SPREAD_DAYS: i64 = 730;

/// Japanese sentences for filler text
const JAPANESE_SENTENCES: &[&str] = &[
    "今日は朝から集中できた。",
    "転職について考える時間が増えている。",
    "新しい計画を立てたが、まだ不安が残る。",
    "週末に家族と話し合って方向性が見えてきた。",
    "小さく試してみることで迷いが減った気がする。",
    "副業を始めるかどうか、まだ決めきれていない。",
    "読書の習慣を取り戻したい。",
    "睡眠時間を確保することが最優先だと気づいた。",
    "上司との面談で評価について率直に聞いてみた。",
    "引っ越し先の候補を三つに絞った。",
];

/// English words for filler text
const ENGLISH_WORDS: &[&str] = &[
    "plan", "review", "career", "budget", "habit", "focus", "project", "weekly",
    "retro", "goal", "health", "reading", "side", "job", "move", "decision",
    "risk", "energy", "time", "money", "family", "learning", "rust", "notes",
];

/// Tags to attach
const TAGS: &[&str] = &[
    "仕事", "キャリア", "生活", "健康", "お金", "学習", "家族", "振り返り", "plan", "retro",
];

fn generate_body(target_chars: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut body = String::new();
    let mut current_chars = 0;

    while current_chars < target_chars {
        let paragraph = if rng.gen_bool(0.7) {
            let sentence_count = rng.gen_range(3..=8);
            (0..sentence_count)
                .filter_map(|_| JAPANESE_SENTENCES.choose(&mut rng).copied())
                .collect::<Vec<_>>()
                .concat()
        } else {
            let word_count = rng.gen_range(20..=80);
            let mut words: Vec<&str> = (0..word_count)
                .filter_map(|_| ENGLISH_WORDS.choose(&mut rng).copied())
                .collect();
            words.push("done.");
            words.join(" ")
        };

        current_chars += paragraph.chars().count() + 2;
        body.push_str(&paragraph);
        body.push_str("\n\n");
    }

    body.chars().take(target_chars).collect()
}

fn main() -> Result<()> {
    let output_dir = match env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("data")
            .join("perf-notes"),
    };

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    println!("Generating performance test notes...");
    println!("Output: {}", output_dir.display());

    let mut rng = rand::thread_rng();
    let today = Local::now().date_naive();
    let mut files = Vec::with_capacity(NUM_NOTES);
    let mut total_chars = 0usize;
    let mut max_chars = 0usize;

    for i in 0..NUM_NOTES {
        let body_chars = if i < LONG_NOTE_COUNT {
            rng.gen_range(10_000..=MAX_BODY_CHARS)
        } else {
            rng.gen_range(MIN_BODY_CHARS..10_000)
        };
        let body = generate_body(body_chars);
        total_chars += body_chars;
        max_chars = max_chars.max(body_chars);

        let date = today - Duration::days(rng.gen_range(0..DATE_SPREAD_DAYS));
        let tag_count = rng.gen_range(0..=3);
        let tags: Vec<&str> = TAGS.choose_multiple(&mut rng, tag_count).copied().collect();

        let file = format!("perf-{i:04}.md");
        let content = format!(
            "---\ntitle: パフォーマンス用メモ {i}\ndate: {}\ntags: {}\n---\n{body}",
            date.format("%Y-%m-%d"),
            tags.join(", "),
        );
        std::fs::write(output_dir.join(&file), content)
            .with_context(|| format!("failed to write {file}"))?;
        files.push(file);

        if (i + 1) % 100 == 0 {
            println!("  Generated {}/{} notes...", i + 1, NUM_NOTES);
        }
    }

    let index = serde_json::to_string_pretty(&files)?;
    std::fs::write(output_dir.join(askmemo::config::DEFAULT_INDEX_FILE), index)
        .context("failed to write index")?;

    println!();
    println!("Notes created: {}", output_dir.display());
    println!("  Notes: {}", NUM_NOTES);
    println!("  Total body size: {} chars", total_chars);
    println!("  Average note size: {} chars", total_chars / NUM_NOTES);
    println!("  Largest note: {} chars", max_chars);
    Ok(())
}
