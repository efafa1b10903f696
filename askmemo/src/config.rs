//! Runtime configuration: defaults, overridden by environment variables,
//! overridden in turn by command-line flags in the binaries.

use std::path::PathBuf;

pub const DEFAULT_NOTES_DIR: &str = "data/notes";
pub const DEFAULT_INDEX_FILE: &str = "index.json";
pub const DEFAULT_LOG_FILTER: &str = "askmemo=info";

pub const ENV_NOTES_DIR: &str = "ASKMEMO_NOTES_DIR";
pub const ENV_INDEX_FILE: &str = "ASKMEMO_INDEX_FILE";
pub const ENV_LOG_FILTER: &str = "ASKMEMO_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskConfig {
    /// Directory holding the index file and the note files
    pub notes_dir: PathBuf,
    /// Name of the JSON index inside `notes_dir`
    pub index_file: String,
    /// `tracing-subscriber` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for AskConfig {
    fn default() -> Self {
        Self {
            notes_dir: PathBuf::from(DEFAULT_NOTES_DIR),
            index_file: DEFAULT_INDEX_FILE.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AskConfig {
    /// Load configuration from environment variables with fallback to defaults.
    /// Empty variables count as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|val| !val.trim().is_empty());

        if let Some(val) = non_empty(ENV_NOTES_DIR) {
            config.notes_dir = PathBuf::from(val);
        }
        if let Some(val) = non_empty(ENV_INDEX_FILE) {
            config.index_file = val;
        }
        if let Some(val) = non_empty(ENV_LOG_FILTER) {
            config.log_filter = val;
        }

        config
    }
}
