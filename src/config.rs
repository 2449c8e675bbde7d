use std::path::PathBuf;

/// Default directory for uploaded and processed files, relative to the
/// working directory.
pub const DEFAULT_STORAGE_DIR: &str = "UploadedFiles";

pub const DEFAULT_LOG_FILE: &str = "logs/score_ranker.log";

/// Runtime settings read from the environment (after `.env` is loaded).
///
/// | Variable        | Default                  |
/// |-----------------|--------------------------|
/// | `STORAGE_PATH`  | `UploadedFiles`          |
/// | `LOG_FILE_PATH` | `logs/score_ranker.log`  |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub storage_path: PathBuf,
    pub log_file_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        Config {
            storage_path: read("STORAGE_PATH", DEFAULT_STORAGE_DIR),
            log_file_path: read("LOG_FILE_PATH", DEFAULT_LOG_FILE),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
