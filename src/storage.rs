//! Directory-backed storage for uploaded score files and their processed
//! counterparts.
//!
//! An upload named `scores.csv` is kept as-is and its ranked output is
//! written next to it as `processed_scores.csv`.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Component, Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::table;

pub const PROCESSED_PREFIX: &str = "processed_";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("no file content was provided")]
    EmptyUpload,
    #[error("invalid file name {0:?}")]
    InvalidFileName(String),
    #[error("file {0:?} not found")]
    NotFound(String),
}

/// Result of a successful upload, printed as JSON by the CLI.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub file_name: String,
    pub records: usize,
    pub processed_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Opens the storage directory, creating it if it does not exist.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("creating storage directory {}", root.display()))?;
        debug!(root = %root.display(), "Storage ready");
        Ok(Storage { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Stores `bytes` under `file_name`, ranks its records and stores the
    /// result as `processed_<file_name>`.
    ///
    /// A file that fails to parse is kept, and any processed file left from
    /// an earlier upload of the same name is removed.
    #[tracing::instrument(skip(self, bytes), fields(bytes = bytes.len()))]
    pub fn upload(&self, file_name: &str, bytes: &[u8]) -> Result<Receipt> {
        if bytes.is_empty() {
            return Err(StorageError::EmptyUpload.into());
        }
        let upload_path = self.path_for(file_name)?;
        write_atomic(&upload_path, bytes)?;

        let processed_name = format!("{PROCESSED_PREFIX}{file_name}");
        let processed_path = self.path_for(&processed_name)?;

        let mut out = Vec::new();
        let records = match table::process(bytes, &mut out) {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "Upload could not be processed");
                remove_if_exists(&processed_path)?;
                return Err(e.into());
            }
        };
        write_atomic(&processed_path, &out)?;

        info!(processed = %processed_name, records, "Upload processed");
        Ok(Receipt {
            file_name: processed_name,
            records,
            processed_at: Utc::now(),
        })
    }

    /// Reads a stored file.
    #[tracing::instrument(skip(self))]
    pub fn download(&self, file_name: &str) -> Result<Vec<u8>> {
        let path = self.path_for(file_name)?;
        if !path.is_file() {
            return Err(StorageError::NotFound(file_name.to_string()).into());
        }
        let bytes = fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
        debug!(bytes = bytes.len(), "File read");
        Ok(bytes)
    }

    /// Resolves `file_name` inside the storage root, rejecting anything that
    /// is not a single plain path component.
    fn path_for(&self, file_name: &str) -> Result<PathBuf> {
        let invalid = || StorageError::InvalidFileName(file_name.to_string());
        if file_name.trim().is_empty() {
            return Err(invalid().into());
        }

        let mut components = Path::new(file_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if name == file_name => {
                Ok(self.root.join(name))
            }
            _ => Err(invalid().into()),
        }
    }
}

/// Writes to a temp file in the same directory and renames it into place.
/// The temp file is removed if anything fails before the rename.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temp file in {}", dir.display()))?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("replacing {}", path.display()))?;
    Ok(())
}

fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "Removed stale processed file");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("removing {}", path.display())),
    }
}
