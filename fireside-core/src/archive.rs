//! Story archive persistence.
//!
//! Every story ever saved lives in one pretty-printed JSON array. Appending
//! is a read-modify-write of the whole file with no locking, so concurrent
//! writers would lose each other's updates. One process at a time.

use crate::story::StoryRecord;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// File name of the archive inside its directory.
const ARCHIVE_FILE: &str = "stories.json";

/// Errors from archive operations.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Handle to the story archive in a directory.
#[derive(Debug, Clone)]
pub struct Archive {
    path: PathBuf,
}

impl Archive {
    /// Create a handle for the archive in `dir`. Nothing is touched on disk
    /// until the first append.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(ARCHIVE_FILE),
        }
    }

    /// Path of the archive file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every archived story, oldest first.
    ///
    /// A missing file is an empty archive. A file that exists but does not
    /// parse is an error for the caller to report.
    pub async fn load(&self) -> Result<Vec<StoryRecord>, ArchiveError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let records: Vec<StoryRecord> = serde_json::from_str(&content)?;
        Ok(records)
    }

    /// Append one story to the archive, creating the directory if needed.
    pub async fn append(&self, record: &StoryRecord) -> Result<(), ArchiveError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut records = self.load().await?;
        records.push(record.clone());

        let content = serde_json::to_string_pretty(&records)?;
        fs::write(&self.path, content).await?;
        Ok(())
    }
}
