//! Artifact persistence
//!
//! Computes the deterministic `{date}-{slug}.pdf` name for an entry and
//! writes the rendered bytes directly into the output directory. Names are a
//! pure function of (publication date, title): two entries agreeing on both
//! after truncation collide, and the later write silently overwrites the
//! earlier one.

use crate::archive::slug::slugify;
use crate::archive::ARTIFACT_EXTENSION;
use crate::feed::Entry;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while persisting an artifact
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to write artifact '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Persists rendered artifacts under deterministic names
pub struct ArchiveWriter {
    output_dir: PathBuf,
}

impl ArchiveWriter {
    /// Creates a writer targeting `output_dir`
    ///
    /// The directory must already exist; it is validated at startup and never
    /// created here.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// The directory artifacts are written into
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Deterministic artifact file name for an entry
    pub fn artifact_name(entry: &Entry) -> String {
        format!(
            "{}-{}.{}",
            entry.published_at.format("%Y-%m-%d"),
            slugify(&entry.title),
            ARTIFACT_EXTENSION
        )
    }

    /// Writes the rendered bytes for an entry, overwriting any existing file
    ///
    /// # Returns
    ///
    /// * `Ok(PathBuf)` - Path of the written artifact
    /// * `Err(WriteError)` - Any filesystem failure, with path context
    pub fn write(&self, entry: &Entry, bytes: &[u8]) -> Result<PathBuf, WriteError> {
        let path = self.output_dir.join(Self::artifact_name(entry));
        std::fs::write(&path, bytes).map_err(|source| WriteError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
