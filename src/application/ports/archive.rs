//! Transcript archive port interface

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcript::Transcript;

/// Archive (persistence) errors
#[derive(Debug, Clone, Error)]
pub enum ArchiveError {
    /// The transcript id cannot be used verbatim as a file name
    #[error("Transcript id {0:?} is not safe to use as a file name")]
    UnsafeId(String),

    #[error("Failed to create directory {path}: {message}")]
    CreateDir { path: String, message: String },

    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },

    #[error("Failed to serialize transcript {id}: {message}")]
    Serialize { id: String, message: String },
}

/// Paths written for one transcript by the batch flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPair {
    /// `{id}_summary.json`
    pub summary_path: PathBuf,
    /// `{id}_transcript.csv`
    pub transcript_path: PathBuf,
}

/// Paths written for one transcript by the single-fetch flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedPair {
    /// `{id}.json`
    pub json_path: PathBuf,
    /// `{id}.txt`
    pub text_path: PathBuf,
}

/// Port for persisting transcripts to local storage.
///
/// Writes overwrite any existing file at the same path, so re-running a
/// flow refreshes earlier artifacts in place.
#[async_trait]
pub trait TranscriptArchive: Send + Sync {
    /// Write the summary JSON and sentence CSV for one transcript
    async fn save(&self, transcript: &Transcript) -> Result<SavedPair, ArchiveError>;

    /// Write the full JSON and combined plain-text export for one
    /// transcript
    async fn export(&self, transcript: &Transcript) -> Result<ExportedPair, ArchiveError>;
}
