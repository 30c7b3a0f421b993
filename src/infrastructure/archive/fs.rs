//! Filesystem archive adapter

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use tokio::fs;

use crate::application::ports::{ArchiveError, ExportedPair, SavedPair, TranscriptArchive};
use crate::domain::export::{sentences_to_csv, transcript_to_text};
use crate::domain::transcript::{Transcript, TranscriptId};

/// Subdirectory chain of the batch archive under the output base
const ARCHIVE_SUBDIRS: [&str; 2] = ["RepRally", "Transcripts"];

/// Writes transcript artifacts to local disk: batch pairs under
/// `<base>/RepRally/Transcripts/`, single-fetch exports under the
/// export directory. Existing files are overwritten in place.
pub struct FsTranscriptArchive {
    base_dir: PathBuf,
    export_dir: PathBuf,
}

impl FsTranscriptArchive {
    pub fn new(base_dir: impl Into<PathBuf>, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            export_dir: export_dir.into(),
        }
    }

    /// Target directory of the batch flow
    pub fn archive_dir(&self) -> PathBuf {
        ARCHIVE_SUBDIRS
            .iter()
            .fold(self.base_dir.clone(), |dir, part| dir.join(part))
    }

    /// Target directory of the single-fetch flow
    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Ids become file names verbatim, so anything that could escape
    /// the target directory is refused before any write happens.
    fn check_id(transcript: &Transcript) -> Result<(), ArchiveError> {
        if !transcript.id.is_filesystem_safe() {
            return Err(ArchiveError::UnsafeId(transcript.id.as_str().to_string()));
        }
        Ok(())
    }

    async fn ensure_dir(dir: &Path) -> Result<(), ArchiveError> {
        fs::create_dir_all(dir)
            .await
            .map_err(|e| ArchiveError::CreateDir {
                path: dir.display().to_string(),
                message: e.to_string(),
            })
    }

    async fn write_file(path: &Path, contents: &str) -> Result<(), ArchiveError> {
        fs::write(path, contents)
            .await
            .map_err(|e| ArchiveError::Write {
                path: path.display().to_string(),
                message: e.to_string(),
            })
    }

    fn to_pretty_json<T: Serialize>(id: &TranscriptId, value: &T) -> Result<String, ArchiveError> {
        serde_json::to_string_pretty(value).map_err(|e| ArchiveError::Serialize {
            id: id.as_str().to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl TranscriptArchive for FsTranscriptArchive {
    async fn save(&self, transcript: &Transcript) -> Result<SavedPair, ArchiveError> {
        Self::check_id(transcript)?;

        let dir = self.archive_dir();
        Self::ensure_dir(&dir).await?;

        let summary_path = dir.join(format!("{}_summary.json", transcript.id));
        let summary_json = Self::to_pretty_json(&transcript.id, &transcript.summary)?;
        Self::write_file(&summary_path, &summary_json).await?;

        let transcript_path = dir.join(format!("{}_transcript.csv", transcript.id));
        Self::write_file(&transcript_path, &sentences_to_csv(&transcript.sentences)).await?;

        Ok(SavedPair {
            summary_path,
            transcript_path,
        })
    }

    async fn export(&self, transcript: &Transcript) -> Result<ExportedPair, ArchiveError> {
        Self::check_id(transcript)?;

        Self::ensure_dir(&self.export_dir).await?;

        let json_path = self.export_dir.join(format!("{}.json", transcript.id));
        let full_json = Self::to_pretty_json(&transcript.id, transcript)?;
        Self::write_file(&json_path, &full_json).await?;

        let text_path = self.export_dir.join(format!("{}.txt", transcript.id));
        Self::write_file(&text_path, &transcript_to_text(transcript)).await?;

        Ok(ExportedPair {
            json_path,
            text_path,
        })
    }
}
