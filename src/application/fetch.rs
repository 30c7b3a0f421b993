//! Fetch-and-export use case (single-transcript flow)

use thiserror::Error;

use crate::domain::transcript::{Summary, TranscriptId};

use super::ports::{ArchiveError, ExportedPair, SourceError, TranscriptArchive, TranscriptSource};

/// Errors from the single-transcript flow
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("Fetch failed: {0}")]
    Source(#[from] SourceError),

    #[error("Export failed: {0}")]
    Archive(#[from] ArchiveError),
}

/// Input parameters for the single-transcript flow
#[derive(Debug, Clone)]
pub struct FetchInput {
    pub id: TranscriptId,
}

/// Output from the single-transcript flow, projected for display
#[derive(Debug, Clone)]
pub struct FetchOutput {
    pub title: String,
    pub date: Option<String>,
    pub participants: Vec<String>,
    pub summary: Option<Summary>,
    pub sentence_count: usize,
    pub files: ExportedPair,
}

/// Single-transcript pipeline: fetch one transcript by id, export it as
/// a full-JSON/plain-text pair.
pub struct FetchAndExportUseCase<S, A>
where
    S: TranscriptSource,
    A: TranscriptArchive,
{
    source: S,
    archive: A,
}

impl<S, A> FetchAndExportUseCase<S, A>
where
    S: TranscriptSource,
    A: TranscriptArchive,
{
    /// Create a new use case instance
    pub fn new(source: S, archive: A) -> Self {
        Self { source, archive }
    }

    /// Execute the single-transcript workflow.
    /// A fetch failure surfaces before anything touches disk.
    pub async fn execute(&self, input: FetchInput) -> Result<FetchOutput, FetchError> {
        let transcript = self.source.fetch(&input.id).await?;
        let files = self.archive.export(&transcript).await?;

        Ok(FetchOutput {
            title: transcript.title.clone(),
            date: transcript.date_display(),
            participants: transcript
                .participants
                .iter()
                .map(|p| p.name.clone())
                .collect(),
            summary: transcript.summary.clone(),
            sentence_count: transcript.sentences.len(),
            files,
        })
    }
}
