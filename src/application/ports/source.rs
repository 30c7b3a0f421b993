//! Transcript source port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcript::{Lookback, Transcript, TranscriptId};

/// Failures talking to the remote query API, kept distinct by class so
/// callers can tell a dead network from a rejected query. Diagnostic
/// text from the service is carried through verbatim.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// The request never completed (DNS, connection, timeout)
    #[error("API request failed: {0}")]
    Request(String),

    /// The service answered with a non-success HTTP status
    #[error("API returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body was not valid JSON for the query envelope
    #[error("Failed to parse API response: {0}")]
    Parse(String),

    /// The query executed but the service reported errors in-band
    #[error("API reported errors: {0}")]
    Api(String),

    /// The response parsed but a required field was absent
    #[error("API response missing {0}")]
    Shape(String),
}

/// Port for the remote transcription service.
///
/// One request per call, no retries: a failed call surfaces its
/// [`SourceError`] immediately.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// List transcripts whose meeting date falls inside the trailing
    /// window ending now.
    async fn search(&self, window: Lookback) -> Result<Vec<Transcript>, SourceError>;

    /// Fetch a single transcript by id, including its participant list
    /// and full summary.
    async fn fetch(&self, id: &TranscriptId) -> Result<Transcript, SourceError>;

    /// Run the cheapest query that proves the credential is accepted.
    async fn probe(&self) -> Result<(), SourceError>;
}
