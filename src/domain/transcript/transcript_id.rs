//! Transcript identifier value object

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::InvalidTranscriptIdError;

/// Opaque identifier assigned to a transcript by the remote service.
/// Validated to be non-empty on creation; doubles as the file-naming
/// key for everything written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TranscriptId(String);

impl TranscriptId {
    /// Create a TranscriptId, rejecting empty or whitespace-only input
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidTranscriptIdError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(InvalidTranscriptIdError { input: id });
        }
        Ok(Self(id))
    }

    /// The raw id string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id can be used verbatim as a file-name component.
    /// Ids containing path separators, parent-directory segments, or
    /// NUL bytes could escape the target directory and are refused.
    pub fn is_filesystem_safe(&self) -> bool {
        !self.0.contains('/')
            && !self.0.contains('\\')
            && !self.0.contains("..")
            && !self.0.contains('\0')
    }
}

impl FromStr for TranscriptId {
    type Err = InvalidTranscriptIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for TranscriptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
