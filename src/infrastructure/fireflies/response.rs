//! Response envelope and wire shapes for the Fireflies API
//!
//! Every wire field is optional, matching GraphQL nullability. Turning
//! a wire record into a domain [`Transcript`] is where required fields
//! are enforced: a missing one becomes a [`SourceError::Shape`] naming
//! the absent path. Only the fields this tool consumes are checked.

use serde::Deserialize;
use serde_json::Value;

use crate::application::ports::SourceError;
use crate::domain::transcript::{DateValue, Participant, Sentence, Summary, Transcript, TranscriptId};

/// Top-level GraphQL envelope
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub errors: Option<Value>,
}

impl<T> Envelope<T> {
    /// Surface service-reported errors, then require `data`.
    /// An errors payload wins even when data is also present.
    pub fn into_data(self) -> Result<T, SourceError> {
        if let Some(errors) = self.errors {
            let reported = match &errors {
                Value::Array(items) => !items.is_empty(),
                Value::Null => false,
                _ => true,
            };
            if reported {
                return Err(SourceError::Api(errors.to_string()));
            }
        }
        self.data.ok_or_else(|| SourceError::Shape("data".to_string()))
    }
}

/// Payload of the list query
#[derive(Debug, Deserialize)]
pub struct SearchData {
    pub transcripts: Option<Vec<RawTranscript>>,
}

/// Payload of the single-transcript query
#[derive(Debug, Deserialize)]
pub struct TranscriptData {
    pub transcript: Option<RawTranscript>,
}

/// A transcript exactly as the service returns it
#[derive(Debug, Deserialize)]
pub struct RawTranscript {
    pub id: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "dateString")]
    pub date_string: Option<String>,
    pub date: Option<DateValue>,
    pub summary: Option<Summary>,
    pub participants: Option<Vec<RawParticipant>>,
    pub sentences: Option<Vec<RawSentence>>,
}

#[derive(Debug, Deserialize)]
pub struct RawSentence {
    pub speaker_name: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawParticipant {
    pub name: Option<String>,
}

impl RawTranscript {
    /// Convert into a domain record.
    ///
    /// `id` and `title` are required; nullable leaves collapse to empty
    /// values so a sparsely-populated transcript still converts.
    pub fn into_transcript(self) -> Result<Transcript, SourceError> {
        let id = self
            .id
            .ok_or_else(|| SourceError::Shape("transcript.id".to_string()))?;
        let id = TranscriptId::new(id)
            .map_err(|_| SourceError::Shape("transcript.id".to_string()))?;
        let title = self
            .title
            .ok_or_else(|| SourceError::Shape("transcript.title".to_string()))?;

        Ok(Transcript {
            id,
            title,
            date_string: self.date_string,
            date: self.date,
            summary: self.summary,
            participants: self
                .participants
                .unwrap_or_default()
                .into_iter()
                .map(|p| Participant {
                    name: p.name.unwrap_or_default(),
                })
                .collect(),
            sentences: self
                .sentences
                .unwrap_or_default()
                .into_iter()
                .map(|s| Sentence {
                    speaker_name: s.speaker_name.unwrap_or_default(),
                    text: s.text.unwrap_or_default(),
                })
                .collect(),
        })
    }
}
