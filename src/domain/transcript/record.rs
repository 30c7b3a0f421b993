//! Transcript record types
//!
//! These are the shapes the rest of the crate works with, covering only
//! the fields this tool consumes. Date fields are carried through as the
//! service delivered them, never reparsed.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::TranscriptId;

/// A meeting date as the service delivers it: epoch milliseconds from
/// the single-transcript query, a preformatted string elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    Timestamp(i64),
    Text(String),
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timestamp(ms) => write!(f, "{}", ms),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One line of dialogue. Sentence order is chronological and must be
/// preserved verbatim in every rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub speaker_name: String,
    pub text: String,
}

/// A meeting participant. Only the single-transcript query returns these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
}

/// AI-generated summary facets. The service populates facets unevenly,
/// so every one is optional; absent facets stay absent when serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_items: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shorthand_bullet: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet_gist: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gist: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_summary: Option<String>,
}

/// One conversational recording: metadata, summary, and dialogue.
/// `summary` serializes as `null` when the service returned none, so the
/// written artifact reflects what the service actually said.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcript {
    pub id: TranscriptId,
    pub title: String,

    #[serde(rename = "dateString", skip_serializing_if = "Option::is_none")]
    pub date_string: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateValue>,

    pub summary: Option<Summary>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<Participant>,

    pub sentences: Vec<Sentence>,
}

impl Transcript {
    /// The meeting date for display, preferring the single-query `date`
    /// field over the list-query `dateString`
    pub fn date_display(&self) -> Option<String> {
        match (&self.date, &self.date_string) {
            (Some(date), _) => Some(date.to_string()),
            (None, Some(text)) => Some(text.clone()),
            (None, None) => None,
        }
    }
}
