//! GraphQL query documents and variables for the Fireflies API

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::domain::transcript::{Lookback, TranscriptId};

/// Fireflies GraphQL endpoint
pub const GRAPHQL_URL: &str = "https://api.fireflies.ai/graphql";

/// Rendering of window boundaries: UTC with a fixed millisecond suffix,
/// matching what the transcripts query accepts
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.000Z";

/// List query: every transcript inside a date window, with the summary
/// facets and dialogue the batch flow persists
pub const SEARCH_QUERY: &str = r#"
query SearchTranscripts($fromDate: String!, $toDate: String!) {
    transcripts(fromDate: $fromDate, toDate: $toDate) {
        id
        title
        dateString
        summary {
            keywords
            outline
            short_summary
        }
        sentences {
            text
            speaker_name
        }
    }
}
"#;

/// Single-transcript query: one transcript by id, adding participants
/// and the full set of summary facets
pub const TRANSCRIPT_QUERY: &str = r#"
query Transcript($transcriptId: String!) {
    transcript(id: $transcriptId) {
        id
        title
        date
        participants {
            name
        }
        summary {
            keywords
            action_items
            outline
            shorthand_bullet
            overview
            bullet_gist
            gist
            short_summary
        }
        sentences {
            text
            speaker_name
        }
    }
}
"#;

/// Variables for the list query
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchVariables {
    pub from_date: String,
    pub to_date: String,
}

impl SearchVariables {
    /// Window ending now and starting `window` days earlier
    pub fn lookback(window: Lookback) -> Self {
        Self::lookback_at(window, Utc::now())
    }

    /// Window ending at `now`. Split out so tests can pin the clock.
    pub fn lookback_at(window: Lookback, now: DateTime<Utc>) -> Self {
        let from = now - Duration::days(i64::from(window.days()));
        Self {
            from_date: from.format(DATE_FORMAT).to_string(),
            to_date: now.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Variables for the single-transcript query
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptVariables {
    pub transcript_id: String,
}

impl TranscriptVariables {
    pub fn new(id: &TranscriptId) -> Self {
        Self {
            transcript_id: id.as_str().to_string(),
        }
    }
}
