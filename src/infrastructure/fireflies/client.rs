//! Fireflies GraphQL client adapter

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::application::ports::{SourceError, TranscriptSource};
use crate::domain::transcript::{Lookback, Transcript, TranscriptId};

use super::query::{
    SearchVariables, TranscriptVariables, GRAPHQL_URL, SEARCH_QUERY, TRANSCRIPT_QUERY,
};
use super::response::{Envelope, SearchData, TranscriptData};

/// Request body for one GraphQL call
#[derive(Debug, Serialize)]
struct GraphQLRequest<'a, V: Serialize> {
    query: &'a str,
    variables: V,
}

/// Fireflies API client.
/// Issues one POST per operation; there is no retry layer.
pub struct FirefliesClient {
    api_key: String,
    endpoint: String,
    client: reqwest::Client,
}

impl FirefliesClient {
    /// Create a client against the production endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, GRAPHQL_URL)
    }

    /// Create a client against a custom endpoint (used by tests)
    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// POST one query document and unwrap the response envelope
    async fn execute<V, T>(&self, query: &'static str, variables: V) -> Result<T, SourceError>
    where
        V: Serialize + Send,
        T: DeserializeOwned,
    {
        let body = GraphQLRequest { query, variables };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SourceError::Request(e.to_string()))?;

        let status = response.status();

        // A non-success status surfaces with whatever body text came back
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        envelope.into_data()
    }
}

#[async_trait]
impl TranscriptSource for FirefliesClient {
    async fn search(&self, window: Lookback) -> Result<Vec<Transcript>, SourceError> {
        let data: SearchData = self
            .execute(SEARCH_QUERY, SearchVariables::lookback(window))
            .await?;

        let raw = data
            .transcripts
            .ok_or_else(|| SourceError::Shape("data.transcripts".to_string()))?;

        raw.into_iter().map(|t| t.into_transcript()).collect()
    }

    async fn fetch(&self, id: &TranscriptId) -> Result<Transcript, SourceError> {
        let data: TranscriptData = self
            .execute(TRANSCRIPT_QUERY, TranscriptVariables::new(id))
            .await?;

        data.transcript
            .ok_or_else(|| SourceError::Shape("data.transcript".to_string()))?
            .into_transcript()
    }

    async fn probe(&self) -> Result<(), SourceError> {
        // Smallest real query: a one-day window proves the credential
        // without pulling meaningful data
        self.search(Lookback::one_day()).await.map(|_| ())
    }
}
