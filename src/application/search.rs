//! Search-and-save use case (batch flow)

use thiserror::Error;

use crate::domain::transcript::{filter_by_title, Lookback, TranscriptId};

use super::ports::{ArchiveError, SavedPair, SourceError, TranscriptArchive, TranscriptSource};

/// Errors that abort a batch run before any file is written
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    #[error("Search failed: {0}")]
    Source(#[from] SourceError),
}

/// Input parameters for the batch flow
#[derive(Debug, Clone)]
pub struct SearchInput {
    /// Title substring to match, case-insensitively
    pub title: String,
    /// Trailing window the list query covers
    pub lookback: Lookback,
}

/// One transcript fully written to the archive
#[derive(Debug, Clone)]
pub struct SavedTranscript {
    pub id: TranscriptId,
    pub title: String,
    pub files: SavedPair,
}

/// One transcript whose save failed. The batch continues past it; the
/// failure stays attributable to this id.
#[derive(Debug, Clone)]
pub struct SaveFailure {
    pub id: TranscriptId,
    pub title: String,
    pub error: ArchiveError,
}

/// Outcome of a batch run. Zero matches is a success with empty lists.
#[derive(Debug, Clone, Default)]
pub struct SearchOutput {
    /// How many transcripts matched the title filter
    pub matched: usize,
    pub saved: Vec<SavedTranscript>,
    pub failures: Vec<SaveFailure>,
}

/// Callbacks for progress updates during a batch run
#[derive(Default)]
pub struct SearchCallbacks {
    /// Called once the filter has run, with the match count
    pub on_matched: Option<Box<dyn Fn(usize) + Send + Sync>>,
    /// Called before each matched transcript is written, with its title
    pub on_saving: Option<Box<dyn Fn(&str) + Send + Sync>>,
}

/// Batch pipeline: list recent transcripts, filter by title, save every
/// match as a summary/CSV pair.
pub struct SearchAndSaveUseCase<S, A>
where
    S: TranscriptSource,
    A: TranscriptArchive,
{
    source: S,
    archive: A,
}

impl<S, A> SearchAndSaveUseCase<S, A>
where
    S: TranscriptSource,
    A: TranscriptArchive,
{
    /// Create a new use case instance
    pub fn new(source: S, archive: A) -> Self {
        Self { source, archive }
    }

    /// Execute the batch workflow.
    ///
    /// A source failure aborts the whole run with nothing written.
    /// A save failure is recorded against its transcript and the run
    /// moves on to the remaining matches.
    pub async fn execute(
        &self,
        input: SearchInput,
        callbacks: SearchCallbacks,
    ) -> Result<SearchOutput, SearchError> {
        let transcripts = self.source.search(input.lookback).await?;
        let matches = filter_by_title(transcripts, &input.title);

        if let Some(ref cb) = callbacks.on_matched {
            cb(matches.len());
        }

        let mut output = SearchOutput {
            matched: matches.len(),
            ..Default::default()
        };

        for transcript in matches {
            if let Some(ref cb) = callbacks.on_saving {
                cb(&transcript.title);
            }

            match self.archive.save(&transcript).await {
                Ok(files) => output.saved.push(SavedTranscript {
                    id: transcript.id,
                    title: transcript.title,
                    files,
                }),
                Err(error) => output.failures.push(SaveFailure {
                    id: transcript.id,
                    title: transcript.title,
                    error,
                }),
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ExportedPair;
    use crate::domain::transcript::Transcript;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Mutex;

    fn transcript(id: &str, title: &str) -> Transcript {
        Transcript {
            id: TranscriptId::new(id).unwrap(),
            title: title.to_string(),
            date_string: None,
            date: None,
            summary: None,
            participants: Vec::new(),
            sentences: Vec::new(),
        }
    }

    // Mock implementations for testing
    struct MockSource {
        transcripts: Vec<Transcript>,
    }

    #[async_trait]
    impl TranscriptSource for MockSource {
        async fn search(&self, _window: Lookback) -> Result<Vec<Transcript>, SourceError> {
            Ok(self.transcripts.clone())
        }

        async fn fetch(&self, _id: &TranscriptId) -> Result<Transcript, SourceError> {
            unreachable!("batch flow never fetches by id")
        }

        async fn probe(&self) -> Result<(), SourceError> {
            Ok(())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl TranscriptSource for FailingSource {
        async fn search(&self, _window: Lookback) -> Result<Vec<Transcript>, SourceError> {
            Err(SourceError::Http {
                status: 401,
                body: "Unauthorized".to_string(),
            })
        }

        async fn fetch(&self, _id: &TranscriptId) -> Result<Transcript, SourceError> {
            Err(SourceError::Request("no route".to_string()))
        }

        async fn probe(&self) -> Result<(), SourceError> {
            Err(SourceError::Request("no route".to_string()))
        }
    }

    /// Records saved ids; fails any id listed in `reject`.
    struct MockArchive {
        saved: Mutex<Vec<String>>,
        reject: Vec<String>,
    }

    impl MockArchive {
        fn new() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                reject: Vec::new(),
            }
        }

        fn rejecting(ids: &[&str]) -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                reject: ids.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    #[async_trait]
    impl TranscriptArchive for MockArchive {
        async fn save(&self, transcript: &Transcript) -> Result<SavedPair, ArchiveError> {
            let id = transcript.id.as_str().to_string();
            if self.reject.contains(&id) {
                return Err(ArchiveError::Write {
                    path: format!("{}_summary.json", id),
                    message: "disk full".to_string(),
                });
            }
            self.saved.lock().unwrap().push(id.clone());
            Ok(SavedPair {
                summary_path: PathBuf::from(format!("{}_summary.json", id)),
                transcript_path: PathBuf::from(format!("{}_transcript.csv", id)),
            })
        }

        async fn export(&self, _transcript: &Transcript) -> Result<ExportedPair, ArchiveError> {
            unreachable!("batch flow never exports")
        }
    }

    fn input(title: &str) -> SearchInput {
        SearchInput {
            title: title.to_string(),
            lookback: Lookback::default(),
        }
    }

    #[tokio::test]
    async fn saves_only_matching_transcripts() {
        let source = MockSource {
            transcripts: vec![
                transcript("1", "General Concepts - Jan 5"),
                transcript("2", "Budget review"),
                transcript("3", "general concepts redux"),
            ],
        };
        let use_case = SearchAndSaveUseCase::new(source, MockArchive::new());

        let output = use_case
            .execute(input("general concepts"), SearchCallbacks::default())
            .await
            .unwrap();

        assert_eq!(output.matched, 2);
        assert_eq!(output.saved.len(), 2);
        assert!(output.failures.is_empty());
        assert_eq!(output.saved[0].id.as_str(), "1");
        assert_eq!(output.saved[1].id.as_str(), "3");
    }

    #[tokio::test]
    async fn no_matches_is_success_with_empty_output() {
        let source = MockSource {
            transcripts: vec![transcript("1", "Budget review")],
        };
        let use_case = SearchAndSaveUseCase::new(source, MockArchive::new());

        let output = use_case
            .execute(input("standup"), SearchCallbacks::default())
            .await
            .unwrap();

        assert_eq!(output.matched, 0);
        assert!(output.saved.is_empty());
        assert!(output.failures.is_empty());
    }

    #[tokio::test]
    async fn source_failure_aborts_with_nothing_saved() {
        let use_case = SearchAndSaveUseCase::new(FailingSource, MockArchive::new());

        let err = use_case
            .execute(input("anything"), SearchCallbacks::default())
            .await
            .unwrap_err();

        match err {
            SearchError::Source(SourceError::Http { status, .. }) => assert_eq!(status, 401),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn save_failure_is_attributed_and_does_not_stop_the_batch() {
        let source = MockSource {
            transcripts: vec![
                transcript("ok-1", "sync a"),
                transcript("bad-2", "sync b"),
                transcript("ok-3", "sync c"),
            ],
        };
        let archive = MockArchive::rejecting(&["bad-2"]);
        let use_case = SearchAndSaveUseCase::new(source, archive);

        let output = use_case
            .execute(input("sync"), SearchCallbacks::default())
            .await
            .unwrap();

        assert_eq!(output.matched, 3);
        assert_eq!(output.saved.len(), 2);
        assert_eq!(output.failures.len(), 1);
        assert_eq!(output.failures[0].id.as_str(), "bad-2");
        assert_eq!(output.failures[0].title, "sync b");
    }

    #[tokio::test]
    async fn callbacks_report_match_count_and_titles() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let source = MockSource {
            transcripts: vec![transcript("1", "sync a"), transcript("2", "sync b")],
        };
        let use_case = SearchAndSaveUseCase::new(source, MockArchive::new());

        let matched = Arc::new(AtomicUsize::new(0));
        let saving = Arc::new(AtomicUsize::new(0));
        let callbacks = SearchCallbacks {
            on_matched: Some(Box::new({
                let matched = Arc::clone(&matched);
                move |count| matched.store(count, Ordering::SeqCst)
            })),
            on_saving: Some(Box::new({
                let saving = Arc::clone(&saving);
                move |_title| {
                    saving.fetch_add(1, Ordering::SeqCst);
                }
            })),
        };

        use_case.execute(input("sync"), callbacks).await.unwrap();

        assert_eq!(matched.load(Ordering::SeqCst), 2);
        assert_eq!(saving.load(Ordering::SeqCst), 2);
    }
}
