//! Main app runners for the search, fetch, and check flows

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::application::ports::{ConfigStore, TranscriptSource};
use crate::application::{
    FetchAndExportUseCase, FetchInput, SearchAndSaveUseCase, SearchCallbacks, SearchInput,
};
use crate::domain::config::AppConfig;
use crate::infrastructure::{FirefliesClient, FsTranscriptArchive, XdgConfigStore};

use super::args::{FetchOptions, SearchOptions};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "FIREFLIES_API_KEY";

/// Run the batch search-and-save flow
pub async fn run_search(options: SearchOptions) -> ExitCode {
    let presenter = Presenter::new();

    // Load API key from environment or config file
    let api_key = match get_api_key().await {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Create adapters and use case
    let source = FirefliesClient::new(api_key);
    let archive = FsTranscriptArchive::new(&options.output_dir, &options.export_dir);
    let destination = archive.archive_dir();
    let use_case = SearchAndSaveUseCase::new(source, archive);

    let input = SearchInput {
        title: options.title.clone(),
        lookback: options.lookback,
    };

    // Progress callbacks print through fresh presenters; the use case
    // itself never touches the console
    let callbacks = SearchCallbacks {
        on_matched: Some(Box::new(|count: usize| {
            if count > 0 {
                Presenter::new().info(&format!("Found {} matching transcript(s)", count));
            }
        })),
        on_saving: Some(Box::new(|title: &str| {
            Presenter::new().info(&format!("Saving transcript: {}", title));
        })),
    };

    presenter.info(&format!(
        "Searching the last {} for \"{}\"",
        options.lookback, options.title
    ));

    match use_case.execute(input, callbacks).await {
        Ok(output) => {
            // Each failed save stays attributable to its transcript
            for failure in &output.failures {
                presenter.warn(&format!(
                    "Failed to save transcript {}: {}",
                    failure.id, failure.error
                ));
            }

            if output.matched == 0 {
                presenter.info(&format!(
                    "No transcripts matching \"{}\" in the last {}",
                    options.title, options.lookback
                ));
            } else {
                presenter.success(&format!(
                    "Saved {} of {} transcript(s) to {}",
                    output.saved.len(),
                    output.matched,
                    destination.display()
                ));
            }

            if output.failures.is_empty() {
                ExitCode::from(EXIT_SUCCESS)
            } else {
                ExitCode::from(EXIT_ERROR)
            }
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run the single-transcript fetch-and-export flow
pub async fn run_fetch(options: FetchOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    let api_key = match get_api_key().await {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let source = FirefliesClient::new(api_key);
    let archive = FsTranscriptArchive::new(&options.output_dir, &options.export_dir);
    let use_case = FetchAndExportUseCase::new(source, archive);

    presenter.start_spinner(&format!("Fetching transcript {}...", options.id));

    match use_case
        .execute(FetchInput {
            id: options.id.clone(),
        })
        .await
    {
        Ok(output) => {
            presenter.spinner_success(&format!("Fetched \"{}\"", output.title));

            presenter.key_value("Title", &output.title);
            if let Some(date) = &output.date {
                presenter.key_value("Date", date);
            }
            presenter.key_value("Participants", &output.participants.join(", "));
            presenter.key_value("Sentences", &output.sentence_count.to_string());

            // Echo the summary payload like the files carry it
            if let Some(summary) = &output.summary {
                if let Ok(pretty) = serde_json::to_string_pretty(summary) {
                    presenter.output(&pretty);
                }
            }

            presenter.success(&format!(
                "Exported {} and {}",
                output.files.json_path.display(),
                output.files.text_path.display()
            ));

            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.spinner_fail("Fetch failed");
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run the credential check flow
pub async fn run_check() -> ExitCode {
    let mut presenter = Presenter::new();

    let api_key = match get_api_key().await {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let source = FirefliesClient::new(api_key);

    presenter.start_spinner("Checking API key...");

    match source.probe().await {
        Ok(()) => {
            presenter.spinner_success("API key accepted");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.spinner_fail("API key check failed");
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Get API key from environment or config file
pub async fn get_api_key() -> Result<String, String> {
    // Check environment first
    if let Ok(key) = env::var(API_KEY_ENV) {
        if !key.is_empty() {
            return Ok(key);
        }
    }

    // Check config file
    let store = XdgConfigStore::new();
    let config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    config.api_key.ok_or_else(|| {
        format!(
            "Missing API key. Set {} environment variable or run 'fireflies-export config set api_key <key>'",
            API_KEY_ENV
        )
    })
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_config = AppConfig {
        api_key: env::var(API_KEY_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

/// Output base directory: configured value or ~/Documents
pub fn resolve_output_dir(config: &AppConfig) -> PathBuf {
    config
        .output_dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| home_dir().join("Documents"))
}

/// Export directory: configured value or ~/Documents/Transcripts
pub fn resolve_export_dir(config: &AppConfig) -> PathBuf {
    config
        .export_dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| home_dir().join("Documents").join("Transcripts"))
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}
