//! FirefliesExport CLI entry point

use std::process::ExitCode;

use clap::Parser;

use fireflies_export::cli::{
    app::{
        load_merged_config, resolve_export_dir, resolve_output_dir, run_check, run_fetch,
        run_search, EXIT_ERROR, EXIT_USAGE_ERROR,
    },
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
    FetchOptions, SearchOptions,
};
use fireflies_export::domain::config::AppConfig;
use fireflies_export::domain::transcript::{Lookback, TranscriptId};
use fireflies_export::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Check => run_check().await,
        Commands::Search {
            title,
            days,
            output_dir,
        } => {
            // Build CLI config from args (API key comes from env/file only)
            let cli_config = AppConfig {
                api_key: None,
                days,
                output_dir,
                export_dir: None,
            };
            let config = load_merged_config(cli_config).await;

            // Parse lookback window
            let lookback = match config.days {
                Some(d) => match Lookback::from_days(d) {
                    Ok(window) => window,
                    Err(e) => {
                        presenter.error(&e.to_string());
                        return ExitCode::from(EXIT_USAGE_ERROR);
                    }
                },
                None => Lookback::default(),
            };

            let options = SearchOptions {
                title,
                lookback,
                output_dir: resolve_output_dir(&config),
                export_dir: resolve_export_dir(&config),
            };

            run_search(options).await
        }
        Commands::Fetch { id, export_dir } => {
            let cli_config = AppConfig {
                api_key: None,
                days: None,
                output_dir: None,
                export_dir,
            };
            let config = load_merged_config(cli_config).await;

            // Validate the transcript id
            let id = match TranscriptId::new(id) {
                Ok(id) => id,
                Err(e) => {
                    presenter.error(&e.to_string());
                    return ExitCode::from(EXIT_USAGE_ERROR);
                }
            };

            let options = FetchOptions {
                id,
                output_dir: resolve_output_dir(&config),
                export_dir: resolve_export_dir(&config),
            };

            run_fetch(options).await
        }
    }
}
