//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::transcript::{Lookback, TranscriptId};

/// FirefliesExport - save Fireflies.ai meeting transcripts locally
#[derive(Parser, Debug)]
#[command(name = "fireflies-export")]
#[command(version)]
#[command(about = "Export Fireflies.ai meeting transcripts and summaries to local files")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search recent transcripts by title and save every match
    Search {
        /// Title substring to match (case-insensitive)
        title: String,

        /// Trailing window to search, in days
        #[arg(short = 'd', long, value_name = "DAYS")]
        days: Option<u32>,

        /// Base directory for saved files (default: ~/Documents)
        #[arg(short = 'o', long, value_name = "DIR")]
        output_dir: Option<String>,
    },
    /// Fetch one transcript by id and export it
    Fetch {
        /// Transcript id assigned by Fireflies
        id: String,

        /// Directory for exported files (default: ~/Documents/Transcripts)
        #[arg(short = 'e', long, value_name = "DIR")]
        export_dir: Option<String>,
    },
    /// Verify the configured API key against the service
    Check,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed search options (batch flow)
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub title: String,
    pub lookback: Lookback,
    pub output_dir: PathBuf,
    pub export_dir: PathBuf,
}

/// Parsed fetch options (single-transcript flow)
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub id: TranscriptId,
    pub output_dir: PathBuf,
    pub export_dir: PathBuf,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["api_key", "days", "output_dir", "export_dir"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_search_with_title_only() {
        let cli = Cli::parse_from(["fireflies-export", "search", "weekly sync"]);
        match cli.command {
            Commands::Search {
                title,
                days,
                output_dir,
            } => {
                assert_eq!(title, "weekly sync");
                assert!(days.is_none());
                assert!(output_dir.is_none());
            }
            other => panic!("Expected Search command, got {other:?}"),
        }
    }

    #[test]
    fn cli_parses_search_flags() {
        let cli = Cli::parse_from([
            "fireflies-export",
            "search",
            "standup",
            "-d",
            "30",
            "-o",
            "/tmp/out",
        ]);
        match cli.command {
            Commands::Search {
                days, output_dir, ..
            } => {
                assert_eq!(days, Some(30));
                assert_eq!(output_dir, Some("/tmp/out".to_string()));
            }
            other => panic!("Expected Search command, got {other:?}"),
        }
    }

    #[test]
    fn cli_requires_search_title() {
        assert!(Cli::try_parse_from(["fireflies-export", "search"]).is_err());
    }

    #[test]
    fn cli_parses_fetch() {
        let cli = Cli::parse_from(["fireflies-export", "fetch", "abc123", "-e", "/tmp/exports"]);
        match cli.command {
            Commands::Fetch { id, export_dir } => {
                assert_eq!(id, "abc123");
                assert_eq!(export_dir, Some("/tmp/exports".to_string()));
            }
            other => panic!("Expected Fetch command, got {other:?}"),
        }
    }

    #[test]
    fn cli_parses_check() {
        let cli = Cli::parse_from(["fireflies-export", "check"]);
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn cli_parses_config_init() {
        let cli = Cli::parse_from(["fireflies-export", "config", "init"]);
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigAction::Init
            }
        ));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["fireflies-export", "config", "set", "days", "30"]);
        if let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        {
            assert_eq!(key, "days");
            assert_eq!(value, "30");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn cli_rejects_non_numeric_days() {
        assert!(Cli::try_parse_from(["fireflies-export", "search", "x", "-d", "soon"]).is_err());
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("api_key"));
        assert!(is_valid_config_key("days"));
        assert!(is_valid_config_key("output_dir"));
        assert!(is_valid_config_key("export_dir"));
        assert!(!is_valid_config_key("invalid_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
