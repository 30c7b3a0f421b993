//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::transcript::Lookback;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub days: Option<u32>,
    pub output_dir: Option<String>,
    pub export_dir: Option<String>,
}

impl AppConfig {
    /// Create config with default values.
    /// Directory defaults depend on the machine, so they stay unset here
    /// and are resolved at the CLI boundary.
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            days: Some(Lookback::default_lookback().days()),
            output_dir: None,
            export_dir: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            days: other.days.or(self.days),
            output_dir: other.output_dir.or(self.output_dir),
            export_dir: other.export_dir.or(self.export_dir),
        }
    }

    /// Get the lookback window, or the 10-day default if not set/invalid
    pub fn lookback_or_default(&self) -> Lookback {
        self.days
            .and_then(|d| Lookback::from_days(d).ok())
            .unwrap_or_default()
    }
}
