//! Domain layer - Core business logic
//!
//! Contains transcript records, export renderers, value objects, and
//! domain errors. This layer has no dependencies on external systems.

pub mod transcript;
pub mod export;
pub mod config;
pub mod error;

// Re-export common types
pub use error::*;
pub use transcript::{Lookback, Transcript, TranscriptId};
pub use config::AppConfig;
