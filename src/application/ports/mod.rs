//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod source;
pub mod archive;
pub mod config;

// Re-export common types
pub use source::{TranscriptSource, SourceError};
pub use archive::{TranscriptArchive, ArchiveError, SavedPair, ExportedPair};
pub use config::ConfigStore;
