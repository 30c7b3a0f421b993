//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the Fireflies API and the local filesystem.

pub mod archive;
pub mod config;
pub mod fireflies;

// Re-export adapters
pub use archive::FsTranscriptArchive;
pub use config::XdgConfigStore;
pub use fireflies::FirefliesClient;
