//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod ports;
pub mod search;
pub mod fetch;

// Re-export use cases
pub use search::{
    SearchAndSaveUseCase, SearchInput, SearchOutput, SearchCallbacks,
    SearchError, SavedTranscript, SaveFailure,
};
pub use fetch::{
    FetchAndExportUseCase, FetchInput, FetchOutput, FetchError,
};
