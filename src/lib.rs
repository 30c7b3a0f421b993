//! FirefliesExport - save Fireflies.ai meeting transcripts locally
//!
//! This crate queries the Fireflies.ai GraphQL API for meeting
//! transcripts, filters them by title and date window, and writes each
//! match's summary and dialogue to local files.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Transcript records, export renderers, value objects, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Fireflies API, filesystem, config)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
