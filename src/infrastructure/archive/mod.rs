//! Filesystem archive adapter

mod fs;

pub use fs::FsTranscriptArchive;
