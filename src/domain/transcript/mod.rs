//! Transcript domain module

mod filter;
mod lookback;
mod record;
mod transcript_id;

pub use filter::filter_by_title;
pub use lookback::{Lookback, DEFAULT_LOOKBACK_DAYS};
pub use record::{DateValue, Participant, Sentence, Summary, Transcript};
pub use transcript_id::TranscriptId;
