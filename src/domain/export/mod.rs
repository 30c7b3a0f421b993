//! Export rendering domain module
//!
//! Pure renderers that turn transcript records into the on-disk text
//! formats. No I/O happens here.

pub mod csv;
mod text;

pub use csv::{escape_field, sentences_to_csv, CSV_HEADER};
pub use text::transcript_to_text;
