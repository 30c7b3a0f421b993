//! Plain-text rendering of a full transcript

use crate::domain::transcript::Transcript;

/// Render the combined human-readable export: a title and date header,
/// the participant list, then the full dialogue in order. Dialogue text
/// is written verbatim, with no escaping of any kind.
pub fn transcript_to_text(transcript: &Transcript) -> String {
    let mut out = String::new();

    out.push_str(&format!("Title: {}\n", transcript.title));
    if let Some(date) = transcript.date_display() {
        out.push_str(&format!("Date: {}\n", date));
    }
    out.push('\n');

    out.push_str("Participants:\n");
    for participant in &transcript.participants {
        out.push_str(&format!("- {}\n", participant.name));
    }

    out.push_str("\nTranscript:\n");
    for sentence in &transcript.sentences {
        out.push_str(&format!("{}: {}\n", sentence.speaker_name, sentence.text));
    }

    out
}
