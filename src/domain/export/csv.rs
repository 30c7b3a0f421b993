//! CSV rendering for sentence tables
//!
//! Conversational text routinely embeds commas, quotes, and newlines,
//! so every field is wrapped in double quotes with embedded quotes
//! doubled. That is the whole escaping contract: quote-doubling inside
//! unconditionally quoted fields, nothing more.

use crate::domain::transcript::Sentence;

/// Column header of the sentence table
pub const CSV_HEADER: &str = "Speaker,Text";

/// Escape one field: double every embedded quote, then wrap the whole
/// field in quotes
pub fn escape_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Render the two-column sentence table, one row per sentence, rows in
/// input order
pub fn sentences_to_csv(sentences: &[Sentence]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + sentences.len() * 32);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for sentence in sentences {
        out.push_str(&escape_field(&sentence.speaker_name));
        out.push(',');
        out.push_str(&escape_field(&sentence.text));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(speaker: &str, text: &str) -> Sentence {
        Sentence {
            speaker_name: speaker.to_string(),
            text: text.to_string(),
        }
    }

    /// Minimal quote-doubling-aware reader used to check that rendered
    /// tables parse back to the original fields.
    fn read_csv(input: &str) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        let mut row = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            if in_quotes {
                if c == '"' {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    field.push(c);
                }
            } else {
                match c {
                    '"' => in_quotes = true,
                    ',' => row.push(std::mem::take(&mut field)),
                    '\n' => {
                        row.push(std::mem::take(&mut field));
                        rows.push(std::mem::take(&mut row));
                    }
                    _ => field.push(c),
                }
            }
        }
        if !field.is_empty() || !row.is_empty() {
            row.push(field);
            rows.push(row);
        }
        rows
    }

    #[test]
    fn escapes_plain_field() {
        assert_eq!(escape_field("hello"), "\"hello\"");
    }

    #[test]
    fn doubles_embedded_quotes() {
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn quotes_empty_field() {
        assert_eq!(escape_field(""), "\"\"");
    }

    #[test]
    fn leaves_commas_and_newlines_inside_quotes() {
        assert_eq!(escape_field("a,b\nc"), "\"a,b\nc\"");
    }

    #[test]
    fn renders_header_only_for_no_sentences() {
        assert_eq!(sentences_to_csv(&[]), "Speaker,Text\n");
    }

    #[test]
    fn renders_one_row_per_sentence_in_order() {
        let sentences = vec![
            sentence("Alice", "First"),
            sentence("Bob", "Second"),
            sentence("Alice", "Third"),
        ];
        let csv = sentences_to_csv(&sentences);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Speaker,Text");
        assert_eq!(lines[1], "\"Alice\",\"First\"");
        assert_eq!(lines[2], "\"Bob\",\"Second\"");
        assert_eq!(lines[3], "\"Alice\",\"Third\"");
    }

    #[test]
    fn round_trips_hostile_fields() {
        let sentences = vec![
            sentence("Alice \"AL\" Smith", "Said \"yes, go\""),
            sentence("Bob", "Line one\nline two, with comma"),
            sentence("", "\"\"quoted start"),
        ];
        let rows = read_csv(&sentences_to_csv(&sentences));

        assert_eq!(rows[0], vec!["Speaker", "Text"]);
        for (row, original) in rows[1..].iter().zip(&sentences) {
            assert_eq!(row[0], original.speaker_name);
            assert_eq!(row[1], original.text);
        }
        assert_eq!(rows.len(), sentences.len() + 1);
    }

    #[test]
    fn newline_in_text_does_not_split_the_row() {
        let csv = sentences_to_csv(&[sentence("A", "one\ntwo")]);
        let rows = read_csv(&csv);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][1], "one\ntwo");
    }
}
