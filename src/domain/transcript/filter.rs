//! Title filtering for transcript search results

use super::Transcript;

/// Keep the transcripts whose title contains `needle`, comparing
/// case-insensitively. Input order is preserved. No matches is an empty
/// result, not an error.
pub fn filter_by_title(transcripts: Vec<Transcript>, needle: &str) -> Vec<Transcript> {
    let needle = needle.to_lowercase();
    transcripts
        .into_iter()
        .filter(|t| t.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transcript::TranscriptId;

    fn transcript(id: &str, title: &str) -> Transcript {
        Transcript {
            id: TranscriptId::new(id).unwrap(),
            title: title.to_string(),
            date_string: None,
            date: None,
            summary: None,
            participants: Vec::new(),
            sentences: Vec::new(),
        }
    }

    fn titles(transcripts: &[Transcript]) -> Vec<&str> {
        transcripts.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn matches_substring_case_insensitively() {
        let input = vec![
            transcript("1", "General Concepts - Jan 5"),
            transcript("2", "Budget review"),
            transcript("3", "general concepts follow-up"),
        ];
        let matched = filter_by_title(input, "General concepts");
        assert_eq!(
            titles(&matched),
            vec!["General Concepts - Jan 5", "general concepts follow-up"]
        );
    }

    #[test]
    fn preserves_input_order() {
        let input = vec![
            transcript("1", "sync c"),
            transcript("2", "sync a"),
            transcript("3", "sync b"),
        ];
        let matched = filter_by_title(input, "SYNC");
        assert_eq!(titles(&matched), vec!["sync c", "sync a", "sync b"]);
    }

    #[test]
    fn no_match_yields_empty() {
        let input = vec![transcript("1", "Budget review")];
        assert!(filter_by_title(input, "standup").is_empty());
    }

    #[test]
    fn empty_needle_matches_everything() {
        let input = vec![transcript("1", "a"), transcript("2", "b")];
        assert_eq!(filter_by_title(input, "").len(), 2);
    }

    #[test]
    fn empty_input_yields_empty() {
        assert!(filter_by_title(Vec::new(), "anything").is_empty());
    }
}
