//! Parts List Parser
//!
//! Line-oriented parser for free-text parts lists as maintenance tools and
//! technicians write them. Handles bullet points, numbered lists, flexible
//! spacing and trailing quantity words.
//!
//! Accepted entry formats, one per line:
//! - `PART-XXX-XX: N [quantity_word]` (colon separated)
//! - `PART-XXX-XX - N [quantity_word]` (dash separated)
//!
//! Lines that match neither format are dropped without error; an entirely
//! unusable input is the caller's aggregate error, not the parser's.

use millwright_models::PartRequest;
use regex::Regex;

/// Parser for free-text parts lists.
///
/// Holds the compiled patterns; construct once and reuse.
#[derive(Debug, Clone)]
pub struct PartsListParser {
    bullet_marker: Regex,
    numbered_marker: Regex,
    colon_entry: Regex,
    dash_entry: Regex,
}

impl Default for PartsListParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PartsListParser {
    pub fn new() -> Self {
        Self {
            bullet_marker: Regex::new(r"^\s*[-•*]\s*").unwrap(),
            numbered_marker: Regex::new(r"^\s*\d+[.)]\s*").unwrap(),
            colon_entry: Regex::new(r"(?i)^([A-Z]+-\d{3}-\d{2})\s*:\s*(\d+)(?:\s*[a-zA-Z]+)?$")
                .unwrap(),
            dash_entry: Regex::new(r"(?i)^([A-Z]+-\d{3}-\d{2})\s*-\s*(\d+)(?:\s*[a-zA-Z]+)?$")
                .unwrap(),
        }
    }

    /// Parse a multi-line parts list into requests, in input order.
    ///
    /// Duplicate part numbers stay as separate requests. Malformed lines are
    /// skipped silently; the result is empty when nothing parses.
    pub fn parse(&self, parts_text: &str) -> Vec<PartRequest> {
        let mut requests = Vec::new();

        for raw_line in parts_text.lines() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            // Entries always carry a separator; plain prose without one is
            // skipped before any pattern work.
            if !line.contains(':') && !line.contains('-') {
                continue;
            }

            let line = self.strip_list_markers(line);
            if let Some(request) = self.match_entry(&line) {
                requests.push(request);
            }
        }

        requests
    }

    /// Remove one leading bullet and one leading list number, in that order.
    fn strip_list_markers(&self, line: &str) -> String {
        let line = self.bullet_marker.replace(line, "");
        let line = self.numbered_marker.replace(&line, "");
        line.trim().to_string()
    }

    fn match_entry(&self, line: &str) -> Option<PartRequest> {
        let captures = self
            .colon_entry
            .captures(line)
            .or_else(|| self.dash_entry.captures(line))?;

        let part_number = captures.get(1)?.as_str().to_string();
        let quantity_needed = captures.get(2)?.as_str().parse().ok()?;

        Some(PartRequest {
            part_number,
            quantity_needed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::is_valid_part_number;
    use proptest::prelude::*;

    fn parse(input: &str) -> Vec<PartRequest> {
        PartsListParser::new().parse(input)
    }

    #[test]
    fn test_plain_colon_entry() {
        let requests = parse("BEAR-001-02: 4");
        assert_eq!(requests, vec![PartRequest::new("BEAR-001-02", 4)]);
    }

    #[test]
    fn test_bulleted_entry_with_quantity_word() {
        let requests = parse("- BEAR-001-02: 4 units");
        assert_eq!(requests, vec![PartRequest::new("BEAR-001-02", 4)]);
    }

    #[test]
    fn test_numbered_dash_entry_preserves_case() {
        let requests = parse("2) seal-102-11 - 3 pieces");
        assert_eq!(requests, vec![PartRequest::new("seal-102-11", 3)]);
    }

    #[test]
    fn test_unicode_bullet_and_tight_spacing() {
        let requests = parse("• GREASE-023-01:2\n* OIL-023-01 -1 containers");
        assert_eq!(
            requests,
            vec![
                PartRequest::new("GREASE-023-01", 2),
                PartRequest::new("OIL-023-01", 1),
            ]
        );
    }

    #[test]
    fn test_prose_lines_are_dropped() {
        let requests = parse("Please order the following\nthanks in advance");
        assert!(requests.is_empty());
    }

    #[test]
    fn test_malformed_part_numbers_are_dropped() {
        // Wrong digit groupings and double-dashed prefixes never match.
        let requests = parse("BEAR-001: 4\nBEAR-0001-02: 4\nOIL-FILTER-003-03: 1");
        assert!(requests.is_empty());
    }

    #[test]
    fn test_negative_quantity_is_dropped() {
        let requests = parse("SEAL-102-11: -3");
        assert!(requests.is_empty());
    }

    #[test]
    fn test_zero_quantity_parses() {
        let requests = parse("SEAL-102-11: 0");
        assert_eq!(requests, vec![PartRequest::new("SEAL-102-11", 0)]);
    }

    #[test]
    fn test_mixed_input_keeps_only_valid_lines() {
        let input = "Parts needed for equipment 23:\n\
                     - BEAR-023-01: 3 units\n\
                     (see manual for details)\n\
                     1. SEAL-023-02 - 2\n\
                     TOTAL: 5";
        let requests = parse(input);
        assert_eq!(
            requests,
            vec![
                PartRequest::new("BEAR-023-01", 3),
                PartRequest::new("SEAL-023-02", 2),
            ]
        );
    }

    #[test]
    fn test_duplicates_are_preserved_in_order() {
        let requests = parse("BEAR-001-02: 2\nSEAL-001-03: 1\nBEAR-001-02: 3");
        assert_eq!(
            requests,
            vec![
                PartRequest::new("BEAR-001-02", 2),
                PartRequest::new("SEAL-001-03", 1),
                PartRequest::new("BEAR-001-02", 3),
            ]
        );
    }

    #[test]
    fn test_trailing_garbage_after_quantity_word_is_dropped() {
        let requests = parse("BEAR-001-02: 4 units urgently");
        assert!(requests.is_empty());
    }

    #[test]
    fn test_empty_input_yields_empty_list() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n   \n").is_empty());
    }

    #[test]
    fn test_reparse_of_canonical_rendering_is_identity() {
        let first = parse("- BEAR-001-02: 4 units\n2) seal-102-11 - 3 pieces\nBEAR-001-02: 4");
        let canonical = first
            .iter()
            .map(|request| request.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        let second = parse(&canonical);
        assert_eq!(first, second);
    }

    proptest! {
        /// Arbitrary junk parses to a subset of lines without panicking.
        #[test]
        fn prop_arbitrary_input_never_panics(input in "\\PC{0,200}") {
            let requests = parse(&input);
            prop_assert!(requests.len() <= input.lines().count());
        }

        /// Well-formed entries survive any list decoration, and re-parsing
        /// their canonical rendering gives back the same requests.
        #[test]
        fn prop_decorated_entries_roundtrip(
            part in "[A-Za-z]{2,8}-[0-9]{3}-[0-9]{2}",
            quantity in 0..10_000i32,
            bullet in prop_oneof![
                Just(""), Just("- "), Just("• "), Just("* "), Just("3. "), Just("12) ")
            ],
            separator in prop_oneof![Just(": "), Just(" - ")],
            word in prop_oneof![Just(""), Just(" units"), Just(" pieces")],
        ) {
            let line = format!("{}{}{}{}{}", bullet, part, separator, quantity, word);
            let requests = parse(&line);

            prop_assert_eq!(requests.len(), 1);
            prop_assert_eq!(&requests[0].part_number, &part);
            prop_assert_eq!(requests[0].quantity_needed, quantity);
            prop_assert!(is_valid_part_number(&requests[0].part_number));

            let reparsed = parse(&requests[0].to_string());
            prop_assert_eq!(&reparsed, &requests);
        }
    }
}
