//! Part request models for the Millwright procurement system.
//!
//! A part request is one line of a parsed parts list: which part a
//! maintenance job needs and how many units of it.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// A single requested part parsed from a free-text parts list.
///
/// Requests are kept in input order. A part number appearing on two lines
/// produces two requests; nothing in the pipeline merges them.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct PartRequest {
    #[validate(length(min = 1, max = 64, message = "Part number must be between 1 and 64 characters"))]
    pub part_number: String,
    #[validate(range(min = 0, message = "Quantity needed cannot be negative"))]
    pub quantity_needed: i32,
}

impl PartRequest {
    pub fn new(part_number: impl Into<String>, quantity_needed: i32) -> Self {
        Self {
            part_number: part_number.into(),
            quantity_needed,
        }
    }
}

/// Canonical single-line form, re-parseable by the parts list parser.
impl fmt::Display for PartRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.part_number, self.quantity_needed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_rendering() {
        let request = PartRequest::new("BEAR-001-02", 4);
        assert_eq!(request.to_string(), "BEAR-001-02: 4");
    }

    #[test]
    fn test_zero_quantity_is_valid() {
        let request = PartRequest::new("SEAL-102-11", 0);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_negative_quantity_fails_validation() {
        let request = PartRequest::new("SEAL-102-11", -1);
        assert!(request.validate().is_err());
    }
}
