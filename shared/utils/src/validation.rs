use crate::error::{MillwrightError, MillwrightResult};
use millwright_models::{MAX_EQUIPMENT_ID, MIN_EQUIPMENT_ID};
use regex::Regex;
use validator::{Validate, ValidationErrors};

pub fn validate_model<T: Validate>(model: &T) -> MillwrightResult<()> {
    match model.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_messages = format_validation_errors(&errors);
            Err(MillwrightError::validation("model", error_messages))
        }
    }
}

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = match error.message.as_deref() {
                Some(message) => message.to_string(),
                None => match &error.code {
                    std::borrow::Cow::Borrowed("length") => {
                        format!("Length validation failed for field '{}'", field)
                    }
                    std::borrow::Cow::Borrowed("range") => {
                        format!("Value out of range for field '{}'", field)
                    }
                    _ => format!("Validation failed for field '{}': {}", field, error.code),
                },
            };
            messages.push(message);
        }
    }

    messages.join(", ")
}

/// Check a part number against the catalog format: an alphabetic category
/// prefix, a three digit equipment number and a two digit index, such as
/// `BEAR-001-02`.
pub fn is_valid_part_number(part_number: &str) -> bool {
    let part_regex = Regex::new(r"^[A-Za-z]+-\d{3}-\d{2}$").unwrap();
    part_regex.is_match(part_number)
}

pub fn validate_equipment_id(equipment_id: i32) -> MillwrightResult<()> {
    if !(MIN_EQUIPMENT_ID..=MAX_EQUIPMENT_ID).contains(&equipment_id) {
        return Err(MillwrightError::validation(
            "equipment_id",
            format!(
                "equipment_id must be between {} and {}. Got: {}",
                MIN_EQUIPMENT_ID, MAX_EQUIPMENT_ID, equipment_id
            ),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_part_numbers() {
        assert!(is_valid_part_number("BEAR-001-02"));
        assert!(is_valid_part_number("seal-102-11"));
        assert!(is_valid_part_number("GREASE-100-01"));
    }

    #[test]
    fn test_invalid_part_numbers() {
        assert!(!is_valid_part_number("BEAR-001"));
        assert!(!is_valid_part_number("BEAR-0001-02"));
        assert!(!is_valid_part_number("001-001-02"));
        assert!(!is_valid_part_number("OIL-FILTER-001-02"));
        assert!(!is_valid_part_number(""));
    }

    #[test]
    fn test_validate_equipment_id_range() {
        assert!(validate_equipment_id(1).is_ok());
        assert!(validate_equipment_id(100).is_ok());
        assert!(validate_equipment_id(0).is_err());
        assert!(validate_equipment_id(101).is_err());
        assert!(validate_equipment_id(-5).is_err());
    }

    #[test]
    fn test_validate_model_reports_field_messages() {
        let request = millwright_models::PartRequest::new("BEAR-001-02", -3);
        let error = validate_model(&request).unwrap_err();
        assert!(error.to_string().contains("Quantity needed cannot be negative"));
    }
}
