//! Service manual models.
//!
//! Maintenance reference data: one service manual per equipment unit,
//! identified by equipment ids 1 through 100, plus the parts each service
//! procedure calls for.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Lowest equipment id with a service manual.
pub const MIN_EQUIPMENT_ID: i32 = 1;
/// Highest equipment id with a service manual.
pub const MAX_EQUIPMENT_ID: i32 = 100;

/// A service manual entry for one equipment unit.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Validate, PartialEq, Eq)]
pub struct ServiceManual {
    #[validate(range(min = 1, max = 100, message = "Equipment id must be between 1 and 100"))]
    pub equipment_id: i32,
    #[validate(length(min = 1, message = "Service description cannot be empty"))]
    pub service_description: String,
}

/// One part requirement from an equipment service manual.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct EquipmentPart {
    pub part: String,
    pub quantity: i32,
}

/// Aggregate listing row for one equipment unit, including units whose
/// manual lists no parts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct EquipmentSummary {
    pub equipment_id: i32,
    pub service_description: String,
    pub parts_count: i64,
    pub total_quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equipment_id_range_validation() {
        let manual = ServiceManual {
            equipment_id: 101,
            service_description: "Routine bearing inspection".to_string(),
        };
        assert!(manual.validate().is_err());

        let manual = ServiceManual {
            equipment_id: 100,
            service_description: "Routine bearing inspection".to_string(),
        };
        assert!(manual.validate().is_ok());
    }
}
