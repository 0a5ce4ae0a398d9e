//! # Millwright Core Domain Models
//!
//! This module contains the core domain models for the Millwright workshop
//! maintenance and procurement system. All models implement serialization
//! with serde and validation with the validator crate.
//!
//! ## Key Models
//!
//! - **PartRequest**: One parsed line of a parts list (part number + quantity)
//! - **StockRecord**: Read-only procurement reference data, one row per part
//! - **StockAssessment**: Per-request classification of a part against stock
//! - **ProcurementOrder**: Order lines and totals derived from assessments
//! - **ServiceManual**: Maintenance reference data for one equipment unit
//!
//! ## Classification
//!
//! Stock status follows the shelf rules: enough stock for the request is
//! IN_STOCK regardless of the reorder point; otherwise at or above the
//! reorder point is LOW_STOCK and below it is OUT_OF_STOCK. Parts without a
//! reference record classify as NOT_FOUND rather than failing the request.

pub mod manual;
pub mod order;
pub mod part;
pub mod stock;

pub use manual::{EquipmentPart, EquipmentSummary, ServiceManual, MAX_EQUIPMENT_ID, MIN_EQUIPMENT_ID};
pub use order::{OrderDecision, OrderLine, ProcurementOrder};
pub use part::PartRequest;
pub use stock::{StockAssessment, StockRecord, StockStatus, StockSummary};

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_assessment_carries_request_quantity() {
        let record = StockRecord {
            part_number: "FILTER-009-01".to_string(),
            description: "Filter component for maintenance".to_string(),
            current_stock: 1,
            minimum_stock: 1,
            reorder_point: 3,
            unit_cost: Decimal::new(5500, 2),
            supplier: "Parts Warehouse".to_string(),
        };

        let assessment = StockAssessment::assess(&record, 1);
        assert_eq!(assessment.quantity_needed, 1);
        assert_eq!(assessment.status, StockStatus::InStock);
    }

    #[test]
    fn test_duplicate_requests_stay_separate() {
        let requests = vec![
            PartRequest::new("BEAR-001-02", 2),
            PartRequest::new("BEAR-001-02", 3),
        ];
        assert_eq!(requests.len(), 2);
        assert_ne!(requests[0], requests[1]);
    }
}
