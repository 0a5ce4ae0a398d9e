//! Stock reference models for the Millwright procurement system.
//!
//! This module defines the read-only procurement reference data and the
//! request-scoped assessments derived from it. Stock records are maintained
//! by an upstream inventory process; the lookup services never write them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use validator::{Validate, ValidationError};

/// One row of procurement reference data for a part.
///
/// Exactly one record exists per part number.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Validate, PartialEq)]
pub struct StockRecord {
    #[validate(length(min = 1, max = 64, message = "Part number must be between 1 and 64 characters"))]
    pub part_number: String,
    pub description: String,
    #[validate(range(min = 0, message = "Current stock cannot be negative"))]
    pub current_stock: i32,
    #[validate(range(min = 0, message = "Minimum stock cannot be negative"))]
    pub minimum_stock: i32,
    #[validate(range(min = 0, message = "Reorder point cannot be negative"))]
    pub reorder_point: i32,
    #[validate(custom = "validate_unit_cost")]
    pub unit_cost: Decimal,
    pub supplier: String,
}

fn validate_unit_cost(unit_cost: &Decimal) -> Result<(), ValidationError> {
    if unit_cost.is_sign_negative() {
        return Err(ValidationError::new("unit_cost_negative"));
    }
    Ok(())
}

/// Classification of one part request against the current stock position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
    NotFound,
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InStock => "IN STOCK",
            Self::LowStock => "LOW STOCK",
            Self::OutOfStock => "OUT OF STOCK",
            Self::NotFound => "NOT FOUND",
        };
        f.write_str(label)
    }
}

/// Derived view of one part request against the stock reference data.
///
/// Assessments are request-scoped and never persisted. One assessment is
/// produced per requested line, including repeated part numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockAssessment {
    pub part_number: String,
    pub description: String,
    pub quantity_needed: i32,
    pub current_stock: i32,
    pub minimum_stock: i32,
    pub reorder_point: i32,
    pub status: StockStatus,
    pub needs_order: bool,
    pub unit_cost: Decimal,
    pub supplier: String,
}

impl StockAssessment {
    /// Classify a found stock record against the requested quantity.
    ///
    /// Sufficient stock wins outright: a part with enough units on hand is
    /// IN_STOCK even when the shelf level sits below its reorder point.
    pub fn assess(record: &StockRecord, quantity_needed: i32) -> Self {
        let status = if record.current_stock >= quantity_needed {
            StockStatus::InStock
        } else if record.current_stock >= record.reorder_point {
            StockStatus::LowStock
        } else {
            StockStatus::OutOfStock
        };

        Self {
            part_number: record.part_number.clone(),
            description: record.description.clone(),
            quantity_needed,
            current_stock: record.current_stock,
            minimum_stock: record.minimum_stock,
            reorder_point: record.reorder_point,
            status,
            needs_order: status != StockStatus::InStock,
            unit_cost: record.unit_cost,
            supplier: record.supplier.clone(),
        }
    }

    /// Synthesize the assessment for a part number with no reference record.
    ///
    /// Absence of reference data is a classification, not an error: the part
    /// still needs ordering, with zero stock and unknown cost.
    pub fn missing(part_number: impl Into<String>, quantity_needed: i32) -> Self {
        Self {
            part_number: part_number.into(),
            description: "Not in procurement system".to_string(),
            quantity_needed,
            current_stock: 0,
            minimum_stock: 0,
            reorder_point: 0,
            status: StockStatus::NotFound,
            needs_order: true,
            unit_cost: Decimal::ZERO,
            supplier: "Unknown".to_string(),
        }
    }
}

/// Aggregate counts over the whole parts inventory.
///
/// Counts use the shelf-level thresholds (no requested quantity exists at
/// this granularity): above reorder point counts as in stock, at or below
/// the minimum counts as out of stock.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct StockSummary {
    pub total_parts: i64,
    pub in_stock: i64,
    pub low_stock: i64,
    pub out_of_stock: i64,
    pub total_inventory_value: Decimal,
}
