//! Procurement order models.
//!
//! Orders are derived from stock assessments at request time. They are
//! returned to the caller, not persisted.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line of a procurement order.
///
/// `order_quantity` is always positive; parts that need nothing ordered
/// never produce a line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    pub part_number: String,
    pub description: String,
    pub quantity_needed: i32,
    pub current_stock: i32,
    pub order_quantity: i32,
    pub unit_cost: Decimal,
    pub total_cost: Decimal,
    pub supplier: String,
}

/// A generated procurement order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcurementOrder {
    pub order_id: Uuid,
    pub order_date: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
    pub total_cost: Decimal,
}

impl ProcurementOrder {
    /// Stamp a fresh order around the given lines.
    ///
    /// The order total is the sum of the line totals; unknown costs
    /// contribute zero.
    pub fn new(lines: Vec<OrderLine>) -> Self {
        let total_cost = lines.iter().map(|line| line.total_cost).sum();
        Self {
            order_id: Uuid::new_v4(),
            order_date: Utc::now(),
            lines,
            total_cost,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn total_units(&self) -> i64 {
        self.lines.iter().map(|line| line.order_quantity as i64).sum()
    }
}

/// Outcome of reconciling stock assessments into an order.
///
/// A run where every part is already covered yields `NotRequired`, never an
/// order with zero lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum OrderDecision {
    NotRequired,
    Required(ProcurementOrder),
}

impl OrderDecision {
    pub fn order_needed(&self) -> bool {
        matches!(self, Self::Required(_))
    }

    pub fn into_order(self) -> Option<ProcurementOrder> {
        match self {
            Self::NotRequired => None,
            Self::Required(order) => Some(order),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(part_number: &str, order_quantity: i32, unit_cost: Decimal) -> OrderLine {
        OrderLine {
            part_number: part_number.to_string(),
            description: "Seal component for maintenance".to_string(),
            quantity_needed: order_quantity,
            current_stock: 0,
            order_quantity,
            unit_cost,
            total_cost: unit_cost * Decimal::from(order_quantity),
            supplier: "Reliable Parts Supply".to_string(),
        }
    }

    #[test]
    fn test_order_total_is_sum_of_line_totals() {
        let order = ProcurementOrder::new(vec![
            line("SEAL-011-02", 3, Decimal::new(1050, 2)),
            line("BEAR-011-01", 2, Decimal::new(4200, 2)),
        ]);

        // 3 * 10.50 + 2 * 42.00 = 115.50
        assert_eq!(order.total_cost, Decimal::new(11550, 2));
        assert_eq!(order.line_count(), 2);
        assert_eq!(order.total_units(), 5);
    }

    #[test]
    fn test_unknown_cost_lines_contribute_zero() {
        let order = ProcurementOrder::new(vec![
            line("SEAL-011-02", 3, Decimal::new(1050, 2)),
            line("GHOST-001-01", 5, Decimal::ZERO),
        ]);

        assert_eq!(order.total_cost, Decimal::new(3150, 2));
    }

    #[test]
    fn test_decision_accessors() {
        assert!(!OrderDecision::NotRequired.order_needed());
        assert!(OrderDecision::NotRequired.into_order().is_none());

        let decision = OrderDecision::Required(ProcurementOrder::new(vec![line(
            "SEAL-011-02",
            1,
            Decimal::ONE,
        )]));
        assert!(decision.order_needed());
        assert_eq!(decision.into_order().map(|o| o.line_count()), Some(1));
    }
}
