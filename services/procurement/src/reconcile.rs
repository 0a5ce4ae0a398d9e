//! Order Reconciliation
//!
//! Turns a batch of stock assessments into a procurement order. The
//! base order quantity is the shortfall against the request; parts
//! sitting below their reorder point are topped up past it with a
//! two-unit buffer, and unknown parts are ordered at the requested
//! quantity plus the same buffer at zero cost.

use rust_decimal::Decimal;

use millwright_models::{OrderDecision, OrderLine, ProcurementOrder, StockAssessment, StockStatus};

/// Safety buffer applied to reorder-point top-ups and unknown parts.
const ORDER_BUFFER: i32 = 2;

/// Reconcile assessments into an order decision.
///
/// Only assessments flagged `needs_order` produce lines; a batch where
/// every part is covered yields `NotRequired` rather than an empty order.
pub fn reconcile(assessments: &[StockAssessment]) -> OrderDecision {
    let lines: Vec<OrderLine> = assessments.iter().filter_map(order_line).collect();

    if lines.is_empty() {
        OrderDecision::NotRequired
    } else {
        OrderDecision::Required(ProcurementOrder::new(lines))
    }
}

fn order_line(assessment: &StockAssessment) -> Option<OrderLine> {
    if !assessment.needs_order {
        return None;
    }

    let order_quantity = order_quantity(assessment);

    Some(OrderLine {
        part_number: assessment.part_number.clone(),
        description: assessment.description.clone(),
        quantity_needed: assessment.quantity_needed,
        current_stock: assessment.current_stock,
        order_quantity,
        unit_cost: assessment.unit_cost,
        total_cost: Decimal::from(order_quantity) * assessment.unit_cost,
        supplier: assessment.supplier.clone(),
    })
}

fn order_quantity(assessment: &StockAssessment) -> i32 {
    if assessment.status == StockStatus::NotFound {
        return assessment.quantity_needed + ORDER_BUFFER;
    }

    let shortfall = (assessment.quantity_needed - assessment.current_stock).max(0);

    if assessment.current_stock < assessment.reorder_point {
        shortfall.max(assessment.reorder_point - assessment.current_stock + ORDER_BUFFER)
    } else {
        shortfall
    }
}
