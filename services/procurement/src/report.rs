//! Procurement Reports
//!
//! Markdown renderings of stock assessments, procurement orders and the
//! inventory summary, served alongside the JSON endpoints for clients
//! that want a human-readable digest.

use rust_decimal::Decimal;

use millwright_models::{OrderDecision, ProcurementOrder, StockAssessment, StockRecord, StockSummary};

/// Render the per-part stock analysis table.
pub fn render_stock_analysis(assessments: &[StockAssessment]) -> String {
    let mut out = format!(
        "## Parts Stock Analysis\n\n**Parts to check:** {}\n\n",
        assessments.len()
    );

    out.push_str("| Part Number | Description | Needed | Current | Status | Unit Cost | Supplier |\n");
    out.push_str("|-------------|-------------|--------|---------|--------|-----------|----------|\n");

    for assessment in assessments {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | ${:.2} | {} |\n",
            assessment.part_number,
            truncate_description(&assessment.description, 30),
            assessment.quantity_needed,
            assessment.current_stock,
            assessment.status,
            assessment.unit_cost,
            assessment.supplier,
        ));
    }

    out
}

/// Render an order decision: either the full order report or the
/// explicit no-order notice.
pub fn render_order_decision(decision: &OrderDecision) -> String {
    match decision {
        OrderDecision::NotRequired => {
            "## Procurement Order Status\n\nAll parts are in stock. No procurement order needed.\n"
                .to_string()
        }
        OrderDecision::Required(order) => render_order(order),
    }
}

fn render_order(order: &ProcurementOrder) -> String {
    let mut out = format!(
        "## Procurement Order\n\n**Order Date:** {}\n**Total Parts to Order:** {}\n\n**Parts to Order:**\n\n",
        order.order_date.format("%Y-%m-%d"),
        order.line_count(),
    );

    out.push_str("| Part Number | Description | Needed | Current | Order Qty | Unit Cost | Total Cost | Supplier |\n");
    out.push_str("|-------------|-------------|--------|---------|-----------|-----------|------------|----------|\n");

    for line in &order.lines {
        let (unit_cost, total_cost) = if line.unit_cost > Decimal::ZERO {
            (
                format!("${:.2}", line.unit_cost),
                format!("${:.2}", line.total_cost),
            )
        } else {
            ("N/A".to_string(), "N/A".to_string())
        };

        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} | {} |\n",
            line.part_number,
            truncate_description(&line.description, 25),
            line.quantity_needed,
            line.current_stock,
            line.order_quantity,
            unit_cost,
            total_cost,
            line.supplier,
        ));
    }

    out.push_str(&format!(
        "\n**Order Summary:**\n- **Total Parts:** {}\n- **Estimated Total Cost:** ${:.2}\n- **Priority:** High (Maintenance Required)\n\n",
        order.line_count(),
        order.total_cost,
    ));

    out.push_str(
        "**Next Steps:**\n\
         1. Review parts list and quantities\n\
         2. Contact suppliers for availability and pricing\n\
         3. Place orders for approved parts\n\
         4. Update inventory system upon receipt\n",
    );

    out
}

/// Render the inventory summary with its lowest-stock rows.
pub fn render_stock_summary(summary: &StockSummary, low_stock: &[StockRecord]) -> String {
    let mut out = format!(
        "## Procurement Stock Summary\n\n**Overall Status:**\n\
         - **Total Parts:** {}\n\
         - **In Stock:** {}\n\
         - **Low Stock:** {}\n\
         - **Out of Stock:** {}\n\
         - **Total Inventory Value:** ${}\n\n",
        summary.total_parts,
        summary.in_stock,
        summary.low_stock,
        summary.out_of_stock,
        grouped_currency(summary.total_inventory_value),
    );

    if low_stock.is_empty() {
        out.push_str("**Low Stock Items:** None\n");
        return out;
    }

    out.push_str("**Low Stock Items (Top 10):**\n\n");
    out.push_str("| Part Number | Description | Current | Min | Reorder | Unit Cost | Supplier |\n");
    out.push_str("|-------------|-------------|---------|-----|---------|-----------|----------|\n");

    for record in low_stock {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | ${:.2} | {} |\n",
            record.part_number,
            truncate_description(&record.description, 30),
            record.current_stock,
            record.minimum_stock,
            record.reorder_point,
            record.unit_cost,
            record.supplier,
        ));
    }

    out
}

/// Truncate a description to `max` characters with an ellipsis.
fn truncate_description(description: &str, max: usize) -> String {
    if description.chars().count() > max {
        let cut: String = description.chars().take(max).collect();
        format!("{cut}...")
    } else {
        description.to_string()
    }
}

/// Two-decimal currency with thousands separators, e.g. 12,345.60.
fn grouped_currency(value: Decimal) -> String {
    let rendered = format!("{:.2}", value);
    let (whole, cents) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{grouped}.{cents}")
}
