//! Procurement Service
//!
//! Operations behind the HTTP surface: parse a free-text parts list,
//! assess stock for every requested line, and reconcile the batch into
//! a procurement order.

use std::sync::Arc;

use tracing::{info, warn};

use millwright_models::{OrderDecision, PartRequest, StockAssessment, StockRecord, StockSummary};
use millwright_utils::{MillwrightError, MillwrightResult, PartsListParser};

use crate::reconcile::reconcile;
use crate::store::StockStore;

const EMPTY_PARTS_LIST_MESSAGE: &str =
    "No valid parts found in the input. Expected format: 'PART-XXX-XX: X units' per line";

/// Number of low-stock rows attached to the inventory summary.
const LOW_STOCK_LIMIT: i64 = 10;

#[derive(Clone)]
pub struct ProcurementService {
    store: Arc<dyn StockStore>,
    parser: PartsListParser,
}

impl ProcurementService {
    pub fn new(store: Arc<dyn StockStore>) -> Self {
        Self {
            store,
            parser: PartsListParser::default(),
        }
    }

    /// Parse a free-text parts list into part requests.
    ///
    /// Unparseable lines are dropped; the batch fails only when nothing
    /// parseable remains.
    pub fn parse_parts_list(&self, parts_list: &str) -> MillwrightResult<Vec<PartRequest>> {
        let requests = self.parser.parse(parts_list);
        if requests.is_empty() {
            return Err(MillwrightError::invalid_input(EMPTY_PARTS_LIST_MESSAGE));
        }
        Ok(requests)
    }

    /// Parse a parts list and assess stock for every requested line.
    ///
    /// Parts are looked up one at a time in request order. A store
    /// failure aborts the whole batch; a missing part does not.
    pub async fn check_stock(&self, parts_list: &str) -> MillwrightResult<Vec<StockAssessment>> {
        let requests = self.parse_parts_list(parts_list)?;
        info!(parts = requests.len(), "Checking stock for parts list");

        let mut assessments = Vec::with_capacity(requests.len());
        for request in &requests {
            let record = self
                .store
                .find_part(&request.part_number)
                .await
                .map_err(|e| MillwrightError::database(e.to_string()))?;

            let assessment = match record {
                Some(record) => StockAssessment::assess(&record, request.quantity_needed),
                None => {
                    warn!(part_number = %request.part_number, "Part not in procurement system");
                    StockAssessment::missing(request.part_number.clone(), request.quantity_needed)
                }
            };
            assessments.push(assessment);
        }

        Ok(assessments)
    }

    /// Assess stock for a parts list and reconcile it into an order
    /// decision.
    pub async fn generate_order(&self, parts_list: &str) -> MillwrightResult<OrderDecision> {
        let assessments = self.check_stock(parts_list).await?;
        let decision = reconcile(&assessments);

        match &decision {
            OrderDecision::NotRequired => info!("All parts covered, no order required"),
            OrderDecision::Required(order) => info!(
                lines = order.line_count(),
                total_cost = %order.total_cost,
                "Procurement order generated"
            ),
        }

        Ok(decision)
    }

    /// Shelf-level inventory summary plus the lowest-stock rows.
    pub async fn stock_summary(&self) -> MillwrightResult<(StockSummary, Vec<StockRecord>)> {
        let summary = self
            .store
            .summary()
            .await
            .map_err(|e| MillwrightError::database(e.to_string()))?;
        let low_stock = self
            .store
            .low_stock(LOW_STOCK_LIMIT)
            .await
            .map_err(|e| MillwrightError::database(e.to_string()))?;

        Ok((summary, low_stock))
    }
}
