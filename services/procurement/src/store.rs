//! Stock Store
//!
//! Data-access seam for the procurement service. The running service
//! uses the Postgres-backed store; tests substitute in-memory doubles.

use anyhow::Result;
use async_trait::async_trait;

use millwright_database::{PartsStockRepository, PostgresPool};
use millwright_models::{StockRecord, StockSummary};

/// Read access to the parts stock reference data.
#[async_trait]
pub trait StockStore: Send + Sync {
    /// Exact-match lookup of a single part number.
    async fn find_part(&self, part_number: &str) -> Result<Option<StockRecord>>;

    /// Shelf-level aggregate counts and inventory valuation.
    async fn summary(&self) -> Result<StockSummary>;

    /// Rows at or below their reorder point, lowest stock first.
    async fn low_stock(&self, limit: i64) -> Result<Vec<StockRecord>>;
}

/// Postgres-backed store used by the running service.
pub struct PgStockStore {
    repository: PartsStockRepository,
}

impl PgStockStore {
    pub fn new(pool: PostgresPool) -> Self {
        Self {
            repository: PartsStockRepository::new(pool),
        }
    }
}

#[async_trait]
impl StockStore for PgStockStore {
    async fn find_part(&self, part_number: &str) -> Result<Option<StockRecord>> {
        self.repository.find_by_part_number(part_number).await
    }

    async fn summary(&self) -> Result<StockSummary> {
        self.repository.summary().await
    }

    async fn low_stock(&self, limit: i64) -> Result<Vec<StockRecord>> {
        self.repository.low_stock(limit).await
    }
}

#[cfg(test)]
pub mod doubles {
    use super::*;
    use anyhow::anyhow;
    use rust_decimal::Decimal;
    use std::collections::HashMap;

    /// Fixed-content store for service tests.
    pub struct InMemoryStockStore {
        records: HashMap<String, StockRecord>,
    }

    impl InMemoryStockStore {
        pub fn new(records: impl IntoIterator<Item = StockRecord>) -> Self {
            Self {
                records: records
                    .into_iter()
                    .map(|r| (r.part_number.clone(), r))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl StockStore for InMemoryStockStore {
        async fn find_part(&self, part_number: &str) -> Result<Option<StockRecord>> {
            Ok(self.records.get(part_number).cloned())
        }

        async fn summary(&self) -> Result<StockSummary> {
            let mut summary = StockSummary {
                total_parts: 0,
                in_stock: 0,
                low_stock: 0,
                out_of_stock: 0,
                total_inventory_value: Decimal::ZERO,
            };

            for record in self.records.values() {
                summary.total_parts += 1;
                if record.current_stock > record.reorder_point {
                    summary.in_stock += 1;
                } else if record.current_stock > record.minimum_stock {
                    summary.low_stock += 1;
                } else {
                    summary.out_of_stock += 1;
                }
                summary.total_inventory_value +=
                    Decimal::from(record.current_stock) * record.unit_cost;
            }

            Ok(summary)
        }

        async fn low_stock(&self, limit: i64) -> Result<Vec<StockRecord>> {
            let mut rows: Vec<StockRecord> = self
                .records
                .values()
                .filter(|r| r.current_stock <= r.reorder_point)
                .cloned()
                .collect();
            rows.sort_by_key(|r| r.current_stock);
            rows.truncate(limit as usize);
            Ok(rows)
        }
    }

    /// Store that answers from its records until the named part is
    /// queried, then fails. Exercises mid-batch abort behavior.
    pub struct FailingStockStore {
        records: HashMap<String, StockRecord>,
        fail_on: String,
    }

    impl FailingStockStore {
        pub fn failing_on(
            fail_on: impl Into<String>,
            records: impl IntoIterator<Item = StockRecord>,
        ) -> Self {
            Self {
                records: records
                    .into_iter()
                    .map(|r| (r.part_number.clone(), r))
                    .collect(),
                fail_on: fail_on.into(),
            }
        }
    }

    #[async_trait]
    impl StockStore for FailingStockStore {
        async fn find_part(&self, part_number: &str) -> Result<Option<StockRecord>> {
            if part_number == self.fail_on {
                return Err(anyhow!("connection reset by peer"));
            }
            Ok(self.records.get(part_number).cloned())
        }

        async fn summary(&self) -> Result<StockSummary> {
            Err(anyhow!("connection reset by peer"))
        }

        async fn low_stock(&self, _limit: i64) -> Result<Vec<StockRecord>> {
            Err(anyhow!("connection reset by peer"))
        }
    }
}
