//! Parts Stock Repository
//!
//! Read-side queries over the procurement parts inventory, plus the insert
//! used by demo seeding. Uses runtime SQL queries (unchecked) to avoid
//! requiring DATABASE_URL at compile time.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use millwright_models::{StockRecord, StockSummary};

pub struct PartsStockRepository {
    pool: PgPool,
}

impl PartsStockRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the reference record for one part, by exact part number.
    pub async fn find_by_part_number(&self, part_number: &str) -> Result<Option<StockRecord>> {
        let row: Option<PartsStockRow> = sqlx::query_as(
            r#"
            SELECT part_number, part_description, current_stock,
                   minimum_stock, reorder_point, unit_cost, supplier
            FROM procurement.parts_stock
            WHERE part_number = $1
            "#,
        )
        .bind(part_number)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch stock record by part number")?;

        Ok(row.map(|r| r.into()))
    }

    /// Whole-inventory aggregate counts using the shelf-level thresholds.
    pub async fn summary(&self) -> Result<StockSummary> {
        let summary: StockSummary = sqlx::query_as(
            r#"
            SELECT
                COUNT(*) AS total_parts,
                COALESCE(SUM(CASE WHEN current_stock > reorder_point THEN 1 ELSE 0 END), 0) AS in_stock,
                COALESCE(SUM(CASE WHEN current_stock <= reorder_point AND current_stock > minimum_stock THEN 1 ELSE 0 END), 0) AS low_stock,
                COALESCE(SUM(CASE WHEN current_stock <= minimum_stock THEN 1 ELSE 0 END), 0) AS out_of_stock,
                COALESCE(SUM(current_stock * unit_cost), 0) AS total_inventory_value
            FROM procurement.parts_stock
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .context("Failed to fetch stock summary")?;

        Ok(summary)
    }

    /// Parts at or below their reorder point, lowest stock first.
    pub async fn low_stock(&self, limit: i64) -> Result<Vec<StockRecord>> {
        let rows: Vec<PartsStockRow> = sqlx::query_as(
            r#"
            SELECT part_number, part_description, current_stock,
                   minimum_stock, reorder_point, unit_cost, supplier
            FROM procurement.parts_stock
            WHERE current_stock <= reorder_point
            ORDER BY current_stock ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch low stock records")?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// Count stocked part numbers.
    pub async fn count(&self) -> Result<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM procurement.parts_stock")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count stock records")?;

        Ok(row.0)
    }

    /// Insert one reference record. Used by demo seeding only; the lookup
    /// services never write stock.
    pub async fn insert(&self, record: &StockRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO procurement.parts_stock
                (part_number, part_description, current_stock,
                 minimum_stock, reorder_point, unit_cost, supplier)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&record.part_number)
        .bind(&record.description)
        .bind(record.current_stock)
        .bind(record.minimum_stock)
        .bind(record.reorder_point)
        .bind(record.unit_cost)
        .bind(&record.supplier)
        .execute(&self.pool)
        .await
        .context("Failed to insert stock record")?;

        Ok(())
    }
}

/// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct PartsStockRow {
    part_number: String,
    part_description: String,
    current_stock: i32,
    minimum_stock: i32,
    reorder_point: i32,
    unit_cost: Decimal,
    supplier: String,
}

impl From<PartsStockRow> for StockRecord {
    fn from(row: PartsStockRow) -> Self {
        Self {
            part_number: row.part_number,
            description: row.part_description,
            current_stock: row.current_stock,
            minimum_stock: row.minimum_stock,
            reorder_point: row.reorder_point,
            unit_cost: row.unit_cost,
            supplier: row.supplier,
        }
    }
}
