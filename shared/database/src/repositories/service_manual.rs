//! Service Manual Repository
//!
//! Read-side queries over the maintenance service manuals and their parts
//! requirements, plus the inserts used by demo seeding.

use anyhow::{Context, Result};
use sqlx::PgPool;

use millwright_models::{EquipmentPart, EquipmentSummary, ServiceManual};

pub struct ServiceManualRepository {
    pool: PgPool,
}

impl ServiceManualRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the service manual for one equipment unit.
    pub async fn find_manual(&self, equipment_id: i32) -> Result<Option<ServiceManual>> {
        let manual: Option<ServiceManual> = sqlx::query_as(
            r#"
            SELECT unique_id AS equipment_id, service_description
            FROM maintenance.service_manual
            WHERE unique_id = $1
            "#,
        )
        .bind(equipment_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch service manual")?;

        Ok(manual)
    }

    /// Parts the service procedure for one equipment unit calls for,
    /// ordered by part number.
    pub async fn parts_for_equipment(&self, equipment_id: i32) -> Result<Vec<EquipmentPart>> {
        let parts: Vec<EquipmentPart> = sqlx::query_as(
            r#"
            SELECT part, quantity
            FROM maintenance.service_parts
            WHERE equipment_id = $1
            ORDER BY part
            "#,
        )
        .bind(equipment_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch equipment parts")?;

        Ok(parts)
    }

    /// Aggregate listing of every equipment unit with a manual, including
    /// units whose manual lists no parts.
    pub async fn list_equipment(&self) -> Result<Vec<EquipmentSummary>> {
        let equipment: Vec<EquipmentSummary> = sqlx::query_as(
            r#"
            SELECT
                sm.unique_id AS equipment_id,
                sm.service_description,
                COUNT(sp.part) AS parts_count,
                COALESCE(SUM(sp.quantity), 0) AS total_quantity
            FROM maintenance.service_manual sm
            LEFT JOIN maintenance.service_parts sp ON sm.unique_id = sp.equipment_id
            GROUP BY sm.unique_id, sm.service_description
            ORDER BY sm.unique_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list equipment")?;

        Ok(equipment)
    }

    /// Distinct part numbers referenced by any service manual.
    pub async fn distinct_parts(&self) -> Result<Vec<String>> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT DISTINCT part FROM maintenance.service_parts ORDER BY part")
                .fetch_all(&self.pool)
                .await
                .context("Failed to fetch distinct maintenance parts")?;

        Ok(rows.into_iter().map(|r| r.0).collect())
    }

    /// Count equipment units with a manual.
    pub async fn count_manuals(&self) -> Result<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM maintenance.service_manual")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count service manuals")?;

        Ok(row.0)
    }

    /// Insert one service manual. Demo seeding only.
    pub async fn insert_manual(&self, manual: &ServiceManual) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO maintenance.service_manual (unique_id, service_description)
            VALUES ($1, $2)
            "#,
        )
        .bind(manual.equipment_id)
        .bind(&manual.service_description)
        .execute(&self.pool)
        .await
        .context("Failed to insert service manual")?;

        Ok(())
    }

    /// Insert one part requirement. Demo seeding only; a part repeated for
    /// the same equipment keeps its first quantity.
    pub async fn insert_part(&self, equipment_id: i32, part: &EquipmentPart) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO maintenance.service_parts (equipment_id, part, quantity)
            VALUES ($1, $2, $3)
            ON CONFLICT (equipment_id, part) DO NOTHING
            "#,
        )
        .bind(equipment_id)
        .bind(&part.part)
        .bind(part.quantity)
        .execute(&self.pool)
        .await
        .context("Failed to insert service part")?;

        Ok(())
    }
}
