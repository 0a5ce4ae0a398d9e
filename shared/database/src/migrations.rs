use anyhow::Result;
use sqlx::PgPool;

/// Create the procurement and maintenance schemas. Safe to run at every
/// service startup; all statements are idempotent.
pub async fn run_postgres_migrations(pool: &PgPool) -> Result<()> {
    tracing::info!("Running PostgreSQL migrations");

    sqlx::query("CREATE SCHEMA IF NOT EXISTS procurement")
        .execute(pool)
        .await?;

    sqlx::query("CREATE SCHEMA IF NOT EXISTS maintenance")
        .execute(pool)
        .await?;

    // Parts inventory reference data, one row per part number
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS procurement.parts_stock (
            part_number VARCHAR PRIMARY KEY,
            part_description TEXT NOT NULL,
            current_stock INTEGER NOT NULL DEFAULT 0,
            minimum_stock INTEGER NOT NULL DEFAULT 0,
            reorder_point INTEGER NOT NULL DEFAULT 0,
            unit_cost DECIMAL(10, 2) NOT NULL DEFAULT 0,
            supplier VARCHAR NOT NULL DEFAULT 'Unknown'
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Service manuals, one per equipment unit
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS maintenance.service_manual (
            unique_id INTEGER PRIMARY KEY,
            service_description TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Parts each equipment service calls for
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS maintenance.service_parts (
            equipment_id INTEGER NOT NULL REFERENCES maintenance.service_manual(unique_id),
            part VARCHAR NOT NULL,
            quantity INTEGER NOT NULL,
            PRIMARY KEY (equipment_id, part)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Maintenance demand against current stock, using the shelf-level
    // thresholds of the stock summary
    sqlx::query(
        r#"
        CREATE OR REPLACE VIEW procurement.stock_vs_maintenance AS
        SELECT
            sp.part,
            SUM(sp.quantity) AS total_quantity_required,
            ps.current_stock,
            ps.reorder_point,
            CASE
                WHEN ps.part_number IS NULL THEN 'NOT FOUND'
                WHEN ps.current_stock > ps.reorder_point THEN 'IN STOCK'
                WHEN ps.current_stock > ps.minimum_stock THEN 'LOW STOCK'
                ELSE 'OUT OF STOCK'
            END AS stock_status
        FROM maintenance.service_parts sp
        LEFT JOIN procurement.parts_stock ps ON ps.part_number = sp.part
        GROUP BY sp.part, ps.part_number, ps.current_stock, ps.reorder_point, ps.minimum_stock
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("PostgreSQL migrations completed");
    Ok(())
}
