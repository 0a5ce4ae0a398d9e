//! Demo Data Seeding
//!
//! Generates a self-consistent demo fleet: 100 equipment service manuals,
//! their required-parts lists, and a stock row for every referenced part.
//! Seeding only runs against empty tables so an existing installation is
//! never overwritten.

use anyhow::{Context, Result};
use rand::Rng;
use rust_decimal::Decimal;
use tracing::info;

use millwright_models::{EquipmentPart, ServiceManual, StockRecord};
use millwright_utils::validate_model;

use crate::postgres::PostgresPool;
use crate::repositories::{PartsStockRepository, ServiceManualRepository};

/// Equipment catalog: (type, model, manufacturer), cycled by equipment id.
const EQUIPMENT_TYPES: [(&str, &str, &str); 10] = [
    ("Turbine Engine", "GT-1000", "AeroTech Industries"),
    ("Compressor", "CP-2000", "CompTech Systems"),
    ("Pump Assembly", "PA-3000", "PumpWorks Inc"),
    ("Motor Drive", "MD-4000", "MotorTech Solutions"),
    ("Heat Exchanger", "HE-5000", "Thermal Systems"),
    ("Valve Assembly", "VA-6000", "ValveTech Corp"),
    ("Gear Box", "GB-7000", "GearWorks Ltd"),
    ("Control Panel", "CP-8000", "ControlTech"),
    ("Filter System", "FS-9000", "FilterTech"),
    ("Cooling Tower", "CT-1000", "CoolTech Industries"),
];

/// Part categories per equipment type, aligned with EQUIPMENT_TYPES.
const EQUIPMENT_PART_CATEGORIES: [[&str; 4]; 10] = [
    ["BEAR", "SEAL", "OIL-FILTER", "GREASE"],
    ["MOTOR", "BELT", "PULLEY", "COUPLING"],
    ["PUMP", "IMPELLER", "SHAFT", "BEARING"],
    ["DRIVE", "GEAR", "CHAIN", "SPROCKET"],
    ["HEAT", "TUBE", "FIN", "GASKET"],
    ["VALVE", "ACTUATOR", "POSITIONER", "SEAT"],
    ["GEAR", "PINION", "RACK", "LUBRICANT"],
    ["PANEL", "SWITCH", "RELAY", "FUSE"],
    ["FILTER", "ELEMENT", "HOUSING", "GASKET"],
    ["TOWER", "FAN", "DRIFT", "NOZZLE"],
];

const SUPPLIERS: [&str; 10] = [
    "Industrial Supply Co.",
    "Maintenance Parts Inc.",
    "Quality Bearings Ltd.",
    "Tech Components Corp.",
    "Reliable Parts Supply",
    "Precision Engineering",
    "Global Industrial",
    "Maintenance Solutions",
    "Parts Warehouse",
    "Industrial Equipment Co.",
];

/// Stocking profile for a part category prefix.
struct CategoryProfile {
    prefix: &'static str,
    minimum_stock: i32,
    reorder_point: i32,
    /// Unit cost range in cents, inclusive.
    cost_cents: (i64, i64),
}

/// Ordered by prefix priority: the first matching prefix wins, so OIL
/// claims OIL-FILTER parts and BEAR claims BEARING parts.
const STOCK_CATEGORIES: [CategoryProfile; 32] = [
    CategoryProfile { prefix: "BEAR", minimum_stock: 1, reorder_point: 3, cost_cents: (1_500, 15_000) },
    CategoryProfile { prefix: "SEAL", minimum_stock: 1, reorder_point: 3, cost_cents: (500, 4_500) },
    CategoryProfile { prefix: "GREASE", minimum_stock: 2, reorder_point: 4, cost_cents: (800, 2_500) },
    CategoryProfile { prefix: "OIL", minimum_stock: 2, reorder_point: 4, cost_cents: (1_200, 3_500) },
    CategoryProfile { prefix: "FILTER", minimum_stock: 1, reorder_point: 3, cost_cents: (2_000, 8_000) },
    CategoryProfile { prefix: "GASKET", minimum_stock: 1, reorder_point: 3, cost_cents: (300, 1_800) },
    CategoryProfile { prefix: "MOTOR", minimum_stock: 0, reorder_point: 2, cost_cents: (20_000, 80_000) },
    CategoryProfile { prefix: "BELT", minimum_stock: 1, reorder_point: 3, cost_cents: (2_500, 7_500) },
    CategoryProfile { prefix: "PUMP", minimum_stock: 0, reorder_point: 2, cost_cents: (15_000, 50_000) },
    CategoryProfile { prefix: "VALVE", minimum_stock: 1, reorder_point: 3, cost_cents: (8_000, 30_000) },
    CategoryProfile { prefix: "GEAR", minimum_stock: 0, reorder_point: 2, cost_cents: (12_000, 40_000) },
    CategoryProfile { prefix: "HEAT", minimum_stock: 1, reorder_point: 3, cost_cents: (4_500, 18_000) },
    CategoryProfile { prefix: "TUBE", minimum_stock: 1, reorder_point: 3, cost_cents: (3_000, 12_000) },
    CategoryProfile { prefix: "FAN", minimum_stock: 0, reorder_point: 2, cost_cents: (9_000, 25_000) },
    CategoryProfile { prefix: "TOWER", minimum_stock: 0, reorder_point: 2, cost_cents: (50_000, 150_000) },
    CategoryProfile { prefix: "NOZZLE", minimum_stock: 1, reorder_point: 3, cost_cents: (1_500, 6_000) },
    CategoryProfile { prefix: "DRIFT", minimum_stock: 1, reorder_point: 3, cost_cents: (2_500, 8_000) },
    CategoryProfile { prefix: "FIN", minimum_stock: 1, reorder_point: 3, cost_cents: (800, 3_500) },
    CategoryProfile { prefix: "IMPELLER", minimum_stock: 0, reorder_point: 2, cost_cents: (12_000, 45_000) },
    CategoryProfile { prefix: "SHAFT", minimum_stock: 0, reorder_point: 2, cost_cents: (20_000, 60_000) },
    CategoryProfile { prefix: "CHAIN", minimum_stock: 1, reorder_point: 3, cost_cents: (4_000, 12_000) },
    CategoryProfile { prefix: "SPROCKET", minimum_stock: 1, reorder_point: 3, cost_cents: (3_500, 9_500) },
    CategoryProfile { prefix: "ACTUATOR", minimum_stock: 0, reorder_point: 2, cost_cents: (25_000, 80_000) },
    CategoryProfile { prefix: "POSITIONER", minimum_stock: 0, reorder_point: 2, cost_cents: (18_000, 50_000) },
    CategoryProfile { prefix: "ELEMENT", minimum_stock: 1, reorder_point: 3, cost_cents: (1_500, 6_500) },
    CategoryProfile { prefix: "HOUSING", minimum_stock: 1, reorder_point: 3, cost_cents: (4_500, 15_000) },
    CategoryProfile { prefix: "SWITCH", minimum_stock: 1, reorder_point: 3, cost_cents: (2_500, 8_000) },
    CategoryProfile { prefix: "RELAY", minimum_stock: 1, reorder_point: 3, cost_cents: (1_800, 5_500) },
    CategoryProfile { prefix: "FUSE", minimum_stock: 2, reorder_point: 4, cost_cents: (500, 2_500) },
    CategoryProfile { prefix: "LUBRICANT", minimum_stock: 1, reorder_point: 3, cost_cents: (1_200, 4_000) },
    CategoryProfile { prefix: "PINION", minimum_stock: 0, reorder_point: 2, cost_cents: (9_500, 28_000) },
    CategoryProfile { prefix: "RACK", minimum_stock: 0, reorder_point: 2, cost_cents: (12_000, 35_000) },
];

const GENERIC_DESCRIPTION: &str = "General maintenance component";

/// First stocking profile whose prefix matches the part number.
fn category_profile(part_number: &str) -> Option<&'static CategoryProfile> {
    STOCK_CATEGORIES.iter().find(|c| part_number.starts_with(c.prefix))
}

/// Quantity heuristics keyed on category substrings. FILTER is checked
/// before OIL so OIL-FILTER parts get the filter quantity.
fn demo_part_quantity(category: &str, equipment_id: i32) -> i32 {
    if category.contains("BEAR") {
        2 + equipment_id % 3
    } else if category.contains("SEAL") {
        1 + equipment_id % 2
    } else if category.contains("FILTER") {
        1
    } else if category.contains("GREASE") {
        2 + equipment_id % 4
    } else if category.contains("OIL") {
        1 + equipment_id % 3
    } else if category.contains("GASKET") {
        1 + equipment_id % 2
    } else {
        1 + equipment_id % 3
    }
}

/// Generate the service manual for one equipment unit.
pub fn demo_service_manual(equipment_id: i32) -> ServiceManual {
    let idx = ((equipment_id - 1).rem_euclid(10)) as usize;
    let (equipment_type, model, manufacturer) = EQUIPMENT_TYPES[idx];
    let serial = format!("{}-{:03}-2024", manufacturer[..2].to_uppercase(), equipment_id);

    let service_description = format!(
        "# Service Manual - Equipment ID: {equipment_id}\n\n\
         ## Equipment Overview\n\
         **Equipment Type:** {equipment_type}\n\
         **Model:** {model}\n\
         **Manufacturer:** {manufacturer}\n\
         **Serial Number:** {serial}\n\n\
         ## Maintenance Schedule\n\
         - **Inspection Interval:** Every {inspection} operating hours\n\
         - **Major Service:** Every {major} operating hours\n\
         - **Critical Components Check:** Every {critical} operating hours\n\n\
         ## Service Procedures\n\
         Shut down and lock out the equipment, inspect wear components,\n\
         restore lubrication to specification and test before returning\n\
         to service.\n",
        inspection = 500 + equipment_id % 300,
        major = 2000 + equipment_id % 1000,
        critical = 1000 + equipment_id % 500,
    );

    ServiceManual { equipment_id, service_description }
}

/// Generate the required-parts list for one equipment unit: four parts
/// from its category set plus four common consumables. The list may
/// contain a repeated part number when a category set already includes
/// one of the consumable categories.
pub fn demo_equipment_parts(equipment_id: i32) -> Vec<EquipmentPart> {
    let idx = ((equipment_id - 1).rem_euclid(10)) as usize;
    let mut parts = Vec::with_capacity(8);

    for (i, category) in EQUIPMENT_PART_CATEGORIES[idx].iter().enumerate() {
        parts.push(EquipmentPart {
            part: format!("{}-{:03}-{:02}", category, equipment_id, i + 1),
            quantity: demo_part_quantity(category, equipment_id),
        });
    }

    for category in ["GREASE", "OIL", "FILTER", "GASKET"] {
        parts.push(EquipmentPart {
            part: format!("{}-{:03}-01", category, equipment_id),
            quantity: demo_part_quantity(category, equipment_id),
        });
    }

    parts
}

/// Generate a stock row for one part number.
///
/// Categorized parts are skewed low (90% below their reorder point) so
/// the demo fleet produces interesting procurement orders; uncategorized
/// parts get a flat generic stocking profile.
pub fn demo_stock_record(part_number: &str, rng: &mut impl Rng) -> StockRecord {
    let (description, minimum_stock, reorder_point, current_stock, cost_cents) =
        match category_profile(part_number) {
            Some(profile) => {
                let mut label = profile.prefix.to_lowercase();
                if let Some(first) = label.get_mut(..1) {
                    first.make_ascii_uppercase();
                }
                let current_stock = if rng.gen_bool(0.9) {
                    rng.gen_range(0..profile.reorder_point)
                } else {
                    rng.gen_range(profile.reorder_point..=profile.reorder_point * 3)
                };
                (
                    format!("{label} component for maintenance"),
                    profile.minimum_stock,
                    profile.reorder_point,
                    current_stock,
                    rng.gen_range(profile.cost_cents.0..=profile.cost_cents.1),
                )
            }
            None => (
                GENERIC_DESCRIPTION.to_string(),
                5,
                15,
                rng.gen_range(5..=50),
                rng.gen_range(1_000..=10_000),
            ),
        };

    let supplier = SUPPLIERS[rng.gen_range(0..SUPPLIERS.len())];

    StockRecord {
        part_number: part_number.to_string(),
        description,
        current_stock,
        minimum_stock,
        reorder_point,
        unit_cost: Decimal::new(cost_cents, 2),
        supplier: supplier.to_string(),
    }
}

/// Seed demo manuals, parts lists and stock rows. Each table is only
/// populated when it is empty.
pub async fn seed_demo_data(pool: &PostgresPool) -> Result<()> {
    let manual_repo = ServiceManualRepository::new(pool.clone());
    let stock_repo = PartsStockRepository::new(pool.clone());

    if manual_repo.count_manuals().await? == 0 {
        info!("Seeding demo service manuals");
        for equipment_id in 1..=100 {
            let manual = demo_service_manual(equipment_id);
            validate_model(&manual)?;
            manual_repo.insert_manual(&manual).await?;

            for part in demo_equipment_parts(equipment_id) {
                manual_repo.insert_part(manual.equipment_id, &part).await?;
            }
        }
        info!(manuals = 100, "Demo service manuals seeded");
    } else {
        info!("Service manuals already present, skipping manual seed");
    }

    if stock_repo.count().await? == 0 {
        let part_numbers = manual_repo.distinct_parts().await?;
        info!(parts = part_numbers.len(), "Seeding demo stock records");

        // ThreadRng is not Send, so generate every record before inserting.
        let records: Vec<StockRecord> = {
            let mut rng = rand::thread_rng();
            part_numbers.iter().map(|p| demo_stock_record(p, &mut rng)).collect()
        };

        for record in &records {
            validate_model(record)?;
            stock_repo.insert(record).await?;
        }
        info!(records = records.len(), "Demo stock records seeded");

        let breakdown: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT stock_status, COUNT(*)
            FROM procurement.stock_vs_maintenance
            GROUP BY stock_status
            ORDER BY stock_status
            "#,
        )
        .fetch_all(pool)
        .await
        .context("Failed to summarize demo stock status")?;

        for (status, count) in breakdown {
            info!(status = %status, count, "Demo stock status");
        }
    } else {
        info!("Stock records already present, skipping stock seed");
    }

    Ok(())
}
