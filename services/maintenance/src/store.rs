//! Manual Store
//!
//! Data-access seam for the maintenance service, mirroring the
//! procurement stock store: a Postgres-backed implementation for the
//! running service and an in-memory double for tests.

use anyhow::Result;
use async_trait::async_trait;

use millwright_database::{PostgresPool, ServiceManualRepository};
use millwright_models::{EquipmentPart, EquipmentSummary, ServiceManual};

/// Read access to service manuals and their parts lists.
#[async_trait]
pub trait ManualStore: Send + Sync {
    /// Manual for one equipment unit, if it exists.
    async fn find_manual(&self, equipment_id: i32) -> Result<Option<ServiceManual>>;

    /// Required parts for one equipment unit, ordered by part number.
    async fn parts_for_equipment(&self, equipment_id: i32) -> Result<Vec<EquipmentPart>>;

    /// Per-equipment summaries across the whole fleet.
    async fn list_equipment(&self) -> Result<Vec<EquipmentSummary>>;
}

/// Postgres-backed store used by the running service.
pub struct PgManualStore {
    repository: ServiceManualRepository,
}

impl PgManualStore {
    pub fn new(pool: PostgresPool) -> Self {
        Self {
            repository: ServiceManualRepository::new(pool),
        }
    }
}

#[async_trait]
impl ManualStore for PgManualStore {
    async fn find_manual(&self, equipment_id: i32) -> Result<Option<ServiceManual>> {
        self.repository.find_manual(equipment_id).await
    }

    async fn parts_for_equipment(&self, equipment_id: i32) -> Result<Vec<EquipmentPart>> {
        self.repository.parts_for_equipment(equipment_id).await
    }

    async fn list_equipment(&self) -> Result<Vec<EquipmentSummary>> {
        self.repository.list_equipment().await
    }
}
