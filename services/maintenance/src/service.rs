//! Maintenance Service
//!
//! Service manual and required-parts lookups for the equipment fleet.

use std::sync::Arc;

use tracing::info;

use millwright_models::{EquipmentPart, EquipmentSummary, ServiceManual};
use millwright_utils::{validate_equipment_id, MillwrightError, MillwrightResult};

use crate::store::ManualStore;

#[derive(Clone)]
pub struct MaintenanceService {
    store: Arc<dyn ManualStore>,
}

impl MaintenanceService {
    pub fn new(store: Arc<dyn ManualStore>) -> Self {
        Self { store }
    }

    /// Service manual and required parts for one equipment unit.
    pub async fn get_service_manual(
        &self,
        equipment_id: i32,
    ) -> MillwrightResult<(ServiceManual, Vec<EquipmentPart>)> {
        validate_equipment_id(equipment_id)?;

        let manual = self
            .store
            .find_manual(equipment_id)
            .await
            .map_err(|e| MillwrightError::database(e.to_string()))?
            .ok_or_else(|| {
                MillwrightError::not_found(format!("service manual for equipment {equipment_id}"))
            })?;

        let parts = self
            .store
            .parts_for_equipment(equipment_id)
            .await
            .map_err(|e| MillwrightError::database(e.to_string()))?;

        info!(equipment_id, parts = parts.len(), "Service manual retrieved");
        Ok((manual, parts))
    }

    /// Required-parts list for one equipment unit.
    ///
    /// Existence is checked before the parts query so an unknown unit is
    /// not mistaken for a unit without parts.
    pub async fn get_equipment_parts(
        &self,
        equipment_id: i32,
    ) -> MillwrightResult<(ServiceManual, Vec<EquipmentPart>)> {
        validate_equipment_id(equipment_id)?;

        let manual = self
            .store
            .find_manual(equipment_id)
            .await
            .map_err(|e| MillwrightError::database(e.to_string()))?
            .ok_or_else(|| MillwrightError::not_found(format!("equipment {equipment_id}")))?;

        let parts = self
            .store
            .parts_for_equipment(equipment_id)
            .await
            .map_err(|e| MillwrightError::database(e.to_string()))?;

        Ok((manual, parts))
    }

    /// Fleet-wide equipment summaries, including zero-part units.
    pub async fn list_equipment(&self) -> MillwrightResult<Vec<EquipmentSummary>> {
        self.store
            .list_equipment()
            .await
            .map_err(|e| MillwrightError::database(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::doubles::InMemoryManualStore;
    use proptest::prelude::*;

    fn manual(equipment_id: i32) -> ServiceManual {
        ServiceManual {
            equipment_id,
            service_description: format!("# Service Manual - Equipment ID: {equipment_id}"),
        }
    }

    fn part(part: &str, quantity: i32) -> EquipmentPart {
        EquipmentPart {
            part: part.to_string(),
            quantity,
        }
    }

    fn service() -> MaintenanceService {
        MaintenanceService::new(Arc::new(InMemoryManualStore::new(
            vec![manual(1), manual(2)],
            vec![(1, vec![part("SEAL-001-02", 2), part("BEAR-001-01", 3)])],
        )))
    }

    #[tokio::test]
    async fn test_manual_lookup_returns_sorted_parts() {
        let (manual, parts) = service().get_service_manual(1).await.unwrap();

        assert_eq!(manual.equipment_id, 1);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].part, "BEAR-001-01");
        assert_eq!(parts[1].part, "SEAL-001-02");
    }

    #[tokio::test]
    async fn test_manual_lookup_for_absent_unit_is_not_found() {
        let err = service().get_service_manual(42).await.unwrap_err();

        assert!(matches!(err, MillwrightError::NotFound { .. }));
        assert_eq!(err.to_string(), "Not found: service manual for equipment 42");
    }

    #[tokio::test]
    async fn test_parts_lookup_for_absent_unit_is_not_found() {
        let err = service().get_equipment_parts(42).await.unwrap_err();

        assert_eq!(err.to_string(), "Not found: equipment 42");
    }

    #[tokio::test]
    async fn test_unit_without_parts_yields_empty_list() {
        let (_, parts) = service().get_equipment_parts(2).await.unwrap();
        assert!(parts.is_empty());
    }

    #[tokio::test]
    async fn test_list_equipment_includes_zero_part_units() {
        let summaries = service().list_equipment().await.unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].parts_count, 2);
        assert_eq!(summaries[0].total_quantity, 5);
        assert_eq!(summaries[1].parts_count, 0);
        assert_eq!(summaries[1].total_quantity, 0);
    }

    proptest! {
        /// Ids outside the fleet range fail validation before any lookup.
        #[test]
        fn prop_out_of_range_ids_are_rejected(
            equipment_id in prop_oneof![i32::MIN..1, 101..i32::MAX],
        ) {
            let err = tokio_test::block_on(service().get_service_manual(equipment_id))
                .unwrap_err();

            let is_validation = matches!(err, MillwrightError::Validation { .. });
            prop_assert!(is_validation);
            prop_assert!(err.to_string().contains("must be between 1 and 100"));
        }
    }
}
