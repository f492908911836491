use contracts::domain::StoredRecord;
use contracts::shared::errors::StoreError;
use serde_json::Value;

use super::seed;
use super::storage::StorageBackend;

/// Sentinel key; its presence means the demo dataset was already installed.
const SEED_SENTINEL_KEY: &str = "qinv_seeded";

/// Simulated network latency on reads, wasm only.
#[cfg(target_arch = "wasm32")]
const READ_LATENCY_MS: u32 = 200;

/// Async record store over a raw key-value backend
///
/// Each entity collection is one JSON array under `qinv_<entity>`. Every
/// mutation rewrites the whole affected collection; reads never write.
/// Operations are async so callers already hold the contract a real
/// network-backed store would present; dropping a pending future is safe.
#[derive(Clone)]
pub struct DataService<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> DataService<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Every record currently stored for `E`. Never fails: a missing key,
    /// corrupt JSON, or an unreadable record resolves to "fewer records",
    /// not an error.
    pub async fn get_all<E: StoredRecord>(&self) -> Vec<E> {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::TimeoutFuture::new(READ_LATENCY_MS).await;

        self.read_collection::<E>()
            .into_iter()
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect()
    }

    /// Prepends `record` (collections are newest-first) and persists.
    /// The identifier comes populated from the caller; no uniqueness check
    /// is made here.
    pub async fn create<E: StoredRecord>(&self, record: E) -> Result<E, StoreError> {
        let mut items = self.read_collection::<E>();
        items.insert(0, serde_json::to_value(&record)?);
        self.write_collection::<E>(&items)?;
        log::info!("created {} record {}", E::ENTITY, record.record_id());
        Ok(record)
    }

    /// Shallow-merges `patch` (a JSON object) into the first record whose
    /// identifier matches: fields present in the patch replace, all other
    /// fields survive. A missing identifier is an explicit `NotFound`.
    pub async fn update<E: StoredRecord>(&self, id: &str, patch: Value) -> Result<E, StoreError> {
        let mut items = self.read_collection::<E>();
        let pos = items
            .iter()
            .position(|value| record_id_of(value) == Some(id))
            .ok_or_else(|| StoreError::NotFound {
                entity: E::ENTITY,
                id: id.to_string(),
            })?;

        if let (Some(target), Some(fields)) = (items[pos].as_object_mut(), patch.as_object()) {
            for (key, value) in fields {
                target.insert(key.clone(), value.clone());
            }
        }

        let merged: E = serde_json::from_value(items[pos].clone())?;
        self.write_collection::<E>(&items)?;
        Ok(merged)
    }

    /// Removes the matching record if present. Deleting an identifier that
    /// is not in the collection is a no-op success.
    pub async fn delete<E: StoredRecord>(&self, id: &str) -> Result<(), StoreError> {
        let mut items = self.read_collection::<E>();
        items.retain(|value| record_id_of(value) != Some(id));
        self.write_collection::<E>(&items)
    }

    /// One-time demo-data seeding, gated by a persisted sentinel so it
    /// never re-runs across calls or reloads once the flag is written.
    pub fn seed_if_empty(&self) -> Result<(), StoreError> {
        if self.backend.read(SEED_SENTINEL_KEY).is_some() {
            return Ok(());
        }
        self.persist_seed(&seed::demo_inventory_items())?;
        self.persist_seed(&seed::demo_system_alerts())?;
        self.persist_seed(&seed::demo_production_plans())?;
        self.persist_seed(&seed::demo_actual_consumption())?;
        self.persist_seed(&seed::demo_orders())?;
        self.backend.write(SEED_SENTINEL_KEY, "true")?;
        log::info!("installed demo dataset");
        Ok(())
    }

    fn persist_seed<E: StoredRecord>(&self, records: &[E]) -> Result<(), StoreError> {
        let text = serde_json::to_string(records)?;
        self.backend.write(&E::storage_key(), &text)
    }

    fn read_collection<E: StoredRecord>(&self) -> Vec<Value> {
        let Some(text) = self.backend.read(&E::storage_key()) else {
            return Vec::new();
        };
        match serde_json::from_str(&text) {
            Ok(Value::Array(items)) => items,
            Ok(_) | Err(_) => {
                log::warn!("discarding corrupt {} collection", E::ENTITY);
                Vec::new()
            }
        }
    }

    fn write_collection<E: StoredRecord>(&self, items: &[Value]) -> Result<(), StoreError> {
        let text = serde_json::to_string(items)?;
        self.backend.write(&E::storage_key(), &text)
    }
}

fn record_id_of(value: &Value) -> Option<&str> {
    value.get("_id").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::{Order, ProductionPlan, SystemAlert};
    use serde_json::json;

    use crate::shared::data::MemoryStorage;

    fn service() -> DataService<MemoryStorage> {
        DataService::new(MemoryStorage::new())
    }

    fn plan(id: &str) -> ProductionPlan {
        ProductionPlan {
            id: id.to_string(),
            plan_identifier: format!("PLAN-{id}"),
            item_name: "Steel Rods".to_string(),
            planned_quantity: 500.0,
            planned_rate: 85.0,
            planning_date: "2024-01-15".to_string(),
            notes: "Q1 batch".to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_get_all_round_trips() {
        let data = service();
        let record = plan("p1");
        let stored = data.create(record.clone()).await.unwrap();
        assert_eq!(stored, record);

        let plans: Vec<ProductionPlan> = data.get_all().await;
        assert_eq!(plans, vec![record]);
    }

    #[tokio::test]
    async fn create_prepends_newest_first() {
        let data = service();
        data.create(plan("p1")).await.unwrap();
        data.create(plan("p2")).await.unwrap();

        let plans: Vec<ProductionPlan> = data.get_all().await;
        assert_eq!(plans[0].id, "p2");
        assert_eq!(plans[1].id, "p1");
    }

    #[tokio::test]
    async fn delete_removes_only_the_matching_record() {
        let data = service();
        data.create(plan("p1")).await.unwrap();
        data.create(plan("p2")).await.unwrap();

        data.delete::<ProductionPlan>("p1").await.unwrap();
        let plans: Vec<ProductionPlan> = data.get_all().await;
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].id, "p2");

        // deleting an absent id is a no-op success
        data.delete::<ProductionPlan>("nope").await.unwrap();
        assert_eq!(data.get_all::<ProductionPlan>().await.len(), 1);
    }

    #[tokio::test]
    async fn update_merges_instead_of_replacing() {
        let data = service();
        data.create(plan("p1")).await.unwrap();

        let merged: ProductionPlan = data
            .update("p1", json!({ "notes": "revised" }))
            .await
            .unwrap();
        assert_eq!(merged.notes, "revised");

        let plans: Vec<ProductionPlan> = data.get_all().await;
        assert_eq!(plans[0].notes, "revised");
        // untouched fields survive the merge
        assert_eq!(plans[0].plan_identifier, "PLAN-p1");
        assert_eq!(plans[0].planned_quantity, 500.0);
    }

    #[tokio::test]
    async fn update_of_missing_id_is_not_found() {
        let data = service();
        data.create(plan("p1")).await.unwrap();

        let err = data
            .update::<ProductionPlan>("ghost", json!({ "notes": "x" }))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { entity: "productionplans", .. }));
    }

    #[tokio::test]
    async fn corrupt_collection_reads_as_empty() {
        let backend = MemoryStorage::new();
        backend.write("qinv_orders", "{ not json").unwrap();
        let data = DataService::new(backend);
        assert!(data.get_all::<Order>().await.is_empty());
    }

    #[tokio::test]
    async fn seeding_is_idempotent() {
        let data = service();
        data.seed_if_empty().unwrap();
        let first: Vec<SystemAlert> = data.get_all().await;
        assert_eq!(first.len(), 4);

        data.seed_if_empty().unwrap();
        let second: Vec<SystemAlert> = data.get_all().await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn reseeding_never_reverts_user_edits() {
        let data = service();
        data.seed_if_empty().unwrap();

        let _: SystemAlert = data
            .update("a1", json!({ "isRead": true }))
            .await
            .unwrap();
        data.seed_if_empty().unwrap();

        let alerts: Vec<SystemAlert> = data.get_all().await;
        let edited = alerts.iter().find(|alert| alert.id == "a1").unwrap();
        assert!(edited.is_read);
    }

    #[tokio::test]
    async fn mark_read_drops_the_unread_count() {
        let data = service();
        data.seed_if_empty().unwrap();

        let alerts: Vec<SystemAlert> = data.get_all().await;
        assert_eq!(contracts::analytics::unread_count(&alerts), 3);

        let _: SystemAlert = data.update("a2", json!({ "isRead": true })).await.unwrap();
        let alerts: Vec<SystemAlert> = data.get_all().await;
        assert_eq!(contracts::analytics::unread_count(&alerts), 2);
    }

    #[tokio::test]
    async fn unknown_fields_survive_a_merge() {
        // records written by an older build may carry fields this build
        // does not model; a patch must not drop them
        let backend = MemoryStorage::new();
        backend
            .write(
                "qinv_productionplans",
                r#"[{"_id":"p1","planIdentifier":"PLAN-p1","itemName":"Steel Rods","legacyField":"keep me"}]"#,
            )
            .unwrap();
        let data = DataService::new(backend.clone());

        let _: ProductionPlan = data.update("p1", json!({ "notes": "x" })).await.unwrap();
        let raw = backend.read("qinv_productionplans").unwrap();
        assert!(raw.contains("keep me"));
    }
}
