use serde::{Deserialize, Serialize};

use super::record::StoredRecord;

/// Stocked material with the levels that drive status classification
///
/// `current_stock` against `safety_stock` decides In/Low/Out of Stock;
/// `planned_rate` is the default unit rate for planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    #[serde(rename = "_id")]
    pub id: String,

    pub item_name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub current_stock: f64,

    #[serde(default)]
    pub safety_stock: f64,

    /// Replenishment lead time in days
    #[serde(default)]
    pub lead_time: f64,

    #[serde(default)]
    pub unit_of_measure: String,

    #[serde(default)]
    pub planned_rate: f64,
}

impl StoredRecord for InventoryItem {
    const ENTITY: &'static str = "inventoryitems";

    fn record_id(&self) -> &str {
        &self.id
    }
}
