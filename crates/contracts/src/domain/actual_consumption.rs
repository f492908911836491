use serde::{Deserialize, Serialize};

use super::record::StoredRecord;

/// Recorded material usage; actual cost = quantity * rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActualConsumption {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "itemSKU", default)]
    pub item_sku: String,

    #[serde(default)]
    pub item_name: String,

    #[serde(default)]
    pub actual_quantity: f64,

    #[serde(default)]
    pub actual_rate: f64,

    /// Local datetime string, `YYYY-MM-DDTHH:MM`
    #[serde(default)]
    pub consumption_date_time: String,

    #[serde(default)]
    pub unit_of_measure: String,
}

impl ActualConsumption {
    pub fn validate(&self) -> Result<(), String> {
        if self.item_name.trim().is_empty() {
            return Err("Item name cannot be empty".into());
        }
        Ok(())
    }
}

impl StoredRecord for ActualConsumption {
    const ENTITY: &'static str = "actualconsumption";

    fn record_id(&self) -> &str {
        &self.id
    }
}
