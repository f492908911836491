use serde::{Deserialize, Serialize};

use super::record::StoredRecord;

/// Planned production batch; planned cost = quantity * rate
///
/// `item_name` is the soft join key towards `ActualConsumption` used by the
/// cost-analysis report (exact, case-sensitive match).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionPlan {
    #[serde(rename = "_id")]
    pub id: String,

    pub plan_identifier: String,

    #[serde(default)]
    pub item_name: String,

    #[serde(default)]
    pub planned_quantity: f64,

    #[serde(default)]
    pub planned_rate: f64,

    /// Planning date, `YYYY-MM-DD`
    #[serde(default)]
    pub planning_date: String,

    #[serde(default)]
    pub notes: String,
}

impl ProductionPlan {
    pub fn validate(&self) -> Result<(), String> {
        if self.plan_identifier.trim().is_empty() {
            return Err("Plan identifier cannot be empty".into());
        }
        if self.item_name.trim().is_empty() {
            return Err("Item name cannot be empty".into());
        }
        Ok(())
    }
}

impl StoredRecord for ProductionPlan {
    const ENTITY: &'static str = "productionplans";

    fn record_id(&self) -> &str {
        &self.id
    }
}
