use serde::{Deserialize, Serialize};

use super::record::StoredRecord;

/// Notification raised by the system
///
/// `severity` stays free text on the wire (historical data mixes casing,
/// e.g. "High"); classification happens in `analytics::alerts`. Lifecycle
/// is Unread -> Read via `is_read`, with no reverse transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemAlert {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub severity: String,

    /// Alert category, e.g. "Stock" or "System"
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub is_read: bool,

    /// RFC 3339 timestamp
    #[serde(default)]
    pub generated_at: String,
}

impl StoredRecord for SystemAlert {
    const ENTITY: &'static str = "systemalerts";

    fn record_id(&self) -> &str {
        &self.id
    }
}
