use serde::{Deserialize, Serialize};

use super::record::StoredRecord;

/// Purchase order placed with a vendor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,

    pub order_number: String,

    #[serde(default)]
    pub vendor: String,

    #[serde(default)]
    pub total_quantity: f64,

    #[serde(default)]
    pub total_value: f64,

    #[serde(default)]
    pub status: OrderStatus,

    /// Order date, `YYYY-MM-DD`
    #[serde(default)]
    pub created_at: String,
}

impl StoredRecord for Order {
    const ENTITY: &'static str = "orders";

    fn record_id(&self) -> &str {
        &self.id
    }
}

/// Order lifecycle state; anything unrecognized on the wire lands in
/// `Unknown` instead of failing the whole collection read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Delivered,
    Pending,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Delivered => "delivered",
            OrderStatus::Pending => "pending",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_status_becomes_unknown() {
        let order: Order = serde_json::from_str(
            r#"{"_id":"o9","orderNumber":"ORD-009","status":"lost in transit"}"#,
        )
        .unwrap();
        assert_eq!(order.status, OrderStatus::Unknown);
        assert_eq!(order.total_value, 0.0);
    }

    #[test]
    fn status_round_trips_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Delivered).unwrap();
        assert_eq!(json, "\"delivered\"");
    }
}
