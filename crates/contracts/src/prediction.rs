//! DTOs for the external prediction endpoint
//!
//! The service is an opaque remote function: a fixed-shape numeric request,
//! a fixed-shape numeric response. Wire field names are dictated by the
//! service and kept verbatim through serde renames.

use serde::{Deserialize, Serialize};

use crate::analytics::costs::line_cost;

pub const PREDICTION_ENDPOINT: &str = "http://127.0.0.1:5000/predict";

/// Alert value the service returns when restocking is recommended.
pub const REORDER_ALERT: &str = "REORDER REQUIRED";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(rename = "Planned_Qty")]
    pub planned_qty: f64,
    #[serde(rename = "Actual_Qty")]
    pub actual_qty: f64,
    #[serde(rename = "Planned_Rate")]
    pub planned_rate: f64,
    #[serde(rename = "Actual_Rate")]
    pub actual_rate: f64,
    #[serde(rename = "Current_Stock")]
    pub current_stock: f64,
    #[serde(rename = "Lead_Time")]
    pub lead_time: f64,
    #[serde(rename = "Safety_Stock")]
    pub safety_stock: f64,
}

impl PredictionRequest {
    pub fn planned_cost(&self) -> f64 {
        line_cost(self.planned_qty, self.planned_rate)
    }

    pub fn actual_cost(&self) -> f64 {
        line_cost(self.actual_qty, self.actual_rate)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(rename = "Predicted_Consumption")]
    pub predicted_consumption: f64,
    #[serde(rename = "Reorder_Level")]
    pub reorder_level: f64,
    #[serde(rename = "Reorder_Quantity")]
    pub reorder_quantity: f64,
    #[serde(rename = "Variance")]
    pub variance: f64,
    #[serde(rename = "Alert")]
    pub alert: String,
}

impl PredictionResponse {
    pub fn reorder_required(&self) -> bool {
        self.alert == REORDER_ALERT
    }
}

/// Current stock relative to the recommended reorder level, as a bar width.
/// The denominator is floored at 1 so a zero reorder level cannot divide by
/// zero; the result is capped at 100.
pub fn stock_vs_reorder_percent(current_stock: f64, reorder_level: f64) -> f64 {
    ((current_stock / reorder_level.max(1.0)) * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_service_field_names() {
        let request = PredictionRequest {
            planned_qty: 500.0,
            actual_qty: 480.0,
            planned_rate: 85.0,
            actual_rate: 87.0,
            current_stock: 450.0,
            lead_time: 7.0,
            safety_stock: 100.0,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["Planned_Qty"], 500.0);
        assert_eq!(json["Safety_Stock"], 100.0);
        assert!(json.get("planned_qty").is_none());
    }

    #[test]
    fn response_parses_and_flags_reorder() {
        let body = r#"{
            "Predicted_Consumption": 492.5,
            "Reorder_Level": 520.0,
            "Reorder_Quantity": 170.0,
            "Variance": -740.0,
            "Alert": "REORDER REQUIRED"
        }"#;
        let response: PredictionResponse = serde_json::from_str(body).unwrap();
        assert!(response.reorder_required());
        assert_eq!(response.reorder_level, 520.0);
    }

    #[test]
    fn stock_bar_guards_zero_reorder_level() {
        assert_eq!(stock_vs_reorder_percent(10.0, 0.0), 100.0);
        assert_eq!(stock_vs_reorder_percent(260.0, 520.0), 50.0);
        assert_eq!(stock_vs_reorder_percent(900.0, 520.0), 100.0);
    }
}
