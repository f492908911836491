use crate::analytics::alerts::unread_count;
use crate::analytics::costs::line_cost;
use crate::analytics::stock::{reorder_alert_count, total_stock_units};
use crate::domain::{ActualConsumption, InventoryItem, Order, SystemAlert};

/// Headline metrics for the home page
///
/// Note the variance here is order value against actual consumption cost
/// (spend view), not the planned-vs-actual variance of the reports page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardSummary {
    pub total_orders: usize,
    pub total_stock: f64,
    pub reorder_alerts: usize,
    pub unread_alerts: usize,
    pub total_order_value: f64,
    pub total_actual_cost: f64,
    pub variance: f64,
    pub variance_percentage: f64,
}

impl DashboardSummary {
    pub fn is_profit(&self) -> bool {
        self.variance >= 0.0
    }
}

pub fn dashboard_summary(
    orders: &[Order],
    items: &[InventoryItem],
    alerts: &[SystemAlert],
    consumption: &[ActualConsumption],
) -> DashboardSummary {
    let total_order_value: f64 = orders.iter().map(|order| order.total_value).sum();
    let total_actual_cost: f64 = consumption
        .iter()
        .map(|record| line_cost(record.actual_quantity, record.actual_rate))
        .sum();
    let variance = total_order_value - total_actual_cost;
    let variance_percentage = if total_order_value > 0.0 {
        (variance / total_order_value) * 100.0
    } else {
        0.0
    };

    DashboardSummary {
        total_orders: orders.len(),
        total_stock: total_stock_units(items),
        reorder_alerts: reorder_alert_count(items),
        unread_alerts: unread_count(alerts),
        total_order_value,
        total_actual_cost,
        variance,
        variance_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderStatus;

    #[test]
    fn summary_over_mixed_collections() {
        let orders = vec![Order {
            id: "o1".to_string(),
            order_number: "ORD-001".to_string(),
            vendor: "SteelCorp".to_string(),
            total_quantity: 1000.0,
            total_value: 85000.0,
            status: OrderStatus::Delivered,
            created_at: "2024-01-10".to_string(),
        }];
        let items = vec![InventoryItem {
            id: "1".to_string(),
            item_name: "Steel Rods".to_string(),
            description: String::new(),
            current_stock: 450.0,
            safety_stock: 100.0,
            lead_time: 7.0,
            unit_of_measure: "kg".to_string(),
            planned_rate: 85.0,
        }];
        let alerts = vec![SystemAlert {
            id: "a1".to_string(),
            message: "stock low".to_string(),
            severity: "High".to_string(),
            kind: "Stock".to_string(),
            is_read: false,
            generated_at: String::new(),
        }];
        let consumption = vec![ActualConsumption {
            id: "c1".to_string(),
            item_sku: String::new(),
            item_name: "Steel Rods".to_string(),
            actual_quantity: 480.0,
            actual_rate: 87.0,
            consumption_date_time: String::new(),
            unit_of_measure: "kg".to_string(),
        }];

        let summary = dashboard_summary(&orders, &items, &alerts, &consumption);
        assert_eq!(summary.total_orders, 1);
        assert_eq!(summary.total_stock, 450.0);
        assert_eq!(summary.reorder_alerts, 0);
        assert_eq!(summary.unread_alerts, 1);
        assert_eq!(summary.total_order_value, 85000.0);
        assert_eq!(summary.total_actual_cost, 41760.0);
        assert_eq!(summary.variance, 43240.0);
        assert!(summary.is_profit());
    }

    #[test]
    fn no_orders_means_zero_percentage_not_nan() {
        let summary = dashboard_summary(&[], &[], &[], &[]);
        assert_eq!(summary.variance_percentage, 0.0);
        assert!(summary.is_profit());
    }
}
