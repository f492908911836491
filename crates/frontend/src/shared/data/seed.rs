//! Demo dataset installed on first load
//!
//! Mirrors a plausible first day of operation: six materials in different
//! stock states, matching alerts, one planned/consumed pair per costed
//! item, two orders.

use chrono::{Duration, Utc};
use contracts::domain::{
    ActualConsumption, InventoryItem, Order, OrderStatus, ProductionPlan, SystemAlert,
};

pub(crate) fn demo_inventory_items() -> Vec<InventoryItem> {
    let item = |id: &str, name: &str, description: &str, current: f64, safety: f64, lead: f64, unit: &str, rate: f64| InventoryItem {
        id: id.to_string(),
        item_name: name.to_string(),
        description: description.to_string(),
        current_stock: current,
        safety_stock: safety,
        lead_time: lead,
        unit_of_measure: unit.to_string(),
        planned_rate: rate,
    };
    vec![
        item("1", "Steel Rods", "Grade A steel rods", 450.0, 100.0, 7.0, "kg", 85.0),
        item("2", "Aluminium Sheets", "Thin aluminium panels", 80.0, 90.0, 5.0, "pcs", 220.0),
        item("3", "Copper Wire", "2mm copper wire", 0.0, 50.0, 3.0, "m", 45.0),
        item("4", "Plastic Granules", "HDPE granules", 1200.0, 200.0, 14.0, "kg", 32.0),
        item("5", "Rubber Gaskets", "Industrial gaskets", 340.0, 50.0, 4.0, "pcs", 12.0),
        item("6", "Bearings 6205", "Deep groove ball bearings", 55.0, 60.0, 10.0, "pcs", 95.0),
    ]
}

pub(crate) fn demo_system_alerts() -> Vec<SystemAlert> {
    let ago = |hours: i64| (Utc::now() - Duration::hours(hours)).to_rfc3339();
    let alert = |id: &str, message: &str, severity: &str, kind: &str, is_read: bool, generated_at: String| SystemAlert {
        id: id.to_string(),
        message: message.to_string(),
        severity: severity.to_string(),
        kind: kind.to_string(),
        is_read,
        generated_at,
    };
    vec![
        alert("a1", "Aluminium Sheets stock below safety threshold", "High", "Stock", false, ago(1)),
        alert("a2", "Copper Wire is completely out of stock", "Critical", "Stock", false, ago(2)),
        alert("a3", "Bearings 6205 approaching safety stock", "Warning", "Stock", false, ago(4)),
        alert("a4", "Production Plan PP-2024-05 approved", "Info", "System", true, ago(24)),
    ]
}

pub(crate) fn demo_production_plans() -> Vec<ProductionPlan> {
    vec![
        ProductionPlan {
            id: "p1".to_string(),
            plan_identifier: "PLAN-2024-001".to_string(),
            item_name: "Steel Rods".to_string(),
            planned_quantity: 500.0,
            planned_rate: 85.0,
            planning_date: "2024-01-15".to_string(),
            notes: "Q1 production batch".to_string(),
        },
        ProductionPlan {
            id: "p2".to_string(),
            plan_identifier: "PLAN-2024-002".to_string(),
            item_name: "Plastic Granules".to_string(),
            planned_quantity: 800.0,
            planned_rate: 32.0,
            planning_date: "2024-01-20".to_string(),
            notes: String::new(),
        },
    ]
}

pub(crate) fn demo_actual_consumption() -> Vec<ActualConsumption> {
    vec![
        ActualConsumption {
            id: "c1".to_string(),
            item_sku: "SKU-001".to_string(),
            item_name: "Steel Rods".to_string(),
            actual_quantity: 480.0,
            actual_rate: 87.0,
            consumption_date_time: "2024-01-16T10:00".to_string(),
            unit_of_measure: "kg".to_string(),
        },
        ActualConsumption {
            id: "c2".to_string(),
            item_sku: "SKU-003".to_string(),
            item_name: "Plastic Granules".to_string(),
            actual_quantity: 820.0,
            actual_rate: 31.0,
            consumption_date_time: "2024-01-21T14:00".to_string(),
            unit_of_measure: "kg".to_string(),
        },
    ]
}

pub(crate) fn demo_orders() -> Vec<Order> {
    vec![
        Order {
            id: "o1".to_string(),
            order_number: "ORD-001".to_string(),
            vendor: "SteelCorp".to_string(),
            total_quantity: 1000.0,
            total_value: 85000.0,
            status: OrderStatus::Delivered,
            created_at: "2024-01-10".to_string(),
        },
        Order {
            id: "o2".to_string(),
            order_number: "ORD-002".to_string(),
            vendor: "PlasticHub".to_string(),
            total_quantity: 2000.0,
            total_value: 64000.0,
            status: OrderStatus::Pending,
            created_at: "2024-01-18".to_string(),
        },
    ]
}
