use crate::domain::InventoryItem;

/// Stock classification of an inventory item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

/// Zero stock is out; at or below safety stock is low; everything else is in
/// stock. The boundary is inclusive: `current == safety` classifies as low.
pub fn stock_status(current_stock: f64, safety_stock: f64) -> StockStatus {
    if current_stock == 0.0 {
        StockStatus::OutOfStock
    } else if current_stock <= safety_stock {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}

/// Fill width of the stock-level bar, 0..=100.
///
/// Full scale is twice the safety stock; the denominator is floored at 1 so
/// `safety_stock == 0` cannot divide by zero.
pub fn stock_level_percent(current_stock: f64, safety_stock: f64) -> f64 {
    ((current_stock / (safety_stock * 2.0).max(1.0)) * 100.0).min(100.0)
}

/// Item counts per stock status bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StockDistribution {
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

pub fn stock_distribution(items: &[InventoryItem]) -> StockDistribution {
    let mut distribution = StockDistribution::default();
    for item in items {
        match stock_status(item.current_stock, item.safety_stock) {
            StockStatus::InStock => distribution.in_stock += 1,
            StockStatus::LowStock => distribution.low_stock += 1,
            StockStatus::OutOfStock => distribution.out_of_stock += 1,
        }
    }
    distribution
}

/// Sum of on-hand units across all items
pub fn total_stock_units(items: &[InventoryItem]) -> f64 {
    items.iter().map(|item| item.current_stock).sum()
}

/// Items at or below their safety stock (reorder risk), out-of-stock included
pub fn reorder_alert_count(items: &[InventoryItem]) -> usize {
    items
        .iter()
        .filter(|item| item.current_stock <= item.safety_stock)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, current: f64, safety: f64) -> InventoryItem {
        InventoryItem {
            id: id.to_string(),
            item_name: format!("Item {id}"),
            description: String::new(),
            current_stock: current,
            safety_stock: safety,
            lead_time: 0.0,
            unit_of_measure: String::new(),
            planned_rate: 0.0,
        }
    }

    #[test]
    fn status_boundaries() {
        assert_eq!(stock_status(0.0, 50.0), StockStatus::OutOfStock);
        assert_eq!(stock_status(50.0, 50.0), StockStatus::LowStock);
        assert_eq!(stock_status(51.0, 50.0), StockStatus::InStock);
    }

    #[test]
    fn zero_safety_stock_does_not_divide_by_zero() {
        // denominator floors at 1, result caps at 100
        assert_eq!(stock_level_percent(10.0, 0.0), 100.0);
        assert!(stock_level_percent(0.5, 0.0).is_finite());
    }

    #[test]
    fn percent_is_relative_to_twice_safety_stock() {
        assert_eq!(stock_level_percent(100.0, 100.0), 50.0);
        assert_eq!(stock_level_percent(400.0, 100.0), 100.0);
        assert_eq!(stock_level_percent(0.0, 100.0), 0.0);
    }

    #[test]
    fn distribution_counts_each_bucket() {
        let items = vec![
            item("1", 450.0, 100.0),
            item("2", 80.0, 90.0),
            item("3", 0.0, 50.0),
            item("4", 60.0, 60.0),
        ];
        let d = stock_distribution(&items);
        assert_eq!(d.in_stock, 1);
        assert_eq!(d.low_stock, 2);
        assert_eq!(d.out_of_stock, 1);
    }

    #[test]
    fn reorder_count_includes_out_of_stock() {
        let items = vec![item("1", 450.0, 100.0), item("2", 0.0, 50.0), item("3", 60.0, 60.0)];
        assert_eq!(reorder_alert_count(&items), 2);
        assert_eq!(total_stock_units(&items), 510.0);
    }
}
