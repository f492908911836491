use crate::domain::Order;

/// Order book rollup shown on the reports and orders pages
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrderTotals {
    pub count: usize,
    pub total_quantity: f64,
    pub total_value: f64,
}

pub fn order_totals(orders: &[Order]) -> OrderTotals {
    OrderTotals {
        count: orders.len(),
        total_quantity: orders.iter().map(|order| order.total_quantity).sum(),
        total_value: orders.iter().map(|order| order.total_value).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderStatus;

    fn order(id: &str, quantity: f64, value: f64) -> Order {
        Order {
            id: id.to_string(),
            order_number: format!("ORD-{id}"),
            vendor: String::new(),
            total_quantity: quantity,
            total_value: value,
            status: OrderStatus::Pending,
            created_at: String::new(),
        }
    }

    #[test]
    fn sums_value_quantity_and_count() {
        let totals = order_totals(&[order("1", 1000.0, 85000.0), order("2", 2000.0, 64000.0)]);
        assert_eq!(totals.total_value, 149000.0);
        assert_eq!(totals.total_quantity, 3000.0);
        assert_eq!(totals.count, 2);
    }

    #[test]
    fn empty_order_book_is_all_zero() {
        assert_eq!(order_totals(&[]), OrderTotals::default());
    }
}
