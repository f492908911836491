use crate::analytics::costs::line_cost;
use crate::domain::ActualConsumption;
use crate::shared::dates::short_date;

/// One point of the consumption trend series
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub date: String,
    pub quantity: f64,
    pub cost: f64,
}

/// Last 7 consumption records in collection order (NOT re-sorted by time),
/// mapped to chart-ready points. Fewer than 7 records means all of them.
/// Unparseable dates fall back to "Day N", N 1-based within the window.
pub fn consumption_trend(consumption: &[ActualConsumption]) -> Vec<TrendPoint> {
    let start = consumption.len().saturating_sub(7);
    consumption[start..]
        .iter()
        .enumerate()
        .map(|(index, record)| TrendPoint {
            date: short_date(&record.consumption_date_time)
                .unwrap_or_else(|| format!("Day {}", index + 1)),
            quantity: record.actual_quantity,
            cost: line_cost(record.actual_quantity, record.actual_rate),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consumed(id: &str, when: &str, quantity: f64, rate: f64) -> ActualConsumption {
        ActualConsumption {
            id: id.to_string(),
            item_sku: String::new(),
            item_name: "Steel Rods".to_string(),
            actual_quantity: quantity,
            actual_rate: rate,
            consumption_date_time: when.to_string(),
            unit_of_measure: "kg".to_string(),
        }
    }

    #[test]
    fn maps_quantity_and_cost() {
        let points = consumption_trend(&[consumed("c1", "2024-01-16T10:00", 480.0, 87.0)]);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, "Jan 16");
        assert_eq!(points[0].quantity, 480.0);
        assert_eq!(points[0].cost, 41760.0);
    }

    #[test]
    fn keeps_last_seven_in_collection_order() {
        let records: Vec<ActualConsumption> = (0..10)
            .map(|i| consumed(&format!("c{i}"), "", i as f64, 1.0))
            .collect();
        let points = consumption_trend(&records);
        assert_eq!(points.len(), 7);
        // window starts at record 3; collection order is preserved
        assert_eq!(points[0].quantity, 3.0);
        assert_eq!(points[6].quantity, 9.0);
    }

    #[test]
    fn unparseable_date_falls_back_to_day_index() {
        let points = consumption_trend(&[
            consumed("c1", "", 1.0, 1.0),
            consumed("c2", "garbage", 2.0, 1.0),
        ]);
        assert_eq!(points[0].date, "Day 1");
        assert_eq!(points[1].date, "Day 2");
    }
}
