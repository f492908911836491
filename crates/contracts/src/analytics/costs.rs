use crate::domain::{ActualConsumption, ProductionPlan};

/// Cost of one quantity/rate pair. Absent operands are already 0 on the
/// record, so this never null-propagates.
pub fn line_cost(quantity: f64, rate: f64) -> f64 {
    quantity * rate
}

/// One row of the cost-analysis report: everything planned and consumed for
/// a single item name.
///
/// Sign convention: positive variance = under budget ("Profit"), negative =
/// over budget ("Loss").
#[derive(Debug, Clone, PartialEq)]
pub struct CostAnalysisRow {
    pub item_name: String,
    pub planned_cost: f64,
    pub actual_cost: f64,
    pub variance: f64,
    pub variance_percentage: f64,
}

impl CostAnalysisRow {
    pub fn is_profit(&self) -> bool {
        self.variance >= 0.0
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_profit() {
            "Profit"
        } else {
            "Loss"
        }
    }
}

/// Joins plans and consumption on exact `item_name` equality (case
/// sensitive; an empty name groups under "Unknown") and accumulates planned
/// and actual cost per name.
///
/// Row order is first appearance: all plan names in collection order, then
/// names that only occur in consumption.
pub fn cost_analysis(
    plans: &[ProductionPlan],
    consumption: &[ActualConsumption],
) -> Vec<CostAnalysisRow> {
    // (name, planned, actual); linear scan is fine at dashboard scale
    let mut buckets: Vec<(String, f64, f64)> = Vec::new();

    for plan in plans {
        let pos = bucket_index(&mut buckets, &plan.item_name);
        buckets[pos].1 += line_cost(plan.planned_quantity, plan.planned_rate);
    }
    for record in consumption {
        let pos = bucket_index(&mut buckets, &record.item_name);
        buckets[pos].2 += line_cost(record.actual_quantity, record.actual_rate);
    }

    buckets
        .into_iter()
        .map(|(item_name, planned_cost, actual_cost)| {
            let variance = planned_cost - actual_cost;
            CostAnalysisRow {
                item_name,
                planned_cost,
                actual_cost,
                variance,
                variance_percentage: percentage_of(variance, planned_cost),
            }
        })
        .collect()
}

fn bucket_index(buckets: &mut Vec<(String, f64, f64)>, item_name: &str) -> usize {
    let name = if item_name.is_empty() { "Unknown" } else { item_name };
    match buckets.iter().position(|bucket| bucket.0 == name) {
        Some(pos) => pos,
        None => {
            buckets.push((name.to_string(), 0.0, 0.0));
            buckets.len() - 1
        }
    }
}

fn percentage_of(variance: f64, planned_cost: f64) -> f64 {
    if planned_cost > 0.0 {
        (variance / planned_cost) * 100.0
    } else {
        0.0
    }
}

/// Report-level totals across all cost-analysis rows. The percentage is
/// recomputed over the summed costs, not averaged over rows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CostTotals {
    pub planned_cost: f64,
    pub actual_cost: f64,
    pub variance: f64,
    pub variance_percentage: f64,
}

impl CostTotals {
    pub fn is_profit(&self) -> bool {
        self.variance >= 0.0
    }
}

pub fn cost_totals(rows: &[CostAnalysisRow]) -> CostTotals {
    let planned_cost: f64 = rows.iter().map(|row| row.planned_cost).sum();
    let actual_cost: f64 = rows.iter().map(|row| row.actual_cost).sum();
    let variance = planned_cost - actual_cost;
    CostTotals {
        planned_cost,
        actual_cost,
        variance,
        variance_percentage: percentage_of(variance, planned_cost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(item_name: &str, quantity: f64, rate: f64) -> ProductionPlan {
        ProductionPlan {
            id: "p".to_string(),
            plan_identifier: "PLAN".to_string(),
            item_name: item_name.to_string(),
            planned_quantity: quantity,
            planned_rate: rate,
            planning_date: String::new(),
            notes: String::new(),
        }
    }

    fn consumed(item_name: &str, quantity: f64, rate: f64) -> ActualConsumption {
        ActualConsumption {
            id: "c".to_string(),
            item_sku: String::new(),
            item_name: item_name.to_string(),
            actual_quantity: quantity,
            actual_rate: rate,
            consumption_date_time: String::new(),
            unit_of_measure: String::new(),
        }
    }

    #[test]
    fn line_cost_is_quantity_times_rate() {
        assert_eq!(line_cost(500.0, 85.0), 42500.0);
        assert_eq!(line_cost(0.0, 85.0), 0.0);
    }

    #[test]
    fn variance_sign_convention() {
        // planned 42500 vs actual 41760 -> under budget -> Profit
        let rows = cost_analysis(&[plan("Steel Rods", 500.0, 85.0)], &[consumed("Steel Rods", 480.0, 87.0)]);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.planned_cost, 42500.0);
        assert_eq!(row.actual_cost, 41760.0);
        assert_eq!(row.variance, 740.0);
        assert!((row.variance_percentage - 1.7411764705882353).abs() < 1e-9);
        assert_eq!(row.status_label(), "Profit");
    }

    #[test]
    fn overrun_is_a_loss() {
        let rows = cost_analysis(&[plan("Copper Wire", 100.0, 45.0)], &[consumed("Copper Wire", 120.0, 48.0)]);
        assert!(rows[0].variance < 0.0);
        assert_eq!(rows[0].status_label(), "Loss");
    }

    #[test]
    fn join_is_case_sensitive_and_keeps_first_seen_order() {
        let rows = cost_analysis(
            &[plan("Steel Rods", 1.0, 1.0), plan("Granules", 1.0, 1.0)],
            &[consumed("steel rods", 2.0, 2.0), consumed("Granules", 3.0, 3.0)],
        );
        let names: Vec<&str> = rows.iter().map(|row| row.item_name.as_str()).collect();
        // "steel rods" does not match "Steel Rods"; it trails as its own row
        assert_eq!(names, ["Steel Rods", "Granules", "steel rods"]);
    }

    #[test]
    fn zero_planned_cost_yields_zero_percentage() {
        let rows = cost_analysis(&[], &[consumed("Steel Rods", 480.0, 87.0)]);
        assert_eq!(rows[0].planned_cost, 0.0);
        assert_eq!(rows[0].variance_percentage, 0.0);
    }

    #[test]
    fn empty_item_name_groups_under_unknown() {
        let rows = cost_analysis(&[plan("", 2.0, 3.0)], &[consumed("", 1.0, 1.0)]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].item_name, "Unknown");
        assert_eq!(rows[0].planned_cost, 6.0);
        assert_eq!(rows[0].actual_cost, 1.0);
    }

    #[test]
    fn totals_accumulate_across_rows() {
        let rows = cost_analysis(
            &[plan("A", 500.0, 85.0), plan("B", 800.0, 32.0)],
            &[consumed("A", 480.0, 87.0), consumed("B", 820.0, 31.0)],
        );
        let totals = cost_totals(&rows);
        assert_eq!(totals.planned_cost, 42500.0 + 25600.0);
        assert_eq!(totals.actual_cost, 41760.0 + 25420.0);
        assert_eq!(totals.variance, totals.planned_cost - totals.actual_cost);
        assert!(totals.is_profit());
    }
}
