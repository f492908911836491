//! Pure derivations over raw record collections
//!
//! Every function here is stateless and deterministic: pages fetch records
//! from the store and pass them through these to get display-ready values.
//! Nothing in this module mutates its inputs or performs I/O.

pub mod alerts;
pub mod costs;
pub mod dashboard;
pub mod orders;
pub mod stock;
pub mod trend;

// Re-exports
pub use alerts::{unread_count, AlertSeverity};
pub use costs::{cost_analysis, cost_totals, line_cost, CostAnalysisRow, CostTotals};
pub use dashboard::{dashboard_summary, DashboardSummary};
pub use orders::{order_totals, OrderTotals};
pub use stock::{
    stock_distribution, stock_level_percent, stock_status, StockDistribution, StockStatus,
};
pub use trend::{consumption_trend, TrendPoint};
