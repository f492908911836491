//! Entity records persisted by the local store
//!
//! One module per entity collection. Field names follow the wire format
//! (camelCase, `_id` identifier) so records round-trip through the
//! `qinv_<entity>` storage keys unchanged.

pub mod actual_consumption;
pub mod inventory_item;
pub mod order;
pub mod production_plan;
pub mod record;
pub mod system_alert;

// Re-exports
pub use actual_consumption::ActualConsumption;
pub use inventory_item::InventoryItem;
pub use order::{Order, OrderStatus};
pub use production_plan::ProductionPlan;
pub use record::StoredRecord;
pub use system_alert::SystemAlert;
