//! Routed pages, one module per screen
//!
//! Pages only talk to the store through the `DataService` context and to
//! the analytics functions in `contracts`; no page computes a formula of
//! its own. Mutations are optimistic: local signal state first, then the
//! store, with a rollback and an inline error if persistence fails.

pub mod actual_consumption;
pub mod alerts;
pub mod home;
pub mod inventory;
pub mod orders;
pub mod prediction;
pub mod production_planning;
pub mod reports;
