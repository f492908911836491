//! Shared contracts for the Quantum Inventory dashboard
//!
//! Domain record types, the pure analytics used by every page, and the
//! prediction-service DTOs. This crate performs no I/O so everything in it
//! can be tested natively.

pub mod analytics;
pub mod domain;
pub mod prediction;
pub mod shared;
