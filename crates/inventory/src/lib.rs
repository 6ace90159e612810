//! Inventory domain module.
//!
//! This crate contains the business rules for per-product lot movement,
//! implemented as deterministic domain logic (no IO, no HTTP, no storage),
//! plus a thread-safe handle for shared use.

pub mod lot;
pub mod movement;
pub mod report;
pub mod service;

pub use lot::Lot;
pub use movement::Inventory;
pub use report::{InventoryReport, ProductSummary};
pub use service::InventoryService;
