//! Read-model records produced by report aggregation.

use chrono::{DateTime, Utc};

use lotflow_core::ProductId;

/// One report row: a product's aggregate position in a single area.
///
/// `total_quantity` sums the quantities of every lot currently in the area
/// (not the number of lots). `oldest_received_at` is the receive timestamp
/// of the lot that has been in the area the longest: the queue head on the
/// receiving side, the bottom of the stack on the preparation side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSummary {
    pub product_id: ProductId,
    pub total_quantity: i64,
    pub oldest_received_at: DateTime<Utc>,
}

/// Snapshot of both areas, one ordered row list each.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryReport {
    /// Ordered by ascending product id.
    pub receiving: Vec<ProductSummary>,
    /// Ordered by descending total quantity, ties broken by ascending product id.
    pub preparation: Vec<ProductSummary>,
}
