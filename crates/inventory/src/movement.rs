use std::collections::{HashMap, VecDeque};

use lotflow_core::{LotNumber, ProductId};

use crate::lot::Lot;
use crate::report::{InventoryReport, ProductSummary};

/// Per-product lot movement through two ordered areas.
///
/// Lots enter the receiving area in arrival order (FIFO) and move, one at a
/// time and oldest first, into the outbound-preparation area, which drains
/// most-recently-staged first (LIFO). A lot is in at most one area at any
/// time and leaves the tracker entirely once dispatched.
///
/// This type is single-threaded (`&mut self`); [`crate::InventoryService`]
/// wraps it for shared use.
#[derive(Debug, Default)]
pub struct Inventory {
    receiving: HashMap<ProductId, VecDeque<Lot>>,
    preparation: HashMap<ProductId, Vec<Lot>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a newly arrived lot at the tail of the product's receiving
    /// queue, creating the queue on first arrival.
    ///
    /// Deliberately permissive: lot numbers are not checked for uniqueness
    /// and the quantity is stored as given.
    pub fn receive_lot(&mut self, product_id: ProductId, lot_number: LotNumber, quantity: i32) {
        self.receiving
            .entry(product_id)
            .or_default()
            .push_back(Lot::new(lot_number, quantity));
    }

    /// Move the oldest received lot onto the product's preparation stack and
    /// return it.
    ///
    /// Once staged, a lot's outbound order is governed by recency of staging,
    /// not recency of arrival. Returns `None` without touching any state when
    /// the product has nothing in receiving.
    pub fn stage_for_outbound(&mut self, product_id: ProductId) -> Option<Lot> {
        let lot = self.receiving.get_mut(&product_id)?.pop_front()?;
        self.preparation
            .entry(product_id)
            .or_default()
            .push(lot.clone());
        Some(lot)
    }

    /// Remove and return the most recently staged lot for the product.
    ///
    /// Returns `None` without touching any state when nothing is staged. The
    /// dispatched lot is gone from the tracker afterwards.
    pub fn dispatch_outbound(&mut self, product_id: ProductId) -> Option<Lot> {
        self.preparation.get_mut(&product_id)?.pop()
    }

    /// Aggregate both areas into report rows without mutating anything.
    ///
    /// Receiving rows are ordered by ascending product id. Preparation rows
    /// are ordered by descending total quantity, ties broken by ascending
    /// product id. Products whose sequences have been drained are omitted.
    pub fn build_report(&self) -> InventoryReport {
        let mut receiving: Vec<ProductSummary> = self
            .receiving
            .iter()
            .filter_map(|(product_id, queue)| summarize(*product_id, queue.iter(), queue.front()))
            .collect();
        receiving.sort_by_key(|row| row.product_id);

        let mut preparation: Vec<ProductSummary> = self
            .preparation
            .iter()
            .filter_map(|(product_id, stack)| summarize(*product_id, stack.iter(), stack.first()))
            .collect();
        preparation.sort_by(|a, b| {
            b.total_quantity
                .cmp(&a.total_quantity)
                .then(a.product_id.cmp(&b.product_id))
        });

        InventoryReport {
            receiving,
            preparation,
        }
    }
}

fn summarize<'a>(
    product_id: ProductId,
    lots: impl Iterator<Item = &'a Lot>,
    oldest: Option<&Lot>,
) -> Option<ProductSummary> {
    let oldest = oldest?;
    Some(ProductSummary {
        product_id,
        total_quantity: lots.map(|lot| i64::from(lot.quantity())).sum(),
        oldest_received_at: oldest.received_at(),
    })
}
