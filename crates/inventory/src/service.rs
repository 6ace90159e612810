//! Thread-safe handle over the inventory state machine.

use std::sync::RwLock;

use lotflow_core::{DomainError, DomainResult, LotNumber, ProductId};

use crate::lot::Lot;
use crate::movement::Inventory;
use crate::report::InventoryReport;

/// Shared inventory handle.
///
/// Guards both areas behind a single exclusive lock, so every operation is
/// atomic across products: concurrent callers observe a strict total order
/// of mutations, and a report is always a consistent snapshot. Share it as
/// `Arc<InventoryService>`; single-threaded embedders can use [`Inventory`]
/// directly.
#[derive(Debug, Default)]
pub struct InventoryService {
    state: RwLock<Inventory>,
}

impl InventoryService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn receive_lot(
        &self,
        product_id: ProductId,
        lot_number: LotNumber,
        quantity: i32,
    ) -> DomainResult<()> {
        let mut state = self.state.write().map_err(|_| DomainError::Poisoned)?;
        state.receive_lot(product_id, lot_number, quantity);
        tracing::debug!(%product_id, %lot_number, quantity, "lot received");
        Ok(())
    }

    /// Absence (nothing in receiving) is `Ok(None)`, never an error.
    pub fn stage_for_outbound(&self, product_id: ProductId) -> DomainResult<Option<Lot>> {
        let mut state = self.state.write().map_err(|_| DomainError::Poisoned)?;
        let staged = state.stage_for_outbound(product_id);
        if let Some(lot) = &staged {
            tracing::debug!(%product_id, lot_number = %lot.lot_number(), "lot staged for outbound");
        }
        Ok(staged)
    }

    /// Absence (nothing staged) is `Ok(None)`, never an error.
    pub fn dispatch_outbound(&self, product_id: ProductId) -> DomainResult<Option<Lot>> {
        let mut state = self.state.write().map_err(|_| DomainError::Poisoned)?;
        let dispatched = state.dispatch_outbound(product_id);
        if let Some(lot) = &dispatched {
            tracing::debug!(%product_id, lot_number = %lot.lot_number(), "lot dispatched");
        }
        Ok(dispatched)
    }

    pub fn build_report(&self) -> DomainResult<InventoryReport> {
        let state = self.state.read().map_err(|_| DomainError::Poisoned)?;
        Ok(state.build_report())
    }
}
