use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lotflow_core::{LotNumber, ValueObject};

/// A batch of one product received at one time.
///
/// The receive timestamp is captured at construction and never changes;
/// lot number and quantity are carried through exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lot {
    lot_number: LotNumber,
    quantity: i32,
    received_at: DateTime<Utc>,
}

impl Lot {
    pub fn new(lot_number: LotNumber, quantity: i32) -> Self {
        Self {
            lot_number,
            quantity,
            received_at: Utc::now(),
        }
    }

    pub fn lot_number(&self) -> LotNumber {
        self.lot_number
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }
}

impl ValueObject for Lot {}
