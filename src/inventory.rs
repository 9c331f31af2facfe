use std::collections::HashMap;

use crate::blocks::{BlockCatalog, BlockId};

pub const STARTING_STOCK: u32 = 256;
pub const STARTING_STOCK_LIQUID: u32 = 64;

/// Per-block-type resource counts. Counts never go negative: credits are
/// floored at zero and spending fails without mutating.
pub struct InventoryLedger {
    counts: HashMap<BlockId, u32>,
}

impl InventoryLedger {
    pub fn new() -> InventoryLedger {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Starting stock for every catalog type, reduced for liquids, so the
    /// player can build immediately without mining first.
    pub fn seeded(catalog: &BlockCatalog) -> InventoryLedger {
        let mut ledger = InventoryLedger::new();
        for block in catalog.iter() {
            let stock = if block.is_liquid {
                STARTING_STOCK_LIQUID
            } else {
                STARTING_STOCK
            };
            ledger.counts.insert(block.id, stock);
        }
        ledger
    }

    pub fn get_count(&self, id: BlockId) -> u32 {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    /// Credits (or debits, for negative `delta`) a block type. The result
    /// is floored at zero.
    pub fn add_to_inv(&mut self, id: BlockId, delta: i32) {
        let next = (self.get_count(id) as i64 + delta as i64).max(0) as u32;
        self.counts.insert(id, next);
    }

    pub fn can_spend(&self, id: BlockId, amount: u32) -> bool {
        self.get_count(id) >= amount
    }

    /// Debits `amount` units, mutating only on success.
    pub fn spend(&mut self, id: BlockId, amount: u32) -> bool {
        if !self.can_spend(id, amount) {
            return false;
        }
        self.counts.insert(id, self.get_count(id) - amount);
        true
    }
}
