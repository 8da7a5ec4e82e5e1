// src/model/inventory.rs

use serde::Serialize;
use std::collections::BTreeMap;

/// One signed stock movement for a single item.
#[derive(Debug, Clone, Serialize)]
pub struct InventoryDelta {
    pub item: String,
    pub change: i64,
}

/// Append-only ledger of signed quantity deltas.
///
/// Stock is never kept as a mutable counter: the current count for an item
/// is always recomputed as the sum of its deltas, which keeps the ledger
/// auditable and makes replays idempotent.
#[derive(Debug, Default)]
pub struct InventoryLedger {
    changes: Vec<InventoryDelta>,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one delta. Negative values are accepted as-is; over-decrement
    /// only ever shows up as the item vanishing from the stock view.
    pub fn record_delta(&mut self, item: &str, change: i64) {
        self.changes.push(InventoryDelta {
            item: item.to_string(),
            change,
        });
    }

    /// Appends a batch of deltas, e.g. the initial stock load.
    pub fn record_deltas<'a, I>(&mut self, batch: I)
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        for (item, change) in batch {
            self.record_delta(item, change);
        }
    }

    /// Current stock per item, derived from the ledger.
    ///
    /// Items whose cumulative sum is <= 0 are excluded entirely, so a
    /// duplicated removal event can never produce a negative display count.
    /// The BTreeMap gives callers a stable item order.
    pub fn current_stock(&self) -> BTreeMap<String, i64> {
        let mut sums: BTreeMap<String, i64> = BTreeMap::new();
        for delta in &self.changes {
            *sums.entry(delta.item.clone()).or_insert(0) += delta.change;
        }
        sums.retain(|_, count| *count > 0);
        sums
    }

    /// Total units across all in-stock items. This is the loop's
    /// termination signal.
    pub fn total_stock_count(&self) -> i64 {
        self.current_stock().values().sum()
    }

    /// Full delta history, oldest first.
    pub fn history(&self) -> &[InventoryDelta] {
        &self.changes
    }
}
