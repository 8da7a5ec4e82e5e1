// src/model/bounds.rs

use crate::error::PricingError;
use serde::Serialize;
use std::collections::BTreeMap;

/// The currently believed-admissible price interval for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBound {
    pub low: i64,
    pub high: i64,
}

impl PriceBound {
    pub fn contains(&self, price: i64) -> bool {
        self.low <= price && price <= self.high
    }
}

/// One appended row of the bound history.
///
/// `reaction_seq` links the revision to the reaction that caused it; seeded
/// initial bounds carry `None`.
#[derive(Debug, Clone, Serialize)]
pub struct BoundRevision {
    pub reaction_seq: Option<u64>,
    pub item: String,
    pub low: i64,
    pub high: i64,
}

/// Append-only log of price-bound revisions.
///
/// The current bound for an item is the latest row appended for it. Rows are
/// never mutated or deleted.
#[derive(Debug, Default)]
pub struct PriceBoundStore {
    revisions: Vec<BoundRevision>,
    current: BTreeMap<String, PriceBound>,
}

impl PriceBoundStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a revision. Rejects inverted intervals outright; an inverted
    /// bound reaching the store means an upstream rule is broken.
    pub fn append(
        &mut self,
        item: &str,
        bound: PriceBound,
        reaction_seq: Option<u64>,
    ) -> Result<(), PricingError> {
        if bound.low > bound.high {
            return Err(PricingError::InvariantViolation(format!(
                "bound for '{}' has low {} > high {}",
                item, bound.low, bound.high
            )));
        }
        self.revisions.push(BoundRevision {
            reaction_seq,
            item: item.to_string(),
            low: bound.low,
            high: bound.high,
        });
        self.current.insert(item.to_string(), bound);
        Ok(())
    }

    /// Latest bound for an item, if one was ever appended.
    pub fn current_bound(&self, item: &str) -> Option<PriceBound> {
        self.current.get(item).copied()
    }

    /// Latest bound per item, in stable item order.
    pub fn current_bounds(&self) -> &BTreeMap<String, PriceBound> {
        &self.current
    }

    /// Full revision history, oldest first.
    pub fn history(&self) -> &[BoundRevision] {
        &self.revisions
    }
}
