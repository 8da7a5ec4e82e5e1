// src/error.rs

use thiserror::Error;

/// Errors surfaced by the pricing core.
///
/// None of these are retried: every operation here is deterministic given
/// the seeded generator, so a failure is a logic or storage defect.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Sampling was requested while nothing is in stock. Callers must check
    /// inventory before asking for a selection.
    #[error("no items in stock to sample from")]
    EmptyCandidateSet,

    /// An internal invariant was broken (a bound with low > high, a shelf
    /// with only one of item/price set, a transition out of the wrong
    /// state). The run should abort rather than continue on bad state.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// The persistence layer failed. The whole logical step is treated as
    /// not having happened; no partial-state recovery is attempted.
    #[error("storage failure: {0}")]
    Storage(#[from] csv::Error),
}

impl From<std::io::Error> for PricingError {
    fn from(err: std::io::Error) -> Self {
        PricingError::Storage(csv::Error::from(err))
    }
}
