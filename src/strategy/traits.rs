// src/strategy/traits.rs

use crate::error::PricingError;
use crate::model::bounds::PriceBound;
use crate::strategy::thompson::CompetitionRecord;
use rand::rngs::StdRng;
use std::fmt::Debug;

/// One in-stock item offered to the pricing policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub item: String,
    pub bound: PriceBound,
}

/// The winning item/price pair of one sampling round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub item: String,
    pub price: i64,
}

/// Full result of one sampling round: the winner plus the per-candidate
/// trace. Callers persist the trace alongside the winner for audit.
#[derive(Debug, Clone)]
pub struct SamplingRound {
    pub winner: Selection,
    pub competitions: Vec<CompetitionRecord>,
}

/// Defines how an item and its price are chosen for an empty shelf.
///
/// The generator is passed in explicitly so a fixed seed reproduces a whole
/// run; implementations must consume randomness in a fixed order.
pub trait PricingPolicy: Debug {
    /// Picks one `(item, price)` from the candidate set.
    ///
    /// # Errors
    /// `EmptyCandidateSet` when `candidates` is empty — callers must check
    /// stock before asking for a selection.
    fn choose(
        &mut self,
        candidates: &[Candidate],
        rng: &mut StdRng,
    ) -> Result<SamplingRound, PricingError>;
}
