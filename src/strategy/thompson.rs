// src/strategy/thompson.rs

use crate::error::PricingError;
use crate::strategy::traits::{Candidate, PricingPolicy, SamplingRound, Selection};
use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;

/// Trace row for one candidate draw in one sampling round.
#[derive(Debug, Clone, Serialize)]
pub struct CompetitionRecord {
    pub competition_index: u64,
    pub item: String,
    pub price_lower_bound: i64,
    pub price_upper_bound: i64,
    pub sampled_price: i64,
}

/// Thompson sampling over per-item price bounds.
///
/// Each item's `[low, high]` interval is treated as a uniform posterior over
/// the maximum price a customer would accept. One price is drawn per item
/// and the item with the largest draw wins the shelf, so the item currently
/// most likely to support a high price gets the chance to prove it.
#[derive(Debug, Default)]
pub struct ThompsonSampler {
    next_competition_index: u64,
}

impl ThompsonSampler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PricingPolicy for ThompsonSampler {
    fn choose(
        &mut self,
        candidates: &[Candidate],
        rng: &mut StdRng,
    ) -> Result<SamplingRound, PricingError> {
        if candidates.is_empty() {
            return Err(PricingError::EmptyCandidateSet);
        }

        let mut competitions = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let bound = candidate.bound;
            let sampled_price = rng.gen_range(bound.low..=bound.high);
            competitions.push(CompetitionRecord {
                competition_index: self.next_competition_index,
                item: candidate.item.clone(),
                price_lower_bound: bound.low,
                price_upper_bound: bound.high,
                sampled_price,
            });
            // Indices are monotone across the whole run, never reused.
            self.next_competition_index += 1;
        }

        let best_price = competitions
            .iter()
            .map(|c| c.sampled_price)
            .max()
            .unwrap_or(i64::MIN);

        // Ties are broken by an explicit uniform draw among the tied
        // candidates, not by position in the candidate list.
        let tied: Vec<&CompetitionRecord> = competitions
            .iter()
            .filter(|c| c.sampled_price == best_price)
            .collect();
        let winner = if tied.len() == 1 {
            tied[0]
        } else {
            tied[rng.gen_range(0..tied.len())]
        };

        let winner = Selection {
            item: winner.item.clone(),
            price: winner.sampled_price,
        };
        Ok(SamplingRound {
            winner,
            competitions,
        })
    }
}
