// src/strategy/revision.rs

//! The price-bound revision rule.
//!
//! Ecstatic and content reactions mean the customer would have tolerated
//! more, so the floor creeps toward the tested price. Angry means the price
//! was too high, so the ceiling drops below it. Sad sits between the two:
//! the floor jumps to the tested price and the ceiling stays put.

use crate::model::bounds::PriceBound;
use crate::model::reaction::Mood;

/// Revises `[low, high]` after a reaction at `price`.
///
/// A point estimate (`low == high`) is left unchanged for every mood, and
/// the sad/angry branches clamp into the prior interval. The tested price
/// can be stale — bounds may have moved since the shelf was stocked — so
/// neither branch trusts it to lie inside the interval. The result always
/// satisfies `low <= high`.
pub fn revise_bound(mood: Mood, price: i64, bound: PriceBound) -> PriceBound {
    let PriceBound { low, high } = bound;
    if low == high {
        return bound;
    }
    match mood {
        Mood::Ecstatic | Mood::Content => PriceBound {
            low: low + 1,
            high,
        },
        Mood::Sad => PriceBound {
            low: price.clamp(low, high),
            high,
        },
        Mood::Angry => PriceBound {
            low,
            high: (price - 1).clamp(low, high),
        },
    }
}
