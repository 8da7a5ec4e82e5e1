// src/io/catalog.rs

use crate::model::bounds::PriceBound;
use crate::model::reaction::ReactionThresholds;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

/// Starting state for one item: stock count, initial price bound, and the
/// static thresholds driving simulated reactions.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub item: String,
    pub count: i64,
    pub bound: PriceBound,
    pub thresholds: ReactionThresholds,
}

fn entry(
    item: &str,
    count: i64,
    (low, high): (i64, i64),
    (cheap_upper, perfect_upper, expensive_upper): (i64, i64, i64),
) -> CatalogEntry {
    CatalogEntry {
        item: item.to_string(),
        count,
        bound: PriceBound { low, high },
        thresholds: ReactionThresholds {
            cheap_upper,
            perfect_upper,
            expensive_upper,
        },
    }
}

/// The standard shop catalog: ten items with `count` units each.
///
/// Precious goods start with wide, uncertain bounds; junk starts narrow.
/// Reaction thresholds sit inside each starting interval so the bounds have
/// something to converge onto.
pub fn starting_catalog(count: i64) -> Vec<CatalogEntry> {
    vec![
        entry("gold_runes", count, (275, 3000), (800, 1400, 2100)),
        entry("broken_sword", count, (2, 275), (40, 90, 160)),
        entry("vine", count, (2, 80), (10, 25, 50)),
        entry("root", count, (2, 80), (8, 20, 45)),
        entry("hardened_steel", count, (275, 3000), (700, 1200, 1900)),
        entry("glass_lenses", count, (50, 700), (120, 260, 450)),
        entry("teeth_stone", count, (20, 400), (60, 140, 260)),
        entry("iron_bar", count, (30, 500), (90, 180, 320)),
        entry("crystallized_energy", count, (275, 3000), (900, 1600, 2400)),
        entry("golem_core", count, (275, 3000), (1000, 1800, 2600)),
    ]
}

/// Variant of the standard catalog with normal-distributed stock counts.
///
/// Counts are rounded and clamped below at 1 so every item stays present.
pub fn randomized_catalog(mean_count: f64, std_dev: f64, rng: &mut StdRng) -> Vec<CatalogEntry> {
    let normal = Normal::new(mean_count, std_dev).unwrap_or_else(|_| {
        // Zero/negative deviation degenerates to the mean.
        Normal::new(mean_count, f64::EPSILON).unwrap()
    });

    let mut catalog = starting_catalog(0);
    for entry in &mut catalog {
        let drawn: f64 = normal.sample(rng);
        entry.count = (drawn.round() as i64).max(1);
    }
    catalog
}
