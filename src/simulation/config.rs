// src/simulation/config.rs

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Number of display slots, ids 0..shelf_count.
    pub shelf_count: usize,
    /// Seed for the single shared generator. The same seed replays the
    /// whole run byte-for-byte.
    pub rng_seed: u64,
    /// Hard cap on simulation cycles. Starting bounds that can never
    /// converge (a point bound priced above its angry threshold) would loop
    /// forever; hitting the cap aborts the run instead.
    pub max_cycles: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            shelf_count: 4,
            rng_seed: 71_071_763,
            max_cycles: 100_000,
        }
    }
}
