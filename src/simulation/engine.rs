// src/simulation/engine.rs

use crate::error::PricingError;
use crate::io::catalog::CatalogEntry;
use crate::model::bounds::{PriceBound, PriceBoundStore};
use crate::model::inventory::InventoryLedger;
use crate::model::reaction::{Mood, ReactionEvent, ReactionThresholds};
use crate::model::shelves::ShelfRegistry;
use crate::simulation::config::SimulationConfig;
use crate::strategy::revision::revise_bound;
use crate::strategy::thompson::CompetitionRecord;
use crate::strategy::traits::{Candidate, PricingPolicy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::BTreeMap;

/// One row of the per-cycle summary log.
#[derive(Debug, Clone, Serialize)]
pub struct CycleRecord {
    pub cycle: usize,
    pub total_stock: i64,
    pub occupied_shelves: usize,
    pub restocked: usize,
    pub corrected: usize,
    pub mood: Option<Mood>,
}

/// The shop simulation: shelves, inventory, bounds, and the loop that
/// drives sampling, reactions and bound revision until everything drains.
///
/// Strictly sequential. Every operation completes (state plus its history
/// row) before the next begins, and all randomness flows through the one
/// seeded generator in a fixed call order, so a fixed seed replays the run
/// exactly.
pub struct ShopSimulation {
    config: SimulationConfig,
    rng: StdRng,
    policy: Box<dyn PricingPolicy>,

    // Shared state, mutated only through the ledgers' own operations.
    bounds: PriceBoundStore,
    inventory: InventoryLedger,
    shelves: ShelfRegistry,
    thresholds: BTreeMap<String, ReactionThresholds>,

    // Append-only logs.
    reactions: Vec<ReactionEvent>,
    competitions: Vec<CompetitionRecord>,
    pub history: Vec<CycleRecord>,

    current_cycle: usize,
}

impl ShopSimulation {
    /// Seeds shelves, inventory, bounds and thresholds from the catalog.
    ///
    /// Fails with `InvariantViolation` on an inverted starting bound or
    /// unordered thresholds; bad seed data would otherwise surface as
    /// confusing mid-run errors.
    pub fn new(
        config: SimulationConfig,
        catalog: &[CatalogEntry],
        policy: Box<dyn PricingPolicy>,
    ) -> Result<Self, PricingError> {
        let rng = StdRng::seed_from_u64(config.rng_seed);
        let shelves = ShelfRegistry::new(config.shelf_count);

        let mut bounds = PriceBoundStore::new();
        let mut inventory = InventoryLedger::new();
        let mut thresholds = BTreeMap::new();
        for entry in catalog {
            if !entry.thresholds.is_ordered() {
                return Err(PricingError::InvariantViolation(format!(
                    "reaction thresholds for '{}' are not ordered",
                    entry.item
                )));
            }
            bounds.append(&entry.item, entry.bound, None)?;
            inventory.record_delta(&entry.item, entry.count);
            thresholds.insert(entry.item.clone(), entry.thresholds);
        }

        Ok(Self {
            config,
            rng,
            policy,
            bounds,
            inventory,
            shelves,
            thresholds,
            reactions: Vec::new(),
            competitions: Vec::new(),
            history: Vec::new(),
            current_cycle: 0,
        })
    }

    /// Fills empty shelves (ascending id) while stock remains, never
    /// oversubscribing past `min(empty shelves, total stock)`. Each fill is
    /// one full sampling round over everything currently in stock; the trace
    /// is persisted before the shelf is touched.
    pub fn restock_all_empty_shelves(&mut self) -> Result<usize, PricingError> {
        let mut restocked = 0;
        for shelf_id in self.shelves.empty_ids() {
            if self.inventory.total_stock_count() == 0 {
                break;
            }
            let candidates = self.candidates()?;
            let round = self.policy.choose(&candidates, &mut self.rng)?;
            self.competitions.extend(round.competitions);

            self.inventory.record_delta(&round.winner.item, -1);
            self.shelves
                .stock(shelf_id, &round.winner.item, round.winner.price)?;
            restocked += 1;
        }
        Ok(restocked)
    }

    /// One customer encounter: a uniformly chosen occupied shelf reacts, the
    /// bound is revised, the shelf empties. An angry customer walks away and
    /// the item goes back into inventory.
    ///
    /// Returns `None` when no shelf is occupied.
    pub fn run_one_reaction_cycle(&mut self) -> Result<Option<ReactionEvent>, PricingError> {
        let occupied = self.shelves.occupied_ids();
        if occupied.is_empty() {
            return Ok(None);
        }
        let shelf_id = occupied[self.rng.gen_range(0..occupied.len())];

        let (item, price) = match self.shelves.contents(shelf_id)? {
            Some((item, price)) => (item.to_string(), price),
            None => {
                return Err(PricingError::InvariantViolation(format!(
                    "occupied shelf {} has no contents",
                    shelf_id
                )))
            }
        };
        let thresholds = self.thresholds.get(&item).ok_or_else(|| {
            PricingError::InvariantViolation(format!("no reaction thresholds for '{}'", item))
        })?;
        let mood = thresholds.classify(price);

        let reaction_seq = self.reactions.len() as u64;
        let event = ReactionEvent {
            shelf_id,
            item: item.clone(),
            price,
            mood,
        };
        self.reactions.push(event.clone());

        let current = self.current_bound(&item)?;
        let revised = revise_bound(mood, price, current);
        self.bounds.append(&item, revised, Some(reaction_seq))?;

        self.shelves.clear(shelf_id)?;
        if mood == Mood::Angry {
            // Rejected sale: the unit returns to inventory.
            self.inventory.record_delta(&item, 1);
        }
        Ok(Some(event))
    }

    /// Empties every occupied shelf whose set price has drifted outside its
    /// item's now-current bound, returning those units to inventory. The
    /// freed slots re-enter the next restock round under the latest bounds.
    pub fn correct_bound_violations(&mut self) -> Result<usize, PricingError> {
        let mut corrected = 0;
        for shelf_id in self.shelves.occupied_ids() {
            let (item, price) = match self.shelves.contents(shelf_id)? {
                Some((item, price)) => (item.to_string(), price),
                None => continue,
            };
            let bound = self.current_bound(&item)?;
            if !bound.contains(price) {
                self.shelves.clear(shelf_id)?;
                self.inventory.record_delta(&item, 1);
                corrected += 1;
            }
        }
        Ok(corrected)
    }

    /// The run is over only when inventory AND shelves are both drained.
    pub fn is_terminated(&self) -> bool {
        self.inventory.total_stock_count() == 0 && !self.shelves.any_occupied()
    }

    /// Drives restock -> reaction -> violation-correction cycles until
    /// termination, recording one summary row per cycle.
    pub fn run(&mut self) -> Result<(), PricingError> {
        while !self.is_terminated() {
            if self.current_cycle >= self.config.max_cycles {
                return Err(PricingError::InvariantViolation(format!(
                    "simulation did not converge within {} cycles",
                    self.config.max_cycles
                )));
            }

            let restocked = self.restock_all_empty_shelves()?;
            let reaction = self.run_one_reaction_cycle()?;
            let corrected = self.correct_bound_violations()?;

            self.history.push(CycleRecord {
                cycle: self.current_cycle,
                total_stock: self.inventory.total_stock_count(),
                occupied_shelves: self.shelves.occupied_ids().len(),
                restocked,
                corrected,
                mood: reaction.map(|r| r.mood),
            });

            if self.current_cycle % 100 == 0 {
                println!(
                    "Cycle {}: stock {}, occupied {}, reactions {}",
                    self.current_cycle,
                    self.inventory.total_stock_count(),
                    self.shelves.occupied_ids().len(),
                    self.reactions.len()
                );
            }
            self.current_cycle += 1;
        }
        Ok(())
    }

    /// Revenue from completed sales (every non-angry reaction).
    pub fn total_revenue(&self) -> i64 {
        self.reactions
            .iter()
            .filter(|r| r.mood != Mood::Angry)
            .map(|r| r.price)
            .sum()
    }

    /// Reaction counts per mood, for the end-of-run summary.
    pub fn mood_breakdown(&self) -> Vec<(Mood, usize)> {
        [Mood::Ecstatic, Mood::Content, Mood::Sad, Mood::Angry]
            .into_iter()
            .map(|mood| {
                let count = self.reactions.iter().filter(|r| r.mood == mood).count();
                (mood, count)
            })
            .collect()
    }

    pub fn reactions(&self) -> &[ReactionEvent] {
        &self.reactions
    }

    pub fn competitions(&self) -> &[CompetitionRecord] {
        &self.competitions
    }

    pub fn bounds(&self) -> &PriceBoundStore {
        &self.bounds
    }

    pub fn inventory(&self) -> &InventoryLedger {
        &self.inventory
    }

    pub fn shelves(&self) -> &ShelfRegistry {
        &self.shelves
    }

    pub fn cycles_run(&self) -> usize {
        self.current_cycle
    }

    fn candidates(&self) -> Result<Vec<Candidate>, PricingError> {
        self.inventory
            .current_stock()
            .into_keys()
            .map(|item| {
                let bound = self.current_bound(&item)?;
                Ok(Candidate { item, bound })
            })
            .collect()
    }

    fn current_bound(&self, item: &str) -> Result<PriceBound, PricingError> {
        self.bounds.current_bound(item).ok_or_else(|| {
            PricingError::InvariantViolation(format!("no price bound for '{}'", item))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::bounds::PriceBound;
    use crate::strategy::thompson::ThompsonSampler;

    fn entry(item: &str, count: i64, low: i64, high: i64) -> CatalogEntry {
        CatalogEntry {
            item: item.to_string(),
            count,
            bound: PriceBound { low, high },
            thresholds: ReactionThresholds {
                cheap_upper: low + (high - low) / 4,
                perfect_upper: low + (high - low) / 2,
                expensive_upper: low + 3 * (high - low) / 4,
            },
        }
    }

    fn simulation(catalog: &[CatalogEntry], shelf_count: usize, seed: u64) -> ShopSimulation {
        let config = SimulationConfig {
            shelf_count,
            rng_seed: seed,
            max_cycles: 50_000,
        };
        ShopSimulation::new(config, catalog, Box::new(ThompsonSampler::new())).unwrap()
    }

    #[test]
    fn restock_never_oversubscribes_scarce_stock() {
        let catalog = vec![entry("vine", 2, 2, 80)];
        let mut sim = simulation(&catalog, 4, 11);

        let restocked = sim.restock_all_empty_shelves().unwrap();
        assert_eq!(restocked, 2);
        assert_eq!(sim.shelves().occupied_ids(), vec![0, 1]);
        assert_eq!(sim.inventory().total_stock_count(), 0);
        // Two rounds over one candidate each -> two trace rows.
        assert_eq!(sim.competitions().len(), 2);
    }

    #[test]
    fn reaction_empties_the_shelf_and_revises_the_bound() {
        let catalog = vec![entry("iron_bar", 1, 100, 200)];
        let mut sim = simulation(&catalog, 1, 5);
        sim.restock_all_empty_shelves().unwrap();

        let event = sim.run_one_reaction_cycle().unwrap().unwrap();
        assert_eq!(event.item, "iron_bar");
        assert!(!sim.shelves().any_occupied());

        // One seed row plus one reaction-linked revision.
        let history = sim.bounds().history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].reaction_seq, Some(0));
        assert!(history[1].low <= history[1].high);
    }

    #[test]
    fn angry_reaction_returns_the_item_to_inventory() {
        // Bound forces a price far above the angry threshold.
        let catalog = vec![CatalogEntry {
            item: "golem_core".to_string(),
            count: 1,
            bound: PriceBound {
                low: 900,
                high: 1000,
            },
            thresholds: ReactionThresholds {
                cheap_upper: 10,
                perfect_upper: 20,
                expensive_upper: 30,
            },
        }];
        let mut sim = simulation(&catalog, 1, 5);
        sim.restock_all_empty_shelves().unwrap();
        assert_eq!(sim.inventory().total_stock_count(), 0);

        let event = sim.run_one_reaction_cycle().unwrap().unwrap();
        assert_eq!(event.mood, Mood::Angry);
        assert_eq!(sim.inventory().total_stock_count(), 1);
        assert!(!sim.is_terminated());
    }

    #[test]
    fn reaction_cycle_without_occupied_shelves_is_a_no_op() {
        let catalog = vec![entry("vine", 0, 2, 80)];
        let mut sim = simulation(&catalog, 2, 5);
        assert!(sim.run_one_reaction_cycle().unwrap().is_none());
        assert!(sim.is_terminated());
    }

    #[test]
    fn violation_correction_frees_drifted_shelves() {
        let catalog = vec![entry("teeth_stone", 2, 100, 200)];
        let mut sim = simulation(&catalog, 1, 5);
        sim.restock_all_empty_shelves().unwrap();
        let (_, price) = sim.shelves().contents(0).unwrap().unwrap();

        // Move the bound out from under the stocked shelf.
        sim.bounds
            .append(
                "teeth_stone",
                PriceBound {
                    low: price + 1,
                    high: price + 10,
                },
                None,
            )
            .unwrap();

        let corrected = sim.correct_bound_violations().unwrap();
        assert_eq!(corrected, 1);
        assert!(!sim.shelves().any_occupied());
        // The unit came back: one left over plus the returned one.
        assert_eq!(sim.inventory().total_stock_count(), 2);
    }

    #[test]
    fn unordered_thresholds_fail_construction() {
        let catalog = vec![CatalogEntry {
            item: "vine".to_string(),
            count: 1,
            bound: PriceBound { low: 2, high: 80 },
            thresholds: ReactionThresholds {
                cheap_upper: 50,
                perfect_upper: 10,
                expensive_upper: 60,
            },
        }];
        let config = SimulationConfig::default();
        assert!(
            ShopSimulation::new(config, &catalog, Box::new(ThompsonSampler::new())).is_err()
        );
    }

    #[test]
    fn small_run_drains_inventory_and_shelves() {
        let catalog = vec![entry("vine", 3, 2, 80), entry("root", 3, 2, 80)];
        let mut sim = simulation(&catalog, 2, 17);
        sim.run().unwrap();

        assert!(sim.is_terminated());
        assert_eq!(sim.inventory().total_stock_count(), 0);
        assert!(!sim.shelves().any_occupied());
        assert!(!sim.reactions().is_empty());
        assert_eq!(sim.history.len(), sim.cycles_run());
    }
}
