// tests/simulation.rs
//
// End-to-end runs of the pricing loop: termination, determinism, and the
// invariants every append-only log must satisfy afterwards.

use shop_pricing::io::{catalog, reporting};
use shop_pricing::model::reaction::Mood;
use shop_pricing::simulation::config::SimulationConfig;
use shop_pricing::simulation::engine::ShopSimulation;
use shop_pricing::strategy::thompson::ThompsonSampler;

fn run_to_completion(seed: u64, stock_per_item: i64) -> ShopSimulation {
    let config = SimulationConfig {
        shelf_count: 4,
        rng_seed: seed,
        max_cycles: 100_000,
    };
    let catalog = catalog::starting_catalog(stock_per_item);
    let mut sim = ShopSimulation::new(config, &catalog, Box::new(ThompsonSampler::new()))
        .expect("catalog is well-formed");
    sim.run().expect("run converges");
    sim
}

#[test]
fn run_drains_inventory_and_shelves() {
    let sim = run_to_completion(71_071_763, 5);

    assert!(sim.is_terminated());
    assert_eq!(sim.inventory().total_stock_count(), 0);
    assert!(!sim.shelves().any_occupied());

    // Every unit leaves the shop through exactly one completed sale.
    let sold = sim
        .reactions()
        .iter()
        .filter(|r| r.mood != Mood::Angry)
        .count();
    assert_eq!(sold, 50);
}

#[test]
fn bound_history_never_inverts() {
    let sim = run_to_completion(9, 4);
    for revision in sim.bounds().history() {
        assert!(
            revision.low <= revision.high,
            "{} has [{}, {}]",
            revision.item,
            revision.low,
            revision.high
        );
    }
}

#[test]
fn competition_indices_strictly_increase_over_the_run() {
    let sim = run_to_completion(13, 3);
    let trace = sim.competitions();
    assert!(!trace.is_empty());
    for window in trace.windows(2) {
        assert!(window[1].competition_index > window[0].competition_index);
    }
    assert_eq!(
        trace.last().unwrap().competition_index as usize,
        trace.len() - 1
    );
}

#[test]
fn sampled_prices_respect_their_recorded_bounds() {
    let sim = run_to_completion(21, 3);
    for record in sim.competitions() {
        assert!(record.price_lower_bound <= record.sampled_price);
        assert!(record.sampled_price <= record.price_upper_bound);
        assert!(record.price_lower_bound <= record.price_upper_bound);
    }
}

#[test]
fn shelf_history_alternates_stock_and_empty_per_shelf() {
    let sim = run_to_completion(33, 3);
    for shelf_id in 0..4 {
        let mut expect_stock = true;
        for transition in sim
            .shelves()
            .history()
            .iter()
            .filter(|t| t.shelf_id == shelf_id)
        {
            if expect_stock {
                assert!(transition.item.is_some() && transition.price.is_some());
            } else {
                assert!(transition.item.is_none() && transition.price.is_none());
            }
            expect_stock = !expect_stock;
        }
        // Drained shop: the last transition for every shelf is an emptying.
        assert!(expect_stock);
    }
}

#[test]
fn fixed_seed_replays_the_entire_run() {
    let a = run_to_completion(71_071_763, 4);
    let b = run_to_completion(71_071_763, 4);

    let reactions =
        |sim: &ShopSimulation| -> Vec<(usize, String, i64, String)> {
            sim.reactions()
                .iter()
                .map(|r| (r.shelf_id, r.item.clone(), r.price, r.mood.to_string()))
                .collect()
        };
    assert_eq!(reactions(&a), reactions(&b));

    let draws = |sim: &ShopSimulation| -> Vec<(String, i64)> {
        sim.competitions()
            .iter()
            .map(|c| (c.item.clone(), c.sampled_price))
            .collect()
    };
    assert_eq!(draws(&a), draws(&b));
    assert_eq!(a.cycles_run(), b.cycles_run());
    assert_eq!(a.total_revenue(), b.total_revenue());
}

#[test]
fn different_seeds_diverge() {
    let a = run_to_completion(1, 4);
    let b = run_to_completion(2, 4);

    let draws = |sim: &ShopSimulation| -> Vec<i64> {
        sim.competitions()
            .iter()
            .map(|c| c.sampled_price)
            .collect()
    };
    // Hundreds of independent draws; identical traces would mean the seed
    // is being ignored somewhere.
    assert_ne!(draws(&a), draws(&b));
}

#[test]
fn run_logs_export_one_csv_per_ledger() {
    let sim = run_to_completion(5, 2);
    let dir = std::env::temp_dir().join(format!("shop-pricing-logs-{}", std::process::id()));

    reporting::write_run_logs(&dir, &sim).expect("export succeeds");
    for name in [
        "cycles.csv",
        "reactions.csv",
        "thompson_competitions.csv",
        "price_bound_history.csv",
        "shelf_history.csv",
        "inventory_changes.csv",
    ] {
        let contents = std::fs::read_to_string(dir.join(name)).expect(name);
        // Header plus at least one data row.
        assert!(contents.lines().count() > 1, "{} is empty", name);
    }
    let _ = std::fs::remove_dir_all(&dir);
}
