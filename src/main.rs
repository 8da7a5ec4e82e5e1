use rand::rngs::StdRng;
use rand::SeedableRng;
use shop_pricing::io::{catalog, reporting};
use shop_pricing::simulation::config::SimulationConfig;
use shop_pricing::simulation::engine::ShopSimulation;
use shop_pricing::strategy::thompson::ThompsonSampler;
use std::env;
use std::path::Path;

fn main() {
    println!("=== Shop Pricing Simulation ===");

    // 1. SETUP CONFIGURATION
    // Defaults match the classic setup: 4 shelves, 20 of each item.
    let mut config = SimulationConfig::default();
    let mut stock_per_item: i64 = 20;
    let mut random_stock = false;

    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" if i + 1 < args.len() => {
                config.rng_seed = args[i + 1].parse().unwrap_or(config.rng_seed);
                i += 1;
            }
            "--shelves" if i + 1 < args.len() => {
                config.shelf_count = args[i + 1].parse().unwrap_or(config.shelf_count);
                i += 1;
            }
            "--stock" if i + 1 < args.len() => {
                stock_per_item = args[i + 1].parse().unwrap_or(stock_per_item);
                i += 1;
            }
            "--random-stock" => random_stock = true,
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(2);
            }
        }
        i += 1;
    }

    // 2. BUILD THE CATALOG
    // Items, starting stock, initial price bounds and reaction thresholds.
    let catalog = if random_stock {
        let mut rng = StdRng::seed_from_u64(config.rng_seed);
        catalog::randomized_catalog(stock_per_item as f64, stock_per_item as f64 / 4.0, &mut rng)
    } else {
        catalog::starting_catalog(stock_per_item)
    };
    let total_units: i64 = catalog.iter().map(|e| e.count).sum();
    println!(
        "Catalog: {} items, {} units, {} shelves, seed {}",
        catalog.len(),
        total_units,
        config.shelf_count,
        config.rng_seed
    );

    // 3. INITIALIZE SIMULATION
    let policy = Box::new(ThompsonSampler::new());
    let mut sim = match ShopSimulation::new(config, &catalog, policy) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Bad starting data: {}", e);
            std::process::exit(1);
        }
    };

    // 4. RUN UNTIL INVENTORY AND SHELVES ARE BOTH EMPTY
    println!("Running until inventory and shelves drain...");
    if let Err(e) = sim.run() {
        eprintln!("Simulation aborted: {}", e);
        std::process::exit(1);
    }

    // 5. EXPORT THE APPEND-ONLY LOGS
    let out_dir = Path::new("run_logs");
    match reporting::write_run_logs(out_dir, &sim) {
        Ok(_) => println!("Logs written to ./{}", out_dir.display()),
        Err(e) => eprintln!("Error writing logs: {}", e),
    }

    // 6. PRINT SALES SUMMARY
    println!("\n=== Sales Summary ===");
    println!("Cycles run: {}", sim.cycles_run());
    for (mood, count) in sim.mood_breakdown() {
        println!("{}: {}", mood, count);
    }
    println!("Total revenue: {}", sim.total_revenue());

    println!("\nFinal price bounds:");
    for (item, bound) in sim.bounds().current_bounds() {
        println!("  {}: [{}, {}]", item, bound.low, bound.high);
    }

    println!("\nSimulation Complete.");
}
