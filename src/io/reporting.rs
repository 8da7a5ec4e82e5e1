// src/io/reporting.rs

use crate::error::PricingError;
use crate::simulation::engine::ShopSimulation;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Writes every append-only log of a finished run to its own CSV file under
/// `dir`: per-cycle summary, reactions, sampling trace, bound revisions,
/// shelf transitions and inventory deltas.
pub fn write_run_logs(dir: &Path, sim: &ShopSimulation) -> Result<(), PricingError> {
    fs::create_dir_all(dir)?;
    write_csv(&dir.join("cycles.csv"), &sim.history)?;
    write_csv(&dir.join("reactions.csv"), sim.reactions())?;
    write_csv(&dir.join("thompson_competitions.csv"), sim.competitions())?;
    write_csv(&dir.join("price_bound_history.csv"), sim.bounds().history())?;
    write_csv(&dir.join("shelf_history.csv"), sim.shelves().history())?;
    write_csv(&dir.join("inventory_changes.csv"), sim.inventory().history())?;
    Ok(())
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), PricingError> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
