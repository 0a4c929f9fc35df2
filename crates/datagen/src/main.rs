// File: crates/datagen/src/main.rs
// Summary: Computes derivatives at h and h/2, refines via Runge-Romberg, writes data.json,
// and prints the error-norm table.

use anyhow::{Context, Result};
use numdiff::{task, TaskParams};

const DATA_PATH: &str = "data.json";

fn main() -> Result<()> {
    env_logger::init();

    let params = TaskParams::default();
    log::info!(
        "generating dataset on [{}, {}] with {} nodes (h = {:.6})",
        params.a,
        params.b,
        params.nodes,
        params.step()
    );

    let (dataset, errors) = task::generate(&params);
    dataset.save(DATA_PATH).context("writing data.json")?;
    println!("Wrote {} ({} viz nodes)", DATA_PATH, dataset.grid_viz.len());

    println!();
    println!("{:<10} {:>14} {:>14}", "estimate", "max|err|", "rms");
    println!("{:<10} {:>14.6e} {:>14.6e}", "h", errors.coarse.max_abs, errors.coarse.rms);
    println!("{:<10} {:>14.6e} {:>14.6e}", "h/2", errors.fine.max_abs, errors.fine.rms);
    println!("{:<10} {:>14.6e} {:>14.6e}", "runge", errors.runge.max_abs, errors.runge.rms);
    println!();
    println!("leading error estimate (max): {:.6e}", errors.leading_error_max);
    Ok(())
}
