use std::{env, fs, path::PathBuf};

use anyhow::Context;
use log::info;

use regression_sweep::{config::SweepConfig, plot, summary, sweep};

const DEFAULT_PLOT_DIR: &str = "plots";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Usage: regression-sweep [config.json]
    let config = match env::args().nth(1) {
        Some(path) => SweepConfig::from_path(&path)
            .with_context(|| format!("failed to load sweep config from {path}"))?,
        None => SweepConfig::default(),
    };

    let plot_dir = PathBuf::from(
        env::var("PLOT_DIR").unwrap_or_else(|_| DEFAULT_PLOT_DIR.to_string()),
    );
    fs::create_dir_all(&plot_dir)
        .with_context(|| format!("failed to create {}", plot_dir.display()))?;

    let reports = sweep::run_sweep(&config)?;

    println!("{}", summary::summary(&reports));
    if let Some(best) = sweep::best_by_clean_loss(&reports) {
        println!(
            "closest to the clean line: {} (slope={:.4}, intercept={:.4}, clean mse={:.5})",
            best.name, best.slope, best.intercept, best.clean_mse
        );
    }

    sweep::write_json(&reports, plot_dir.join("results.json"))?;

    let dataset = config.data.build()?;
    plot::plot_losses(&reports, plot_dir.join("losses.svg"))?;
    plot::plot_fits(&dataset, &reports, plot_dir.join("fits.svg"))?;

    info!("plots and results written to {}", plot_dir.display());
    Ok(())
}
