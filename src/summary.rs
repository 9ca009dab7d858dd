use std::fmt::Write;

use crate::training::TrainingReport;

const NAME_WIDTH: usize = 40;

/// Formats a value with `precision` decimals while it fits its column, in scientific notation
/// past `limit`.
fn cell(value: f32, precision: usize, limit: f32) -> String {
    if value.is_finite() && value.abs() < limit {
        format!("{value:.precision$}")
    } else {
        format!("{value:.2e}")
    }
}

/// Renders the reports as a fixed width table, one row per run in the given order.
pub fn summary(reports: &[TrainingReport]) -> String {
    let width = reports
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(0)
        .max(NAME_WIDTH);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<width$} {:>9} {:>9} {:>11} {:>11} {:>10} {:>6} {:>7}",
        "run", "slope", "intercept", "train loss", "clean mse", "final lr", "decays", "skipped"
    );
    let _ = writeln!(out, "{}", "-".repeat(width + 70));

    for report in reports {
        let lr = report.final_learning_rate().unwrap_or(f32::NAN);
        let _ = writeln!(
            out,
            "{:<width$} {:>9} {:>9} {:>11} {:>11} {:>10.2e} {:>6} {:>7}",
            report.name,
            cell(report.slope, 4, 1e3),
            cell(report.intercept, 4, 1e3),
            cell(report.train_loss, 5, 1e4),
            cell(report.clean_mse, 5, 1e4),
            lr,
            report.decays,
            report.skipped,
        );
    }

    out
}
