use std::{ops::RangeInclusive, path::Path};

use log::debug;

use plotters::prelude::*;

use crate::{
    dataset::Dataset,
    error::{Result, SweepErr},
    training::TrainingReport,
};

const SIZE: (u32, u32) = (1400, 900);

/// How many clean spans past the clean targets a fitted line may reach and still be drawn.
const FIT_WINDOW: f32 = 10.;

fn plot_err<E: std::fmt::Display>(e: E) -> SweepErr {
    SweepErr::Plot(e.to_string())
}

/// Draws the loss curve of every run on a log scaled axis.
pub fn plot_losses<P: AsRef<Path>>(reports: &[TrainingReport], path: P) -> Result<()> {
    let positive = || {
        reports
            .iter()
            .flat_map(|r| r.losses.iter().copied())
            .filter(|l| l.is_finite() && *l > 0.)
    };

    let (Some(min), Some(max)) = (
        positive().reduce(f32::min),
        positive().reduce(f32::max),
    ) else {
        return Err(SweepErr::Plot("no finite positive losses to plot".into()));
    };
    let steps = reports.iter().map(|r| r.losses.len()).max().unwrap_or(1);

    let root = SVGBackend::new(path.as_ref(), SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Training loss per run", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(0..steps, (min..max.max(min * 10.)).log_scale())
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("step")
        .y_desc("loss")
        .draw()
        .map_err(plot_err)?;

    for (i, report) in reports.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        let points = report
            .losses
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_finite() && **l > 0.)
            .map(|(step, l)| (step, *l));

        chart
            .draw_series(LineSeries::new(points, color))
            .map_err(plot_err)?
            .label(report.name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 10))
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)
}

/// Returns the endpoints of a run's line, or `None` when the run diverged past `window`.
fn fitted_segment(
    report: &TrainingReport,
    (x_min, x_max): (f32, f32),
    window: &RangeInclusive<f32>,
) -> Option<[(f32, f32); 2]> {
    let segment = [x_min, x_max].map(|x| (x, report.slope * x + report.intercept));

    if segment.iter().all(|(_, y)| window.contains(y)) {
        Some(segment)
    } else {
        debug!("{} left out of the fit plot, its line ends outside {window:?}", report.name);
        None
    }
}

/// Draws the clean line samples and the line every run ended with.
pub fn plot_fits<P: AsRef<Path>>(
    dataset: &Dataset,
    reports: &[TrainingReport],
    path: P,
) -> Result<()> {
    let xs = dataset.xs();
    let clean = dataset.clean();

    let (Some(&x_min), Some(&x_max)) = (xs.first(), xs.last()) else {
        return Err(SweepErr::Plot("empty dataset".into()));
    };

    let (c_min, c_max) = clean
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &y| (lo.min(y), hi.max(y)));
    let span = (c_max - c_min).max(1.);
    let window = (c_min - FIT_WINDOW * span)..=(c_max + FIT_WINDOW * span);

    let segments: Vec<_> = reports
        .iter()
        .enumerate()
        .filter_map(|(i, r)| fitted_segment(r, (x_min, x_max), &window).map(|s| (i, r, s)))
        .collect();

    let (y_min, y_max) = segments
        .iter()
        .flat_map(|(_, _, s)| s.map(|(_, y)| y))
        .fold((c_min, c_max), |(lo, hi), y| (lo.min(y), hi.max(y)));
    let pad = ((y_max - y_min) * 0.05).max(1e-3);

    let root = SVGBackend::new(path.as_ref(), SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Fitted lines", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max.max(x_min + 1e-3), (y_min - pad)..(y_max + pad))
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("y")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(
            xs.iter()
                .zip(clean.iter())
                .map(|(&x, &y)| Circle::new((x, y), 3, BLACK.filled())),
        )
        .map_err(plot_err)?
        .label("clean")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, BLACK.filled()));

    for (i, report, line) in segments {
        let color = Palette99::pick(i).to_rgba();

        chart
            .draw_series(LineSeries::new(line, color))
            .map_err(plot_err)?
            .label(report.name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 10))
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use super::*;

    fn report(name: &str, slope: f32, intercept: f32) -> TrainingReport {
        TrainingReport {
            name: name.into(),
            slope,
            intercept,
            train_loss: 1.,
            clean_mse: 1.,
            losses: vec![4., 2., 1.],
            learning_rates: vec![0.1; 3],
            decays: 0,
            skipped: 0,
        }
    }

    #[test]
    fn diverged_lines_are_left_out() {
        let window = -10.0..=10.0;

        assert!(fitted_segment(&report("ok", 1., 0.), (-2., 2.), &window).is_some());
        // finite parameters whose line overflows at the endpoints
        assert!(fitted_segment(&report("huge", 1e38, 0.), (-5., 5.), &window).is_none());
        assert!(fitted_segment(&report("nan", f32::NAN, 0.), (-2., 2.), &window).is_none());
        assert!(fitted_segment(&report("far", 0., 1e6), (-2., 2.), &window).is_none());
    }

    #[test]
    fn fits_plot_with_a_diverged_run() {
        let dir = env::temp_dir().join(format!("regression-sweep-plot-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("fits.svg");

        let dataset = Dataset::linear(20, (-5., 5.), 2., 1.).unwrap();
        let reports = [
            report("fit", 2., 1.),
            report("diverged", 2.4e38, -1e30),
            report("nan", f32::NAN, 0.),
        ];

        plot_fits(&dataset, &reports, &path).unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("fit"));
        assert!(!svg.contains("diverged"));
    }
}
