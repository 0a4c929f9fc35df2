// File: crates/derivplot/src/lib.rs
// Summary: Composes the four-layer derivative comparison chart from a dataset.

use anyhow::{Context, Result};
use numdiff::Dataset;
use plot_core::{Axis, Chart, RenderOptions, Series};
use skia_safe as skia;
use std::path::Path;

/// Fixed input document, relative to the working directory.
pub const DATA_PATH: &str = "data.json";

/// Legend labels, in layer order.
pub const LABEL_ANALYTIC: &str = "analyt";
pub const LABEL_H: &str = "h";
pub const LABEL_H2: &str = "h_2";
pub const LABEL_RUNGE: &str = "runge";

fn zip_xy(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    xs.iter().zip(ys).map(|(&x, &y)| (x, y)).collect()
}

/// Build the comparison chart: the analytic curve underneath (z=1) and the
/// three approximation layers stacked above it (z=2..4), shrinking marker
/// sizes so coarser layers stay visible behind finer ones.
pub fn comparison_chart(dataset: &Dataset) -> Chart {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 1.0);
    chart.y_axis = Axis::new("Y", 0.0, 1.0);

    chart.add_series(
        Series::line(zip_xy(&dataset.grid_viz, &dataset.derivative_analytic))
            .with_label(LABEL_ANALYTIC)
            .with_stroke_width(2.0)
            .with_z_order(1),
    );
    chart.add_series(
        Series::scatter(zip_xy(&dataset.grid_h, &dataset.derivative_h))
            .with_label(LABEL_H)
            .with_color(skia::Color::from_argb(255, 128, 0, 128)) // purple
            .with_marker_radius(7.0)
            .with_z_order(2),
    );
    chart.add_series(
        Series::scatter(zip_xy(&dataset.grid_h2, &dataset.derivative_h2))
            .with_label(LABEL_H2)
            .with_color(skia::Color::from_argb(255, 255, 0, 0)) // red
            .with_marker_radius(6.0)
            .with_z_order(3),
    );
    chart.add_series(
        Series::scatter(zip_xy(&dataset.grid_h2, &dataset.updated_runge))
            .with_label(LABEL_RUNGE)
            .with_color(skia::Color::from_argb(255, 0, 128, 0)) // green
            .with_marker_radius(5.0)
            .with_z_order(4),
    );

    chart.autoscale_axes(0.02);
    chart
}

/// The whole pipeline: load and validate the dataset at `path`, compose the
/// chart, and render it to PNG bytes. Any load failure aborts before a
/// single drawing call.
pub fn render(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let dataset =
        Dataset::load(path).with_context(|| format!("loading dataset '{}'", path.display()))?;
    log::info!(
        "plotting {} analytic nodes, {} + {} approximation nodes",
        dataset.grid_viz.len(),
        dataset.grid_h.len(),
        dataset.grid_h2.len()
    );
    let chart = comparison_chart(&dataset);
    chart.render_to_png_bytes(&RenderOptions::default())
}
