// File: crates/derivplot/tests/compose.rs
// Purpose: Validate chart composition: layer count, styling, labels, z-order.

use derivplot::{comparison_chart, LABEL_ANALYTIC, LABEL_H, LABEL_H2, LABEL_RUNGE};
use numdiff::{task, Dataset, TaskParams};
use plot_core::SeriesType;

fn small_dataset() -> Dataset {
    let (ds, _) = task::generate(&TaskParams { a: -1.0, b: 1.0, nodes: 5, viz_ratio: 3 });
    ds
}

#[test]
fn four_layers_one_line_three_scatter() {
    let chart = comparison_chart(&small_dataset());
    assert_eq!(chart.series.len(), 4);
    let lines = chart.series.iter().filter(|s| s.series_type == SeriesType::Line).count();
    let scatters = chart.series.iter().filter(|s| s.series_type == SeriesType::Scatter).count();
    assert_eq!(lines, 1);
    assert_eq!(scatters, 3);
}

#[test]
fn legend_labels_in_order() {
    let chart = comparison_chart(&small_dataset());
    let labels: Vec<&str> = chart.series.iter().filter_map(|s| s.label.as_deref()).collect();
    assert_eq!(labels, vec![LABEL_ANALYTIC, LABEL_H, LABEL_H2, LABEL_RUNGE]);
}

#[test]
fn axes_labeled_x_and_y_and_cover_data() {
    let ds = small_dataset();
    let chart = comparison_chart(&ds);
    assert_eq!(chart.x_axis.label, "X");
    assert_eq!(chart.y_axis.label, "Y");
    assert!(chart.x_axis.min <= ds.grid_h[0]);
    assert!(chart.x_axis.max >= *ds.grid_h.last().unwrap());
}

#[test]
fn analytic_curve_sits_below_the_scatters() {
    let chart = comparison_chart(&small_dataset());
    let line_z = chart.series[0].z_order;
    for s in &chart.series[1..] {
        assert!(s.z_order > line_z, "scatter should paint above the curve");
    }
    // Marker sizes shrink with z so lower layers stay visible.
    let radii: Vec<f32> = chart.series[1..].iter().map(|s| s.marker_radius).collect();
    assert!(radii.windows(2).all(|w| w[1] < w[0]));
}
