// File: crates/plot-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use plot_core::{Axis, Chart, RenderOptions, Series};

#[test]
fn render_smoke_png() {
    // Minimal data: tiny line plus a scatter layer on top
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(
        Series::line(vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)])
            .with_label("curve")
            .with_z_order(1),
    );
    chart.add_series(
        Series::scatter(vec![(0.5, 1.0), (2.5, 2.0), (3.5, 3.0)])
            .with_label("points")
            .with_marker_radius(5.0)
            .with_z_order(2),
    );

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn degenerate_series_render_without_drawing() {
    // A one-point line and an empty scatter have nothing to paint but must
    // not break the render.
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 1.0);
    chart.y_axis = Axis::new("Y", 0.0, 1.0);
    chart.add_series(Series::line(vec![(0.5, 0.5)]));
    chart.add_series(Series::scatter(Vec::new()));

    let bytes = chart.render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
