// File: crates/plot-core/benches/render_bench.rs
// Purpose: Benchmark PNG rendering of dense line + scatter charts.

use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plot_core::{Axis, Chart, RenderOptions, Series};

fn build_chart(n: usize) -> Chart {
    let mut ch = Chart::new();
    let mut line = Vec::with_capacity(n);
    let mut points = Vec::with_capacity(n / 10);
    for i in 0..n {
        let x = i as f64;
        let y = (i as f64 * 0.01).sin() * 10.0 + i as f64 * 0.0001;
        line.push((x, y));
        if i % 10 == 0 {
            points.push((x, y + 0.5));
        }
    }
    ch.x_axis = Axis::new("X", 0.0, (n - 1) as f64);
    ch.y_axis = Axis::new("Y", -12.0, 12.0);
    ch.add_series(Series::line(line).with_z_order(1));
    ch.add_series(Series::scatter(points).with_marker_radius(3.0).with_z_order(2));
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("line_scatter_{n}"), |b| {
            let ch = build_chart(n);
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 500;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
