// File: crates/plot-core/src/grid.rs
// Summary: Tick layout helpers for major/minor gridlines and tick labels.

/// Pick a "nice" step (1, 2, or 5 times a power of ten) so that roughly
/// `target` ticks fit into `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let target = target.max(2) as f64;
    let raw = (span / target).abs().max(1e-12);
    let mag = 10f64.powf(raw.log10().floor());
    let frac = raw / mag;
    let nice = if frac <= 1.0 {
        1.0
    } else if frac <= 2.0 {
        2.0
    } else if frac <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Major tick positions inside `[min, max]`, aligned to multiples of the step.
pub fn major_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(max > min) {
        return vec![min, max];
    }
    let step = nice_step(max - min, target);
    let first = (min / step).ceil() * step;
    let mut out = Vec::new();
    let mut v = first;
    // Half-step slack keeps the last tick through float drift.
    while v <= max + step * 0.5 {
        if v >= min - step * 1e-9 {
            out.push(v);
        }
        v += step;
    }
    out
}

/// Minor tick positions: `per_interval - 1` evenly spaced ticks between
/// consecutive majors, clipped to `[min, max]`. Major positions are excluded.
pub fn minor_ticks(majors: &[f64], per_interval: usize, min: f64, max: f64) -> Vec<f64> {
    if majors.len() < 2 || per_interval < 2 {
        return Vec::new();
    }
    let sub = (majors[1] - majors[0]) / per_interval as f64;
    let mut out = Vec::new();
    // Also walk outward from the first/last major to cover the clipped edges.
    let start = majors[0] - (per_interval as f64) * sub;
    let end = majors[majors.len() - 1] + (per_interval as f64) * sub;
    let mut v = start;
    let mut k = 0usize;
    while v <= end + sub * 0.5 {
        if k % per_interval != 0 && v >= min && v <= max {
            out.push(v);
        }
        v += sub;
        k += 1;
    }
    out
}

/// Format a tick value with just enough decimals for the given step.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    let s = format!("{value:.decimals$}");
    // Avoid the "-0" label.
    if s == "-0" { "0".to_string() } else { s }
}
