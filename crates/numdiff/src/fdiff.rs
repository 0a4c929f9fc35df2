// File: crates/numdiff/src/fdiff.rs
// Summary: Second-order finite-difference derivative on a uniform grid.

/// First derivative of uniformly sampled values with spacing `step`.
///
/// Central differences in the interior, three-point one-sided stencils at
/// the ends; every node is O(step^2) accurate. Needs at least 3 samples.
pub fn derivative(values: &[f64], step: f64) -> Vec<f64> {
    assert!(values.len() >= 3, "stencils need at least three samples");
    assert!(step > 0.0, "step must be positive");
    let n = values.len();
    let mut out = vec![0.0; n];

    out[0] = (-3.0 * values[0] + 4.0 * values[1] - values[2]) / (2.0 * step);
    for i in 1..n - 1 {
        out[i] = (values[i + 1] - values[i - 1]) / (2.0 * step);
    }
    out[n - 1] = (3.0 * values[n - 1] - 4.0 * values[n - 2] + values[n - 3]) / (2.0 * step);
    out
}
