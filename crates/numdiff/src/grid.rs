// File: crates/numdiff/src/grid.rs
// Summary: Uniform grid generation and node-preserving refinement.

/// Uniform grid of `count` nodes over `[a, b]`, endpoints included.
/// Contract: `count >= 2` and `b > a`.
pub fn uniform(a: f64, b: f64, count: usize) -> Vec<f64> {
    assert!(count >= 2, "a grid needs at least two nodes");
    assert!(b > a, "grid interval must be non-degenerate");
    let step = (b - a) / (count - 1) as f64;
    let mut out: Vec<f64> = (0..count).map(|i| a + step * i as f64).collect();
    // Pin the endpoint exactly; accumulated float drift may miss `b`.
    out[count - 1] = b;
    out
}

/// Refine a grid by splitting every interval into `ratio` parts.
/// Existing nodes are kept verbatim; the result has
/// `(len - 1) * ratio + 1` nodes.
pub fn refine(nodes: &[f64], ratio: usize) -> Vec<f64> {
    assert!(nodes.len() >= 2, "refinement needs at least one interval");
    assert!(ratio >= 1, "refinement ratio must be positive");
    let mut out = Vec::with_capacity((nodes.len() - 1) * ratio + 1);
    for w in nodes.windows(2) {
        let (left, right) = (w[0], w[1]);
        let sub = (right - left) / ratio as f64;
        out.push(left);
        for k in 1..ratio {
            out.push(left + sub * k as f64);
        }
    }
    out.push(nodes[nodes.len() - 1]);
    out
}
