// File: crates/numdiff/src/task.rs
// Summary: The experiment itself: reference function, parameters, and the full pipeline.

use crate::dataset::Dataset;
use crate::norms::{norms, Norms};
use crate::{fdiff, grid, richardson};

/// Convergence order of the finite-difference stencils.
pub const METHOD_ORDER: u32 = 2;

/// Reference function: f(x) = x^2 * sin(x).
pub fn f(x: f64) -> f64 {
    x * x * x.sin()
}

/// Closed-form derivative: f'(x) = 2x * sin(x) + x^2 * cos(x).
pub fn df(x: f64) -> f64 {
    2.0 * x * x.sin() + x * x * x.cos()
}

/// Experiment parameters: interval, coarse node count, and how much finer
/// the visualization grid is than the h/2 grid.
#[derive(Clone, Copy, Debug)]
pub struct TaskParams {
    pub a: f64,
    pub b: f64,
    pub nodes: usize,
    pub viz_ratio: usize,
}

impl Default for TaskParams {
    fn default() -> Self {
        Self { a: -4.0, b: 4.0, nodes: 30, viz_ratio: 20 }
    }
}

impl TaskParams {
    /// Coarse step h.
    pub fn step(&self) -> f64 {
        (self.b - self.a).abs() / (self.nodes - 1) as f64
    }

    /// Node count of the h/2 grid (nested: 2M - 1).
    pub fn fine_nodes(&self) -> usize {
        self.nodes * 2 - 1
    }
}

/// Error norms of each estimate against the analytic derivative, plus the
/// Runge leading-error bound of the h/2 estimate.
#[derive(Clone, Copy, Debug)]
pub struct ErrorTable {
    pub coarse: Norms,
    pub fine: Norms,
    pub runge: Norms,
    pub leading_error_max: f64,
}

/// Run the whole experiment: sample f on nested grids, differentiate at h
/// and h/2, refine via Runge-Romberg, and evaluate the analytic derivative
/// on a dense visualization grid.
pub fn generate(params: &TaskParams) -> (Dataset, ErrorTable) {
    let grid_h = grid::uniform(params.a, params.b, params.nodes);
    let grid_h2 = grid::refine(&grid_h, 2);
    debug_assert_eq!(grid_h2.len(), params.fine_nodes());

    let func_h: Vec<f64> = grid_h.iter().map(|&x| f(x)).collect();
    let func_h2: Vec<f64> = grid_h2.iter().map(|&x| f(x)).collect();

    let h = params.step();
    let derivative_h = fdiff::derivative(&func_h, h);
    let derivative_h2 = fdiff::derivative(&func_h2, h / 2.0);

    let refined = richardson::refine(&derivative_h2, &derivative_h, METHOD_ORDER)
        .expect("h and h/2 grids nest by construction");

    let grid_viz = grid::refine(&grid_h2, params.viz_ratio);
    let derivative_viz: Vec<f64> = grid_viz.iter().map(|&x| df(x)).collect();

    let analytic_h: Vec<f64> = grid_h.iter().map(|&x| df(x)).collect();
    let analytic_h2: Vec<f64> = grid_h2.iter().map(|&x| df(x)).collect();

    let table = ErrorTable {
        coarse: norms(&analytic_h, &derivative_h).expect("equal-length by construction"),
        fine: norms(&analytic_h2, &derivative_h2).expect("equal-length by construction"),
        runge: norms(&analytic_h2, &refined.updated).expect("equal-length by construction"),
        leading_error_max: refined
            .leading_error
            .iter()
            .fold(0.0f64, |m, e| m.max(e.abs())),
    };
    log::info!(
        "experiment: h={h:.6}, max|err| h={:.3e} h/2={:.3e} runge={:.3e}",
        table.coarse.max_abs,
        table.fine.max_abs,
        table.runge.max_abs
    );

    let dataset = Dataset {
        grid_viz,
        derivative_analytic: derivative_viz,
        grid_h,
        derivative_h,
        grid_h2,
        derivative_h2,
        updated_runge: refined.updated,
    };
    (dataset, table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analytic_derivative_matches_function() {
        // Spot-check f' against a tight central difference of f.
        for &x in &[-3.7, -1.0, 0.0, 0.5, 2.9] {
            let eps = 1e-6;
            let fd = (f(x + eps) - f(x - eps)) / (2.0 * eps);
            assert!((fd - df(x)).abs() < 1e-6, "at x={x}");
        }
    }

    #[test]
    fn generated_dataset_is_valid_and_nested() {
        let params = TaskParams::default();
        let (ds, _) = generate(&params);
        ds.validate().expect("length invariants hold");
        assert_eq!(ds.grid_h.len(), 30);
        assert_eq!(ds.grid_h2.len(), 59);
        assert_eq!(ds.grid_viz.len(), (59 - 1) * 20 + 1);
        // Coarse nodes sit at even fine indices.
        for (i, &x) in ds.grid_h.iter().enumerate() {
            assert!((ds.grid_h2[i * 2] - x).abs() < 1e-12);
        }
    }

    #[test]
    fn runge_layer_improves_on_fine_estimate() {
        let (_, table) = generate(&TaskParams::default());
        assert!(table.fine.max_abs < table.coarse.max_abs);
        assert!(table.runge.max_abs < table.fine.max_abs);
    }
}
