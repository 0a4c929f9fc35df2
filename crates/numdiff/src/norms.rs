// File: crates/numdiff/src/norms.rs
// Summary: Error norms between an analytic reference and a numerical estimate.

/// Max-abs and root-mean-square deviation of `numerical` from `analytic`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Norms {
    pub max_abs: f64,
    pub rms: f64,
}

pub fn norms(analytic: &[f64], numerical: &[f64]) -> Result<Norms, &'static str> {
    if analytic.len() != numerical.len() {
        return Err("sequences differ in length");
    }
    if analytic.is_empty() {
        return Err("sequences are empty");
    }
    let mut max_abs = 0.0f64;
    let mut sum_sq = 0.0f64;
    for (a, n) in analytic.iter().zip(numerical) {
        let e = (n - a).abs();
        max_abs = max_abs.max(e);
        sum_sq += e * e;
    }
    Ok(Norms {
        max_abs,
        rms: (sum_sq / analytic.len() as f64).sqrt(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_error_for_identical_sequences() {
        let v = vec![1.0, -2.0, 3.5];
        let n = norms(&v, &v).unwrap();
        assert_eq!(n.max_abs, 0.0);
        assert_eq!(n.rms, 0.0);
    }

    #[test]
    fn max_and_rms_computed() {
        let a = vec![0.0, 0.0, 0.0, 0.0];
        let b = vec![1.0, -1.0, 1.0, -1.0];
        let n = norms(&a, &b).unwrap();
        assert!((n.max_abs - 1.0).abs() < 1e-12);
        assert!((n.rms - 1.0).abs() < 1e-12);
    }

    #[test]
    fn length_mismatch_is_an_error() {
        assert!(norms(&[1.0, 2.0], &[1.0]).is_err());
        assert!(norms(&[], &[]).is_err());
    }
}
