use tracing::debug;

/// Entries at or below this mass are left out of the entropy sum, which keeps
/// `0 * ln(0)` and logs of near-zero values out of the result.
pub const MASS_EPSILON: f32 = 1e-6;

/// Shannon entropy (natural log) of a class histogram.
///
/// The normaliser is the sum over *all* entries, including the ones too small
/// to contribute a term. An all-zero histogram is an empty node and is
/// reported as pure.
pub fn histogram_entropy(counts: &[f32]) -> f64 {
    let total: f64 = counts.iter().map(|&c| c as f64).sum();
    if total <= 0.0 {
        debug!(classes = counts.len(), "entropy of an empty histogram taken as zero");
        return 0.0;
    }

    let mut entropy = 0.0;
    for &c in counts {
        if c > MASS_EPSILON {
            let p = c as f64 / total;
            entropy -= p * p.ln();
        }
    }
    entropy
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn pure_histogram_has_zero_entropy() {
        assert!(approx_eq(histogram_entropy(&[0.0, 5.0, 0.0]), 0.0, EPS));
    }

    #[test]
    fn uniform_histogram_is_ln_k() {
        assert!(approx_eq(histogram_entropy(&[2.0, 2.0, 2.0, 2.0]), 4f64.ln(), EPS));
    }

    #[test]
    fn mixed_histogram_matches_hand_computation() {
        let p = [1.0 / 3.0, 1.0 / 6.0, 0.5];
        let expected: f64 = -p.iter().map(|&x: &f64| x * x.ln()).sum::<f64>();
        assert!(approx_eq(histogram_entropy(&[2.0, 1.0, 3.0]), expected, EPS));
        assert!(approx_eq(expected, 1.0114, 1e-4));
    }

    #[test]
    fn sub_epsilon_mass_is_dropped_but_still_normalises() {
        let tiny = 5e-7f32;
        let with_tiny = histogram_entropy(&[1.0, tiny]);
        let total = 1.0 + tiny as f64;
        let p = 1.0 / total;
        assert!(approx_eq(with_tiny, -p * p.ln(), 1e-15));
        assert!(with_tiny > 0.0);
    }

    #[test]
    fn empty_histogram_is_pure() {
        assert_eq!(histogram_entropy(&[0.0, 0.0]), 0.0);
        assert_eq!(histogram_entropy(&[]), 0.0);
    }
}
