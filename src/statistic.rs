//! Pearson's chi-square goodness-of-fit statistic.

use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::Categorical;

/// Pearson's chi-square goodness-of-fit statistic for observed counts
/// against a null distribution.
///
/// With `n = Σ observed_i`:
///
/// ```text
/// X² = n · Σ_i (observed_i/n - p_i)² / p_i
/// ```
///
/// Preconditions (enforced at configuration, not re-checked here beyond
/// debug assertions): `observed.len() == null.len()` and every null entry
/// strictly positive. An all-zero `observed` yields 0, since an empty
/// sample deviates nowhere.
///
/// Pure and deterministic; always finite and non-negative over valid inputs.
#[must_use]
pub fn chi_square_statistic(observed: &[u64], null: &Categorical) -> f64 {
    debug_assert_eq!(
        observed.len(),
        null.len(),
        "observed counts and null distribution must have the same dimension"
    );
    debug_assert!(
        null.probs().iter().all(|&p| p > 0.0),
        "null entries must be strictly positive"
    );

    let n: u64 = observed.iter().sum();
    if n == 0 {
        return 0.0;
    }
    let nf = n as f64;

    let mut acc = 0.0;
    for (&obs, &p) in observed.iter().zip(null.probs()) {
        let diff = obs as f64 / nf - p;
        acc += diff * diff / p;
    }
    nf * acc
}

/// Upper-tail p-value: P(X² ≥ `statistic`) under the chi-square distribution
/// with `dof` degrees of freedom.
///
/// Returns NaN for `dof == 0` or a non-finite statistic.
#[must_use]
pub fn chi_square_pvalue(statistic: f64, dof: usize) -> f64 {
    if dof == 0 || !statistic.is_finite() {
        return f64::NAN;
    }
    match ChiSquared::new(dof as f64) {
        Ok(dist) => 1.0 - dist.cdf(statistic.max(0.0)),
        Err(_) => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn positive_simplex_vec(len: usize) -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(0.01f64..10.0, len).prop_map(|mut v| {
            let s: f64 = v.iter().sum();
            for x in v.iter_mut() {
                *x /= s;
            }
            v
        })
    }

    #[test]
    fn perfect_fit_scores_zero() {
        let null = Categorical::new(vec![0.25; 4]).unwrap();
        let observed = [25u64, 25, 25, 25];
        let stat = chi_square_statistic(&observed, &null);
        assert!(stat.abs() < 1e-12, "stat={stat}");
    }

    #[test]
    fn matches_a_hand_computed_value() {
        // n = 100, observed frequencies (0.45, 0.55) against a fair coin:
        // X² = 100 · ((-0.05)²/0.5 + (0.05)²/0.5) = 1.0.
        let null = Categorical::new(vec![0.5, 0.5]).unwrap();
        let stat = chi_square_statistic(&[45, 55], &null);
        assert!((stat - 1.0).abs() < 1e-12, "stat={stat}");
    }

    #[test]
    fn empty_sample_scores_zero() {
        let null = Categorical::new(vec![0.5, 0.5]).unwrap();
        assert_eq!(chi_square_statistic(&[0, 0], &null), 0.0);
    }

    #[test]
    fn statistic_grows_with_deviation() {
        let null = Categorical::new(vec![0.5, 0.5]).unwrap();
        let mild = chi_square_statistic(&[55, 45], &null);
        let wild = chi_square_statistic(&[80, 20], &null);
        assert!(wild > mild, "mild={mild} wild={wild}");
    }

    #[test]
    fn pvalue_matches_the_tabulated_threshold() {
        // 3.84 is the tabulated 95% point for one degree of freedom, so its
        // upper-tail probability sits at 0.05 up to table rounding.
        let p = chi_square_pvalue(3.84, 1);
        assert!((p - 0.05).abs() < 1e-3, "p={p}");
    }

    #[test]
    fn pvalue_decreases_as_the_statistic_grows() {
        let lo = chi_square_pvalue(1.0, 3);
        let hi = chi_square_pvalue(10.0, 3);
        assert!(hi < lo, "lo={lo} hi={hi}");
    }

    #[test]
    fn pvalue_is_nan_outside_the_domain() {
        assert!(chi_square_pvalue(1.0, 0).is_nan());
        assert!(chi_square_pvalue(f64::NAN, 3).is_nan());
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 96, .. ProptestConfig::default() })]

        #[test]
        fn statistic_is_nonnegative_and_finite(
            (null, observed) in (2usize..=12).prop_flat_map(|len| {
                (
                    positive_simplex_vec(len),
                    prop::collection::vec(0u64..1_000, len),
                )
            }),
        ) {
            let null = Categorical::new(null).unwrap();
            let stat = chi_square_statistic(&observed, &null);
            prop_assert!(stat.is_finite());
            prop_assert!(stat >= 0.0);
        }

        #[test]
        fn sampling_from_the_null_keeps_the_statistic_finite(
            probs in (2usize..=10).prop_flat_map(positive_simplex_vec),
            sample_size in 1u64..2_000,
            seed in any::<u64>(),
        ) {
            let dist = Categorical::new(probs).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let counts = crate::sample_counts(&mut rng, &dist, sample_size);
            let stat = chi_square_statistic(&counts, &dist);
            prop_assert!(stat.is_finite());
            prop_assert!(stat >= 0.0);
        }

        #[test]
        fn pvalue_stays_in_the_unit_interval(
            stat in 0.0f64..200.0,
            dof in 1usize..30,
        ) {
            let p = chi_square_pvalue(stat, dof);
            prop_assert!((0.0..=1.0).contains(&p), "p={p}");
        }
    }
}
