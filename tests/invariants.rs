//! Property tests across randomly generated configurations.

use chipower::{
    chi_square_statistic, estimate_power_seeded, sample_counts, Categorical, Error, PowerConfig,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

/// Strictly positive simplex, usable as a null distribution.
fn positive_simplex_vec(len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.01f64..10.0, len).prop_map(|mut v| {
        let s: f64 = v.iter().sum();
        for x in v.iter_mut() {
            *x /= s;
        }
        v
    })
}

fn config_inputs() -> impl Strategy<Value = (Vec<f64>, Vec<f64>, u64, u64)> {
    (2usize..=10).prop_flat_map(|len| {
        (
            positive_simplex_vec(len),
            positive_simplex_vec(len),
            1u64..400,
            1u64..48,
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn every_valid_configuration_yields_a_consistent_estimate(
        (null, alternative, sample_size, repetitions) in config_inputs(),
        seed in any::<u64>(),
    ) {
        let cfg = PowerConfig::new(null, alternative, sample_size, repetitions).unwrap();
        let est = estimate_power_seeded(&cfg, seed);
        prop_assert_eq!(est.repetitions, repetitions);
        prop_assert_eq!(est.sample_size, sample_size);
        prop_assert!(est.significant <= repetitions);
        prop_assert!((0.0..=1.0).contains(&est.power));
        prop_assert!((est.power - est.significant as f64 / repetitions as f64).abs() < 1e-15);
        prop_assert!(0.0 <= est.wilson_lo && est.wilson_lo <= est.power);
        prop_assert!(est.power <= est.wilson_hi && est.wilson_hi <= 1.0);
    }

    #[test]
    fn sampling_one_simplex_and_scoring_against_another_is_total(
        (null, alternative) in (2usize..=12).prop_flat_map(|len| {
            (positive_simplex_vec(len), positive_simplex_vec(len))
        }),
        sample_size in 1u64..3_000,
        seed in any::<u64>(),
    ) {
        let null = Categorical::new(null).unwrap();
        let alternative = Categorical::new(alternative).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);

        let counts = sample_counts(&mut rng, &alternative, sample_size);
        prop_assert_eq!(counts.iter().sum::<u64>(), sample_size);

        let stat = chi_square_statistic(&counts, &null);
        prop_assert!(stat.is_finite());
        prop_assert!(stat >= 0.0);
    }

    #[test]
    fn mismatched_lengths_never_construct(
        null in (2usize..=8).prop_flat_map(positive_simplex_vec),
        alternative in (2usize..=8).prop_flat_map(positive_simplex_vec),
    ) {
        prop_assume!(null.len() != alternative.len());
        let (nl, al) = (null.len(), alternative.len());
        let err = PowerConfig::new(null, alternative, 100, 10).unwrap_err();
        prop_assert_eq!(err, Error::DimensionMismatch { null: nl, alternative: al });
    }

    #[test]
    fn scaled_vectors_never_construct(
        probs in (2usize..=8).prop_flat_map(positive_simplex_vec),
        scale in 1.01f64..3.0,
    ) {
        let scaled: Vec<f64> = probs.iter().map(|p| p * scale).collect();
        let err = PowerConfig::new(scaled, probs, 100, 10).unwrap_err();
        match err {
            Error::NotNormalized { name, sum } => {
                prop_assert_eq!(name, "null");
                prop_assert!((sum - scale).abs() < 1e-6, "sum={} scale={}", sum, scale);
            }
            other => prop_assert!(false, "unexpected error: {:?}", other),
        }
    }
}
