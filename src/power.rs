//! Power estimation: configuration, trial runner, and the Monte Carlo
//! aggregator.
//!
//! A power run answers one question: if the data really come from the
//! alternative distribution, how often does a chi-square goodness-of-fit
//! test at sample size N reject the null? Each repetition draws one
//! Multinomial(N, alternative) sample and compares its statistic against
//! the critical value for `dim - 1` degrees of freedom. The detection ratio
//! over many repetitions estimates the test's power at that sample size.
//!
//! Repetitions are i.i.d. and order-independent: every repetition seeds its
//! own RNG from (base seed, repetition index), so the estimate is identical
//! whether the loop runs sequentially or across the `rayon` pool (feature
//! `parallel`).

use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "serde")]
use crate::distribution::RawCategorical;
use crate::{chi_square_statistic, sample_counts, Categorical, CriticalValues, Error};

/// z-score used for the Wilson interval attached to estimates (~95% coverage).
const WILSON_Z: f64 = 1.96;

/// Immutable, validated configuration for one power analysis.
///
/// Holds the null distribution, the alternative to sample from, the
/// per-repetition sample size, the repetition count, and the critical-value
/// source. All consistency rules are checked at construction; a constructed
/// config can run without further failure modes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPowerConfig"))]
pub struct PowerConfig {
    null: Categorical,
    alternative: Categorical,
    sample_size: u64,
    repetitions: u64,
    critical: CriticalValues,
    critical_value: f64,
}

impl PowerConfig {
    /// Validate a configuration against the 95% reference table.
    ///
    /// Checks, in order: equal lengths, each vector a probability
    /// distribution (finite non-negative entries summing to 1 within
    /// [`SIMPLEX_TOLERANCE`](crate::SIMPLEX_TOLERANCE)), strictly positive
    /// null entries, positive `sample_size` and `repetitions`, and a
    /// critical value available for `null.len() - 1` degrees of freedom.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chipower::PowerConfig;
    ///
    /// // Fair coin null, suspected 55/45 bias, 1300 flips per test.
    /// let cfg = PowerConfig::new(vec![0.5, 0.5], vec![0.45, 0.55], 1300, 10_000)?;
    /// assert_eq!(cfg.degrees_of_freedom(), 1);
    /// assert_eq!(cfg.critical_value(), 3.84);
    /// # Ok::<(), chipower::Error>(())
    /// ```
    pub fn new(
        null: Vec<f64>,
        alternative: Vec<f64>,
        sample_size: u64,
        repetitions: u64,
    ) -> Result<Self, Error> {
        Self::with_critical_values(
            null,
            alternative,
            sample_size,
            repetitions,
            CriticalValues::reference(),
        )
    }

    /// Like [`PowerConfig::new`], with an explicit critical-value source
    /// (e.g. [`CriticalValues::computed`] for more than 21 categories or a
    /// different confidence level).
    pub fn with_critical_values(
        null: Vec<f64>,
        alternative: Vec<f64>,
        sample_size: u64,
        repetitions: u64,
        critical: CriticalValues,
    ) -> Result<Self, Error> {
        if null.len() != alternative.len() {
            return Err(Error::DimensionMismatch {
                null: null.len(),
                alternative: alternative.len(),
            });
        }
        let null = Categorical::named("null", null)?;
        let alternative = Categorical::named("alternative", alternative)?;
        if let Some(index) = null.first_zero() {
            return Err(Error::ZeroNullProbability { index });
        }
        if sample_size == 0 {
            return Err(Error::ZeroSampleSize);
        }
        if repetitions == 0 {
            return Err(Error::ZeroRepetitions);
        }
        // Also rejects single-category inputs: dof 0 is outside every source.
        let critical_value = critical.value(null.len() - 1)?;
        Ok(Self {
            null,
            alternative,
            sample_size,
            repetitions,
            critical,
            critical_value,
        })
    }

    /// The hypothesized (null) distribution.
    #[must_use]
    pub fn null(&self) -> &Categorical {
        &self.null
    }

    /// The distribution samples are drawn from.
    #[must_use]
    pub fn alternative(&self) -> &Categorical {
        &self.alternative
    }

    /// Draws per repetition.
    #[must_use]
    pub fn sample_size(&self) -> u64 {
        self.sample_size
    }

    /// Number of simulated tests.
    #[must_use]
    pub fn repetitions(&self) -> u64 {
        self.repetitions
    }

    /// Category count minus one.
    #[must_use]
    pub fn degrees_of_freedom(&self) -> usize {
        self.null.len() - 1
    }

    /// Threshold the statistic is compared against, resolved at construction.
    #[must_use]
    pub fn critical_value(&self) -> f64 {
        self.critical_value
    }

    /// Confidence level of the critical-value source.
    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.critical.confidence()
    }

    /// Whether `statistic` counts as significant: strictly above the
    /// critical value. A statistic exactly on the threshold does not count.
    #[must_use]
    pub fn is_significant(&self, statistic: f64) -> bool {
        statistic > self.critical_value
    }
}

/// Serialized mirror of [`PowerConfig`]. Decoding rebuilds through
/// [`PowerConfig::with_critical_values`], re-running every construction
/// check and re-resolving the critical value from the decoded source (a
/// serialized `critical_value` field is ignored).
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPowerConfig {
    null: RawCategorical,
    alternative: RawCategorical,
    sample_size: u64,
    repetitions: u64,
    critical: CriticalValues,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPowerConfig> for PowerConfig {
    type Error = Error;

    fn try_from(raw: RawPowerConfig) -> Result<Self, Error> {
        Self::with_critical_values(
            raw.null.probs,
            raw.alternative.probs,
            raw.sample_size,
            raw.repetitions,
            raw.critical,
        )
    }
}

/// One simulated test: the statistic and its threshold comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialOutcome {
    /// Chi-square statistic of the drawn sample against the null.
    pub statistic: f64,
    /// `statistic > critical_value`.
    pub significant: bool,
}

/// Run a single repetition: draw one sample from the alternative, score it
/// against the null, compare with the critical value.
pub fn run_trial<R: Rng + ?Sized>(cfg: &PowerConfig, rng: &mut R) -> TrialOutcome {
    let counts = sample_counts(rng, cfg.alternative(), cfg.sample_size());
    let statistic = chi_square_statistic(&counts, cfg.null());
    TrialOutcome {
        statistic,
        significant: cfg.is_significant(statistic),
    }
}

/// Result of a power estimation run.
///
/// `power` is the detection ratio: the fraction of simulated tests whose
/// statistic strictly exceeded the critical value. It is itself a Monte
/// Carlo estimate of a binomial proportion, so `wilson_lo..=wilson_hi`
/// qualifies it: with few repetitions the interval is wide and the point
/// estimate should be read accordingly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerEstimate {
    /// Simulated tests run.
    pub repetitions: u64,
    /// Sample size per test.
    pub sample_size: u64,
    /// Tests whose statistic strictly exceeded the critical value.
    pub significant: u64,
    /// `significant / repetitions`, in `[0, 1]`.
    pub power: f64,
    /// Wilson score lower bound for the detection ratio (z = 1.96).
    pub wilson_lo: f64,
    /// Wilson score upper bound for the detection ratio (z = 1.96).
    pub wilson_hi: f64,
}

/// Estimate power with the default seed (0).
///
/// Deterministic: same configuration → same estimate. Use
/// [`estimate_power_seeded`] to vary the stream.
#[must_use]
pub fn estimate_power(cfg: &PowerConfig) -> PowerEstimate {
    estimate_power_seeded(cfg, 0)
}

/// Estimate power from an explicit base seed.
///
/// Each repetition derives its own `StdRng` from (`seed`, repetition index)
/// through a SplitMix64 finalizer, so repetitions are independent streams
/// and the estimate does not depend on execution order: sequential runs and
/// `parallel`-feature runs of the same seed produce identical results.
#[must_use]
pub fn estimate_power_seeded(cfg: &PowerConfig, seed: u64) -> PowerEstimate {
    let repetitions = cfg.repetitions();
    let significant = count_significant(cfg, seed);
    let power = significant as f64 / repetitions as f64;
    let (wilson_lo, wilson_hi) = wilson_bounds(significant, repetitions, WILSON_Z);
    PowerEstimate {
        repetitions,
        sample_size: cfg.sample_size(),
        significant,
        power,
        wilson_lo,
        wilson_hi,
    }
}

#[cfg(not(feature = "parallel"))]
fn count_significant(cfg: &PowerConfig, seed: u64) -> u64 {
    (0..cfg.repetitions())
        .filter(|&index| significant_trial(cfg, seed, index))
        .count() as u64
}

#[cfg(feature = "parallel")]
fn count_significant(cfg: &PowerConfig, seed: u64) -> u64 {
    (0..cfg.repetitions())
        .into_par_iter()
        .filter(|&index| significant_trial(cfg, seed, index))
        .count() as u64
}

fn significant_trial(cfg: &PowerConfig, seed: u64, index: u64) -> bool {
    let mut rng = StdRng::seed_from_u64(trial_seed(seed, index));
    run_trial(cfg, &mut rng).significant
}

/// Per-repetition RNG seed. For a fixed base seed, distinct indices map to
/// distinct seeds (odd-multiplier step, bijective finalizer).
#[inline]
fn trial_seed(seed: u64, index: u64) -> u64 {
    splitmix64(seed.wrapping_add(index.wrapping_mul(0x9E37_79B9_7F4A_7C15)))
}

/// SplitMix64 finalizer (improves bit diffusion / uniformity).
#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Wilson score interval for a Bernoulli proportion.
///
/// Returns `(lower, upper)`, both clamped into `[0, 1]` and always
/// containing the observed rate `successes / trials`; `(0, 1)` when
/// `trials == 0`. Non-finite or non-positive `z` falls back to 1.96.
#[must_use]
pub fn wilson_bounds(successes: u64, trials: u64, z: f64) -> (f64, f64) {
    if trials == 0 {
        return (0.0, 1.0);
    }
    let n = trials as f64;
    let k = successes.min(trials) as f64;
    let p_hat = k / n;
    let z = if z.is_finite() && z > 0.0 { z } else { 1.96 };
    let z2 = z * z;

    // center = (p + z^2/(2n)) / (1 + z^2/n)
    // radius = z * sqrt(p(1-p)/n + z^2/(4n^2)) / (1 + z^2/n)
    let denom = 1.0 + z2 / n;
    let center = (p_hat + z2 / (2.0 * n)) / denom;
    let radius = (z * ((p_hat * (1.0 - p_hat) / n) + (z2 / (4.0 * n * n))).sqrt()) / denom;
    // At p_hat = 0 or 1 the exact bound equals p_hat, but rounding the two
    // divisions can land one ulp inside; widen so the rate is always contained.
    let lo = (center - radius).clamp(0.0, 1.0).min(p_hat);
    let hi = (center + radius).clamp(0.0, 1.0).max(p_hat);
    (lo, hi)
}
