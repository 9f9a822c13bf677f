//! Configuration-time error taxonomy.
//!
//! Every variant is detected before the simulation loop starts; sampling and
//! statistic evaluation are total over validated inputs, so nothing here is
//! raised mid-run.

/// Validation failure for a power-analysis configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Null and alternative distributions have different category counts.
    #[error("null distribution has {null} categories but alternative has {alternative}")]
    DimensionMismatch { null: usize, alternative: usize },

    /// A distribution's probabilities do not sum to 1 within
    /// [`SIMPLEX_TOLERANCE`](crate::SIMPLEX_TOLERANCE).
    #[error("probabilities in the {name} distribution sum to {sum}, not 1")]
    NotNormalized { name: &'static str, sum: f64 },

    /// A distribution has no categories.
    #[error("the {name} distribution is empty")]
    Empty { name: &'static str },

    /// A probability entry is negative, NaN, or infinite.
    #[error("the {name} distribution has invalid probability {value} at category {index}")]
    InvalidProbability {
        name: &'static str,
        index: usize,
        value: f64,
    },

    /// The null distribution assigns zero mass to a category, so the
    /// chi-square statistic would divide by zero.
    #[error("null distribution assigns zero probability to category {index}")]
    ZeroNullProbability { index: usize },

    /// Degrees of freedom outside the range covered by the critical-value
    /// source.
    #[error("no critical value for {dof} degrees of freedom; this source covers 1..={max_dof}")]
    UnsupportedDegreesOfFreedom { dof: usize, max_dof: usize },

    /// Confidence level outside the open interval (0, 1).
    #[error("confidence level {0} is outside (0, 1)")]
    InvalidConfidence(f64),

    /// Sample size must be at least 1.
    #[error("sample size must be positive")]
    ZeroSampleSize,

    /// Repetition count must be at least 1.
    #[error("repetition count must be positive")]
    ZeroRepetitions,
}
