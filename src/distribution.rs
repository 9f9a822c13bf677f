//! Validated categorical distributions.

use crate::{Error, SIMPLEX_TOLERANCE};

/// A categorical probability distribution: one probability per category,
/// every entry finite and non-negative, summing to 1 within
/// [`SIMPLEX_TOLERANCE`].
///
/// Construction is the only validation point; once built, the entries are
/// immutable and downstream code (sampler, statistic) treats them as trusted.
/// Zero entries are allowed here, since a distribution may legitimately
/// assign no mass to a category. A *null* distribution with a zero entry is
/// still rejected at configuration time, because the chi-square statistic
/// divides by each null probability.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCategorical"))]
pub struct Categorical {
    probs: Vec<f64>,
}

impl Categorical {
    /// Validate `probs` as a probability distribution.
    pub fn new(probs: Vec<f64>) -> Result<Self, Error> {
        Self::named("categorical", probs)
    }

    /// Like [`Categorical::new`], with `name` identifying this distribution
    /// in error messages ("null", "alternative", ...).
    pub fn named(name: &'static str, probs: Vec<f64>) -> Result<Self, Error> {
        if probs.is_empty() {
            return Err(Error::Empty { name });
        }
        for (index, &value) in probs.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidProbability { name, index, value });
            }
        }
        let sum: f64 = probs.iter().sum();
        if (sum - 1.0).abs() > SIMPLEX_TOLERANCE {
            return Err(Error::NotNormalized { name, sum });
        }
        Ok(Self { probs })
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.probs.len()
    }

    /// Always false: an empty sequence never validates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// Probabilities per category, in input order.
    #[must_use]
    pub fn probs(&self) -> &[f64] {
        &self.probs
    }

    /// Index of the first exactly-zero entry, if any.
    pub(crate) fn first_zero(&self) -> Option<usize> {
        self.probs.iter().position(|&p| p == 0.0)
    }
}

/// Serialized mirror of [`Categorical`]. Decoding goes through
/// [`Categorical::new`], so a decoded value satisfies the same rules as a
/// constructed one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
pub(crate) struct RawCategorical {
    pub(crate) probs: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCategorical> for Categorical {
    type Error = Error;

    fn try_from(raw: RawCategorical) -> Result<Self, Error> {
        Categorical::new(raw.probs)
    }
}
