//! Critical-value sources: degrees of freedom → chi-square threshold.

use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::Error;

/// Tabulated upper 5% points of the chi-square distribution, degrees of
/// freedom 1 through 20 (the classic two-decimal textbook table).
const CHI_SQUARE_95: [f64; 20] = [
    3.84, 5.99, 7.81, 9.49, 11.07, 12.59, 14.07, 15.51, 16.92, 18.31, 19.68, 21.03, 22.36, 23.68,
    25.00, 26.30, 27.59, 28.87, 30.14, 31.41,
];

/// A critical-value source for the chi-square test.
///
/// Maps degrees of freedom to the statistic threshold at a fixed confidence
/// level, over an explicit covered range `1..=max_dof`; lookups outside that
/// range fail with [`Error::UnsupportedDegreesOfFreedom`]. Immutable once
/// built.
///
/// Two constructors:
/// - [`CriticalValues::reference`]: the tabulated 95% values above
///   (degrees of freedom 1..=20, i.e. up to 21 categories). The default.
/// - [`CriticalValues::computed`]: thresholds from the chi-square inverse
///   CDF, for any confidence level and range. Selecting this over the
///   reference table is an explicit caller choice: computed values carry
///   full float precision where the table is rounded to two decimals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCriticalValues"))]
pub struct CriticalValues {
    confidence: f64,
    // values[dof - 1] holds the threshold for `dof` degrees of freedom.
    values: Vec<f64>,
}

fn validate_confidence(confidence: f64) -> Result<(), Error> {
    if !confidence.is_finite() || confidence <= 0.0 || confidence >= 1.0 {
        return Err(Error::InvalidConfidence(confidence));
    }
    Ok(())
}

impl CriticalValues {
    /// The tabulated 95% reference values for 1..=20 degrees of freedom.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            confidence: 0.95,
            values: CHI_SQUARE_95.to_vec(),
        }
    }

    /// Compute thresholds from the chi-square inverse CDF for
    /// `1..=max_dof` degrees of freedom at the given confidence level.
    pub fn computed(confidence: f64, max_dof: usize) -> Result<Self, Error> {
        validate_confidence(confidence)?;
        if max_dof == 0 {
            return Err(Error::UnsupportedDegreesOfFreedom { dof: 0, max_dof });
        }
        let mut values = Vec::with_capacity(max_dof);
        for dof in 1..=max_dof {
            let dist = ChiSquared::new(dof as f64)
                .map_err(|_| Error::UnsupportedDegreesOfFreedom { dof, max_dof })?;
            values.push(dist.inverse_cdf(confidence));
        }
        Ok(Self { confidence, values })
    }

    /// Threshold for `dof` degrees of freedom.
    pub fn value(&self, dof: usize) -> Result<f64, Error> {
        if dof == 0 || dof > self.values.len() {
            return Err(Error::UnsupportedDegreesOfFreedom {
                dof,
                max_dof: self.values.len(),
            });
        }
        Ok(self.values[dof - 1])
    }

    /// Largest covered degrees of freedom.
    #[must_use]
    pub fn max_dof(&self) -> usize {
        self.values.len()
    }

    /// Confidence level of this source.
    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

impl Default for CriticalValues {
    fn default() -> Self {
        Self::reference()
    }
}

/// Serialized mirror of [`CriticalValues`]. Decoding enforces what the
/// constructors enforce: a valid confidence level and at least one covered
/// degree of freedom.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCriticalValues {
    confidence: f64,
    values: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCriticalValues> for CriticalValues {
    type Error = Error;

    fn try_from(raw: RawCriticalValues) -> Result<Self, Error> {
        validate_confidence(raw.confidence)?;
        if raw.values.is_empty() {
            return Err(Error::UnsupportedDegreesOfFreedom { dof: 1, max_dof: 0 });
        }
        Ok(Self {
            confidence: raw.confidence,
            values: raw.values,
        })
    }
}
