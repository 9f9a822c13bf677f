//! Multinomial sampling from a categorical distribution.

use rand::Rng;
use rand_distr::{Binomial, Distribution};

use crate::Categorical;

/// Draw one Multinomial(`sample_size`, `dist`) sample: how many of
/// `sample_size` i.i.d. categorical draws landed in each category.
///
/// Uses the conditional-binomial decomposition (Davis 1993): category `i`
/// receives a Binomial(remaining, p_i / mass_i) draw, where mass_i is the
/// probability not yet consumed, and the last category absorbs whatever
/// remains. Equivalent in distribution to tallying `sample_size` individual
/// draws, O(dim) instead of O(sample_size), and the returned counts sum to
/// `sample_size` exactly.
///
/// # Example
///
/// ```rust
/// use chipower::{sample_counts, Categorical};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let dist = Categorical::new(vec![0.45, 0.55])?;
/// let mut rng = StdRng::seed_from_u64(7);
/// let counts = sample_counts(&mut rng, &dist, 1300);
/// assert_eq!(counts.iter().sum::<u64>(), 1300);
/// # Ok::<(), chipower::Error>(())
/// ```
pub fn sample_counts<R: Rng + ?Sized>(
    rng: &mut R,
    dist: &Categorical,
    sample_size: u64,
) -> Vec<u64> {
    let probs = dist.probs();
    let mut counts = vec![0u64; probs.len()];
    let mut remaining = sample_size;
    let mut mass_left = 1.0_f64;

    for (i, &p) in probs.iter().enumerate() {
        if remaining == 0 {
            break;
        }
        if i + 1 == probs.len() {
            counts[i] = remaining;
            break;
        }
        // mass_left can drift slightly below p near the tail; cap at 1.
        let cond = if mass_left > 0.0 {
            (p / mass_left).min(1.0)
        } else {
            1.0
        };
        let drawn = if cond >= 1.0 {
            remaining
        } else {
            match Binomial::new(remaining, cond) {
                Ok(d) => d.sample(rng),
                Err(_) => 0,
            }
        };
        counts[i] = drawn;
        remaining -= drawn;
        mass_left -= p;
    }

    counts
}
