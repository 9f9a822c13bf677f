//! `chipower`: Monte Carlo power estimation for the chi-square
//! goodness-of-fit test.
//!
//! You believe counts follow a known discrete distribution (a coin is 50/50,
//! or arrivals split 60/30/10 across three queues). Reports come in that the
//! rates may have shifted. Before collecting data, you want to know: **how
//! large a sample do I need so that a chi-square test would actually catch
//! the shift I suspect?** Collecting too little data produces a test that
//! "passes" simply because it was never able to see anything.
//!
//! `chipower` answers this by simulation:
//!
//! 1. Draw a random sample of size `N` from the *alternative* distribution
//!    (the shift you suspect is real).
//! 2. Compute Pearson's chi-square statistic of that sample against the
//!    *null* distribution (the rates you are testing for).
//! 3. Record whether the statistic exceeds the critical value at the chosen
//!    confidence level (95% by default).
//! 4. Repeat `Ntests` times; the fraction of significant repetitions
//!    estimates the test's power at sample size `N`.
//!
//! If the estimated power is below your target (0.95 is the usual bar),
//! rerun with a larger `N`. The search over `N` is deliberately manual: each
//! run answers one concrete question about one sample size.
//!
//! **Goals:**
//! - **Deterministic by default**: [`estimate_power`] always uses seed 0;
//!   same configuration → same estimate. [`estimate_power_seeded`] varies
//!   the stream.
//! - **Validated up front**: every consistency rule (matching lengths,
//!   normalization, positive null entries, covered degrees of freedom) is
//!   checked when the [`PowerConfig`] is built; the simulation loop itself
//!   has no failure modes.
//! - **Order-independent randomness**: each repetition seeds its own RNG
//!   from (base seed, repetition index), so sequential runs and `parallel`-
//!   feature runs (rayon) produce identical estimates.
//! - **Qualified estimates**: the detection ratio is itself a Monte Carlo
//!   estimate; [`PowerEstimate`] carries a Wilson score interval so a run
//!   with few repetitions cannot masquerade as precise.
//!
//! # Example
//!
//! Is `N = 1300` enough to detect a coin that lands heads 55% of the time,
//! testing at 95% confidence against a fair-coin null?
//!
//! ```rust
//! use chipower::{estimate_power, PowerConfig};
//!
//! let cfg = PowerConfig::new(
//!     vec![0.5, 0.5],   // null: the claimed fair coin
//!     vec![0.45, 0.55], // alternative: the bias we suspect
//!     1300,             // flips per simulated test
//!     2000,             // simulated tests
//! )?;
//! let estimate = estimate_power(&cfg);
//!
//! // ~0.95 for this scenario: 1300 flips usually suffice.
//! assert!(estimate.power > 0.9);
//! # Ok::<(), chipower::Error>(())
//! ```
//!
//! # Design notes
//!
//! - Significance is a **strict** comparison: a statistic exactly equal to
//!   the critical value does not count. Equality has probability ≈ 0 in
//!   practice; the choice is pinned here for reproducibility.
//! - Normalization uses tolerance-based equality (`|sum - 1| ≤`
//!   [`SIMPLEX_TOLERANCE`]): ordinary decimal literals such as
//!   `[0.45, 0.55]` rarely sum to exactly 1.0 in binary floating point.
//! - Sampling uses the conditional-binomial multinomial decomposition
//!   (O(dim) per repetition rather than O(N)); the counts are distributed
//!   exactly as Multinomial(N, alternative) and always sum to N.
//! - The default critical-value source is the classic two-decimal 95% table
//!   for 1..=20 degrees of freedom (at most 21 categories).
//!   [`CriticalValues::computed`] derives thresholds from the chi-square
//!   inverse CDF instead, lifting the ceiling and allowing other confidence
//!   levels. It is an explicit opt-in: its full-precision thresholds can
//!   classify borderline statistics differently than the rounded table.
//!
//! # References
//!
//! - Pearson (1900), "On the criterion that a given system of deviations ...",
//!   Philosophical Magazine 50: the chi-square goodness-of-fit test.
//! - Cohen (1988), *Statistical Power Analysis for the Behavioral Sciences*:
//!   power targets and the sample-size workflow this crate simulates.
//! - Davis (1993), "The computer generation of multinomial random variates",
//!   Computational Statistics & Data Analysis 16: the conditional-binomial
//!   sampling scheme.
//! - Wilson (1927), "Probable inference, the law of succession, and
//!   statistical inference", JASA 22: the score interval attached to
//!   estimates.

#![forbid(unsafe_code)]

/// Tolerance for `|sum - 1|` when validating a probability distribution.
///
/// Well above accumulated f64 rounding for the ≤ 21 summands the reference
/// table supports, and far below any real misconfiguration.
pub const SIMPLEX_TOLERANCE: f64 = 1e-9;

mod error;
pub use error::*;

mod distribution;
pub use distribution::*;

mod critical;
pub use critical::*;

mod sampler;
pub use sampler::*;

mod statistic;
pub use statistic::*;

mod power;
pub use power::*;
