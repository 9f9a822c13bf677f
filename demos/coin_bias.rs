//! Is 1300 flips enough to catch a biased coin?
//!
//! A supplier claims their coin is fair. You suspect it actually lands heads
//! 55% of the time. This demo estimates the power of a 95%-confidence
//! chi-square test at N = 1300 flips: the probability that the test flags
//! the bias when the bias is real.
//!
//! Run with:
//!   cargo run --example coin_bias

use chipower::{chi_square_pvalue, estimate_power, run_trial, PowerConfig};
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    // -----------------------------------------------------------------
    // 1. Configure the experiment.
    // -----------------------------------------------------------------
    let cfg = PowerConfig::new(
        vec![0.5, 0.5],   // null: the claimed fair coin
        vec![0.45, 0.55], // alternative: the bias we suspect
        1300,             // flips per simulated test
        10_000,           // simulated tests
    )
    .unwrap();

    println!(
        "Testing at {:.0}% confidence, {} degrees of freedom, critical value {}",
        cfg.confidence() * 100.0,
        cfg.degrees_of_freedom(),
        cfg.critical_value()
    );

    // -----------------------------------------------------------------
    // 2. One repetition up close.
    // -----------------------------------------------------------------
    let mut rng = StdRng::seed_from_u64(1);
    let trial = run_trial(&cfg, &mut rng);
    println!(
        "\nA single simulated test: statistic {:.3} (p = {:.4}) -> {}",
        trial.statistic,
        chi_square_pvalue(trial.statistic, cfg.degrees_of_freedom()),
        if trial.significant {
            "bias detected"
        } else {
            "looks fair"
        }
    );

    // -----------------------------------------------------------------
    // 3. The full power run.
    // -----------------------------------------------------------------
    let estimate = estimate_power(&cfg);

    println!("\nNumber of Tests: {}", estimate.repetitions);
    println!("Sample size N: {}", estimate.sample_size);
    println!(
        "The ratio of significant to total chi-square tests is {}. Ideally, this should be 95% or higher.",
        estimate.power
    );
    println!(
        "(Wilson 95% interval for that ratio: [{:.4}, {:.4}])",
        estimate.wilson_lo, estimate.wilson_hi
    );

    // -----------------------------------------------------------------
    // 4. Where to go next.
    // -----------------------------------------------------------------
    // - Power below your target? Increase N and rerun; the sweep demo
    //   automates the rerun loop: cargo run --example sample_size_sweep
    // - More than 21 categories or a different confidence level:
    //   PowerConfig::with_critical_values + CriticalValues::computed.
}
