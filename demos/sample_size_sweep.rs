//! Finding the sample size that reaches 95% power, by hand.
//!
//! The library estimates power for one sample size at a time; choosing N is
//! a manual loop: run, read the ratio, adjust. This demo performs that loop
//! over a fixed grid of sample sizes for the biased-coin scenario and prints
//! the first N whose estimated power clears the 0.95 bar.
//!
//! Run with:
//!   cargo run --example sample_size_sweep

use chipower::{estimate_power_seeded, PowerConfig};

const TARGET_POWER: f64 = 0.95;

fn main() {
    let null = vec![0.5, 0.5];
    let alternative = vec![0.45, 0.55];
    let repetitions = 4_000;

    println!("Null {null:?} vs alternative {alternative:?}, {repetitions} tests per size\n");
    println!("{:>6}  {:>8}  {:>18}", "N", "power", "Wilson 95% interval");

    let mut adequate = None;
    for sample_size in (200u64..=1600).step_by(200) {
        let cfg = PowerConfig::new(null.clone(), alternative.clone(), sample_size, repetitions)
            .unwrap();
        let est = estimate_power_seeded(&cfg, sample_size);

        let marker = if est.power >= TARGET_POWER {
            "  <- adequate"
        } else {
            ""
        };
        println!(
            "{:>6}  {:>8.4}  [{:.4}, {:.4}]{marker}",
            est.sample_size, est.power, est.wilson_lo, est.wilson_hi
        );

        if adequate.is_none() && est.power >= TARGET_POWER {
            adequate = Some(sample_size);
        }
    }

    match adequate {
        Some(n) => println!(
            "\nSmallest size in this grid reaching {TARGET_POWER}: N = {n}. \
             Narrow the grid around it and rerun for a tighter answer."
        ),
        None => println!(
            "\nNo size in this grid reached {TARGET_POWER}; extend the grid upward and rerun."
        ),
    }
}
