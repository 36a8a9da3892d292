// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands      2598960
// Elapsed:         0.912s
// Hands/sec:       2849298
//
// High Card:       1303560
// One Pair:        1098240
// Two Pair:        123552
// ...
// ```
use clap::Parser;
use std::time::Instant;

use pokerbot_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Count A-2-3-4-5 as a straight.
    #[clap(long, short)]
    wheel: bool,
}

fn main() {
    let cli = Cli::parse();
    let evaluator = HandEvaluator::new(EvalConfig { wheel: cli.wheel });

    // Evaluate all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; HandRank::COUNT];
    let n = UNIVERSE.len();

    for c1 in 0..n {
        for c2 in (c1 + 1)..n {
            for c3 in (c2 + 1)..n {
                for c4 in (c3 + 1)..n {
                    for c5 in (c4 + 1)..n {
                        let cards = [c1, c2, c3, c4, c5].map(|idx| UNIVERSE[idx]);
                        if let Ok(value) = evaluator.eval_cards(&cards) {
                            counts[value.rank() as usize] += 1;
                        }
                    }
                }
            }
        }
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        let label = format!("{rank}:");
        println!("{label:<17}{}", counts[rank as usize]);
    }
}
