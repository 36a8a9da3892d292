// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ RUST_LOG=debug cargo r --release --example flop_odds -- AH KH
// ...
// Street:          flop
// Hands:           19600
// Flush:           0.84%
// ...
// ```
use anyhow::{Result, bail};
use clap::Parser;

use pokerbot_odds::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The two hole cards, i.e. AH KH.
    #[clap(num_args = 2, required = true)]
    hole: Vec<Card>,
    /// The board cards already revealed, none, three, or four cards.
    #[clap(long, short, num_args = 0..=4)]
    board: Vec<Card>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let Some(street) = Street::from_board_cards(cli.board.len()) else {
        bail!("Invalid board with {} cards", cli.board.len());
    };

    let hole = [cli.hole[0], cli.hole[1]];
    let table = OddsCalculator::default().project(street, hole, &cli.board)?;

    let pct = |p: f64| format!("{:.2}%", p * 100.0);
    println!("Street:          {street}");
    println!("Hands:           {}", table.len());
    println!("Flush:           {}", pct(table.probability(OddsRow::flush)));
    println!("Full House:      {}", pct(table.probability(OddsRow::full_house)));
    println!("Four of a Kind:  {}", pct(table.probability(|r| r.quads() > 0)));
    println!("Three of a Kind: {}", pct(table.probability(|r| r.trips() > 0)));
    println!("Two Pair:        {}", pct(table.probability(|r| r.pairs() >= 2)));
    println!("One Pair:        {}", pct(table.probability(|r| r.pairs() == 1)));

    // Compare with the closed form probability of hitting a set.
    if hole[0].rank() == hole[1].rank() && street == Street::Flop {
        let set = table.probability(|r| r.rank_count(hole[0].rank()) >= 3);
        let draw = OutsDraw::new(2, street.draws() as u32).probability()?;
        println!("Set (table):     {}", pct(set));
        println!("Set (outs):      {}", pct(draw));
    }

    Ok(())
}
