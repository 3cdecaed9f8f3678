// Copyright (C) 2026 Payline Developers
// SPDX-License-Identifier: Apache-2.0

//! Payline hold analyzer CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::debug;
use rand::prelude::*;

use payline_engine::{
    Hand, HoldMask, PayoutCategory, Paytable, Strategy, evaluate_all_holds, recommend,
};

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze a dealt hand and print the recommended hold.
    Analyze {
        /// The dealt hand, e.g. "AS KS QS JS TS".
        #[clap(long)]
        hand: String,
        /// Preset paytable name.
        #[clap(long, default_value = "ddb-9-6")]
        paytable: String,
        /// Custom full house pay, overrides the preset with --flush.
        #[clap(long, requires = "flush")]
        full_house: Option<u32>,
        /// Custom flush pay, overrides the preset with --full-house.
        #[clap(long, requires = "full_house")]
        flush: Option<u32>,
        /// Current bonus multiplier.
        #[clap(long, default_value_t = 1.0)]
        multiplier: f64,
        /// Hold selection strategy.
        #[clap(long, value_enum, default_value_t = StrategyArg::Conservative)]
        strategy: StrategyArg,
        /// Print all 32 hold evaluations.
        #[clap(long)]
        all: bool,
    },
    /// List the preset paytables.
    Paytables,
}

/// Command line strategy names.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Keep the most cards within 0.5% of the best EV.
    Conservative,
    /// Keep the fewest cards within 3% of the best EV.
    Aggressive,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Conservative => Strategy::Conservative,
            StrategyArg::Aggressive => Strategy::Aggressive,
        }
    }
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze {
            hand,
            paytable,
            full_house,
            flush,
            multiplier,
            strategy,
            all,
        } => analyze(
            &hand,
            &paytable,
            full_house.zip(flush),
            multiplier,
            strategy.into(),
            all,
        ),
        Command::Paytables => paytables(),
    }
}

/// Runs the engine for a dealt hand and prints the recommendation.
fn analyze(
    hand: &str,
    paytable: &str,
    custom: Option<(u32, u32)>,
    multiplier: f64,
    strategy: Strategy,
    all: bool,
) -> Result<()> {
    let hand: Hand = hand.parse()?;
    let paytable = match custom {
        Some((full_house, flush)) => Paytable::custom("ddb", full_house, flush)?,
        None => Paytable::by_name(paytable)?.clone(),
    };

    debug!("analyzing {hand} on {}", paytable.name());

    let mut rng = SmallRng::from_os_rng();

    println!("Hand      {hand}");
    println!(
        "Paytable  {} (base EV {:.6})",
        paytable.name(),
        paytable.base_ev()
    );
    println!("Strategy  {strategy} at x{multiplier}");
    println!();

    if all {
        let mut evaluations = evaluate_all_holds(&hand, &paytable, multiplier, &mut rng);
        evaluations.sort_by(|a, b| b.ev_with_multiplier.total_cmp(&a.ev_with_multiplier));

        println!("{:<12}{:>14}{:>14}  Held", "Hold", "EV(xM)", "EV(base)");
        for eval in &evaluations {
            println!(
                "{:<12}{:>14.6}{:>14.6}  {}",
                eval.hold.to_string(),
                eval.ev_with_multiplier,
                eval.ev_without_multiplier,
                held_cards(&hand, eval.hold),
            );
        }
        println!();
    }

    let rec = recommend(&hand, &paytable, multiplier, strategy, &mut rng);
    let mask = HoldMask::new(
        rec.hold
            .iter()
            .enumerate()
            .fold(0u8, |bits, (pos, held)| bits | (u8::from(*held) << pos)),
    );

    println!("Hold      {mask}  {}", held_cards(&hand, mask));
    println!("EV        {:.6} (base {:.6})", rec.ev_with_multiplier, rec.ev_without_multiplier);

    Ok(())
}

/// Prints the preset paytables.
fn paytables() -> Result<()> {
    for paytable in Paytable::presets() {
        println!("{} (base EV {:.6})", paytable.name(), paytable.base_ev());
        for category in PayoutCategory::ALL.iter().rev() {
            let pay = paytable.payout(*category);
            if pay > 0.0 {
                println!("  {:<18}{pay:>8}", category.to_string());
            }
        }
        println!();
    }

    Ok(())
}

/// The held cards of `hand` as display text, "none" for a full redraw.
fn held_cards(hand: &Hand, mask: HoldMask) -> String {
    let held = mask.held_cards(hand);
    if held.is_empty() {
        "none".to_string()
    } else {
        held.iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
