// Copyright (C) 2026 Payline Developers
// SPDX-License-Identifier: Apache-2.0

//! Per-hold expected value estimation.
use log::debug;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use payline_cards::{Card, Deck};

use crate::classify::classify;
use crate::hand::{Hand, HoldMask};
use crate::paytable::Paytable;
use crate::policy::Strategy;

/// Sampling budget for 3, 4, and 5 card draws.
///
/// Exact enumeration beyond 2 drawn cards would cost up to C(47,5) payouts
/// per mask, too slow for interactive use. These budgets keep the estimator
/// variance low enough for a stable hold ordering.
fn trials(draw_count: usize) -> usize {
    match draw_count {
        3 => 20_000,
        4 => 15_000,
        _ => 10_000,
    }
}

/// Expected values for one hold decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// The hold mask this evaluation is for.
    pub hold: HoldMask,
    /// Mean payout scaled by the multiplier plus the carry-forward value of
    /// qualifying outcomes.
    pub ev_with_multiplier: f64,
    /// Base game equivalent mean payout, multiplier scaling removed.
    pub ev_without_multiplier: f64,
    /// Number of cards the mask keeps.
    pub held_count: usize,
}

/// Estimates the expected value of every hold decision for a dealt hand.
///
/// Returns one [Evaluation] per mask, all 32 in increasing mask order.
/// Draws of 1 or 2 cards enumerate the replacement deck exactly, larger
/// draws sample it with a fixed budget from the caller random source. A
/// non-positive multiplier defaults to 1.
pub fn evaluate_all_holds<R: Rng>(
    hand: &Hand,
    paytable: &Paytable,
    multiplier: f64,
    rng: &mut R,
) -> Vec<Evaluation> {
    let multiplier = normalize_multiplier(multiplier);
    let deck = hand.replacement_deck();

    debug!(
        "evaluating {hand} against {} at x{multiplier}",
        paytable.name()
    );

    HoldMask::all()
        .map(|hold| evaluate_hold(hand, &deck, paytable, multiplier, hold, rng))
        .collect()
}

/// Estimates the expected value of a single hold decision.
fn evaluate_hold<R: Rng>(
    hand: &Hand,
    deck: &Deck,
    paytable: &Paytable,
    multiplier: f64,
    hold: HoldMask,
    rng: &mut R,
) -> Evaluation {
    let held_count = hold.held_count();
    let draw_count = Hand::SIZE - held_count;

    // Scratch hand with the held cards up front, draws overwrite the tail.
    let mut scratch = *hand.cards();
    let mut pos = 0;
    for (idx, card) in hand.cards().iter().enumerate() {
        if hold.is_held(idx) {
            scratch[pos] = *card;
            pos += 1;
        }
    }

    let mut cash_sum = 0.0;
    let mut future_sum = 0.0;
    let mut samples = 0usize;

    let mut tally = |draw: &[Card]| {
        scratch[held_count..].copy_from_slice(draw);

        let category = classify(&scratch);
        cash_sum += paytable.payout(category) * multiplier;
        if category.qualifies() {
            future_sum += paytable.base_ev();
        }

        samples += 1;
    };

    match draw_count {
        0 => tally(&[]),
        1 | 2 => deck.for_each_combination(draw_count, &mut tally),
        _ => deck.sample(rng, trials(draw_count), draw_count, &mut tally),
    }

    let n = samples as f64;
    Evaluation {
        hold,
        ev_with_multiplier: (cash_sum + future_sum) / n,
        ev_without_multiplier: cash_sum / n / multiplier,
        held_count,
    }
}

/// A hold recommendation for a dealt hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Per-position hold flags for the dealt cards.
    pub hold: [bool; 5],
    /// Expected value of the recommended hold with the multiplier applied.
    pub ev_with_multiplier: f64,
    /// Base game equivalent expected value of the recommended hold.
    pub ev_without_multiplier: f64,
    /// The strategy that picked the hold.
    pub strategy: Strategy,
}

/// Evaluates all holds and picks one according to the strategy.
///
/// EV figures are rounded to 6 decimal digits.
pub fn recommend<R: Rng>(
    hand: &Hand,
    paytable: &Paytable,
    multiplier: f64,
    strategy: Strategy,
    rng: &mut R,
) -> Recommendation {
    let evaluations = evaluate_all_holds(hand, paytable, multiplier, rng);
    let best = strategy.select(&evaluations);

    Recommendation {
        hold: best.hold.to_flags(),
        ev_with_multiplier: round6(best.ev_with_multiplier),
        ev_without_multiplier: round6(best.ev_without_multiplier),
        strategy,
    }
}

/// A non-positive or sub-1 multiplier plays as the base game.
fn normalize_multiplier(multiplier: f64) -> f64 {
    if multiplier >= 1.0 { multiplier } else { 1.0 }
}

/// Rounds to 6 decimal digits to stabilize comparisons and display.
fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    fn paytable() -> &'static Paytable {
        Paytable::by_name("ddb-9-6").unwrap()
    }

    #[test]
    fn all_masks_covered() {
        let mut rng = SmallRng::seed_from_u64(1);
        let evaluations = evaluate_all_holds(&hand("AS KS QS JS TS"), paytable(), 1.0, &mut rng);

        assert_eq!(evaluations.len(), HoldMask::COUNT);
        for (bits, eval) in evaluations.iter().enumerate() {
            assert_eq!(eval.hold.bits(), bits as u8);
            assert_eq!(eval.held_count, eval.hold.held_count());
        }
    }

    #[test]
    fn evs_never_negative() {
        let mut rng = SmallRng::seed_from_u64(2);
        let evaluations = evaluate_all_holds(&hand("AS KH 9D 5C 2S"), paytable(), 3.0, &mut rng);

        for eval in &evaluations {
            assert!(eval.ev_with_multiplier >= 0.0);
            assert!(eval.ev_without_multiplier >= 0.0);
        }
    }

    #[test]
    fn pat_royal_hold_all() {
        let mut rng = SmallRng::seed_from_u64(3);
        let evaluations = evaluate_all_holds(&hand("AS KS QS JS TS"), paytable(), 1.0, &mut rng);

        // Holding all five is a certain royal: 800 pay plus the base EV of
        // the qualifying hand.
        let hold_all = &evaluations[31];
        assert_eq!(hold_all.held_count, 5);
        assert!((hold_all.ev_with_multiplier - (800.0 + 0.989808)).abs() < 1e-9);
        assert!((hold_all.ev_without_multiplier - 800.0).abs() < 1e-9);
    }

    #[test]
    fn exact_enumeration_one_card_draw() {
        // Quad aces held, one draw from the 47 replacement cards: the 12
        // deuces, treys, and fours upgrade the quad to the kicker pay, the
        // other 35 pay plain quad aces.
        let mut rng = SmallRng::seed_from_u64(4);
        let evaluations = evaluate_all_holds(&hand("AS AH AD AC 5S"), paytable(), 1.0, &mut rng);

        let hold_aces = &evaluations[0b01111];
        let expected_cash = (12.0 * 400.0 + 35.0 * 160.0) / 47.0;
        assert!((hold_aces.ev_without_multiplier - expected_cash).abs() < 1e-9);
        assert!(
            (hold_aces.ev_with_multiplier - (expected_cash + 0.989808)).abs() < 1e-9
        );
    }

    #[test]
    fn exact_paths_reproducible_across_seeds() {
        // Masks drawing at most 2 cards enumerate, their figures cannot
        // depend on the random source.
        let h = hand("AS AH KD KC 2S");
        let mut rng_a = SmallRng::seed_from_u64(5);
        let mut rng_b = SmallRng::seed_from_u64(500);

        let evals_a = evaluate_all_holds(&h, paytable(), 1.0, &mut rng_a);
        let evals_b = evaluate_all_holds(&h, paytable(), 1.0, &mut rng_b);

        for (a, b) in evals_a.iter().zip(&evals_b) {
            if a.held_count >= 3 {
                assert_eq!(a.ev_with_multiplier, b.ev_with_multiplier);
                assert_eq!(a.ev_without_multiplier, b.ev_without_multiplier);
            }
        }
    }

    #[test]
    fn sampling_reproducible_with_seed() {
        let h = hand("AS KH 9D 5C 2S");
        let mut rng_a = SmallRng::seed_from_u64(6);
        let mut rng_b = SmallRng::seed_from_u64(6);

        let evals_a = evaluate_all_holds(&h, paytable(), 1.0, &mut rng_a);
        let evals_b = evaluate_all_holds(&h, paytable(), 1.0, &mut rng_b);

        assert_eq!(evals_a, evals_b);
    }

    #[test]
    fn multiplier_scales_cash_not_future() {
        // A pat full house pays 9: with multiplier m the cash component
        // scales to 9m while the carry-forward term stays put.
        let h = hand("KS KH KD 2C 2S");

        let mut rng = SmallRng::seed_from_u64(7);
        let base = evaluate_all_holds(&h, paytable(), 1.0, &mut rng)[31];
        let mut rng = SmallRng::seed_from_u64(7);
        let doubled = evaluate_all_holds(&h, paytable(), 2.0, &mut rng)[31];

        assert!((base.ev_with_multiplier - (9.0 + 0.989808)).abs() < 1e-9);
        assert!((doubled.ev_with_multiplier - (18.0 + 0.989808)).abs() < 1e-9);

        // The base game figure strips the multiplier entirely.
        assert!((base.ev_without_multiplier - 9.0).abs() < 1e-9);
        assert!((doubled.ev_without_multiplier - 9.0).abs() < 1e-9);
    }

    #[test]
    fn non_positive_multiplier_defaults_to_one() {
        let h = hand("KS KH KD 2C 2S");

        let mut rng = SmallRng::seed_from_u64(8);
        let zeroed = evaluate_all_holds(&h, paytable(), 0.0, &mut rng)[31];
        let mut rng = SmallRng::seed_from_u64(8);
        let base = evaluate_all_holds(&h, paytable(), 1.0, &mut rng)[31];

        assert_eq!(zeroed, base);
    }

    #[test]
    fn recommend_pat_royal() {
        let mut rng = SmallRng::seed_from_u64(9);
        let rec = recommend(
            &hand("AS KS QS JS TS"),
            paytable(),
            1.0,
            Strategy::Conservative,
            &mut rng,
        );

        assert_eq!(rec.hold, [true; 5]);
        assert_eq!(rec.ev_with_multiplier, 800.989808);
        assert_eq!(rec.ev_without_multiplier, 800.0);
        assert_eq!(rec.strategy, Strategy::Conservative);
    }

    #[test]
    fn round6_precision() {
        assert_eq!(round6(1.23456789), 1.234568);
        assert_eq!(round6(0.0000004), 0.0);
        assert_eq!(round6(800.989808), 800.989808);
    }
}
