// Copyright (C) 2026 Payline Developers
// SPDX-License-Identifier: Apache-2.0

//! Hold selection strategies.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ev::Evaluation;

/// How a hold is picked among near-optimal candidates.
///
/// Both strategies are pure functions of the evaluations, tie-breaks are
/// fully specified so a fixed input always selects the same hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Keep the most cards among holds within 0.5% of the best EV.
    ///
    /// Minimizes variance: when keeping already-good cards costs next to
    /// nothing, keep them.
    #[default]
    Conservative,
    /// Keep the fewest cards among holds within 3% of the best EV.
    ///
    /// Trades a small EV concession for higher-ceiling draws.
    Aggressive,
}

impl Strategy {
    /// The near-optimal band as a fraction of the best EV.
    fn band(&self) -> f64 {
        match self {
            Strategy::Conservative => 0.995,
            Strategy::Aggressive => 0.97,
        }
    }

    /// Picks one evaluation among the candidates.
    ///
    /// Candidates within the strategy band of the best `ev_with_multiplier`
    /// compete on held-card count, ties go to the higher EV.
    ///
    /// Panics if `evaluations` is empty.
    pub fn select(&self, evaluations: &[Evaluation]) -> Evaluation {
        assert!(!evaluations.is_empty(), "no evaluations to select from");

        let mut sorted = evaluations.to_vec();
        sorted.sort_by(|a, b| b.ev_with_multiplier.total_cmp(&a.ev_with_multiplier));

        let threshold = sorted[0].ev_with_multiplier * self.band();
        let in_band = sorted
            .iter()
            .filter(|e| e.ev_with_multiplier >= threshold);

        // The best EV entry is always in its own band so a pick exists.
        let pick = match self {
            Strategy::Conservative => in_band.max_by(|a, b| {
                a.held_count
                    .cmp(&b.held_count)
                    .then(a.ev_with_multiplier.total_cmp(&b.ev_with_multiplier))
            }),
            Strategy::Aggressive => in_band.min_by(|a, b| {
                a.held_count
                    .cmp(&b.held_count)
                    .then(b.ev_with_multiplier.total_cmp(&a.ev_with_multiplier))
            }),
        };

        *pick.unwrap_or(&sorted[0])
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Conservative => write!(f, "conservative"),
            Strategy::Aggressive => write!(f, "aggressive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::HoldMask;

    fn eval(bits: u8, ev: f64) -> Evaluation {
        let hold = HoldMask::new(bits);
        Evaluation {
            hold,
            ev_with_multiplier: ev,
            ev_without_multiplier: ev,
            held_count: hold.held_count(),
        }
    }

    #[test]
    fn near_tie_splits_strategies() {
        // Two candidates 0.2% apart, held counts differing by two: the
        // conservative pick keeps five cards, the aggressive pick three.
        let evaluations = vec![
            eval(0b00111, 1.000),
            eval(0b11111, 0.998),
            eval(0b00001, 0.400),
        ];

        let pick = Strategy::Conservative.select(&evaluations);
        assert_eq!(pick.hold, HoldMask::new(0b11111));

        let pick = Strategy::Aggressive.select(&evaluations);
        assert_eq!(pick.hold, HoldMask::new(0b00111));
    }

    #[test]
    fn conservative_band_is_tight() {
        // A 2% EV drop falls outside the conservative band but inside the
        // aggressive one.
        let evaluations = vec![eval(0b00111, 1.000), eval(0b11111, 0.980)];

        let pick = Strategy::Conservative.select(&evaluations);
        assert_eq!(pick.hold, HoldMask::new(0b00111));

        let pick = Strategy::Aggressive.select(&evaluations);
        assert_eq!(pick.hold, HoldMask::new(0b00111));
    }

    #[test]
    fn aggressive_prefers_fewer_held() {
        let evaluations = vec![eval(0b11111, 1.000), eval(0b00011, 0.975)];

        let pick = Strategy::Conservative.select(&evaluations);
        assert_eq!(pick.hold, HoldMask::new(0b11111));

        let pick = Strategy::Aggressive.select(&evaluations);
        assert_eq!(pick.hold, HoldMask::new(0b00011));
    }

    #[test]
    fn equal_held_count_ties_go_to_higher_ev() {
        let evaluations = vec![
            eval(0b00111, 0.999),
            eval(0b01011, 1.000),
            eval(0b10101, 0.998),
        ];

        // All in band with equal held counts: both strategies pick the
        // highest EV.
        for strategy in [Strategy::Conservative, Strategy::Aggressive] {
            let pick = strategy.select(&evaluations);
            assert_eq!(pick.hold, HoldMask::new(0b01011));
        }
    }

    #[test]
    fn single_candidate() {
        let evaluations = vec![eval(0b11111, 0.0)];

        for strategy in [Strategy::Conservative, Strategy::Aggressive] {
            assert_eq!(strategy.select(&evaluations).hold, HoldMask::new(0b11111));
        }
    }

    #[test]
    fn strategy_labels() {
        assert_eq!(Strategy::Conservative.to_string(), "conservative");
        assert_eq!(Strategy::Aggressive.to_string(), "aggressive");
        assert_eq!(Strategy::default(), Strategy::Conservative);
    }
}
