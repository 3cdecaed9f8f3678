// Copyright (C) 2026 Payline Developers
// SPDX-License-Identifier: Apache-2.0

//! Dealt hand and hold mask types.
use serde::{Deserialize, Serialize};
use std::{fmt, str};

use payline_cards::{Card, Deck};

use crate::error::EngineError;

/// A dealt 5-card hand.
///
/// Card order is display order, classification ignores it. Construction
/// rejects hands without exactly five distinct cards so the rest of the
/// engine never revalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand([Card; 5]);

impl Hand {
    /// Number of cards dealt to the player.
    pub const SIZE: usize = 5;

    /// Creates a hand from five distinct cards.
    pub fn new(cards: [Card; 5]) -> Result<Self, EngineError> {
        for i in 0..cards.len() {
            for j in (i + 1)..cards.len() {
                if cards[i] == cards[j] {
                    return Err(EngineError::InvalidHand(format!(
                        "duplicate card {}",
                        cards[i]
                    )));
                }
            }
        }

        Ok(Self(cards))
    }

    /// Creates a hand from a slice of exactly five distinct cards.
    pub fn from_slice(cards: &[Card]) -> Result<Self, EngineError> {
        let cards: [Card; 5] = cards.try_into().map_err(|_| {
            EngineError::InvalidHand(format!("expected 5 cards, got {}", cards.len()))
        })?;

        Self::new(cards)
    }

    /// The dealt cards in display order.
    pub fn cards(&self) -> &[Card; 5] {
        &self.0
    }

    /// The deck replacement cards are drawn from, every dealt card excluded.
    pub fn replacement_deck(&self) -> Deck {
        Deck::without(&self.0)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4]
        )
    }
}

impl str::FromStr for Hand {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(|sym| sym.parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_slice(&cards)
    }
}

/// The subset of the five dealt cards kept through the draw.
///
/// Bit i corresponds to dealt card position i, a set bit keeps the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldMask(u8);

impl HoldMask {
    /// Number of distinct hold decisions for a 5-card hand.
    pub const COUNT: usize = 32;

    /// Creates a mask from its bits, bits above the fifth are dropped.
    pub fn new(bits: u8) -> Self {
        Self(bits & 0b11111)
    }

    /// All 32 masks in increasing numeric order.
    pub fn all() -> impl Iterator<Item = HoldMask> {
        (0..Self::COUNT as u8).map(HoldMask)
    }

    /// The mask bits.
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Whether the card at dealt position `pos` is held.
    pub fn is_held(&self, pos: usize) -> bool {
        (self.0 >> pos) & 1 == 1
    }

    /// Number of cards the mask keeps.
    pub fn held_count(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// The mask as per-position hold flags.
    pub fn to_flags(self) -> [bool; 5] {
        [
            self.is_held(0),
            self.is_held(1),
            self.is_held(2),
            self.is_held(3),
            self.is_held(4),
        ]
    }

    /// The held cards of `hand`, in dealt order.
    pub fn held_cards(&self, hand: &Hand) -> Vec<Card> {
        hand.cards()
            .iter()
            .enumerate()
            .filter(|(pos, _)| self.is_held(*pos))
            .map(|(_, c)| *c)
            .collect()
    }
}

impl fmt::Display for HoldMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in 0..Hand::SIZE {
            write!(f, "{}", if self.is_held(pos) { 'H' } else { '-' })?;
        }

        Ok(())
    }
}
