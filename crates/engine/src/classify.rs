// Copyright (C) 2026 Payline Developers
// SPDX-License-Identifier: Apache-2.0

//! Hand classification into payout categories.
use serde::{Deserialize, Serialize};
use std::fmt;

use payline_cards::{Card, Rank};

/// Payout category of a classified 5-card hand.
///
/// Four-of-a-kind splits into the kicker-dependent bonus categories paid by
/// the Double-Double-Bonus family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayoutCategory {
    /// No paying combination.
    Nothing,
    /// One pair of Jacks, Queens, Kings, or Aces.
    JacksOrBetter,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Five consecutive ranks, including the A-2-3-4-5 wheel.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four 5s through Ks.
    FourFivesThruKings,
    /// Four 2s, 3s, or 4s.
    FourLow,
    /// Four 2s, 3s, or 4s with an A, 2, 3, or 4 kicker.
    FourLowWithKicker,
    /// Four Aces.
    FourAces,
    /// Four Aces with a 2, 3, or 4 kicker.
    FourAcesWithKicker,
    /// Five consecutive ranks of one suit.
    StraightFlush,
    /// T-J-Q-K-A of one suit.
    RoyalFlush,
}

impl PayoutCategory {
    /// Every category, lowest pay first.
    pub const ALL: [PayoutCategory; 14] = [
        PayoutCategory::Nothing,
        PayoutCategory::JacksOrBetter,
        PayoutCategory::TwoPair,
        PayoutCategory::ThreeOfAKind,
        PayoutCategory::Straight,
        PayoutCategory::Flush,
        PayoutCategory::FullHouse,
        PayoutCategory::FourFivesThruKings,
        PayoutCategory::FourLow,
        PayoutCategory::FourLowWithKicker,
        PayoutCategory::FourAces,
        PayoutCategory::FourAcesWithKicker,
        PayoutCategory::StraightFlush,
        PayoutCategory::RoyalFlush,
    ];

    /// Whether the category carries the bonus multiplier into the next hand.
    pub fn qualifies(&self) -> bool {
        !matches!(self, PayoutCategory::Nothing)
    }
}

impl fmt::Display for PayoutCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PayoutCategory::Nothing => "Nothing",
            PayoutCategory::JacksOrBetter => "Jacks or Better",
            PayoutCategory::TwoPair => "Two Pair",
            PayoutCategory::ThreeOfAKind => "Three of a Kind",
            PayoutCategory::Straight => "Straight",
            PayoutCategory::Flush => "Flush",
            PayoutCategory::FullHouse => "Full House",
            PayoutCategory::FourFivesThruKings => "Four 5s-Ks",
            PayoutCategory::FourLow => "Four 2s-4s",
            PayoutCategory::FourLowWithKicker => "Four 2s-4s + A-4",
            PayoutCategory::FourAces => "Four Aces",
            PayoutCategory::FourAcesWithKicker => "Four Aces + 2-4",
            PayoutCategory::StraightFlush => "Straight Flush",
            PayoutCategory::RoyalFlush => "Royal Flush",
        };

        write!(f, "{label}")
    }
}

/// The A-2-3-4-5 wheel as a rank bit mask.
const WHEEL_MASK: u16 = 1 << (Rank::Ace as u16)
    | 1 << (Rank::Deuce as u16)
    | 1 << (Rank::Trey as u16)
    | 1 << (Rank::Four as u16)
    | 1 << (Rank::Five as u16);

/// Classifies five cards into their payout category.
///
/// Pure function of the card values, the paytable never changes the result.
pub fn classify(cards: &[Card; 5]) -> PayoutCategory {
    let mut rank_counts = [0u8; 13];
    let mut rank_mask = 0u16;
    for card in cards {
        rank_counts[card.rank_bits() as usize] += 1;
        rank_mask |= 1 << card.rank_bits();
    }

    // The suit nibbles AND to a non zero value only when all five match.
    let flush = cards
        .iter()
        .fold(0xFu8, |acc, card| acc & card.suit_bits())
        != 0;
    let straight = is_straight(rank_mask);

    if flush && straight {
        // A straight holding both an Ace and a Ten can only be T-J-Q-K-A.
        let royal = rank_mask & (1 << Rank::Ace as u16) != 0
            && rank_mask & (1 << Rank::Ten as u16) != 0;
        return if royal {
            PayoutCategory::RoyalFlush
        } else {
            PayoutCategory::StraightFlush
        };
    }

    if let Some(quad) = rank_of_count(&rank_counts, 4) {
        return classify_quads(quad, rank_of_count(&rank_counts, 1));
    }

    let trips = rank_counts.iter().any(|&c| c == 3);
    let pairs = rank_counts.iter().filter(|&&c| c == 2).count();

    if trips && pairs == 1 {
        PayoutCategory::FullHouse
    } else if flush {
        PayoutCategory::Flush
    } else if straight {
        PayoutCategory::Straight
    } else if trips {
        PayoutCategory::ThreeOfAKind
    } else if pairs == 2 {
        PayoutCategory::TwoPair
    } else if pairs == 1 {
        match rank_of_count(&rank_counts, 2) {
            Some(rank) if rank >= Rank::Jack as usize => PayoutCategory::JacksOrBetter,
            _ => PayoutCategory::Nothing,
        }
    } else {
        PayoutCategory::Nothing
    }
}

/// Splits four of a kind into the kicker-dependent bonus categories.
fn classify_quads(quad: usize, kicker: Option<usize>) -> PayoutCategory {
    let ace = Rank::Ace as usize;
    let four = Rank::Four as usize;

    if quad == ace {
        if kicker.is_some_and(|k| k <= four) {
            PayoutCategory::FourAcesWithKicker
        } else {
            PayoutCategory::FourAces
        }
    } else if quad <= four {
        if kicker.is_some_and(|k| k <= four || k == ace) {
            PayoutCategory::FourLowWithKicker
        } else {
            PayoutCategory::FourLow
        }
    } else {
        PayoutCategory::FourFivesThruKings
    }
}

/// The first rank index with the given multiplicity.
fn rank_of_count(rank_counts: &[u8; 13], count: u8) -> Option<usize> {
    rank_counts.iter().position(|&c| c == count)
}

/// Five distinct consecutive ranks, or the wheel.
fn is_straight(rank_mask: u16) -> bool {
    if rank_mask.count_ones() != 5 {
        return false;
    }

    let normalized = rank_mask >> rank_mask.trailing_zeros();
    normalized == 0b11111 || rank_mask == WHEEL_MASK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Hand;
    use payline_cards::Deck;
    use rand::{SeedableRng, rngs::SmallRng};

    fn cards(s: &str) -> [Card; 5] {
        *s.parse::<Hand>().unwrap().cards()
    }

    #[test]
    fn royal_flush() {
        assert_eq!(classify(&cards("AS KS QS JS TS")), PayoutCategory::RoyalFlush);
        assert_eq!(classify(&cards("TH JH QH KH AH")), PayoutCategory::RoyalFlush);
    }

    #[test]
    fn straight_flush_not_royal() {
        assert_eq!(classify(&cards("9S 8S 7S 6S 5S")), PayoutCategory::StraightFlush);

        // The steel wheel is a straight flush, not a royal.
        assert_eq!(classify(&cards("AS 2S 3S 4S 5S")), PayoutCategory::StraightFlush);
    }

    #[test]
    fn wheel_straight() {
        assert_eq!(classify(&cards("AS 2H 3D 4C 5S")), PayoutCategory::Straight);
    }

    #[test]
    fn straights() {
        assert_eq!(classify(&cards("2S 3H 4D 5C 6S")), PayoutCategory::Straight);
        assert_eq!(classify(&cards("TS JH QD KC AS")), PayoutCategory::Straight);

        // A straight never wraps past the Ace except as the wheel.
        assert_eq!(classify(&cards("QS KH AD 2C 3S")), PayoutCategory::Nothing);
    }

    #[test]
    fn flush() {
        assert_eq!(classify(&cards("AS KS 9S 5S 2S")), PayoutCategory::Flush);
    }

    #[test]
    fn quad_categories() {
        assert_eq!(classify(&cards("AS AH AD AC 2S")), PayoutCategory::FourAcesWithKicker);
        assert_eq!(classify(&cards("AS AH AD AC 4S")), PayoutCategory::FourAcesWithKicker);
        assert_eq!(classify(&cards("AS AH AD AC 5S")), PayoutCategory::FourAces);
        assert_eq!(classify(&cards("AS AH AD AC KS")), PayoutCategory::FourAces);

        assert_eq!(classify(&cards("2S 2H 2D 2C AS")), PayoutCategory::FourLowWithKicker);
        assert_eq!(classify(&cards("3S 3H 3D 3C 4S")), PayoutCategory::FourLowWithKicker);
        assert_eq!(classify(&cards("4S 4H 4D 4C 2S")), PayoutCategory::FourLowWithKicker);
        assert_eq!(classify(&cards("2S 2H 2D 2C 5S")), PayoutCategory::FourLow);
        assert_eq!(classify(&cards("4S 4H 4D 4C KS")), PayoutCategory::FourLow);

        assert_eq!(classify(&cards("5S 5H 5D 5C AS")), PayoutCategory::FourFivesThruKings);
        assert_eq!(classify(&cards("KS KH KD KC 2S")), PayoutCategory::FourFivesThruKings);
    }

    #[test]
    fn full_house_trips_pairs() {
        assert_eq!(classify(&cards("KS KH KD 2C 2S")), PayoutCategory::FullHouse);
        assert_eq!(classify(&cards("7S 7H 7D KC 2S")), PayoutCategory::ThreeOfAKind);
        assert_eq!(classify(&cards("7S 7H KD KC 2S")), PayoutCategory::TwoPair);
    }

    #[test]
    fn jacks_or_better() {
        assert_eq!(classify(&cards("JS JH 9D 5C 2S")), PayoutCategory::JacksOrBetter);
        assert_eq!(classify(&cards("AS AH 9D 5C 2S")), PayoutCategory::JacksOrBetter);

        // Tens are not a paying pair.
        assert_eq!(classify(&cards("TS TH 9D 5C 2S")), PayoutCategory::Nothing);
    }

    #[test]
    fn nothing() {
        assert_eq!(classify(&cards("AS KH 9D 5C 2S")), PayoutCategory::Nothing);
    }

    #[test]
    fn totality_on_random_hands() {
        // Every sampled hand classifies without panicking and qualifying
        // categories are exactly the paying ones.
        let mut rng = SmallRng::seed_from_u64(99);

        Deck::default().sample(&mut rng, 2_000, 5, |draw| {
            let hand: [Card; 5] = draw.try_into().unwrap();
            let category = classify(&hand);
            assert_eq!(category.qualifies(), category != PayoutCategory::Nothing);
        });
    }
}
