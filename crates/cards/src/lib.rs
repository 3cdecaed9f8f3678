// Copyright (C) 2026 Payline Developers
// SPDX-License-Identifier: Apache-2.0

//! Payline playing cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use payline_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! ```
//!
//! and a [Deck] type for building the replacement deck of a dealt hand and
//! enumerating or sampling the cards left in it.
//!
//! To iterate through all 2-card draws from a 47-card replacement deck:
//!
//! ```
//! # use payline_cards::{Card, Deck};
//! let dealt = "AS KS QS JS TS"
//!     .split_whitespace()
//!     .map(|s| s.parse::<Card>().unwrap())
//!     .collect::<Vec<_>>();
//!
//! let deck = Deck::without(&dealt);
//! assert_eq!(deck.count(), 47);
//!
//! let mut counter = 0;
//! deck.for_each_combination(2, |draw| {
//!     assert_eq!(draw.len(), 2);
//!     counter += 1;
//! });
//! assert_eq!(counter, 1_081);
//! ```
//!
//! to sample 10 random 3-card draws with a caller-owned random source:
//!
//! ```
//! # use payline_cards::{Card, Deck};
//! # use rand::{SeedableRng, rngs::SmallRng};
//! let mut rng = SmallRng::seed_from_u64(42);
//! let mut counter = 0;
//! Deck::default().sample(&mut rng, 10, 3, |draw| {
//!     assert_eq!(draw.len(), 3);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
