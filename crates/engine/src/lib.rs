// Copyright (C) 2026 Payline Developers
// SPDX-License-Identifier: Apache-2.0

//! Payline draw poker expected value engine.
//!
//! Given a dealt 5-card hand, a payout table, and the current bonus
//! multiplier, the engine estimates the expected value of all 32 hold
//! decisions and picks a recommended hold:
//!
//! ```
//! # use payline_engine::*;
//! # use rand::{SeedableRng, rngs::SmallRng};
//! let hand: Hand = "AS KS QS JS TS".parse().unwrap();
//! let paytable = Paytable::by_name("ddb-9-6").unwrap();
//!
//! let mut rng = SmallRng::seed_from_u64(1);
//! let rec = recommend(&hand, paytable, 1.0, Strategy::Conservative, &mut rng);
//! assert_eq!(rec.hold, [true; 5]);
//! ```
//!
//! Exact enumeration is used for 1 and 2 card draws, larger draws fall back
//! to fixed-budget sampling with a caller-owned random source so results are
//! reproducible under a seeded rng.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod classify;
pub mod ev;
pub mod hand;
pub mod paytable;
pub mod policy;

mod error;

pub use classify::{PayoutCategory, classify};
pub use error::EngineError;
pub use ev::{Evaluation, Recommendation, evaluate_all_holds, recommend};
pub use hand::{Hand, HoldMask};
pub use paytable::Paytable;
pub use policy::Strategy;

// Reexport cards types.
pub use payline_cards::{Card, Deck, Rank, Suit};
