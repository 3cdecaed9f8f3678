// Copyright (C) 2026 Payline Developers
// SPDX-License-Identifier: Apache-2.0

//! Engine error definitions.
use thiserror::Error;

use payline_cards::ParseCardError;

/// Errors raised by hand construction and paytable resolution.
///
/// None of these is recoverable by retrying the same input, a caller must
/// re-derive its input instead. The estimator itself never fails: it is only
/// invoked with a validated [Hand](crate::Hand) and a resolved
/// [Paytable](crate::Paytable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A hand without exactly five distinct cards.
    #[error("invalid hand: {0}")]
    InvalidHand(String),
    /// A card symbol outside the rank and suit alphabets.
    #[error(transparent)]
    InvalidCard(#[from] ParseCardError),
    /// A paytable name that matches no preset.
    #[error("unknown paytable \"{0}\"")]
    UnknownPaytable(String),
    /// A custom paytable family other than DDB.
    #[error("unsupported paytable family \"{0}\"")]
    UnsupportedFamily(String),
    /// A custom paytable pay outside its valid range.
    #[error("invalid {field} pay {value}: must be between {min} and {max}")]
    InvalidParameter {
        /// The offending field.
        field: &'static str,
        /// The value given by the caller.
        value: u32,
        /// Smallest accepted value.
        min: u32,
        /// Largest accepted value.
        max: u32,
    },
}
