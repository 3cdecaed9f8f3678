// Copyright (C) 2026 Payline Developers
// SPDX-License-Identifier: Apache-2.0

//! Payout tables for the Double-Double-Bonus family.
use ahash::AHashMap;
use std::sync::LazyLock;

use crate::classify::PayoutCategory;
use crate::error::EngineError;

/// Custom full house pay bounds.
const FULL_HOUSE_RANGE: (u32, u32) = (5, 12);

/// Custom flush pay bounds.
const FLUSH_RANGE: (u32, u32) = (4, 10);

/// A named payout table.
///
/// `base_ev` is the long-run average return per hand at multiplier 1 and
/// values the carry-forward component of a qualifying hand. It is a
/// pre-computed constant for preset tables and 0 for unvalidated custom
/// tables, whose base-game EV figures are advisory only.
#[derive(Debug, Clone, PartialEq)]
pub struct Paytable {
    name: String,
    payouts: AHashMap<PayoutCategory, f64>,
    base_ev: f64,
}

impl Paytable {
    /// The table name, e.g. `ddb-9-6`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The per-hand return at multiplier 1, 0 for custom tables.
    pub fn base_ev(&self) -> f64 {
        self.base_ev
    }

    /// Pay units for a category.
    ///
    /// Categories the table does not list pay 0, they are never an error.
    pub fn payout(&self, category: PayoutCategory) -> f64 {
        self.payouts.get(&category).copied().unwrap_or(0.0)
    }

    /// The preset tables.
    pub fn presets() -> &'static [Paytable] {
        &PRESETS
    }

    /// Resolves a preset table by name, case insensitive.
    pub fn by_name(name: &str) -> Result<&'static Paytable, EngineError> {
        PRESETS
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| EngineError::UnknownPaytable(name.to_string()))
    }

    /// Builds a validated custom table from family and pay parameters.
    ///
    /// Only the DDB family is supported. A (full house, flush) pair matching
    /// a preset resolves to that preset with its calibrated base EV, any
    /// other valid pair synthesizes a table with `base_ev` 0.
    pub fn custom(family: &str, full_house: u32, flush: u32) -> Result<Paytable, EngineError> {
        if !family.eq_ignore_ascii_case("ddb") {
            return Err(EngineError::UnsupportedFamily(family.to_string()));
        }

        let (fh_min, fh_max) = FULL_HOUSE_RANGE;
        if !(fh_min..=fh_max).contains(&full_house) {
            return Err(EngineError::InvalidParameter {
                field: "full_house",
                value: full_house,
                min: fh_min,
                max: fh_max,
            });
        }

        let (fl_min, fl_max) = FLUSH_RANGE;
        if !(fl_min..=fl_max).contains(&flush) {
            return Err(EngineError::InvalidParameter {
                field: "flush",
                value: flush,
                min: fl_min,
                max: fl_max,
            });
        }

        // The flush row never pays above the full house row.
        if flush > full_house {
            return Err(EngineError::InvalidParameter {
                field: "flush",
                value: flush,
                min: fl_min,
                max: full_house,
            });
        }

        let preset = PRESETS.iter().find(|p| {
            p.payout(PayoutCategory::FullHouse) == full_house as f64
                && p.payout(PayoutCategory::Flush) == flush as f64
        });

        match preset {
            Some(preset) => Ok(preset.clone()),
            None => Ok(ddb(
                &format!("ddb-{full_house}-{flush}-custom"),
                full_house,
                flush,
                0.0,
            )),
        }
    }
}

/// Builds a DDB family table with the given full house and flush pays.
fn ddb(name: &str, full_house: u32, flush: u32, base_ev: f64) -> Paytable {
    let payouts = AHashMap::from_iter([
        (PayoutCategory::RoyalFlush, 800.0),
        (PayoutCategory::StraightFlush, 50.0),
        (PayoutCategory::FourAcesWithKicker, 400.0),
        (PayoutCategory::FourAces, 160.0),
        (PayoutCategory::FourLowWithKicker, 160.0),
        (PayoutCategory::FourLow, 80.0),
        (PayoutCategory::FourFivesThruKings, 50.0),
        (PayoutCategory::FullHouse, full_house as f64),
        (PayoutCategory::Flush, flush as f64),
        (PayoutCategory::Straight, 4.0),
        (PayoutCategory::ThreeOfAKind, 3.0),
        (PayoutCategory::TwoPair, 1.0),
        (PayoutCategory::JacksOrBetter, 1.0),
    ]);

    Paytable {
        name: name.to_string(),
        payouts,
        base_ev,
    }
}

/// Preset DDB tables with their published per-hand returns.
static PRESETS: LazyLock<Vec<Paytable>> = LazyLock::new(|| {
    vec![
        ddb("ddb-10-6", 10, 6, 1.000670),
        ddb("ddb-9-6", 9, 6, 0.989808),
        ddb("ddb-9-5", 9, 5, 0.978729),
        ddb("ddb-8-5", 8, 5, 0.967861),
        ddb("ddb-7-5", 7, 5, 0.957137),
        ddb("ddb-6-5", 6, 5, 0.946569),
    ]
});
