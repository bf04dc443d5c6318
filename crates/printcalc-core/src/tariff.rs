//! # Tariff Module
//!
//! Tier-table lookups and the fixed finishing rate cards.
//!
//! ## Tier Selection Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Tier Table Lookup                                   │
//! │                                                                         │
//! │   min_sheets  4+0      4+4          query: 120 sheets, 4+0              │
//! │   ─────────  ──────   ──────                                            │
//! │     500       6.00     9.00         qualifying rows: min ≤ 120          │
//! │     100       8.00    12.00    ◄──  tightest (largest min) wins         │
//! │      50      10.00    15.00         → 8.00 ₽ per sheet                  │
//! │       1      14.00    21.00                                             │
//! │                                                                         │
//! │   A quantity equal to a row's min USES that row (inclusive threshold).  │
//! │   No qualifying row → the price is zero (degraded quote, not an error). │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Feeds are expected sorted by descending `min_sheets`, but the lookup does
//! not trust that: it scans for the tightest qualifying threshold whatever
//! the row order, so an unsorted feed can never produce an undercharge.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{ColorMode, Lamination};

// =============================================================================
// Tier Rows
// =============================================================================

/// One print-price bracket. Prices are per sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PrintRate {
    /// Inclusive sheet-count threshold.
    pub min_sheets: u32,
    /// 4+0 per-sheet price (feed column "price_40").
    pub single_sided: Option<Money>,
    /// 4+4 per-sheet price (feed column "price_44").
    pub double_sided: Option<Money>,
}

impl PrintRate {
    /// Per-sheet price for a color mode; a missing column prices at zero.
    pub fn price_for(&self, mode: ColorMode) -> Money {
        let price = match mode {
            ColorMode::SingleSided => self.single_sided,
            ColorMode::DoubleSided => self.double_sided,
        };
        price.unwrap_or(Money::zero())
    }
}

/// One lamination-price bracket. Prices are per sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LaminationRate {
    /// Inclusive sheet-count threshold.
    pub min_sheets: u32,
    pub gloss_32: Option<Money>,
    pub matte_32: Option<Money>,
    pub gloss_75: Option<Money>,
    pub matte_75: Option<Money>,
    pub gloss_125: Option<Money>,
    pub matte_125: Option<Money>,
    pub soft_touch: Option<Money>,
}

impl LaminationRate {
    /// Per-sheet price for a finish; `Lamination::None` and missing columns
    /// price at zero.
    pub fn price_for(&self, kind: Lamination) -> Money {
        let price = match kind {
            Lamination::None => None,
            Lamination::Gloss32 => self.gloss_32,
            Lamination::Matte32 => self.matte_32,
            Lamination::Gloss75 => self.gloss_75,
            Lamination::Matte75 => self.matte_75,
            Lamination::Gloss125 => self.gloss_125,
            Lamination::Matte125 => self.matte_125,
            Lamination::SoftTouch => self.soft_touch,
        };
        price.unwrap_or(Money::zero())
    }
}

/// The reference price data a quote is computed against.
///
/// Supplied by the caller per call; the engine treats it as read-only and
/// holds no copy between calls.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceList {
    pub print: Vec<PrintRate>,
    pub lamination: Vec<LaminationRate>,
}

// =============================================================================
// Tier Selection
// =============================================================================

/// A row keyed by an inclusive minimum-quantity threshold.
pub trait TierRow {
    fn min_qty(&self) -> u32;
}

impl TierRow for PrintRate {
    fn min_qty(&self) -> u32 {
        self.min_sheets
    }
}

impl TierRow for LaminationRate {
    fn min_qty(&self) -> u32 {
        self.min_sheets
    }
}

/// Selects the bracket with the largest threshold not exceeding `qty`.
///
/// Order-independent on purpose: the feed promises descending order but the
/// engine must not undercharge when that promise is broken.
pub fn select_tier<T: TierRow>(rows: &[T], qty: u32) -> Option<&T> {
    rows.iter()
        .filter(|row| qty >= row.min_qty())
        .max_by_key(|row| row.min_qty())
}

/// Per-sheet print price for a sheet count and color mode.
pub fn print_price_per_sheet(rates: &[PrintRate], sheets: u32, mode: ColorMode) -> Money {
    select_tier(rates, sheets)
        .map(|rate| rate.price_for(mode))
        .unwrap_or(Money::zero())
}

/// Per-sheet lamination price for a sheet count and finish.
pub fn lamination_price_per_sheet(
    rates: &[LaminationRate],
    sheets: u32,
    kind: Lamination,
) -> Money {
    if kind.is_none() {
        return Money::zero();
    }
    select_tier(rates, sheets)
        .map(|rate| rate.price_for(kind))
        .unwrap_or(Money::zero())
}

// =============================================================================
// Finishing Rate Cards
// =============================================================================
// Scoring, folding and perforation share one card; gluing has its own.
// Both are per finished piece and keyed by the run size, not the sheet count.
// Runs of 6-9 have no bracket on the shop's card and price at zero.

/// Per-piece price for scoring/folding at a given run size.
pub fn scoring_folding_unit_price(run_size: u32) -> Money {
    match run_size {
        0 => Money::zero(),
        1 => Money::from_rubles(59),
        2 => Money::from_rubles(32),
        3 => Money::from_rubles(23),
        4 => Money::from_rubles(19),
        5 => Money::from_rubles(16),
        6..=9 => Money::zero(),
        10..=19 => Money::from_rubles(11),
        20..=29 => Money::from_major_minor(8, 20),
        30..=49 => Money::from_major_minor(7, 30),
        50..=99 => Money::from_major_minor(6, 50),
        100..=499 => Money::from_rubles(6),
        _ => Money::from_major_minor(5, 50),
    }
}

/// Per-piece price for gluing at a given run size.
pub fn gluing_unit_price(run_size: u32) -> Money {
    match run_size {
        0 => Money::zero(),
        1 => Money::from_rubles(65),
        2 => Money::from_major_minor(38, 50),
        3 => Money::from_rubles(29),
        4 => Money::from_major_minor(24, 75),
        5 => Money::from_major_minor(21, 80),
        6..=9 => Money::zero(),
        10..=19 => Money::from_major_minor(16, 40),
        20..=29 => Money::from_major_minor(13, 65),
        30..=49 => Money::from_major_minor(12, 70),
        50..=99 => Money::from_rubles(12),
        100..=499 => Money::from_major_minor(11, 40),
        _ => Money::from_rubles(11),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn print_rates() -> Vec<PrintRate> {
        vec![
            PrintRate {
                min_sheets: 500,
                single_sided: Some(Money::from_rubles(6)),
                double_sided: Some(Money::from_rubles(9)),
            },
            PrintRate {
                min_sheets: 100,
                single_sided: Some(Money::from_rubles(8)),
                double_sided: Some(Money::from_rubles(12)),
            },
            PrintRate {
                min_sheets: 1,
                single_sided: Some(Money::from_rubles(14)),
                double_sided: None,
            },
        ]
    }

    #[test]
    fn test_tightest_threshold_wins() {
        let rates = print_rates();
        let price = print_price_per_sheet(&rates, 120, ColorMode::SingleSided);
        assert_eq!(price, Money::from_rubles(8));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // Exactly 100 sheets lands in the 100 bracket, not the 1 bracket
        let rates = print_rates();
        let price = print_price_per_sheet(&rates, 100, ColorMode::SingleSided);
        assert_eq!(price, Money::from_rubles(8));

        let below = print_price_per_sheet(&rates, 99, ColorMode::SingleSided);
        assert_eq!(below, Money::from_rubles(14));
    }

    #[test]
    fn test_lookup_is_order_independent() {
        let sorted = print_rates();
        let mut shuffled = print_rates();
        shuffled.reverse();
        shuffled.swap(0, 1);

        for sheets in [1, 50, 100, 120, 499, 500, 5000] {
            for mode in [ColorMode::SingleSided, ColorMode::DoubleSided] {
                assert_eq!(
                    print_price_per_sheet(&sorted, sheets, mode),
                    print_price_per_sheet(&shuffled, sheets, mode),
                    "diverged at {sheets} sheets"
                );
            }
        }
    }

    #[test]
    fn test_no_qualifying_row_prices_zero() {
        let rates = vec![PrintRate {
            min_sheets: 100,
            single_sided: Some(Money::from_rubles(8)),
            double_sided: None,
        }];
        assert!(print_price_per_sheet(&rates, 99, ColorMode::SingleSided).is_zero());
        assert!(print_price_per_sheet(&[], 1000, ColorMode::SingleSided).is_zero());
    }

    #[test]
    fn test_missing_column_prices_zero() {
        let rates = print_rates();
        // The 1-sheet bracket has no 4+4 column
        assert!(print_price_per_sheet(&rates, 10, ColorMode::DoubleSided).is_zero());
    }

    #[test]
    fn test_lamination_none_prices_zero() {
        let rates = vec![LaminationRate {
            min_sheets: 1,
            gloss_32: Some(Money::from_rubles(5)),
            matte_32: None,
            gloss_75: None,
            matte_75: None,
            gloss_125: None,
            matte_125: None,
            soft_touch: None,
        }];
        assert!(lamination_price_per_sheet(&rates, 100, Lamination::None).is_zero());
        assert_eq!(
            lamination_price_per_sheet(&rates, 100, Lamination::Gloss32),
            Money::from_rubles(5)
        );
        // A finish without a column degrades to zero, not an error
        assert!(lamination_price_per_sheet(&rates, 100, Lamination::Matte32).is_zero());
    }

    #[test]
    fn test_scoring_folding_card() {
        assert_eq!(scoring_folding_unit_price(0), Money::zero());
        assert_eq!(scoring_folding_unit_price(1), Money::from_rubles(59));
        assert_eq!(scoring_folding_unit_price(5), Money::from_rubles(16));
        // 6-9 has no bracket
        assert_eq!(scoring_folding_unit_price(7), Money::zero());
        assert_eq!(scoring_folding_unit_price(10), Money::from_rubles(11));
        assert_eq!(scoring_folding_unit_price(19), Money::from_rubles(11));
        assert_eq!(scoring_folding_unit_price(20), Money::from_kopecks(820));
        assert_eq!(scoring_folding_unit_price(49), Money::from_kopecks(730));
        assert_eq!(scoring_folding_unit_price(99), Money::from_kopecks(650));
        assert_eq!(scoring_folding_unit_price(100), Money::from_rubles(6));
        assert_eq!(scoring_folding_unit_price(500), Money::from_kopecks(550));
        assert_eq!(scoring_folding_unit_price(100_000), Money::from_kopecks(550));
    }

    #[test]
    fn test_gluing_card() {
        assert_eq!(gluing_unit_price(0), Money::zero());
        assert_eq!(gluing_unit_price(1), Money::from_rubles(65));
        assert_eq!(gluing_unit_price(4), Money::from_kopecks(2475));
        assert_eq!(gluing_unit_price(8), Money::zero());
        assert_eq!(gluing_unit_price(25), Money::from_kopecks(1365));
        assert_eq!(gluing_unit_price(100), Money::from_kopecks(1140));
        assert_eq!(gluing_unit_price(501), Money::from_rubles(11));
    }
}
