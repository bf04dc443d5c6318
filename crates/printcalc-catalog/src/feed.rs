//! # Price Feed Ingestion
//!
//! Decodes the externally-fetched pricing payload and normalizes it into
//! the core's typed [`PriceList`].
//!
//! ## Feed Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Pricing Spreadsheet Payload (JSON)                      │
//! │                                                                         │
//! │  {                                                                      │
//! │    "success": true,                                                     │
//! │    "formats": [{ "name": "А3" }, ...],                                  │
//! │    "laminationTypes": ["без ламинации", "глянцевая 32", ...],           │
//! │    "prices":           [{ "min": 500, "price_40": 6, "price_44": 9 }],  │
//! │    "laminationPrices": [{ "min": 1, "gloss_32": 2, ... }]               │
//! │  }                                                                      │
//! │                                                                         │
//! │  Prices arrive as decimal rubles and leave this module as kopecks.      │
//! │  Rows are promised sorted by descending `min` - this module re-sorts    │
//! │  and logs when the promise was broken.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Who fetched the payload (and when to re-fetch it) is the caller's
//! concern; this crate never touches the network.

use serde::Deserialize;
use tracing::{debug, warn};

use printcalc_core::money::Money;
use printcalc_core::tariff::{LaminationRate, PriceList, PrintRate};
use printcalc_core::types::Material;

use crate::error::{CatalogError, CatalogResult};
use crate::labels::LAMINATION_LABELS;
use crate::materials::builtin_materials;

// =============================================================================
// Raw Payload Models
// =============================================================================

/// One selectable format as the feed lists it.
#[derive(Debug, Clone, Deserialize)]
pub struct FormatEntry {
    pub name: String,
}

/// One print-price row as the feed ships it (decimal rubles).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawPrintRow {
    pub min: u32,
    #[serde(default)]
    pub price_40: Option<f64>,
    #[serde(default)]
    pub price_44: Option<f64>,
}

/// One lamination-price row as the feed ships it (decimal rubles).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawLaminationRow {
    pub min: u32,
    #[serde(default)]
    pub gloss_32: Option<f64>,
    #[serde(default)]
    pub matte_32: Option<f64>,
    #[serde(default)]
    pub gloss_75: Option<f64>,
    #[serde(default)]
    pub matte_75: Option<f64>,
    #[serde(default)]
    pub gloss_125: Option<f64>,
    #[serde(default)]
    pub matte_125: Option<f64>,
    #[serde(default)]
    pub soft_touch: Option<f64>,
}

/// The whole feed payload.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceFeed {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub formats: Vec<FormatEntry>,
    #[serde(default, rename = "laminationTypes")]
    pub lamination_types: Vec<String>,
    #[serde(default)]
    pub prices: Vec<RawPrintRow>,
    #[serde(default, rename = "laminationPrices")]
    pub lamination_prices: Vec<RawLaminationRow>,
}

impl PriceFeed {
    /// Decodes a feed payload.
    ///
    /// Fails only for undecodable JSON or a feed that reported its own
    /// failure; every softer defect is normalized later.
    pub fn parse(json: &str) -> CatalogResult<Self> {
        let feed: PriceFeed = serde_json::from_str(json)?;

        if !feed.success {
            return Err(CatalogError::FeedRejected {
                message: feed.error.unwrap_or_else(|| "no error message".to_string()),
            });
        }

        debug!(
            print_rows = feed.prices.len(),
            lamination_rows = feed.lamination_prices.len(),
            "decoded price feed"
        );
        Ok(feed)
    }

    /// Converts the feed's tier tables into the core's [`PriceList`].
    ///
    /// Rows are re-sorted by descending `min`; a feed that arrived unsorted
    /// is accepted but logged, because an unsorted table under a naive
    /// first-match lookup is how undercharges happen.
    pub fn into_price_list(self) -> PriceList {
        let mut print: Vec<PrintRate> = self
            .prices
            .iter()
            .map(|row| PrintRate {
                min_sheets: row.min,
                single_sided: money_from_feed("price_40", row.price_40),
                double_sided: money_from_feed("price_44", row.price_44),
            })
            .collect();
        sort_descending(&mut print, |rate| rate.min_sheets, "print");

        let mut lamination: Vec<LaminationRate> = self
            .lamination_prices
            .iter()
            .map(|row| LaminationRate {
                min_sheets: row.min,
                gloss_32: money_from_feed("gloss_32", row.gloss_32),
                matte_32: money_from_feed("matte_32", row.matte_32),
                gloss_75: money_from_feed("gloss_75", row.gloss_75),
                matte_75: money_from_feed("matte_75", row.matte_75),
                gloss_125: money_from_feed("gloss_125", row.gloss_125),
                matte_125: money_from_feed("matte_125", row.matte_125),
                soft_touch: money_from_feed("soft_touch", row.soft_touch),
            })
            .collect();
        sort_descending(&mut lamination, |rate| rate.min_sheets, "lamination");

        PriceList { print, lamination }
    }
}

/// Decimal rubles → kopecks, the one sanctioned float-to-money crossing.
///
/// Negative prices are treated as missing: a bad cell must degrade to a
/// zero contribution, not a credit.
fn money_from_feed(column: &str, rubles: Option<f64>) -> Option<Money> {
    let value = rubles?;
    if value < 0.0 {
        warn!(column, value, "negative feed price treated as missing");
        return None;
    }
    Some(Money::from_kopecks((value * 100.0).round() as i64))
}

/// Sorts tier rows by descending threshold, logging when the feed's
/// ordering promise was broken.
fn sort_descending<T>(rows: &mut [T], min_of: impl Fn(&T) -> u32, table: &str) {
    let was_sorted = rows.windows(2).all(|w| min_of(&w[0]) >= min_of(&w[1]));
    if !was_sorted {
        warn!(table, "tier table arrived unsorted; re-sorting descending");
        rows.sort_by(|a, b| min_of(b).cmp(&min_of(a)));
    }
}

// =============================================================================
// Dataset
// =============================================================================

/// Everything the quoting frontend needs to populate its pickers and
/// compute quotes: selectable options plus the normalized price list.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Selectable named formats (display labels).
    pub formats: Vec<String>,
    /// The material catalog with per-sheet prices.
    pub materials: Vec<Material>,
    /// Selectable lamination labels.
    pub lamination_types: Vec<String>,
    /// Normalized tier tables for the aggregator.
    pub prices: PriceList,
}

impl Dataset {
    /// Builds a dataset from a decoded feed.
    ///
    /// The material catalog is always the built-in one - stock prices are
    /// maintained in this crate, only print/lamination tiers come from the
    /// feed. Empty option lists fall back to the defaults.
    pub fn from_feed(feed: PriceFeed) -> Self {
        let formats = if feed.formats.is_empty() {
            default_format_labels()
        } else {
            feed.formats.iter().map(|f| f.name.clone()).collect()
        };

        let lamination_types = if feed.lamination_types.is_empty() {
            default_lamination_labels()
        } else {
            feed.lamination_types.clone()
        };

        Dataset {
            formats,
            materials: builtin_materials(),
            lamination_types,
            prices: feed.into_price_list(),
        }
    }

    /// The offline dataset: full option lists, built-in materials, empty
    /// tier tables (print and lamination price at zero until a feed loads).
    pub fn fallback() -> Self {
        Dataset {
            formats: default_format_labels(),
            materials: builtin_materials(),
            lamination_types: default_lamination_labels(),
            prices: PriceList::default(),
        }
    }
}

fn default_format_labels() -> Vec<String> {
    ["А3", "А4", "А5", "А6"].map(String::from).to_vec()
}

fn default_lamination_labels() -> Vec<String> {
    let mut labels = vec!["без ламинации".to_string()];
    labels.extend(LAMINATION_LABELS.iter().map(|(label, _)| label.to_string()));
    labels
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use printcalc_core::types::{ColorMode, Lamination};
    use printcalc_core::tariff::{lamination_price_per_sheet, print_price_per_sheet};

    const FEED: &str = r#"{
        "success": true,
        "formats": [{ "name": "А3" }, { "name": "А4" }],
        "laminationTypes": ["без ламинации", "глянцевая 32"],
        "prices": [
            { "min": 500, "price_40": 6, "price_44": 9 },
            { "min": 1, "price_40": 14.5, "price_44": 21 }
        ],
        "laminationPrices": [
            { "min": 1, "gloss_32": 2.35, "soft_touch": 6 }
        ]
    }"#;

    #[test]
    fn test_parse_and_convert() {
        let feed = PriceFeed::parse(FEED).unwrap();
        let list = feed.into_price_list();

        assert_eq!(list.print.len(), 2);
        // 14.50 ₽ → 1450 kopecks
        assert_eq!(
            print_price_per_sheet(&list.print, 10, ColorMode::SingleSided),
            Money::from_kopecks(1450)
        );
        assert_eq!(
            print_price_per_sheet(&list.print, 500, ColorMode::DoubleSided),
            Money::from_rubles(9)
        );
        // 2.35 ₽ → 235 kopecks
        assert_eq!(
            lamination_price_per_sheet(&list.lamination, 50, Lamination::Gloss32),
            Money::from_kopecks(235)
        );
        // Missing column degrades to zero
        assert!(
            lamination_price_per_sheet(&list.lamination, 50, Lamination::Matte125).is_zero()
        );
    }

    #[test]
    fn test_unsorted_feed_is_resorted() {
        let unsorted = r#"{
            "success": true,
            "prices": [
                { "min": 1, "price_40": 14 },
                { "min": 500, "price_40": 6 },
                { "min": 100, "price_40": 8 }
            ]
        }"#;

        let list = PriceFeed::parse(unsorted).unwrap().into_price_list();
        let mins: Vec<u32> = list.print.iter().map(|r| r.min_sheets).collect();
        assert_eq!(mins, vec![500, 100, 1]);
    }

    #[test]
    fn test_negative_price_treated_as_missing() {
        let feed = r#"{
            "success": true,
            "prices": [{ "min": 1, "price_40": -3.5, "price_44": 21 }]
        }"#;

        let list = PriceFeed::parse(feed).unwrap().into_price_list();
        assert!(print_price_per_sheet(&list.print, 10, ColorMode::SingleSided).is_zero());
        assert_eq!(
            print_price_per_sheet(&list.print, 10, ColorMode::DoubleSided),
            Money::from_rubles(21)
        );
    }

    #[test]
    fn test_rejected_feed() {
        let err = PriceFeed::parse(r#"{ "success": false, "error": "quota" }"#).unwrap_err();
        assert!(matches!(err, CatalogError::FeedRejected { message } if message == "quota"));
    }

    #[test]
    fn test_undecodable_feed() {
        let err = PriceFeed::parse("not json").unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[test]
    fn test_dataset_from_feed_keeps_builtin_materials() {
        let dataset = Dataset::from_feed(PriceFeed::parse(FEED).unwrap());

        assert_eq!(dataset.formats, vec!["А3", "А4"]);
        assert_eq!(dataset.lamination_types.len(), 2);
        assert!(!dataset.materials.is_empty());
        assert!(dataset
            .materials
            .iter()
            .any(|m| m.name == "Мелованная бумага"));
    }

    #[test]
    fn test_fallback_dataset() {
        let dataset = Dataset::fallback();

        assert_eq!(dataset.formats.len(), 4);
        // "без ламинации" plus the seven finishes
        assert_eq!(dataset.lamination_types.len(), 8);
        assert!(dataset.prices.print.is_empty());
        assert!(dataset.prices.lamination.is_empty());
    }
}
