//! # Domain Types
//!
//! Core domain types used throughout Printcalc.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │   PageFormat    │   │    Material     │   │  DiscountRate   │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  A3..A6         │   │  name           │   │  bps (u32)      │        │
//! │  │  Custom{w,h}    │   │  densities      │   │  1000 = 10%     │        │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘        │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │   ColorMode     │   │   Lamination    │   │     Cutting     │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  SingleSided    │   │  None           │   │  None           │        │
//! │  │  DoubleSided    │   │  Gloss32..125   │   │  Plotter        │        │
//! │  └─────────────────┘   │  Matte32..125   │   │  Guillotine%    │        │
//! │                        │  SoftTouch      │   └─────────────────┘        │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Closed Enums at the Core
//! The engine never sees a free-form option label. Every selectable option
//! is a closed enum here; parsing shop labels ("глянцевая 32", "А4") into
//! these enums is the catalog crate's job.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (a common repeat-customer discount)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a discount from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        DiscountRate((pct * 100.0).round() as u32)
    }

    /// Returns the discount in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the discount as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the discount is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Page Format
// =============================================================================

/// The finished-piece format of the job.
///
/// Named formats carry a fixed per-sheet yield on the standard SRA3 sheet;
/// a custom size goes through the layout fitter instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PageFormat {
    A3,
    A4,
    A5,
    A6,
    /// Free size in whole millimeters, cut from the sheet by the fitter.
    Custom { width_mm: u32, height_mm: u32 },
}

impl PageFormat {
    /// Fixed pieces-per-sheet yield for named formats (SRA3 sheet).
    ///
    /// Returns `None` for custom sizes - those are resolved by the fitter.
    #[inline]
    pub const fn sheet_yield(&self) -> Option<u32> {
        match self {
            PageFormat::A3 => Some(1),
            PageFormat::A4 => Some(2),
            PageFormat::A5 => Some(4),
            PageFormat::A6 => Some(8),
            PageFormat::Custom { .. } => None,
        }
    }

    /// True for the named A-series formats.
    #[inline]
    pub const fn is_named(&self) -> bool {
        !matches!(self, PageFormat::Custom { .. })
    }
}

// =============================================================================
// Color Mode
// =============================================================================

/// Print color mode.
///
/// The shop's rate card keys these as "40" (4+0, single-sided CMYK) and
/// "44" (4+4, double-sided CMYK).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// 4+0 - full color on one side.
    SingleSided,
    /// 4+4 - full color on both sides.
    DoubleSided,
}

impl ColorMode {
    /// The rate-card key for this mode.
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            ColorMode::SingleSided => "40",
            ColorMode::DoubleSided => "44",
        }
    }
}

// =============================================================================
// Lamination
// =============================================================================

/// Lamination finish.
///
/// The numeric suffix is the film thickness in microns. Feed columns and
/// frontend labels map onto these variants at the catalog boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Lamination {
    /// No lamination requested.
    None,
    Gloss32,
    Matte32,
    Gloss75,
    Matte75,
    Gloss125,
    Matte125,
    SoftTouch,
}

impl Lamination {
    /// True when no lamination was requested.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Lamination::None)
    }

    /// The rate-card column for this finish (`None` has no column).
    pub const fn feed_key(&self) -> Option<&'static str> {
        match self {
            Lamination::None => None,
            Lamination::Gloss32 => Some("gloss_32"),
            Lamination::Matte32 => Some("matte_32"),
            Lamination::Gloss75 => Some("gloss_75"),
            Lamination::Matte75 => Some("matte_75"),
            Lamination::Gloss125 => Some("gloss_125"),
            Lamination::Matte125 => Some("matte_125"),
            Lamination::SoftTouch => Some("soft_touch"),
        }
    }
}

impl Default for Lamination {
    fn default() -> Self {
        Lamination::None
    }
}

// =============================================================================
// Cutting
// =============================================================================

/// How the finished pieces are cut from the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Cutting {
    /// No cutting (sheet ships as printed).
    None,
    /// Plotter cutting - billed outside this engine.
    Plotter,
    /// Guillotine cutting billed as a percentage of the print price.
    GuillotinePercent,
}

impl Default for Cutting {
    fn default() -> Self {
        Cutting::None
    }
}

// =============================================================================
// Material
// =============================================================================

/// Price of one sheet of a material at a given density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DensityPrice {
    /// Grammage in g/m².
    pub gsm: f64,
    /// Price per SRA3 sheet.
    pub price_per_sheet: Money,
}

/// A printable stock the shop carries.
///
/// ## Invariants
/// - Densities are unique per material
/// - Insertion order matters only for the first-density fallback
/// - Reference data: the engine reads materials, never mutates them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Material {
    /// Display name, also the material's identity in the denylist.
    pub name: String,
    /// Available densities with per-sheet prices.
    pub densities: Vec<DensityPrice>,
}

/// Densities are matched within this tolerance (g/m²).
pub const DENSITY_TOLERANCE_GSM: f64 = 0.01;

/// Per-sheet price used when a material record carries no densities at all.
pub const DEFAULT_SHEET_PRICE: Money = Money::from_rubles(10);

/// Stocks that must never be laminated (the film does not adhere).
pub const NON_LAMINABLE_MATERIALS: [&str; 5] = [
    "Офсет бумага",
    "Лён",
    "Majestic светлый",
    "Touch cover светлый (plike)",
    "Крафт",
];

impl Material {
    /// Creates a material from (gsm, per-sheet price) pairs.
    pub fn new(name: impl Into<String>, densities: &[(f64, Money)]) -> Self {
        Material {
            name: name.into(),
            densities: densities
                .iter()
                .map(|&(gsm, price_per_sheet)| DensityPrice {
                    gsm,
                    price_per_sheet,
                })
                .collect(),
        }
    }

    /// True when this stock accepts lamination.
    pub fn is_laminable(&self) -> bool {
        !NON_LAMINABLE_MATERIALS.contains(&self.name.as_str())
    }

    /// Per-sheet price for a requested density.
    ///
    /// ## Resolution Order
    /// 1. Density entry matching within 0.01 g/m²
    /// 2. The material's first listed density
    /// 3. `DEFAULT_SHEET_PRICE` for a malformed (empty) record
    ///
    /// Never fails: incomplete reference data degrades to a priced default
    /// instead of refusing a quote.
    pub fn per_sheet_price(&self, gsm: f64) -> Money {
        if let Some(exact) = self
            .densities
            .iter()
            .find(|d| (d.gsm - gsm).abs() < DENSITY_TOLERANCE_GSM)
        {
            return exact.price_per_sheet;
        }

        self.densities
            .first()
            .map(|d| d.price_per_sheet)
            .unwrap_or(DEFAULT_SHEET_PRICE)
    }
}

/// The only stocks available on the oversized 330×488 sheet.
///
/// The oversized press run is coated paper only; the aggregator swaps the
/// requested material for the first entry here when it falls back to SRA3+.
pub fn oversize_materials() -> Vec<Material> {
    vec![Material::new(
        "Мелованная бумага",
        &[
            (250.0, Money::from_rubles(23)),
            (300.0, Money::from_rubles(28)),
        ],
    )]
}

// =============================================================================
// Unit Tests
// =============================================================================
