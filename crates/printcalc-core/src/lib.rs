//! # printcalc-core: Pure Quoting Logic for Printcalc
//!
//! This crate is the **heart** of Printcalc. It contains the whole quoting
//! engine as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Printcalc Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                    Frontend (TypeScript)                        │    │
//! │  │    Option pickers ──► Quote form ──► Breakdown ──► CRM upload   │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │              printcalc-catalog (Data Boundary)                  │    │
//! │  │    feed parsing, label → enum translation, built-in catalog     │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │               ★ printcalc-core (THIS CRATE) ★                   │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐    │    │
//! │  │   │  layout   │  │   money   │  │  tariff   │  │   quote   │    │    │
//! │  │   │  fitter   │  │   Money   │  │   tiers   │  │ aggregate │    │    │
//! │  │   │  sheets   │  │  DiscRate │  │rate cards │  │ breakdown │    │    │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘    │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO NETWORK • NO CLOCK • PURE FUNCTIONS               │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`layout`] - Sheet sizes and the piece-packing fitter
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`tariff`] - Tier-table lookups and the finishing rate cards
//! - [`types`] - Domain types (formats, materials, finishes)
//! - [`quote`] - The aggregator: request + prices → Quote
//! - [`error`] - Domain error types
//! - [`validation`] - Structural request validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every quote is deterministic - same input = same output
//! 2. **No I/O**: Network, file system and clock access are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in kopecks (i64)
//! 4. **Closed Enums**: Free-form option labels stop at the catalog boundary
//! 5. **Degrade, Don't Refuse**: incomplete price data prices at zero or a
//!    documented default; only impossible configurations are hard errors
//!
//! ## Example Usage
//!
//! ```rust
//! use printcalc_core::layout::{fit, SRA3};
//!
//! // 24 business cards per standard sheet
//! let packing = fit(90, 50, SRA3);
//! assert_eq!(packing.count, 24);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod layout;
pub mod money;
pub mod quote;
pub mod tariff;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use printcalc_core::Money` instead of
// `use printcalc_core::money::Money`

pub use error::{CoreResult, QuoteError, ValidationError};
pub use layout::{fit, FitResult, Orientation, SheetSize, SRA3, SRA3_PLUS};
pub use money::Money;
pub use quote::{compute_quote, CostBreakdown, Quote, QuoteRequest};
pub use tariff::PriceList;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum charge for the print + material subtotal.
///
/// ## Business Reason
/// Setting up the press costs the same for 10 pieces as for 1000. When the
/// print + material subtotal undershoots this floor, the floor REPLACES the
/// subtotal; finishing and fees still stack on top.
pub const MIN_ORDER_TOTAL: Money = Money::from_rubles(950);

/// Flat fee for Pantone/proof color matching.
pub const COLOR_MATCHING_FEE: Money = Money::from_rubles(725);

/// Fee per artwork layout when a run carries more than one.
pub const LAYOUT_FEE: Money = Money::from_rubles(145);

/// The no-surcharge price factor (×1.0).
pub const BASE_FACTOR_BPS: u32 = 10_000;

/// Run-cost surcharge on the oversized SRA3+ sheet (×1.2).
///
/// ## Business Reason
/// The oversized sheet runs on the slower press and wastes more stock;
/// print and lamination both carry the factor, material is priced from its
/// own (oversized) catalog instead.
pub const OVERSIZE_FACTOR_BPS: u32 = 12_000;

/// Guillotine cutting, charged as a share of the print price (10%).
pub const GUILLOTINE_SHARE_BPS: u32 = 1_000;

/// Grams one sheet weighs per g/m² of stock density (the SRA3 sheet area).
pub const GRAMS_PER_SHEET_PER_GSM: f64 = 0.145;

/// Maximum accepted run size.
///
/// ## Business Reason
/// Guards against typo runs (an extra zero or three); anything larger is a
/// contract job that doesn't go through the calculator.
pub const MAX_RUN_SIZE: u32 = 1_000_000;

/// Maximum accepted custom piece dimension in millimeters.
///
/// A typo guard only - whether the piece fits a sheet is the fitter's call.
pub const MAX_PIECE_DIMENSION_MM: u32 = 10_000;

/// Maximum artwork layouts per run.
pub const MAX_LAYOUT_COUNT: u32 = 100;
