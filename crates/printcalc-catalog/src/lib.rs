//! # printcalc-catalog: Reference-Data Boundary for Printcalc
//!
//! This crate turns external reference data into the core's typed world.
//! It is the "edge" the engine's design insists on: free-form labels and
//! loosely-shaped feed payloads stop here, closed enums and normalized
//! tier tables come out.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Printcalc Data Flow                               │
//! │                                                                         │
//! │  Feed fetcher (external collaborator - network, cache, TTL)            │
//! │       │ JSON payload                                                    │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                 printcalc-catalog (THIS CRATE)                  │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐    │    │
//! │  │   │     feed      │    │    labels     │    │  materials   │    │    │
//! │  │   │  (feed.rs)    │    │  (labels.rs)  │    │(materials.rs)│    │    │
//! │  │   │               │    │               │    │              │    │    │
//! │  │   │ PriceFeed     │    │ label → enum  │    │ built-in     │    │    │
//! │  │   │ Dataset       │    │ translation   │    │ stock list   │    │    │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘    │    │
//! │  │                                                                 │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! │       │ PriceList + Vec<Material> + enums                               │
//! │       ▼                                                                 │
//! │  printcalc-core::compute_quote()                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`feed`] - Feed payload decoding, normalization, the [`feed::Dataset`] bundle
//! - [`labels`] - Free-form label parsing into the core's closed enums
//! - [`materials`] - The built-in material catalog
//! - [`error`] - Ingestion error types
//!
//! ## Usage
//!
//! ```rust
//! use printcalc_catalog::{Dataset, PriceFeed};
//!
//! let payload = r#"{
//!     "success": true,
//!     "prices": [{ "min": 1, "price_40": 14, "price_44": 21 }]
//! }"#;
//!
//! let dataset = match PriceFeed::parse(payload) {
//!     Ok(feed) => Dataset::from_feed(feed),
//!     Err(_) => Dataset::fallback(),
//! };
//! assert_eq!(dataset.prices.print.len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod feed;
pub mod labels;
pub mod materials;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CatalogError, CatalogResult};
pub use feed::{Dataset, PriceFeed};
pub use labels::{
    lamination_label, parse_color_mode, parse_cutting, parse_lamination, parse_named_format,
};
pub use materials::{builtin_materials, find_material};
