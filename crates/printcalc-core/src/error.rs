//! # Error Types
//!
//! Domain-specific error types for printcalc-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  printcalc-core errors (this file)                                      │
//! │  ├── QuoteError       - Hard failures: no quote can exist               │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  printcalc-catalog errors (separate crate)                              │
//! │  └── CatalogError     - Undecodable price-feed payloads                 │
//! │                                                                         │
//! │  Flow: ValidationError → QuoteError → caller → user-facing message      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Hard Failure vs. Soft Default
//! The engine distinguishes exactly two degradation modes:
//! - **Hard failure** (`QuoteError`): the configuration itself is wrong -
//!   lamination on a stock that cannot take it, a piece too large for any
//!   sheet. No quote is produced.
//! - **Soft default**: incomplete reference data (missing tier rows, unknown
//!   densities) prices at zero or a documented default. A degraded quote
//!   beats no quote, because feed freshness is outside the engine's control.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (material name, piece size)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Quote Error
// =============================================================================

/// Hard quoting failures.
///
/// Once one of these is detected the engine stops before producing any
/// partial quote. They should be caught and translated to user-friendly
/// messages by the frontend.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// The chosen stock is on the non-laminable denylist but a lamination
    /// finish was requested.
    ///
    /// ## When This Occurs
    /// - Offset, linen, kraft and the designer stocks reject film
    /// - Checked before sheet-size resolution, so the oversized-sheet
    ///   fallback (which swaps the material) never masks it
    #[error("material \"{material}\" cannot be laminated")]
    LaminationNotSupported { material: String },

    /// A custom piece fits neither the standard nor the oversized sheet.
    #[error(
        "piece {width_mm}×{height_mm} mm fits neither the standard sheet \
         (320×450 mm) nor the oversized sheet (330×488 mm)"
    )]
    PieceTooLarge { width_mm: u32, height_mm: u32 },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a request doesn't meet structural requirements.
/// Used for early validation before the aggregator runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with QuoteError.
pub type CoreResult<T> = Result<T, QuoteError>;

// =============================================================================
// Unit Tests
// =============================================================================
