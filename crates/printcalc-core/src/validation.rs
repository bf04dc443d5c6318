//! # Validation Module
//!
//! Input validation utilities for Printcalc.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty fields, ranges)                        │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Catalog boundary (Rust)                                      │
//! │  ├── Label parsing into closed enums                                   │
//! │  └── Feed normalization                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE - structural request validation                  │
//! │  └── Runs once, before the aggregator touches any price                │
//! │                                                                         │
//! │  Defense in depth: each layer catches different errors                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use printcalc_core::validation::{validate_run_size, validate_layout_count};
//!
//! validate_run_size(1000).unwrap();
//! validate_layout_count(2).unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::DiscountRate;
use crate::{MAX_LAYOUT_COUNT, MAX_PIECE_DIMENSION_MM, MAX_RUN_SIZE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates the print run size (circulation).
///
/// ## Rules
/// - Must be positive (> 0) - the per-piece price divides by it
/// - Must not exceed MAX_RUN_SIZE
pub fn validate_run_size(run_size: u32) -> ValidationResult<()> {
    if run_size == 0 {
        return Err(ValidationError::MustBePositive {
            field: "run size".to_string(),
        });
    }

    if run_size > MAX_RUN_SIZE {
        return Err(ValidationError::OutOfRange {
            field: "run size".to_string(),
            min: 1,
            max: MAX_RUN_SIZE as i64,
        });
    }

    Ok(())
}

/// Validates a custom piece dimension in millimeters.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_PIECE_DIMENSION_MM (a typo guard; whether the
///   piece actually fits a sheet is the fitter's call, not validation's)
pub fn validate_piece_dimension(field: &str, dimension_mm: u32) -> ValidationResult<()> {
    if dimension_mm == 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    if dimension_mm > MAX_PIECE_DIMENSION_MM {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 1,
            max: MAX_PIECE_DIMENSION_MM as i64,
        });
    }

    Ok(())
}

/// Validates a discount rate.
///
/// ## Rules
/// - Must be between 0 and 10000 bps (0% to 100%)
pub fn validate_discount(discount: DiscountRate) -> ValidationResult<()> {
    if discount.bps() > 10_000 {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 10_000,
        });
    }

    Ok(())
}

/// Validates the layout (artwork) count.
///
/// ## Rules
/// - At least 1 - every job has artwork, only extras are surcharged
/// - Must not exceed MAX_LAYOUT_COUNT
pub fn validate_layout_count(layout_count: u32) -> ValidationResult<()> {
    if layout_count == 0 {
        return Err(ValidationError::MustBePositive {
            field: "layout count".to_string(),
        });
    }

    if layout_count > MAX_LAYOUT_COUNT {
        return Err(ValidationError::OutOfRange {
            field: "layout count".to_string(),
            min: 1,
            max: MAX_LAYOUT_COUNT as i64,
        });
    }

    Ok(())
}

/// Validates a delivery cost.
///
/// ## Rules
/// - Must be non-negative (zero means pickup)
pub fn validate_delivery_cost(cost: Money) -> ValidationResult<()> {
    if cost.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "delivery cost".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
