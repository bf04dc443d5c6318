//! # Sheet Layout Module
//!
//! Decides how many finished pieces fit on a production sheet.
//!
//! ## Packing Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Sheet Packing (SRA3 320×450)                         │
//! │                                                                         │
//! │   ┌─────────┐ 3mm ┌─────────┐        The 3 mm gap sits BETWEEN          │
//! │   │  piece  │◄───►│  piece  │        pieces only. There is no edge      │
//! │   └─────────┘     └─────────┘        margin: the shop prints edge       │
//! │        ▲                             to edge and cuts afterwards.       │
//! │    3mm │                                                                │
//! │        ▼                             Both orientations are tried;       │
//! │   ┌─────────┐     ┌─────────┐        the better yield wins, ties        │
//! │   │  piece  │     │  piece  │        go to the unrotated one.           │
//! │   └─────────┘     └─────────┘                                           │
//! │                                                                         │
//! │   A lone piece that only fits without the gap still fits: one item      │
//! │   needs no spacing.                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use printcalc_core::layout::{fit, SRA3};
//!
//! let result = fit(90, 50, SRA3); // business cards on a standard sheet
//! assert!(result.fits);
//! assert_eq!(result.count, result.cols * result.rows);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Sheet Sizes
// =============================================================================

/// A production sheet size in whole millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SheetSize {
    pub width_mm: u32,
    pub height_mm: u32,
}

impl fmt::Display for SheetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.width_mm, self.height_mm)
    }
}

/// The standard press sheet.
pub const SRA3: SheetSize = SheetSize {
    width_mm: 320,
    height_mm: 450,
};

/// The oversized fallback sheet (restricted material set, 1.2× run cost).
pub const SRA3_PLUS: SheetSize = SheetSize {
    width_mm: 330,
    height_mm: 488,
};

/// Spacing between adjacent pieces on the sheet, in millimeters.
pub const PIECE_GAP_MM: u32 = 3;

// =============================================================================
// Fit Result
// =============================================================================

/// Which way the piece lies on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Declared piece width runs along the sheet width.
    Horizontal,
    /// Piece rotated 90°.
    Vertical,
}

/// Outcome of one fitting query. Produced fresh per call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FitResult {
    /// Whether at least one piece fits on the sheet.
    pub fits: bool,
    /// Pieces per sheet (cols × rows, or 1 for the single-item fallback).
    pub count: u32,
    pub cols: u32,
    pub rows: u32,
    /// `None` only when nothing fits.
    pub orientation: Option<Orientation>,
}

impl FitResult {
    /// The "nothing fits" result.
    pub const fn none() -> Self {
        FitResult {
            fits: false,
            count: 0,
            cols: 0,
            rows: 0,
            orientation: None,
        }
    }

    /// A fixed grid for the named A-series formats.
    pub const fn grid(cols: u32, rows: u32) -> Self {
        FitResult {
            fits: true,
            count: cols * rows,
            cols,
            rows,
            orientation: Some(Orientation::Horizontal),
        }
    }
}

// =============================================================================
// Fitting Algorithm
// =============================================================================

/// Computes the best packing of a piece onto a sheet.
///
/// ## Algorithm
/// 1. Inflate the piece by the inter-piece gap on each axis.
/// 2. Grid yield for both orientations: `cols = ⌊sheet_w / (w+gap)⌋`,
///    `rows = ⌊sheet_h / (h+gap)⌋`; rotated swaps w/h.
/// 3. The larger yield wins; a tie keeps the unrotated orientation.
/// 4. If both yields are zero, check the raw (ungapped) piece against the
///    sheet in either orientation - a single item needs no spacing.
///
/// Never fails: unsatisfiable geometry returns `FitResult::none()` and the
/// caller decides what that means.
///
/// ## Example
/// ```rust
/// use printcalc_core::layout::{fit, SRA3};
///
/// // A 319×449 poster cannot grid with the gap but fits once raw
/// let lone = fit(319, 449, SRA3);
/// assert!(lone.fits);
/// assert_eq!(lone.count, 1);
/// ```
pub fn fit(piece_width_mm: u32, piece_height_mm: u32, sheet: SheetSize) -> FitResult {
    if piece_width_mm == 0 || piece_height_mm == 0 {
        return FitResult::none();
    }

    let item_w = piece_width_mm + PIECE_GAP_MM;
    let item_h = piece_height_mm + PIECE_GAP_MM;

    // Orientation 1: declared width along the sheet width
    let cols1 = sheet.width_mm / item_w;
    let rows1 = sheet.height_mm / item_h;
    let yield1 = cols1 * rows1;

    // Orientation 2: rotated 90°
    let cols2 = sheet.width_mm / item_h;
    let rows2 = sheet.height_mm / item_w;
    let yield2 = cols2 * rows2;

    if yield1 == 0 && yield2 == 0 {
        // Single-item fallback: one piece needs no inter-piece spacing
        if piece_width_mm <= sheet.width_mm && piece_height_mm <= sheet.height_mm {
            return FitResult {
                fits: true,
                count: 1,
                cols: 1,
                rows: 1,
                orientation: Some(Orientation::Horizontal),
            };
        }
        if piece_height_mm <= sheet.width_mm && piece_width_mm <= sheet.height_mm {
            return FitResult {
                fits: true,
                count: 1,
                cols: 1,
                rows: 1,
                orientation: Some(Orientation::Vertical),
            };
        }
        return FitResult::none();
    }

    // Ties keep the unrotated orientation
    if yield1 >= yield2 {
        FitResult {
            fits: true,
            count: yield1,
            cols: cols1,
            rows: rows1,
            orientation: Some(Orientation::Horizontal),
        }
    } else {
        FitResult {
            fits: true,
            count: yield2,
            cols: cols2,
            rows: rows2,
            orientation: Some(Orientation::Vertical),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
