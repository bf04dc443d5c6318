//! # Label Parsing
//!
//! The single place free-form shop labels become the core's closed enums.
//!
//! ## Translation Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Label Translation                                  │
//! │                                                                         │
//! │  Frontend / feed label          Core enum                               │
//! │  ─────────────────────          ──────────────────────                  │
//! │  "  Глянцевая 32 "       ──►    Lamination::Gloss32                     │
//! │  "без ламинации"         ──►    Lamination::None                        │
//! │  "А4" / "A4"             ──►    PageFormat::A4                          │
//! │  "44"                    ──►    ColorMode::DoubleSided                  │
//! │  "guillotine_percent"    ──►    Cutting::GuillotinePercent              │
//! │                                                                         │
//! │  Unknown labels parse to None; the caller decides whether that means    │
//! │  "no selection" (lamination) or "reject the form" (format).             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Past this module the engine only ever sees enums - no string dispatch
//! survives into printcalc-core.

use printcalc_core::types::{ColorMode, Cutting, Lamination, PageFormat};

// =============================================================================
// Lamination Labels
// =============================================================================

/// The shop's lamination labels and their enum mappings.
///
/// Labels are matched after trimming and lowercasing; the numeric suffix is
/// the film thickness in microns.
pub const LAMINATION_LABELS: [(&str, Lamination); 7] = [
    ("глянцевая 32", Lamination::Gloss32),
    ("матовая 32", Lamination::Matte32),
    ("глянцевая 75", Lamination::Gloss75),
    ("матовая 75", Lamination::Matte75),
    ("глянцевая 125", Lamination::Gloss125),
    ("матовая 125", Lamination::Matte125),
    ("soft touch", Lamination::SoftTouch),
];

/// Parses a free-form lamination label.
///
/// "без ламинации" (in any spelling the form produces) maps to
/// [`Lamination::None`]; anything unrecognized parses to `None` and the
/// caller applies the zero-contribution default.
pub fn parse_lamination(label: &str) -> Option<Lamination> {
    let normalized = label.trim().to_lowercase();

    if normalized.contains("без ламинации") {
        return Some(Lamination::None);
    }

    LAMINATION_LABELS
        .iter()
        .find(|(known, _)| *known == normalized)
        .map(|&(_, kind)| kind)
}

/// The display label for a finish (the inverse of [`parse_lamination`]).
pub fn lamination_label(kind: Lamination) -> &'static str {
    match kind {
        Lamination::None => "без ламинации",
        Lamination::Gloss32 => "глянцевая 32",
        Lamination::Matte32 => "матовая 32",
        Lamination::Gloss75 => "глянцевая 75",
        Lamination::Matte75 => "матовая 75",
        Lamination::Gloss125 => "глянцевая 125",
        Lamination::Matte125 => "матовая 125",
        Lamination::SoftTouch => "soft touch",
    }
}

// =============================================================================
// Format Labels
// =============================================================================

/// Parses a named format label, accepting Cyrillic and Latin letters.
///
/// Custom sizes don't come through here - the form posts explicit
/// dimensions for those and the caller builds `PageFormat::Custom` itself.
pub fn parse_named_format(label: &str) -> Option<PageFormat> {
    match label.trim() {
        "А3" | "A3" => Some(PageFormat::A3),
        "А4" | "A4" => Some(PageFormat::A4),
        "А5" | "A5" => Some(PageFormat::A5),
        "А6" | "A6" => Some(PageFormat::A6),
        _ => None,
    }
}

// =============================================================================
// Mode Labels
// =============================================================================

/// Parses a color-mode rate-card key ("40" = 4+0, "44" = 4+4).
pub fn parse_color_mode(label: &str) -> Option<ColorMode> {
    match label.trim() {
        "40" => Some(ColorMode::SingleSided),
        "44" => Some(ColorMode::DoubleSided),
        _ => None,
    }
}

/// Parses a cutting-type form value.
pub fn parse_cutting(label: &str) -> Option<Cutting> {
    match label.trim() {
        "none" => Some(Cutting::None),
        "plotter" => Some(Cutting::Plotter),
        "guillotine_percent" => Some(Cutting::GuillotinePercent),
        _ => None,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
