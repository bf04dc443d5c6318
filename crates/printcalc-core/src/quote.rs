//! # Quote Aggregation
//!
//! The single entry point that turns a request plus reference prices into
//! an authoritative quote.
//!
//! ## Aggregation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     compute_quote()                                     │
//! │                                                                         │
//! │  QuoteRequest + PriceList                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. Validate structure ───────────► ValidationError                     │
//! │  2. Lamination vs. material ──────► LaminationNotSupported              │
//! │  3. Sheet + yield resolution ─────► PieceTooLarge                       │
//! │     (named shortcut / fitter / oversized fallback)                      │
//! │  4. Per-component costs (tier lookups, rate cards, fees)                │
//! │  5. Minimum-order floor on print + material                             │
//! │  6. Discount, THEN delivery - never reordered                           │
//! │  7. Round for display, keep per-piece at full precision                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Quote (immutable, deterministic)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//! Same request + same price list = byte-identical quote. No clocks, no
//! randomness, no hidden state: callers may cache or replay freely.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, QuoteError};
use crate::layout::{fit, FitResult, SheetSize, SRA3, SRA3_PLUS};
use crate::money::Money;
use crate::tariff::{
    gluing_unit_price, lamination_price_per_sheet, print_price_per_sheet,
    scoring_folding_unit_price, PriceList,
};
use crate::types::{ColorMode, Cutting, DiscountRate, Lamination, Material, PageFormat};
use crate::validation::{
    validate_delivery_cost, validate_discount, validate_layout_count, validate_piece_dimension,
    validate_run_size,
};
use crate::{
    BASE_FACTOR_BPS, COLOR_MATCHING_FEE, GRAMS_PER_SHEET_PER_GSM, GUILLOTINE_SHARE_BPS,
    LAYOUT_FEE, MIN_ORDER_TOTAL, OVERSIZE_FACTOR_BPS,
};

// =============================================================================
// Quote Request
// =============================================================================

/// Everything the caller decided about one job.
///
/// Constructed per quote request, validated once at this boundary, never
/// stored. Reference data (the tier tables) travels separately as
/// [`PriceList`] so a UI can rebuild requests without re-fetching prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// Finished-piece format; custom sizes go through the fitter.
    pub format: PageFormat,
    /// Number of finished pieces ordered (circulation).
    pub run_size: u32,
    pub color_mode: ColorMode,
    /// Stock chosen by the customer (the oversized fallback may override it).
    pub material: Material,
    /// Requested grammage in g/m².
    pub density_gsm: f64,
    pub lamination: Lamination,
    pub cutting: Cutting,
    /// Score lines per piece (0 = no scoring).
    pub scoring_count: u32,
    /// Folds per piece (0 = no folding).
    pub folding_count: u32,
    /// Glue seams per piece (0 = no gluing).
    pub gluing_count: u32,
    pub delivery_cost: Money,
    pub discount: DiscountRate,
    /// Pantone/proof color matching requested.
    pub color_matching: bool,
    /// Distinct artwork layouts in the run (extras are surcharged).
    pub layout_count: u32,
}

// =============================================================================
// Quote Result
// =============================================================================

/// Itemized cost components, each rounded to whole rubles for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub print: Money,
    pub material: Money,
    pub lamination: Money,
    pub scoring: Money,
    pub folding: Money,
    pub gluing: Money,
    pub cutting: Money,
    pub color_matching: Money,
    pub layouts: Money,
}

/// The authoritative quote for one request.
///
/// ## Invariants
/// - `total = round_to_ruble(discounted + delivery)`
/// - `discounted = base × (1 − discount)`; delivery is never discounted
/// - `per_piece` keeps full precision (CRM line items divide by it)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Grand total, rounded to whole rubles.
    pub total: Money,
    /// Price per finished piece in rubles, NOT rounded.
    pub per_piece: f64,
    /// Floor-adjusted component sum before discount, rounded.
    pub base_total: Money,
    /// Base total after discount, before delivery, rounded.
    pub discounted_total: Money,
    /// How much the discount took off, rounded.
    pub discount_amount: Money,
    pub delivery_cost: Money,
    /// Production sheets needed for the run.
    pub sheets: u32,
    /// Finished pieces cut from one sheet.
    pub per_sheet: u32,
    /// Grid the pieces are imposed in.
    pub fit: FitResult,
    /// Sheet the job runs on (SRA3 or the oversized SRA3+).
    pub sheet_size: SheetSize,
    /// True when the oversized fallback was taken.
    pub is_oversize: bool,
    /// The stock actually used (the fallback may differ from the request).
    pub material: Material,
    pub material_price_per_sheet: Money,
    /// Rate-card unit prices actually applied (zero for unused operations).
    pub scoring_unit_price: Money,
    pub folding_unit_price: Money,
    pub gluing_unit_price: Money,
    /// Estimated order weight in grams, for delivery planning.
    pub weight_grams: f64,
    pub breakdown: CostBreakdown,
}

// =============================================================================
// Sheet Plan
// =============================================================================

/// Resolved production plan: which sheet, which stock, what surcharge.
struct SheetPlan {
    sheet_size: SheetSize,
    fit: FitResult,
    per_sheet: u32,
    material: Material,
    factor_bps: u32,
    is_oversize: bool,
}

/// Picks the sheet and yield for a request.
///
/// Named formats use the fixed SRA3 impositions. Custom sizes try SRA3
/// first; a piece that doesn't fit falls back to the oversized sheet,
/// which forces the coated-only stock list and the 1.2× run surcharge.
fn resolve_sheet_plan(request: &QuoteRequest) -> CoreResult<SheetPlan> {
    let (width_mm, height_mm) = match request.format {
        PageFormat::Custom {
            width_mm,
            height_mm,
        } => (width_mm, height_mm),
        named => {
            let fit = match named {
                PageFormat::A3 => FitResult::grid(1, 1),
                PageFormat::A4 => FitResult::grid(2, 1),
                PageFormat::A5 => FitResult::grid(2, 2),
                PageFormat::A6 => FitResult::grid(4, 2),
                PageFormat::Custom { .. } => unreachable!(),
            };
            return Ok(SheetPlan {
                sheet_size: SRA3,
                fit,
                // sheet_yield() is Some for every named format
                per_sheet: named.sheet_yield().unwrap_or(1),
                material: request.material.clone(),
                factor_bps: BASE_FACTOR_BPS,
                is_oversize: false,
            });
        }
    };

    let standard = fit(width_mm, height_mm, SRA3);
    if standard.fits {
        return Ok(SheetPlan {
            sheet_size: SRA3,
            fit: standard,
            per_sheet: standard.count,
            material: request.material.clone(),
            factor_bps: BASE_FACTOR_BPS,
            is_oversize: false,
        });
    }

    let oversized = fit(width_mm, height_mm, SRA3_PLUS);
    if !oversized.fits {
        return Err(QuoteError::PieceTooLarge {
            width_mm,
            height_mm,
        });
    }

    // Oversized runs are coated paper only; the fallback overrides the
    // requested stock and both run-cost components carry the surcharge.
    let forced = crate::types::oversize_materials()
        .into_iter()
        .next()
        .unwrap_or_else(|| request.material.clone());

    Ok(SheetPlan {
        sheet_size: SRA3_PLUS,
        fit: oversized,
        per_sheet: oversized.count,
        material: forced,
        factor_bps: OVERSIZE_FACTOR_BPS,
        is_oversize: true,
    })
}

// =============================================================================
// Aggregator
// =============================================================================

/// Computes the quote for one request against one price list.
///
/// Pure and single-pass: no retries, no partial state, no I/O. Hard
/// failures ([`QuoteError`]) surface before any `Quote` exists; incomplete
/// reference data degrades to zero/default contributions instead.
///
/// ## Example
/// ```rust
/// use printcalc_core::money::Money;
/// use printcalc_core::quote::{compute_quote, QuoteRequest};
/// use printcalc_core::tariff::{PriceList, PrintRate};
/// use printcalc_core::types::*;
///
/// let prices = PriceList {
///     print: vec![PrintRate {
///         min_sheets: 1,
///         single_sided: Some(Money::from_rubles(14)),
///         double_sided: Some(Money::from_rubles(21)),
///     }],
///     lamination: vec![],
/// };
///
/// let request = QuoteRequest {
///     format: PageFormat::A4,
///     run_size: 1000,
///     color_mode: ColorMode::SingleSided,
///     material: Material::new(
///         "Мелованная бумага",
///         &[(300.0, Money::from_major_minor(23, 47))],
///     ),
///     density_gsm: 300.0,
///     lamination: Lamination::None,
///     cutting: Cutting::None,
///     scoring_count: 0,
///     folding_count: 0,
///     gluing_count: 0,
///     delivery_cost: Money::zero(),
///     discount: DiscountRate::zero(),
///     color_matching: false,
///     layout_count: 1,
/// };
///
/// let quote = compute_quote(&request, &prices).unwrap();
/// assert_eq!(quote.sheets, 500);
/// assert_eq!(quote.per_sheet, 2);
/// ```
pub fn compute_quote(request: &QuoteRequest, prices: &PriceList) -> CoreResult<Quote> {
    // Step 0: structural validation, once, before any pricing
    validate_run_size(request.run_size)?;
    validate_discount(request.discount)?;
    validate_layout_count(request.layout_count)?;
    validate_delivery_cost(request.delivery_cost)?;
    if let PageFormat::Custom {
        width_mm,
        height_mm,
    } = request.format
    {
        validate_piece_dimension("width", width_mm)?;
        validate_piece_dimension("height", height_mm)?;
    }

    // Step 1: lamination compatibility, on the REQUESTED stock. Checked
    // before sheet resolution so the oversized fallback (which swaps to a
    // laminable stock) cannot mask a bad request.
    if !request.material.is_laminable() && !request.lamination.is_none() {
        return Err(QuoteError::LaminationNotSupported {
            material: request.material.name.clone(),
        });
    }

    // Step 2: sheet, yield and surcharge
    let plan = resolve_sheet_plan(request)?;

    // Step 3: sheets needed, rounding the last partial sheet up
    let sheets = request.run_size.div_ceil(plan.per_sheet);

    // Step 4: per-component costs
    let material_price_per_sheet = plan.material.per_sheet_price(request.density_gsm);
    let material = material_price_per_sheet * sheets;

    let print = (print_price_per_sheet(&prices.print, sheets, request.color_mode) * sheets)
        .scale(plan.factor_bps);

    let lamination =
        (lamination_price_per_sheet(&prices.lamination, sheets, request.lamination) * sheets)
            .scale(plan.factor_bps);

    let scoring_unit_price = if request.scoring_count > 0 {
        scoring_folding_unit_price(request.run_size)
    } else {
        Money::zero()
    };
    let folding_unit_price = if request.folding_count > 0 {
        scoring_folding_unit_price(request.run_size)
    } else {
        Money::zero()
    };
    let gluing_unit = if request.gluing_count > 0 {
        gluing_unit_price(request.run_size)
    } else {
        Money::zero()
    };

    let scoring = scoring_unit_price * request.scoring_count * request.run_size;
    let folding = folding_unit_price * request.folding_count * request.run_size;
    let gluing = gluing_unit * request.gluing_count * request.run_size;

    let cutting = match request.cutting {
        Cutting::None | Cutting::Plotter => Money::zero(),
        // Percentage of the already-surcharged print price
        Cutting::GuillotinePercent => print.scale(GUILLOTINE_SHARE_BPS),
    };

    let color_matching = if request.color_matching {
        COLOR_MATCHING_FEE
    } else {
        Money::zero()
    };

    let layouts = if request.layout_count > 1 {
        LAYOUT_FEE * request.layout_count
    } else {
        Money::zero()
    };

    // Step 5: minimum-order floor. The floor REPLACES the print+material
    // subtotal when it undershoots; everything else stacks on top.
    let extras =
        lamination + scoring + folding + gluing + cutting + color_matching + layouts;
    let print_plus_material = print + material;
    let base = if print_plus_material < MIN_ORDER_TOTAL {
        MIN_ORDER_TOTAL + extras
    } else {
        print_plus_material + extras
    };

    // Step 6: discount first, delivery after - never the other way around
    let discounted = base.apply_percentage_discount(request.discount.bps());
    let final_total = discounted + request.delivery_cost;
    let per_piece = final_total.rubles_f64() / request.run_size as f64;

    // Supplemental: order weight for delivery planning
    let weight_grams = if request.density_gsm > 0.0 {
        sheets as f64 * request.density_gsm * GRAMS_PER_SHEET_PER_GSM
    } else {
        0.0
    };

    // Step 7: round every displayed amount; per-piece stays exact
    Ok(Quote {
        total: final_total.round_to_ruble(),
        per_piece,
        base_total: base.round_to_ruble(),
        discounted_total: discounted.round_to_ruble(),
        discount_amount: (base - discounted).round_to_ruble(),
        delivery_cost: request.delivery_cost,
        sheets,
        per_sheet: plan.per_sheet,
        fit: plan.fit,
        sheet_size: plan.sheet_size,
        is_oversize: plan.is_oversize,
        material: plan.material,
        material_price_per_sheet,
        scoring_unit_price,
        folding_unit_price,
        gluing_unit_price: gluing_unit,
        weight_grams,
        breakdown: CostBreakdown {
            print: print.round_to_ruble(),
            material: material.round_to_ruble(),
            lamination: lamination.round_to_ruble(),
            scoring: scoring.round_to_ruble(),
            folding: folding.round_to_ruble(),
            gluing: gluing.round_to_ruble(),
            cutting: cutting.round_to_ruble(),
            color_matching: color_matching.round_to_ruble(),
            layouts: layouts.round_to_ruble(),
        },
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn coated() -> Material {
        Material::new(
            "Мелованная бумага",
            &[
                (125.0, Money::from_major_minor(11, 20)),
                (300.0, Money::from_major_minor(23, 47)),
            ],
        )
    }

    fn offset() -> Material {
        Material::new(
            "Офсет бумага",
            &[
                (80.0, Money::from_major_minor(6, 32)),
                (160.0, Money::from_rubles(10)),
            ],
        )
    }

    fn prices() -> PriceList {
        PriceList {
            print: vec![
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
                    double_sided: Some(Money::from_rubles(21)),
                },
            ],
            lamination: vec![LaminationRate {
                min_sheets: 1,
                gloss_32: Some(Money::from_rubles(2)),
                matte_32: Some(Money::from_rubles(2)),
                gloss_75: Some(Money::from_rubles(3)),
                matte_75: Some(Money::from_rubles(3)),
                gloss_125: Some(Money::from_rubles(4)),
                matte_125: Some(Money::from_rubles(4)),
                soft_touch: Some(Money::from_rubles(6)),
            }],
        }
    }

    use crate::tariff::{LaminationRate, PrintRate};

    fn base_request() -> QuoteRequest {
        QuoteRequest {
            format: PageFormat::A4,
            run_size: 1000,
            color_mode: ColorMode::SingleSided,
            material: coated(),
            density_gsm: 300.0,
            lamination: Lamination::None,
            cutting: Cutting::None,
            scoring_count: 0,
            folding_count: 0,
            gluing_count: 0,
            delivery_cost: Money::zero(),
            discount: DiscountRate::zero(),
            color_matching: false,
            layout_count: 1,
        }
    }

    #[test]
    fn test_named_format_shortcut() {
        let quote = compute_quote(&base_request(), &prices()).unwrap();

        assert_eq!(quote.per_sheet, 2);
        assert_eq!(quote.sheets, 500);
        assert_eq!((quote.fit.cols, quote.fit.rows), (2, 1));
        assert_eq!(quote.sheet_size, SRA3);
        assert!(!quote.is_oversize);
        // 500 sheets hit the 500 bracket: 500 × 6 ₽
        assert_eq!(quote.breakdown.print, Money::from_rubles(3000));
        // 500 × 23.47 ₽
        assert_eq!(quote.breakdown.material, Money::from_rubles(11_735));
    }

    #[test]
    fn test_custom_piece_on_standard_sheet() {
        let mut request = base_request();
        request.format = PageFormat::Custom {
            width_mm: 90,
            height_mm: 50,
        };

        let quote = compute_quote(&request, &prices()).unwrap();
        assert_eq!(quote.per_sheet, 24);
        assert_eq!(quote.sheets, 42); // ceil(1000 / 24)
        assert!(!quote.is_oversize);
        assert_eq!(quote.material.name, "Мелованная бумага");
    }

    #[test]
    fn test_oversize_fallback() {
        let mut request = base_request();
        request.format = PageFormat::Custom {
            width_mm: 325,
            height_mm: 470,
        };
        request.run_size = 100;
        request.lamination = Lamination::Gloss32;

        let quote = compute_quote(&request, &prices()).unwrap();

        assert!(quote.is_oversize);
        assert_eq!(quote.sheet_size, SRA3_PLUS);
        assert_eq!(quote.per_sheet, 1);
        assert_eq!(quote.sheets, 100);
        // Stock forced to the oversized catalog, density 300 → 28 ₽/sheet
        assert_eq!(quote.material.name, "Мелованная бумага");
        assert_eq!(quote.material_price_per_sheet, Money::from_rubles(28));
        // 100 sheets × 8 ₽ × 1.2 = 960 ₽
        assert_eq!(quote.breakdown.print, Money::from_rubles(960));
        // 100 sheets × 2 ₽ × 1.2 = 240 ₽
        assert_eq!(quote.breakdown.lamination, Money::from_rubles(240));
    }

    #[test]
    fn test_piece_too_large_for_both_sheets() {
        let mut request = base_request();
        request.format = PageFormat::Custom {
            width_mm: 340,
            height_mm: 500,
        };

        let err = compute_quote(&request, &prices()).unwrap_err();
        assert!(matches!(err, QuoteError::PieceTooLarge { .. }));
    }

    #[test]
    fn test_non_laminable_material_rejected() {
        let mut request = base_request();
        request.material = offset();
        request.density_gsm = 80.0;
        request.lamination = Lamination::Gloss32;

        let err = compute_quote(&request, &prices()).unwrap_err();
        assert!(matches!(
            err,
            QuoteError::LaminationNotSupported { material } if material == "Офсет бумага"
        ));
    }

    #[test]
    fn test_non_laminable_material_fine_without_lamination() {
        let mut request = base_request();
        request.material = offset();
        request.density_gsm = 80.0;

        let quote = compute_quote(&request, &prices()).unwrap();
        assert!(quote.breakdown.lamination.is_zero());
    }

    #[test]
    fn test_minimum_floor_replaces_print_plus_material() {
        let mut request = base_request();
        request.material = offset();
        request.density_gsm = 80.0;
        request.run_size = 10; // 5 sheets

        let quote = compute_quote(&request, &prices()).unwrap();

        // 5 × 14 ₽ print + 5 × 6.32 ₽ material = 101.60 ₽, under the floor
        assert_eq!(quote.breakdown.print, Money::from_rubles(70));
        assert_eq!(quote.breakdown.material, Money::from_kopecks(3200).round_to_ruble());
        // The floor REPLACES the subtotal - 950, not 950 + 101.60
        assert_eq!(quote.base_total, MIN_ORDER_TOTAL);
        assert_eq!(quote.total, MIN_ORDER_TOTAL);
    }

    #[test]
    fn test_minimum_floor_stacks_other_components() {
        let mut request = base_request();
        request.material = offset();
        request.density_gsm = 80.0;
        request.run_size = 10;
        request.color_matching = true;

        let quote = compute_quote(&request, &prices()).unwrap();
        assert_eq!(quote.base_total, MIN_ORDER_TOTAL + COLOR_MATCHING_FEE);
    }

    #[test]
    fn test_discount_then_delivery_ordering() {
        // base: 50 sheets × 14 ₽ print + 50 × 6 ₽ material = 1000 ₽
        let mut request = base_request();
        request.material = Material::new("Мелованная бумага", &[(300.0, Money::from_rubles(6))]);
        request.run_size = 100; // A4 → 50 sheets
        request.discount = DiscountRate::from_bps(1000); // 10%
        request.delivery_cost = Money::from_rubles(200);

        let quote = compute_quote(&request, &prices()).unwrap();

        assert_eq!(quote.base_total, Money::from_rubles(1000));
        assert_eq!(quote.discounted_total, Money::from_rubles(900));
        assert_eq!(quote.discount_amount, Money::from_rubles(100));
        // Delivery is added AFTER the discount and never discounted itself
        assert_eq!(quote.total, Money::from_rubles(1100));
        assert!((quote.per_piece - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_guillotine_cut_is_tenth_of_print() {
        let mut request = base_request();
        request.cutting = Cutting::GuillotinePercent;

        let quote = compute_quote(&request, &prices()).unwrap();
        // print = 3000 ₽ → cutting = 300 ₽
        assert_eq!(quote.breakdown.cutting, Money::from_rubles(300));

        request.cutting = Cutting::Plotter;
        let quote = compute_quote(&request, &prices()).unwrap();
        assert!(quote.breakdown.cutting.is_zero());
    }

    #[test]
    fn test_finishing_operations() {
        let mut request = base_request();
        request.run_size = 200; // 100 sheets; rate cards key off the RUN size
        request.scoring_count = 2;
        request.folding_count = 1;
        request.gluing_count = 1;

        let quote = compute_quote(&request, &prices()).unwrap();

        // run 200 → 6 ₽ scoring/folding, 11.40 ₽ gluing
        assert_eq!(quote.scoring_unit_price, Money::from_rubles(6));
        assert_eq!(quote.breakdown.scoring, Money::from_rubles(2 * 200 * 6));
        assert_eq!(quote.breakdown.folding, Money::from_rubles(200 * 6));
        assert_eq!(quote.gluing_unit_price, Money::from_kopecks(1140));
        assert_eq!(quote.breakdown.gluing, Money::from_rubles(2280));
    }

    #[test]
    fn test_layout_surcharge_only_above_one() {
        let quote = compute_quote(&base_request(), &prices()).unwrap();
        assert!(quote.breakdown.layouts.is_zero());

        let mut request = base_request();
        request.layout_count = 3;
        let quote = compute_quote(&request, &prices()).unwrap();
        assert_eq!(quote.breakdown.layouts, LAYOUT_FEE * 3u32);
    }

    #[test]
    fn test_order_weight() {
        let quote = compute_quote(&base_request(), &prices()).unwrap();
        // 500 sheets × 300 g/m² × 0.145 = 21 750 g
        assert!((quote.weight_grams - 21_750.0).abs() < 1e-6);
    }

    #[test]
    fn test_idempotence() {
        let request = base_request();
        let price_list = prices();

        let first = compute_quote(&request, &price_list).unwrap();
        let second = compute_quote(&request, &price_list).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_run_size_rejected() {
        let mut request = base_request();
        request.run_size = 0;
        let err = compute_quote(&request, &prices()).unwrap_err();
        assert!(matches!(err, QuoteError::Validation(_)));
    }

    #[test]
    fn test_empty_price_list_degrades_to_material_floor() {
        // Missing reference data must degrade, not fail
        let quote = compute_quote(&base_request(), &PriceList::default()).unwrap();
        assert!(quote.breakdown.print.is_zero());
        // material alone (11 735 ₽) clears the floor
        assert_eq!(quote.base_total, Money::from_rubles(11_735));
    }
}
