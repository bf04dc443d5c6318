//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A price list holds 6.32 ₽ per sheet; 1000 sheets of drift adds up.     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Kopecks                                          │
//! │    6.32 ₽ = 632 kopecks; 1000 × 632 = 632 000, exactly                  │
//! │    Rounding happens once, visibly, at the display boundary              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use printcalc_core::money::Money;
//!
//! // Create from kopecks (preferred)
//! let sheet = Money::from_kopecks(632); // 6.32 ₽
//!
//! // Arithmetic operations
//! let ten_sheets = sheet * 10u32;                  // 63.20 ₽
//! let with_markup = ten_sheets.scale(12_000);      // ×1.2 = 75.84 ₽
//!
//! // NEVER do this:
//! // let bad = Money::from_float(6.32); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (kopecks).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for corrections and credits
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Price feed (decimal ₽) ──► catalog boundary ──► Money (kopecks)        │
/// │                                                                         │
/// │  Money ──► tier lookups ──► cost components ──► Quote totals            │
/// │                                                                         │
/// │  EVERY monetary value in the engine flows through this type             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from kopecks (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use printcalc_core::money::Money;
    ///
    /// let price = Money::from_kopecks(632); // Represents 6.32 ₽
    /// assert_eq!(price.kopecks(), 632);
    /// ```
    #[inline]
    pub const fn from_kopecks(kopecks: i64) -> Self {
        Money(kopecks)
    }

    /// Creates a Money value from whole rubles.
    ///
    /// ## Example
    /// ```rust
    /// use printcalc_core::money::Money;
    ///
    /// let floor = Money::from_rubles(950);
    /// assert_eq!(floor.kopecks(), 95_000);
    /// ```
    #[inline]
    pub const fn from_rubles(rubles: i64) -> Self {
        Money(rubles * 100)
    }

    /// Creates a Money value from major and minor units (rubles and kopecks).
    ///
    /// ## Example
    /// ```rust
    /// use printcalc_core::money::Money;
    ///
    /// let price = Money::from_major_minor(8, 20); // 8.20 ₽
    /// assert_eq!(price.kopecks(), 820);
    ///
    /// let credit = Money::from_major_minor(-5, 50); // -5.50 ₽
    /// assert_eq!(credit.kopecks(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -5.50 ₽, not -4.50 ₽
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        // Handle sign: if major is negative, minor should subtract
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in kopecks (smallest currency unit).
    #[inline]
    pub const fn kopecks(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (rubles) portion.
    #[inline]
    pub const fn rubles(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (kopecks) portion (always 0-99).
    #[inline]
    pub const fn kopecks_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the value in rubles as a float.
    ///
    /// For derived display rates only (per-piece price). Money arithmetic
    /// never goes through this method.
    #[inline]
    pub fn rubles_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Scales the amount by a factor expressed in basis points.
    ///
    /// ## Why Basis Points?
    /// 1 basis point = 0.01% = 1/10000. The engine's two surcharges are both
    /// clean bps values: the oversized-sheet factor ×1.2 is 12 000 bps and
    /// the guillotine-cut charge of 10% of print is 1 000 bps.
    ///
    /// ## Implementation
    /// Integer math with half-up rounding: `(amount * bps + 5000) / 10000`.
    /// i128 keeps large run totals from overflowing.
    ///
    /// ## Example
    /// ```rust
    /// use printcalc_core::money::Money;
    ///
    /// let print = Money::from_kopecks(10_000); // 100.00 ₽
    /// assert_eq!(print.scale(12_000).kopecks(), 12_000); // ×1.2
    /// assert_eq!(print.scale(1_000).kopecks(), 1_000);   // 10%
    /// ```
    pub fn scale(&self, factor_bps: u32) -> Money {
        let scaled = (self.0 as i128 * factor_bps as i128 + 5000) / 10000;
        Money::from_kopecks(scaled as i64)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (1000 = 10%)
    ///
    /// ## Example
    /// ```rust
    /// use printcalc_core::money::Money;
    ///
    /// let base = Money::from_kopecks(100_000); // 1000.00 ₽
    /// let discounted = base.apply_percentage_discount(1000); // 10% off
    /// assert_eq!(discounted.kopecks(), 90_000); // 900.00 ₽
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        // Calculate discount amount, then subtract
        let discount_amount = (self.0 as i128 * discount_bps as i128 + 5000) / 10000;
        Money::from_kopecks(self.0 - discount_amount as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use printcalc_core::money::Money;
    ///
    /// let per_sheet = Money::from_kopecks(1_120); // 11.20 ₽
    /// let material = per_sheet.multiply_quantity(84);
    /// assert_eq!(material.kopecks(), 94_080); // 940.80 ₽
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Rounds to the nearest whole ruble.
    ///
    /// Quote breakdown lines and totals are displayed in whole rubles; this
    /// is the single place that rounding happens.
    ///
    /// ## Example
    /// ```rust
    /// use printcalc_core::money::Money;
    ///
    /// assert_eq!(Money::from_kopecks(94_080).round_to_ruble().kopecks(), 94_100);
    /// assert_eq!(Money::from_kopecks(94_049).round_to_ruble().kopecks(), 94_000);
    /// ```
    pub const fn round_to_ruble(&self) -> Money {
        let sign = if self.0 < 0 { -1 } else { 1 };
        let rounded = (self.0.abs() + 50) / 100 * 100;
        Money(sign * rounded)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02} ₽",
            sign,
            self.rubles().abs(),
            self.kopecks_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by sheet/operation counts.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_kopecks() {
        let money = Money::from_kopecks(1099);
        assert_eq!(money.kopecks(), 1099);
        assert_eq!(money.rubles(), 10);
        assert_eq!(money.kopecks_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(10, 99);
        assert_eq!(money.kopecks(), 1099);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.kopecks(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_kopecks(1099)), "10.99 ₽");
        assert_eq!(format!("{}", Money::from_kopecks(500)), "5.00 ₽");
        assert_eq!(format!("{}", Money::from_kopecks(-550)), "-5.50 ₽");
        assert_eq!(format!("{}", Money::from_kopecks(0)), "0.00 ₽");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_kopecks(1000);
        let b = Money::from_kopecks(500);

        assert_eq!((a + b).kopecks(), 1500);
        assert_eq!((a - b).kopecks(), 500);
        let result: Money = a * 3i64;
        assert_eq!(result.kopecks(), 3000);
    }

    #[test]
    fn test_scale_oversize_factor() {
        // 100.00 ₽ × 1.2 = 120.00 ₽
        let amount = Money::from_kopecks(10_000);
        assert_eq!(amount.scale(12_000).kopecks(), 12_000);
    }

    #[test]
    fn test_scale_with_rounding() {
        // 6.32 ₽ × 1.2 = 7.584 ₽ → 7.58 ₽ (half-up on the last kopeck)
        let amount = Money::from_kopecks(632);
        assert_eq!(amount.scale(12_000).kopecks(), 758);
    }

    #[test]
    fn test_identity_scale() {
        let amount = Money::from_kopecks(12_345);
        assert_eq!(amount.scale(10_000), amount);
    }

    #[test]
    fn test_percentage_discount() {
        let base = Money::from_kopecks(100_000); // 1000.00 ₽
        let discounted = base.apply_percentage_discount(1000); // 10%
        assert_eq!(discounted.kopecks(), 90_000); // 900.00 ₽
    }

    #[test]
    fn test_zero_discount_is_identity() {
        let base = Money::from_kopecks(123_456);
        assert_eq!(base.apply_percentage_discount(0), base);
    }

    #[test]
    fn test_full_discount_is_zero() {
        let base = Money::from_kopecks(123_456);
        assert!(base.apply_percentage_discount(10_000).is_zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_kopecks(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::from_kopecks(-100);
        assert!(!negative.is_zero());
        assert!(!negative.is_positive());
        assert!(negative.is_negative());
    }

    #[test]
    fn test_multiply_quantity() {
        let per_sheet = Money::from_kopecks(632);
        let material = per_sheet.multiply_quantity(100);
        assert_eq!(material.kopecks(), 63_200);
    }

    #[test]
    fn test_round_to_ruble() {
        assert_eq!(Money::from_kopecks(149).round_to_ruble().kopecks(), 100);
        assert_eq!(Money::from_kopecks(150).round_to_ruble().kopecks(), 200);
        assert_eq!(Money::from_kopecks(0).round_to_ruble().kopecks(), 0);
        assert_eq!(Money::from_kopecks(-150).round_to_ruble().kopecks(), -200);
    }
}
