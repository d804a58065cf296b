//! Lengths in metric and imperial units.
//!
//! [`LengthUnit`] variants are declared from the most to the least precise unit, and the derived `Ord` follows that
//! order: `Millimeters < Centimeters < … < Miles`. [`LengthUnit::max_precision`] relies on it.
//!
//! Ratios are expressed in metres, the base unit of [`Length`].
//!
//! ```rust
//! use phodeli_core::{Length, LengthUnit, Measure};
//!
//! let marathon = Length::km(42.195);
//! assert!((marathon.to_miles() - 26.2188).abs() < 1e-4);
//! assert_eq!(LengthUnit::Inches.max_precision(LengthUnit::Meters), LengthUnit::Inches);
//! ```

use crate::{Measure, MeasureUnit};
use phodeli_derive::Unit;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit of a [`Length`], ordered by decreasing precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Unit)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum LengthUnit {
    /// Millimetres.
    #[unit(symbol = "mm", ratio = 0.001)]
    Millimeters,
    /// Centimetres.
    #[unit(symbol = "cm", ratio = 0.01)]
    Centimeters,
    /// Inches, written `"`.
    #[unit(symbol = "\"", ratio = 0.0254)]
    Inches,
    /// Decimetres.
    #[unit(symbol = "dm", ratio = 0.1)]
    Decimeters,
    /// Yards.
    #[unit(symbol = "yd", ratio = 0.9144)]
    Yards,
    /// Metres.
    #[unit(symbol = "m", ratio = 1.0)]
    Meters,
    /// Kilometres.
    #[unit(symbol = "km", ratio = 1000.0)]
    Kilometers,
    /// International miles.
    #[unit(symbol = "mi", ratio = 1609.344)]
    Miles,
}

impl LengthUnit {
    /// The more precise of `self` and `other`.
    #[inline]
    pub fn max_precision(self, other: Self) -> Self {
        self.min(other)
    }

    /// `length` (in this unit) in millimetres.
    #[inline]
    pub fn to_millimeters(self, length: f64) -> f64 {
        Self::Millimeters.convert(length, self)
    }

    /// `length` (in this unit) in centimetres.
    #[inline]
    pub fn to_centimeters(self, length: f64) -> f64 {
        Self::Centimeters.convert(length, self)
    }

    /// `length` (in this unit) in inches.
    #[inline]
    pub fn to_inches(self, length: f64) -> f64 {
        Self::Inches.convert(length, self)
    }

    /// `length` (in this unit) in decimetres.
    #[inline]
    pub fn to_decimeters(self, length: f64) -> f64 {
        Self::Decimeters.convert(length, self)
    }

    /// `length` (in this unit) in yards.
    #[inline]
    pub fn to_yards(self, length: f64) -> f64 {
        Self::Yards.convert(length, self)
    }

    /// `length` (in this unit) in metres.
    #[inline]
    pub fn to_meters(self, length: f64) -> f64 {
        Self::Meters.convert(length, self)
    }

    /// `length` (in this unit) in kilometres.
    #[inline]
    pub fn to_kilometers(self, length: f64) -> f64 {
        Self::Kilometers.convert(length, self)
    }

    /// `length` (in this unit) in miles.
    #[inline]
    pub fn to_miles(self, length: f64) -> f64 {
        Self::Miles.convert(length, self)
    }
}

impl MeasureUnit for LengthUnit {
    #[inline]
    fn convert(self, source_amount: f64, source_unit: Self) -> f64 {
        if source_unit == self {
            return source_amount;
        }
        source_amount / self.ratio() * source_unit.ratio()
    }
}

/// A length with its unit.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Length {
    amount: f64,
    unit: LengthUnit,
}

impl Length {
    /// Creates a length of `amount` in `unit`.
    #[inline]
    pub const fn length(amount: f64, unit: LengthUnit) -> Self {
        Self { amount, unit }
    }

    /// Creates a length in millimetres.
    pub const fn mm(amount: f64) -> Self {
        Self::length(amount, LengthUnit::Millimeters)
    }

    /// Creates a length in centimetres.
    pub const fn cm(amount: f64) -> Self {
        Self::length(amount, LengthUnit::Centimeters)
    }

    /// Creates a length in inches.
    pub const fn inch(amount: f64) -> Self {
        Self::length(amount, LengthUnit::Inches)
    }

    /// Creates a length in decimetres.
    pub const fn dm(amount: f64) -> Self {
        Self::length(amount, LengthUnit::Decimeters)
    }

    /// Creates a length in yards.
    pub const fn yd(amount: f64) -> Self {
        Self::length(amount, LengthUnit::Yards)
    }

    /// Creates a length in metres.
    pub const fn m(amount: f64) -> Self {
        Self::length(amount, LengthUnit::Meters)
    }

    /// Creates a length in kilometres.
    pub const fn km(amount: f64) -> Self {
        Self::length(amount, LengthUnit::Kilometers)
    }

    /// Creates a length in miles.
    pub const fn mi(amount: f64) -> Self {
        Self::length(amount, LengthUnit::Miles)
    }

    /// The amount in millimetres.
    pub fn to_millimeters(&self) -> f64 {
        self.get(LengthUnit::Millimeters)
    }

    /// The amount in centimetres.
    pub fn to_centimeters(&self) -> f64 {
        self.get(LengthUnit::Centimeters)
    }

    /// The amount in inches.
    pub fn to_inches(&self) -> f64 {
        self.get(LengthUnit::Inches)
    }

    /// The amount in decimetres.
    pub fn to_decimeters(&self) -> f64 {
        self.get(LengthUnit::Decimeters)
    }

    /// The amount in yards.
    pub fn to_yards(&self) -> f64 {
        self.get(LengthUnit::Yards)
    }

    /// The amount in metres.
    pub fn to_meters(&self) -> f64 {
        self.get(LengthUnit::Meters)
    }

    /// The amount in kilometres.
    pub fn to_kilometers(&self) -> f64 {
        self.get(LengthUnit::Kilometers)
    }

    /// The amount in miles.
    pub fn to_miles(&self) -> f64 {
        self.get(LengthUnit::Miles)
    }
}

impl Measure for Length {
    type Unit = LengthUnit;

    #[inline]
    fn of(amount: f64, unit: LengthUnit) -> Self {
        Self::length(amount, unit)
    }

    #[inline]
    fn amount(&self) -> f64 {
        self.amount
    }

    #[inline]
    fn unit(&self) -> LengthUnit {
        self.unit
    }
}

crate::impl_measure!(Length, LengthUnit::Meters);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::ROOT;
    use crate::{MeasureError, Unit};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn any_unit() -> impl Strategy<Value = LengthUnit> {
        proptest::sample::select(LengthUnit::ALL)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Unit table
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn declaration_order_is_precision_order() {
        let ratios: Vec<f64> = LengthUnit::ALL.iter().map(|u| u.ratio()).collect();
        assert!(ratios.windows(2).all(|w| w[0] < w[1]));
        assert!(LengthUnit::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn symbols_are_unique() {
        let symbols: HashSet<_> = LengthUnit::ALL.iter().map(|u| u.symbol()).collect();
        assert_eq!(symbols.len(), LengthUnit::ALL.len());
        assert_eq!(LengthUnit::Inches.symbol(), "\"");
    }

    #[test]
    fn symbol_postfix() {
        assert_eq!(LengthUnit::Millimeters.symbol_postfix(), " mm");
        assert_eq!(LengthUnit::Inches.symbol_postfix(), "\"");
    }

    #[test]
    fn parse() {
        assert_eq!("km".parse::<LengthUnit>(), Ok(LengthUnit::Kilometers));
        assert_eq!("\"".parse::<LengthUnit>(), Ok(LengthUnit::Inches));
        assert_eq!("Inches".parse::<LengthUnit>(), Ok(LengthUnit::Inches));
        assert_eq!(
            "furlong".parse::<LengthUnit>(),
            Err(MeasureError::UnknownUnit("furlong".into()))
        );
    }

    #[test]
    fn max_precision() {
        use LengthUnit::*;
        assert_eq!(Millimeters.max_precision(Miles), Millimeters);
        assert_eq!(Miles.max_precision(Millimeters), Millimeters);
        assert_eq!(Inches.max_precision(Decimeters), Inches);
        assert_eq!(Yards.max_precision(Yards), Yards);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn convert_between_units() {
        assert_relative_eq!(LengthUnit::Kilometers.to_meters(1.25), 1250.0);
        assert_relative_eq!(LengthUnit::Inches.to_centimeters(1.0), 2.54, epsilon = 1e-12);
        assert_relative_eq!(LengthUnit::Miles.to_yards(1.0), 1760.0, epsilon = 1e-9);
        assert_relative_eq!(LengthUnit::Yards.to_inches(1.0), 36.0, epsilon = 1e-12);
        assert_relative_eq!(LengthUnit::Decimeters.to_millimeters(1.0), 100.0, epsilon = 1e-12);
        assert_relative_eq!(LengthUnit::Meters.to_kilometers(500.0), 0.5);
        assert_relative_eq!(LengthUnit::Centimeters.to_decimeters(10.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(LengthUnit::Kilometers.to_miles(1.609344), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn convert_same_unit_is_identity() {
        for &unit in LengthUnit::ALL {
            assert_eq!(unit.convert(0.1, unit), 0.1);
        }
    }

    #[test]
    fn length_accessors() {
        let l = Length::m(1.0);
        assert_relative_eq!(l.to_millimeters(), 1000.0);
        assert_relative_eq!(l.to_centimeters(), 100.0);
        assert_relative_eq!(l.to_decimeters(), 10.0);
        assert_relative_eq!(l.to_meters(), 1.0);
        assert_relative_eq!(l.to_kilometers(), 0.001);
        assert_relative_eq!(l.to_inches(), 39.37007874015748, epsilon = 1e-12);
        assert_relative_eq!(l.to_yards(), 1.0936132983377078, epsilon = 1e-12);
        assert_relative_eq!(l.to_miles(), 0.000621371192237334, epsilon = 1e-15);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Length
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn constructors() {
        let cases = [
            (Length::mm(1.0), LengthUnit::Millimeters),
            (Length::cm(1.0), LengthUnit::Centimeters),
            (Length::inch(1.0), LengthUnit::Inches),
            (Length::dm(1.0), LengthUnit::Decimeters),
            (Length::yd(1.0), LengthUnit::Yards),
            (Length::m(1.0), LengthUnit::Meters),
            (Length::km(1.0), LengthUnit::Kilometers),
            (Length::mi(1.0), LengthUnit::Miles),
        ];
        for (length, unit) in cases {
            assert_eq!(length, Length::length(1.0, unit));
            assert_eq!(length.unit(), unit);
        }
        assert_eq!(Length::units().len(), 8);
    }

    #[test]
    fn ordering_by_meters() {
        let mut lengths = vec![Length::km(1.0), Length::mi(1.0), Length::mm(10.0), Length::inch(1.0)];
        lengths.sort();
        assert_eq!(
            lengths,
            vec![Length::mm(10.0), Length::inch(1.0), Length::km(1.0), Length::mi(1.0)]
        );
    }

    #[test]
    fn transform() {
        let l = Length::cm(250.0).transform(LengthUnit::Meters);
        assert_eq!(l.unit(), LengthUnit::Meters);
        assert_abs_diff_eq!(l.amount(), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn display() {
        assert_eq!(Length::mm(12.5).to_string(), "12.500000 mm");
        assert_eq!(Length::inch(3.0).to_string(), "3.000000\"");
        assert_eq!(format!("{:>10.6}", Length::m(1.23456)), "    1.23 m");
    }

    #[test]
    fn format_amount_groups_digits() {
        assert_eq!(LengthUnit::Meters.format_amount(1234567.891, &ROOT), "1,234,567.891 m");
        assert_eq!(LengthUnit::Inches.format_amount(0.5, &ROOT), "0.5\"");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let l = Length::mi(3.5);
        let json = serde_json::to_string(&l).unwrap();
        assert_eq!(json, r#"{"amount":3.5,"unit":"miles"}"#);
        let back: Length = serde_json::from_str(&json).unwrap();
        assert_eq!(back, l);
    }

    proptest! {
        #[test]
        fn prop_roundtrip(x in -1e9..1e9f64, from in any_unit(), to in any_unit()) {
            let there = to.convert(x, from);
            let back = from.convert(there, to);
            prop_assert!((back - x).abs() <= 1e-9 * x.abs().max(1.0));
        }

        #[test]
        fn prop_max_precision_is_symmetric(a in any_unit(), b in any_unit()) {
            prop_assert_eq!(a.max_precision(b), b.max_precision(a));
            prop_assert!(a.max_precision(b) <= a && a.max_precision(b) <= b);
        }
    }
}
