//! Angles in degrees or radians.
//!
//! # Design overview
//!
//! * **Closed-form conversion:** [`AngleUnit`] converts with `f64::to_degrees`/`f64::to_radians` instead of a ratio
//!   table, so a round trip through the other unit loses as little as possible.
//! * **Base unit:** radians. [`Angle`]s of mixed units order by their radian value.
//! * **Normalization:** [`AngleUnit::normalized`] maps an amount into `[-180, 180]` degrees or `[-π, π]` radians
//!   using the IEEE remainder by a full turn.
//!
//! ## Edge cases
//!
//! Conversion and normalization follow IEEE-754: `NaN` propagates, and normalizing `±∞` yields `NaN`.
//!
//! ## Examples
//!
//! ```rust
//! use phodeli_core::{Angle, AngleUnit, Measure};
//!
//! let right = Angle::degrees(90.0);
//! assert!((right.to_radians() - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
//!
//! let wrapped = Angle::degrees(370.0).normalized();
//! assert_eq!(wrapped.amount(), 10.0);
//! assert_eq!(wrapped.unit(), AngleUnit::Degrees);
//! ```

use crate::{Measure, MeasureUnit};
use core::f64::consts::TAU;
use phodeli_derive::Unit;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit of an [`Angle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Unit)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum AngleUnit {
    /// Degrees (`°`), 360 per turn.
    #[unit(symbol = "°")]
    Degrees,
    /// Radians (`rad`), τ per turn.
    #[unit(symbol = "rad")]
    Radians,
}

impl AngleUnit {
    /// One full turn expressed in this unit.
    #[inline]
    pub const fn full_turn(self) -> f64 {
        match self {
            Self::Degrees => 360.0,
            Self::Radians => TAU,
        }
    }

    /// `amount` (in this unit) converted to degrees.
    #[inline]
    pub fn to_degrees(self, amount: f64) -> f64 {
        AngleUnit::Degrees.convert(amount, self)
    }

    /// `amount` (in this unit) converted to radians.
    #[inline]
    pub fn to_radians(self, amount: f64) -> f64 {
        AngleUnit::Radians.convert(amount, self)
    }

    /// `amount` (in this unit) mapped into half a turn around zero.
    ///
    /// ```rust
    /// use phodeli_core::AngleUnit;
    ///
    /// assert_eq!(AngleUnit::Degrees.normalized(-190.0), 170.0);
    /// assert_eq!(AngleUnit::Degrees.normalized(720.0), 0.0);
    /// ```
    #[inline]
    pub fn normalized(self, amount: f64) -> f64 {
        libm::remainder(amount, self.full_turn())
    }
}

impl MeasureUnit for AngleUnit {
    #[inline]
    fn convert(self, source_amount: f64, source_unit: Self) -> f64 {
        match (source_unit, self) {
            (Self::Degrees, Self::Radians) => source_amount.to_radians(),
            (Self::Radians, Self::Degrees) => source_amount.to_degrees(),
            _ => source_amount,
        }
    }
}

/// An angle with its unit.
///
/// Equal angles have the same amount *and* unit: `Angle::degrees(180.0) != Angle::radians(PI)`. Ordering compares
/// the radian value first, so sorting mixed units orders by size.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Angle {
    amount: f64,
    unit: AngleUnit,
}

impl Angle {
    /// Creates an angle of `amount` in `unit`.
    #[inline]
    pub const fn angle(amount: f64, unit: AngleUnit) -> Self {
        Self { amount, unit }
    }

    /// Creates an angle in degrees.
    #[inline]
    pub const fn degrees(amount: f64) -> Self {
        Self::angle(amount, AngleUnit::Degrees)
    }

    /// Creates an angle in radians.
    #[inline]
    pub const fn radians(amount: f64) -> Self {
        Self::angle(amount, AngleUnit::Radians)
    }

    /// The amount in degrees.
    #[inline]
    pub fn to_degrees(&self) -> f64 {
        self.get(AngleUnit::Degrees)
    }

    /// The amount in radians.
    #[inline]
    pub fn to_radians(&self) -> f64 {
        self.get(AngleUnit::Radians)
    }

    /// The angle mapped into half a turn around zero, keeping its unit.
    pub fn normalized(&self) -> Self {
        Self::angle(self.unit.normalized(self.amount), self.unit)
    }
}

impl Measure for Angle {
    type Unit = AngleUnit;

    #[inline]
    fn of(amount: f64, unit: AngleUnit) -> Self {
        Self::angle(amount, unit)
    }

    #[inline]
    fn amount(&self) -> f64 {
        self.amount
    }

    #[inline]
    fn unit(&self) -> AngleUnit {
        self.unit
    }
}

crate::impl_measure!(Angle, AngleUnit::Radians);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MeasureError, Unit};
    use approx::assert_abs_diff_eq;
    use core::f64::consts::{FRAC_PI_2, PI};
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Unit table
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn symbols() {
        assert_eq!(AngleUnit::Degrees.symbol(), "°");
        assert_eq!(AngleUnit::Radians.symbol(), "rad");
        assert_eq!(AngleUnit::ALL, &[AngleUnit::Degrees, AngleUnit::Radians]);
    }

    #[test]
    fn symbol_postfix() {
        assert_eq!(AngleUnit::Degrees.symbol_postfix(), "°");
        assert_eq!(AngleUnit::Radians.symbol_postfix(), " rad");
    }

    #[test]
    fn parse_symbol_and_name() {
        assert_eq!("°".parse::<AngleUnit>(), Ok(AngleUnit::Degrees));
        assert_eq!("rad".parse::<AngleUnit>(), Ok(AngleUnit::Radians));
        assert_eq!("Degrees".parse::<AngleUnit>(), Ok(AngleUnit::Degrees));
        assert_eq!(" RADIANS ".parse::<AngleUnit>(), Ok(AngleUnit::Radians));
        assert_eq!(
            "gon".parse::<AngleUnit>(),
            Err(MeasureError::UnknownUnit("gon".into()))
        );
    }

    #[test]
    fn full_turn() {
        assert_eq!(AngleUnit::Degrees.full_turn(), 360.0);
        assert_abs_diff_eq!(AngleUnit::Radians.full_turn(), 2.0 * PI, epsilon = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn convert_degrees_to_radians() {
        assert_abs_diff_eq!(
            AngleUnit::Radians.convert(180.0, AngleUnit::Degrees),
            PI,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(AngleUnit::Degrees.to_radians(90.0), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn convert_radians_to_degrees() {
        assert_abs_diff_eq!(
            AngleUnit::Degrees.convert(PI, AngleUnit::Radians),
            180.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(AngleUnit::Radians.to_degrees(FRAC_PI_2), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn convert_same_unit_is_identity() {
        for &unit in AngleUnit::ALL {
            assert_eq!(unit.convert(1.23456789, unit), 1.23456789);
            assert!(unit.convert(f64::NAN, unit).is_nan());
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Normalization
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn normalize_degrees() {
        assert_eq!(AngleUnit::Degrees.normalized(370.0), 10.0);
        assert_eq!(AngleUnit::Degrees.normalized(-370.0), -10.0);
        assert_eq!(AngleUnit::Degrees.normalized(190.0), -170.0);
        assert_eq!(AngleUnit::Degrees.normalized(180.0), 180.0);
    }

    #[test]
    fn normalize_radians() {
        assert_abs_diff_eq!(AngleUnit::Radians.normalized(3.0 * PI / 2.0), -FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(AngleUnit::Radians.normalized(5.0 * PI).abs(), PI, epsilon = 1e-9);
    }

    #[test]
    fn normalize_non_finite() {
        assert!(AngleUnit::Degrees.normalized(f64::INFINITY).is_nan());
        assert!(AngleUnit::Radians.normalized(f64::NEG_INFINITY).is_nan());
        assert!(AngleUnit::Degrees.normalized(f64::NAN).is_nan());
    }

    #[test]
    fn normalized_angle_keeps_unit() {
        let a = Angle::radians(3.0 * PI).normalized();
        assert_eq!(a.unit(), AngleUnit::Radians);
        assert_abs_diff_eq!(a.amount().abs(), PI, epsilon = 1e-9);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Angle
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn constructors() {
        assert_eq!(Angle::degrees(1.0), Angle::angle(1.0, AngleUnit::Degrees));
        assert_eq!(Angle::radians(1.0), Angle::of(1.0, AngleUnit::Radians));
        assert_eq!(Angle::units(), AngleUnit::ALL);
    }

    #[test]
    fn transform() {
        let a = Angle::degrees(180.0).transform(AngleUnit::Radians);
        assert_eq!(a.unit(), AngleUnit::Radians);
        assert_abs_diff_eq!(a.amount(), PI, epsilon = 1e-12);

        let same = Angle::degrees(12.5);
        assert_eq!(same.transform(AngleUnit::Degrees), same);
    }

    #[test]
    fn equality_requires_same_unit() {
        assert_ne!(Angle::degrees(180.0), Angle::radians(PI));
        assert_eq!(Angle::degrees(f64::NAN), Angle::degrees(f64::NAN));
        assert_ne!(Angle::degrees(0.0), Angle::degrees(-0.0));
    }

    #[test]
    fn ordering_by_radian_value() {
        let mut angles = vec![
            Angle::degrees(90.0),
            Angle::radians(1.0),
            Angle::degrees(45.0),
            Angle::radians(-1.0),
        ];
        angles.sort();
        assert_eq!(
            angles,
            vec![
                Angle::radians(-1.0),
                Angle::degrees(45.0),
                Angle::radians(1.0),
                Angle::degrees(90.0),
            ]
        );
    }

    #[test]
    fn ordering_ties_broken_by_unit() {
        let deg = Angle::degrees(0.0);
        let rad = Angle::radians(0.0);
        assert!(deg < rad);
        assert_eq!(deg.cmp(&deg), core::cmp::Ordering::Equal);
    }

    #[test]
    fn display() {
        assert_eq!(Angle::radians(FRAC_PI_2).to_string(), "1.570796 rad");
        assert_eq!(Angle::degrees(90.123).to_string(), "90.123000°");
        assert_eq!(format!("{:.4}", Angle::degrees(1.23456789)), "1.2°");
        assert_eq!(format!("{:#}", Angle::radians(1.0)), "1.000000 RAD");
        assert_eq!(format!("{:<12}|", Angle::degrees(1.5)), "1.500000°   |");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let a = Angle::degrees(42.5);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#"{"amount":42.5,"unit":"degrees"}"#);
        let back: Angle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }

    proptest! {
        #[test]
        fn prop_roundtrip_conversion(x in -1e6..1e6f64) {
            let rad = AngleUnit::Radians.convert(x, AngleUnit::Degrees);
            let back = AngleUnit::Degrees.convert(rad, AngleUnit::Radians);
            prop_assert!((back - x).abs() <= 1e-9 * x.abs().max(1.0));
        }

        #[test]
        fn prop_normalized_degrees_in_range(x in -1e9..1e9f64) {
            let n = AngleUnit::Degrees.normalized(x);
            prop_assert!((-180.0..=180.0).contains(&n));
            prop_assert_eq!(AngleUnit::Degrees.normalized(n), n);
        }

        #[test]
        fn prop_normalized_radians_in_range(x in -1e6..1e6f64) {
            let n = AngleUnit::Radians.normalized(x);
            prop_assert!((-PI..=PI).contains(&n));
            prop_assert!((AngleUnit::Radians.normalized(n) - n).abs() <= 1e-12);
        }
    }
}
