//! Typed angle and length measures with unit conversion and locale-aware formatting.
//!
//! `phodeli` is the user-facing crate in this workspace. It re-exports the full API from `phodeli-core`.
//!
//! A measure pairs an `f64` amount with the unit it is expressed in. Units are closed enums ([`AngleUnit`],
//! [`LengthUnit`]); conversion goes through [`MeasureUnit::convert`] or the helpers on each measure.
//!
//! # What this crate solves
//!
//! - Keeps the unit next to the amount so conversions are explicit (`length.get(LengthUnit::Miles)`).
//! - Renders measures inside a fixed character budget, e.g. for tabular or fixed-width displays.
//! - Uses the number symbols of a given locale (decimal separator, grouping, minus sign).
//!
//! # What this crate does not try to solve
//!
//! - Unit systems beyond angle and length.
//! - Exact arithmetic: amounts are `f64`.
//! - Locale handling beyond number symbols.
//!
//! # Quick start
//!
//! ```rust
//! use phodeli::{Angle, AngleUnit, Length, Measure};
//!
//! let a = Angle::degrees(180.0);
//! assert!((a.get(AngleUnit::Radians) - core::f64::consts::PI).abs() < 1e-12);
//!
//! let run = Length::km(10.0);
//! assert!((run.to_miles() - 6.2137).abs() < 1e-4);
//! ```
//!
//! Format inside a character budget:
//!
//! ```rust
//! use phodeli::{Angle, Measure};
//! use phodeli::locale::Locale;
//!
//! let a = Angle::degrees(1.23456789);
//! assert_eq!(a.to_string(), "1.234568°");
//! assert_eq!(format!("{:.4}", a), "1.2°");
//! assert_eq!(format!("{:>8.4}", a), "    1.2°");
//! assert_eq!(format!("{:.6}", a.localized(&Locale::de)), "1,235°");
//! ```
//!
//! # Modules
//!
//! - `phodeli::angle` (degrees, radians, normalization)
//! - `phodeli::length` (millimetres to miles, precision ordering)
//! - `phodeli::format` (the bounded-width formatter and its flags)
//! - `phodeli::decimal` (locale-aware fixed and grouped decimal rendering)
//! - `phodeli::locale` (locale resolution)
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for units and measures.
//! - `config` (default): `FormatConfig`, formatting defaults read from TOML.
//!
//! # Panics and errors
//!
//! Conversions and formatting are total. Parsing unit names, resolving locales and loading configuration return
//! [`MeasureResult`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![forbid(unsafe_code)]

pub use phodeli_core::*;
