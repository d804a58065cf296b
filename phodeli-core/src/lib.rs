//! Core types for typed physical measures.
//!
//! `phodeli-core` provides measure value objects with unit conversion and locale-aware formatting:
//!
//! - A *unit* is a fieldless enum implementing [`Unit`] and [`MeasureUnit`] ([`AngleUnit`], [`LengthUnit`]).
//! - A *measure* pairs an `f64` amount with a unit and implements [`Measure`] ([`Angle`], [`Length`]).
//! - [`format::format_measure`] renders an amount and symbol inside a character budget and pads it to a width.
//!
//! Most users should depend on `phodeli` (the facade crate).
//!
//! # Quick start
//!
//! ```rust
//! use phodeli_core::{Angle, AngleUnit, Length, LengthUnit, Measure, MeasureUnit};
//! use phodeli_core::locale::{Locale, ROOT};
//!
//! let a = Angle::degrees(180.0);
//! assert!((a.get(AngleUnit::Radians) - core::f64::consts::PI).abs() < 1e-12);
//!
//! let l = Length::km(1.5).transform(LengthUnit::Meters);
//! assert_eq!(l.amount(), 1500.0);
//!
//! assert_eq!(Angle::radians(core::f64::consts::FRAC_PI_2).to_string(), "1.570796 rad");
//! assert_eq!(format!("{:.4}", Angle::degrees(1.23456789)), "1.2°");
//! assert_eq!(Length::m(0.5).format(&Locale::de), "0,500000 m");
//! assert_eq!(LengthUnit::Meters.format_amount(1234.5, &ROOT), "1,234.5 m");
//! ```
//!
//! # Formatting parameters
//!
//! `Display` for measures understands the standard `{}` parameters:
//!
//! - `{:15}` pads to at least 15 characters, right-justified; `{:<15}` left-justifies.
//! - `{:.4}` limits the whole rendering (amount, separator, sign and symbol) to 4 characters, shrinking the number of
//!   fraction digits first and cutting the integer part and symbol last.
//! - `{:#}` upper-cases the unit symbol.
//!
//! Without a precision six fraction digits are rendered. `Display` always uses [`locale::ROOT`]; use
//! [`Measure::localized`] or [`Measure::format`] for another locale.
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for units (lower-case names) and measures (`{ amount, unit }`).
//! - `config` (default): [`FormatConfig`], formatting defaults read from TOML.
//!
//! # Panics and errors
//!
//! Conversion and formatting are total and do not panic; they follow IEEE-754 for NaN and infinities. Parsing unit
//! names, resolving locales and loading configuration return [`MeasureResult`].
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod error;
mod macros;
mod measure;
mod unit;

pub mod decimal;
pub mod format;
pub mod locale;

#[cfg(feature = "config")]
mod config;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use error::{MeasureError, MeasureResult};
pub use format::{FormatFlags, FormatSpec, Localized};
pub use measure::Measure;
pub use unit::{MeasureUnit, Unit};

#[cfg(feature = "config")]
pub use config::FormatConfig;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined measures
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined units and measures.
///
/// These are defined in `phodeli-core` because the `Unit` derive expands against this crate's root.
pub mod units;

pub use units::angle;
pub use units::length;

pub use units::angle::{Angle, AngleUnit};
pub use units::length::{Length, LengthUnit};
