//! Built-in measures.
//!
//! ## Modules
//!
//! - [`angle`]: [`AngleUnit`](angle::AngleUnit) and [`Angle`](angle::Angle), with normalization into half a turn.
//! - [`length`]: [`LengthUnit`](length::LengthUnit) and [`Length`](length::Length), with metres as base unit.

pub mod angle;
pub mod length;
