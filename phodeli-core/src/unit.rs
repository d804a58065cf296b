//! Unit traits.

use crate::decimal;
use crate::error::MeasureError;
use crate::locale::Locale;
use std::borrow::Cow;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

/// Trait implemented by every **unit** enum.
///
/// Implementations are generated by `#[derive(Unit)]`: a fieldless enum whose variants each carry a
/// `#[unit(symbol = "...")]` attribute.
///
/// * `ALL` lists the variants in declaration order.
/// * `symbol` is the printable suffix (e.g. `"mm"` or `"°"`), also written by [`Display`].
/// * `name` is the long name accepted by [`FromStr`] (case-insensitive).
///
/// # Invariants
///
/// - Symbols are non-empty and unique within one unit enum.
/// - The derived `Ord` follows declaration order.
pub trait Unit:
    Copy + Eq + Ord + Hash + Debug + Display + FromStr<Err = MeasureError> + 'static
{
    /// Every unit of this kind, in declaration order.
    const ALL: &'static [Self];

    /// Printable symbol.
    fn symbol(self) -> &'static str;

    /// Long name.
    fn name(self) -> &'static str;
}

/// A unit that measures amounts and converts them between its variants.
pub trait MeasureUnit: Unit {
    /// Converts `source_amount`, given in `source_unit`, into this unit.
    ///
    /// Returns `source_amount` unchanged when `source_unit == self`.
    fn convert(self, source_amount: f64, source_unit: Self) -> f64;

    /// Symbol as appended after a rendered amount.
    ///
    /// Word-like symbols get a separating space (`" rad"`, `" mm"`), others attach directly (`"°"`, `"\""`).
    fn symbol_postfix(self) -> Cow<'static, str> {
        let symbol = self.symbol();
        match symbol.chars().next() {
            Some(c) if c.is_alphanumeric() || c == '_' => Cow::Owned(format!(" {symbol}")),
            _ => Cow::Borrowed(symbol),
        }
    }

    /// Renders `amount` with up to five fraction digits and digit grouping, followed by the symbol.
    ///
    /// ```rust
    /// use phodeli_core::{locale::ROOT, LengthUnit, MeasureUnit};
    ///
    /// assert_eq!(LengthUnit::Meters.format_amount(1234.5, &ROOT), "1,234.5 m");
    /// assert_eq!(LengthUnit::Inches.format_amount(2.0, &ROOT), "2\"");
    /// ```
    fn format_amount(self, amount: f64, locale: &Locale) -> String {
        let symbol = self.symbol();
        // Unlike `symbol_postfix`, `_` does not count as a word character here.
        let separator = match symbol.chars().next() {
            Some(c) if c.is_alphanumeric() => " ",
            _ => "",
        };
        format!("{}{separator}{symbol}", decimal::grouped(amount, locale))
    }
}
