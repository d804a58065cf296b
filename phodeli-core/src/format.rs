//! Bounded-width measure formatting.
//!
//! [`format_measure`] renders an amount followed by its unit symbol inside an optional character budget
//! (`precision`) and pads it to an optional minimum `width`:
//!
//! ```rust
//! use phodeli_core::format::{format_measure, FormatFlags, FormatSpec};
//! use phodeli_core::locale::ROOT;
//!
//! let spec = FormatSpec::new().with_precision(4);
//! assert_eq!(format_measure(1.23456789, "°", &ROOT, &spec), "1.2°");
//!
//! let spec = FormatSpec::new().with_width(12).with_flags(FormatFlags::LEFT_JUSTIFY);
//! assert_eq!(format_measure(1.5, " rad", &ROOT, &spec), "1.500000 rad");
//! ```
//!
//! The precision is a budget for the *whole* rendering, not a number of fraction digits. The number of fraction
//! digits is whatever is left once the integer part, a decimal separator, a possible sign and the symbol are
//! accounted for. When not even zero fraction digits fit, the integer part and symbol are cut down to the budget.

use crate::decimal;
use crate::locale::{self, Locale};
use crate::measure::Measure;
use crate::unit::MeasureUnit;
use std::fmt::{self, Alignment, Display, Formatter};

/// Fraction digits rendered when no precision budget is given.
pub const DEFAULT_FRACTION_DIGITS: usize = 6;

const DECIMAL_SEPARATOR_LENGTH: usize = 1;
const MINUS_SIGN_LENGTH: usize = 1;

bitflags::bitflags! {
    /// Flags of a format request.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FormatFlags: u8 {
        /// Upper-case the unit symbol with the case rules of the formatting locale.
        const UPPERCASE = 1 << 0;
        /// Pad on the right instead of the left.
        const LEFT_JUSTIFY = 1 << 1;
    }
}

/// Flags, minimum width and precision budget of a format request.
///
/// `None` means unconstrained: no padding for `width`, the default six fraction digits for `precision`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormatSpec {
    /// Symbol casing and justification.
    pub flags: FormatFlags,
    /// Minimum output length in characters.
    pub width: Option<usize>,
    /// Maximum output length in characters.
    pub precision: Option<usize>,
}

impl FormatSpec {
    /// An unconstrained request.
    pub const fn new() -> Self {
        Self {
            flags: FormatFlags::empty(),
            width: None,
            precision: None,
        }
    }

    /// Sets the minimum width.
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the precision budget.
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Replaces the flags.
    pub const fn with_flags(mut self, flags: FormatFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Reads a request from `{}` formatting parameters.
    ///
    /// `{:15}` sets the width and `{:.4}` the precision. `{:<15}` left-justifies and `{:#}` upper-cases the symbol.
    /// Fill characters other than space and the `^` alignment are not supported and fall back to right-justified
    /// space padding.
    pub fn from_formatter(f: &Formatter<'_>) -> Self {
        let mut flags = FormatFlags::empty();
        flags.set(FormatFlags::LEFT_JUSTIFY, f.align() == Some(Alignment::Left));
        flags.set(FormatFlags::UPPERCASE, f.alternate());
        Self {
            flags,
            width: f.width(),
            precision: f.precision(),
        }
    }
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders `amount` followed by `symbol` under the width and precision constraints of `spec`.
///
/// `symbol` is appended verbatim, so it already carries any separating space (see
/// [`MeasureUnit::symbol_postfix`]). Lengths count `char`s. Never fails: NaN and infinities render with the locale's
/// special-value symbols and are measured like any other rendering.
pub fn format_measure(amount: f64, symbol: &str, locale: &Locale, spec: &FormatSpec) -> String {
    let amount_prefix = decimal::fixed(amount, 0, locale);
    let symbol = if spec.flags.contains(FormatFlags::UPPERCASE) {
        locale::to_uppercase(symbol, locale)
    } else {
        symbol.to_owned()
    };

    // The prefix already contains a minus sign for negative amounts; it is reserved a second time.
    let minus_sign_length = if amount > 0.0 { 0 } else { MINUS_SIGN_LENGTH };
    let minimum_length = symbol.chars().count()
        + amount_prefix.chars().count()
        + DECIMAL_SEPARATOR_LENGTH
        + minus_sign_length;

    let core = match spec.precision {
        None => decimal::fixed(amount, DEFAULT_FRACTION_DIGITS, locale) + &symbol,
        Some(precision) if minimum_length >= precision => {
            let whole = amount_prefix + &symbol;
            log::trace!(
                "precision {precision} below minimum length {minimum_length}, truncating {whole:?}"
            );
            truncate_chars(whole, precision)
        }
        Some(precision) => decimal::fixed(amount, precision - minimum_length, locale) + &symbol,
    };

    match spec.width {
        None => core,
        Some(width) => pad(core, width, spec.flags.contains(FormatFlags::LEFT_JUSTIFY)),
    }
}

fn truncate_chars(mut s: String, max_chars: usize) -> String {
    if let Some((index, _)) = s.char_indices().nth(max_chars) {
        s.truncate(index);
    }
    s
}

fn pad(core: String, width: usize, left_justify: bool) -> String {
    let length = core.chars().count();
    if length >= width {
        return core;
    }
    let padding = " ".repeat(width - length);
    if left_justify {
        core + &padding
    } else {
        padding + &core
    }
}

/// [`Display`] adapter rendering a measure with an explicit locale.
///
/// Created by [`Measure::localized`]. Honors the same `{}` parameters as the measure's own `Display` impl.
#[derive(Clone, Copy, Debug)]
pub struct Localized<'a, M> {
    measure: &'a M,
    locale: &'a Locale,
}

impl<'a, M: Measure> Localized<'a, M> {
    pub(crate) fn new(measure: &'a M, locale: &'a Locale) -> Self {
        Self { measure, locale }
    }
}

impl<M: Measure> Display for Localized<'_, M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let spec = FormatSpec::from_formatter(f);
        f.write_str(&format_measure(
            self.measure.amount(),
            &self.measure.unit().symbol_postfix(),
            self.locale,
            &spec,
        ))
    }
}
