//! The [`Measure`] trait shared by [`Angle`](crate::Angle) and [`Length`](crate::Length).

use crate::format::{self, FormatSpec, Localized};
use crate::locale::Locale;
use crate::unit::{MeasureUnit, Unit};

/// An amount paired with the unit it is expressed in.
///
/// Implementors only provide construction and the two accessors; conversion and formatting are derived from the
/// unit.
pub trait Measure: Copy {
    /// Kind of unit this measure is expressed in.
    type Unit: MeasureUnit;

    /// Creates a measure of `amount` in `unit`.
    fn of(amount: f64, unit: Self::Unit) -> Self;

    /// Amount in [`Measure::unit`].
    fn amount(&self) -> f64;

    /// Unit of [`Measure::amount`].
    fn unit(&self) -> Self::Unit;

    /// Every unit this measure can be expressed in.
    fn units() -> &'static [Self::Unit] {
        <Self::Unit as Unit>::ALL
    }

    /// Amount converted to `unit`.
    #[inline]
    fn get(&self, unit: Self::Unit) -> f64 {
        unit.convert(self.amount(), self.unit())
    }

    /// The same measure expressed in `unit`.
    fn transform(&self, unit: Self::Unit) -> Self {
        if unit == self.unit() {
            *self
        } else {
            Self::of(self.get(unit), unit)
        }
    }

    /// Renders the measure under the constraints of `spec`.
    fn format_with(&self, locale: &Locale, spec: &FormatSpec) -> String {
        format::format_measure(
            self.amount(),
            &self.unit().symbol_postfix(),
            locale,
            spec,
        )
    }

    /// Renders the measure with six fraction digits.
    fn format(&self, locale: &Locale) -> String {
        self.format_with(locale, &FormatSpec::new())
    }

    /// A [`Display`](std::fmt::Display) adapter that renders with `locale`.
    fn localized<'a>(&'a self, locale: &'a Locale) -> Localized<'a, Self> {
        Localized::new(self, locale)
    }
}
