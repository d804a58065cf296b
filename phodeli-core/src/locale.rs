//! Locale resolution.
//!
//! Number symbols (decimal separator, grouping separator and style, minus sign, infinity, NaN) come from
//! [`num_format::Locale`]. Every formatting entry point takes the locale explicitly; there is no process-wide
//! default.

use crate::error::{MeasureError, MeasureResult};

pub use num_format::Locale;

/// Locale-neutral formatting: `.` as decimal separator, `,` for grouping.
pub const ROOT: Locale = Locale::en;

/// Resolves a locale by its name (e.g. `"de"`, `"fr-CA"`).
///
/// An empty name and `"root"` (any case) resolve to [`ROOT`].
pub fn resolve(name: &str) -> MeasureResult<Locale> {
    let name = name.trim();
    if name.is_empty() || name.eq_ignore_ascii_case("root") {
        return Ok(ROOT);
    }
    Locale::from_name(name).map_err(|_| MeasureError::UnknownLocale(name.to_owned()))
}

/// Upper-cases `text` with the case rules of `locale`.
///
/// Turkish and Azerbaijani map `i` to `İ` (U+0130). Every other locale uses the default Unicode mapping.
pub fn to_uppercase(text: &str, locale: &Locale) -> String {
    if !has_dotted_capital_i(locale) {
        return text.to_uppercase();
    }
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == 'i' {
            out.push('\u{130}');
        } else {
            out.extend(c.to_uppercase());
        }
    }
    out
}

fn has_dotted_capital_i(locale: &Locale) -> bool {
    let language = locale.name().split('-').next().unwrap_or_default();
    matches!(language, "tr" | "az")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_aliases() {
        assert_eq!(resolve("").unwrap(), ROOT);
        assert_eq!(resolve("ROOT").unwrap(), ROOT);
    }

    #[test]
    fn resolves_known_locale() {
        let german = resolve("de").unwrap();
        assert_eq!(german, Locale::de);
        assert_eq!(german.decimal(), ",");
    }

    #[test]
    fn rejects_unknown_locale() {
        assert_eq!(
            resolve("no-such-locale"),
            Err(MeasureError::UnknownLocale("no-such-locale".into()))
        );
    }

    #[test]
    fn uppercase_default_rules() {
        assert_eq!(to_uppercase(" mi", &ROOT), " MI");
        assert_eq!(to_uppercase(" mi", &Locale::de), " MI");
        assert_eq!(to_uppercase("straße", &ROOT), "STRASSE");
    }

    #[test]
    fn uppercase_turkic_dotted_i() {
        assert_eq!(to_uppercase(" mi", &Locale::tr), " M\u{130}");
        assert_eq!(to_uppercase("rad", &Locale::tr), "RAD");
        assert_eq!(to_uppercase("\u{131}i", &Locale::tr), "I\u{130}");
    }
}
