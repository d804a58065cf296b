//! Locale-aware decimal rendering of `f64` amounts.
//!
//! Digits are taken from the shortest decimal representation that round-trips to the same `f64` (Rust's `{:e}`
//! output), not from the exact binary expansion. Asking for more fraction digits than that representation carries
//! pads with zeros, so `1.23456789` rendered with 17 fraction digits is `1.23456789000000000`.
//!
//! Two renderings are provided:
//!
//! - [`fixed`]: a fixed number of fraction digits, rounded half-up, no grouping, ASCII `-` (printf `%.Nf`).
//! - [`grouped`]: the `#,##0.#####` pattern: grouped integer part, at most five fraction digits rounded
//!   half-even, trailing zeros dropped, the locale's minus sign.

use num_format::{Grouping, Locale};

/// Minus sign written by [`fixed`] in every locale.
const ASCII_MINUS: &str = "-";

/// Upper bound of fraction digits printed by [`grouped`].
pub const MAX_GROUPED_FRACTION_DIGITS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rounding {
    HalfUp,
    HalfEven,
}

/// Magnitude of a finite `f64` as `0.d₁d₂d₃… × 10^point`.
///
/// `digits` has no leading or trailing zeros; zero is the empty digit list.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Digits {
    digits: Vec<u8>,
    point: i32,
}

impl Digits {
    fn from_f64(value: f64) -> Self {
        let repr = format!("{:e}", value.abs());
        let (mantissa, exponent) = repr.split_once('e').unwrap_or((repr.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);

        let mut digits: Vec<u8> = mantissa
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();
        while digits.last() == Some(&0) {
            digits.pop();
        }

        if digits.is_empty() {
            return Self::zero();
        }
        Self {
            digits,
            point: exponent + 1,
        }
    }

    fn zero() -> Self {
        Self {
            digits: Vec::new(),
            point: 0,
        }
    }

    /// Drops every digit after `fraction_digits` places behind the decimal point.
    fn round(&mut self, fraction_digits: usize, rounding: Rounding) {
        let keep = i64::from(self.point) + fraction_digits as i64;
        if keep >= self.digits.len() as i64 {
            return;
        }
        if keep < 0 {
            *self = Self::zero();
            return;
        }

        let keep = keep as usize;
        let first_dropped = self.digits[keep];
        let round_up = match rounding {
            Rounding::HalfUp => first_dropped >= 5,
            Rounding::HalfEven => {
                first_dropped > 5
                    || (first_dropped == 5
                        && (self.digits[keep + 1..].iter().any(|&d| d != 0)
                            || (keep > 0 && self.digits[keep - 1] % 2 == 1)))
            }
        };

        self.digits.truncate(keep);
        if round_up {
            self.increment();
        }
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.point = 0;
        }
    }

    /// Adds one unit in the last kept place, carrying into a new leading digit if needed.
    fn increment(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                return;
            }
        }
        self.digits.insert(0, 1);
        self.point += 1;
    }

    fn digit_at(&self, index: i64) -> char {
        if index < 0 {
            return '0';
        }
        self.digits
            .get(index as usize)
            .map_or('0', |&d| char::from(b'0' + d))
    }

    fn integer_part(&self) -> String {
        if self.point <= 0 {
            return "0".to_owned();
        }
        (0..i64::from(self.point)).map(|i| self.digit_at(i)).collect()
    }

    fn push_fraction(&self, out: &mut String, fraction_digits: usize) {
        let start = i64::from(self.point);
        out.extend((0..fraction_digits as i64).map(|i| self.digit_at(start + i)));
    }

    /// Number of significant digits behind the decimal point.
    fn fraction_len(&self) -> usize {
        (self.digits.len() as i64 - i64::from(self.point)).max(0) as usize
    }
}

fn non_finite(amount: f64, minus_sign: &str, locale: &Locale) -> Option<String> {
    if amount.is_nan() {
        return Some(locale.nan().to_owned());
    }
    if amount.is_infinite() {
        let mut out = String::new();
        if amount < 0.0 {
            out.push_str(minus_sign);
        }
        out.push_str(locale.infinity());
        return Some(out);
    }
    None
}

/// Renders `amount` with exactly `fraction_digits` digits behind the locale's decimal separator.
///
/// Rounds half-up on the magnitude. The sign follows the sign bit, so `-0.0` and negative amounts that round to
/// zero keep their minus sign. The sign is always an ASCII `-`, whatever the locale's minus sign.
pub fn fixed(amount: f64, fraction_digits: usize, locale: &Locale) -> String {
    if let Some(special) = non_finite(amount, ASCII_MINUS, locale) {
        return special;
    }

    let mut digits = Digits::from_f64(amount);
    digits.round(fraction_digits, Rounding::HalfUp);

    let mut out = String::new();
    if amount.is_sign_negative() {
        out.push_str(ASCII_MINUS);
    }
    out.push_str(&digits.integer_part());
    if fraction_digits > 0 {
        out.push_str(locale.decimal());
        digits.push_fraction(&mut out, fraction_digits);
    }
    out
}

/// Renders `amount` with the `#,##0.#####` pattern.
pub fn grouped(amount: f64, locale: &Locale) -> String {
    if let Some(special) = non_finite(amount, locale.minus_sign(), locale) {
        return special;
    }

    let mut digits = Digits::from_f64(amount);
    digits.round(MAX_GROUPED_FRACTION_DIGITS, Rounding::HalfEven);

    let mut out = String::new();
    if amount.is_sign_negative() {
        out.push_str(locale.minus_sign());
    }
    out.push_str(&group(
        &digits.integer_part(),
        locale.separator(),
        locale.grouping(),
    ));
    let fraction_len = digits.fraction_len();
    if fraction_len > 0 {
        out.push_str(locale.decimal());
        digits.push_fraction(&mut out, fraction_len);
    }
    out
}

/// Inserts `separator` between digit groups of an ASCII integer string.
fn group(integer: &str, separator: &str, grouping: Grouping) -> String {
    let (first, rest) = match grouping {
        Grouping::Posix => return integer.to_owned(),
        Grouping::Indian => (3, 2),
        _ => (3, 3),
    };
    if separator.is_empty() || integer.len() <= first {
        return integer.to_owned();
    }

    let mut groups = Vec::new();
    let mut end = integer.len();
    let mut size = first;
    while end > size {
        groups.push(&integer[end - size..end]);
        end -= size;
        size = rest;
    }
    groups.push(&integer[..end]);
    groups.reverse();
    groups.join(separator)
}
