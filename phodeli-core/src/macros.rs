//! Macros for implementing the common measure traits.

/// Implements equality, hashing, ordering and `Display` for a measure struct.
///
/// The struct must have an `amount: f64` and a `unit` field and implement [`Measure`](crate::Measure). `$base` is
/// the unit amounts are compared in.
///
/// - `Eq`/`Hash` compare the `(amount, unit)` pair, amounts by their bits (IEEE total order equality).
/// - `Ord` compares the amounts converted to `$base` with [`f64::total_cmp`], then the unit, then the raw amount.
/// - `Display` renders with [`ROOT`](crate::locale::ROOT) and honors width, precision, `<` and `#`.
#[macro_export]
macro_rules! impl_measure {
    ($measure:ty, $base:expr) => {
        impl ::core::cmp::PartialEq for $measure {
            fn eq(&self, other: &Self) -> bool {
                self.unit == other.unit && self.amount.total_cmp(&other.amount).is_eq()
            }
        }

        impl ::core::cmp::Eq for $measure {}

        impl ::core::hash::Hash for $measure {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&self.amount.to_bits(), state);
                ::core::hash::Hash::hash(&self.unit, state);
            }
        }

        impl ::core::cmp::PartialOrd for $measure {
            fn partial_cmp(&self, other: &Self) -> Option<::core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl ::core::cmp::Ord for $measure {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                let base = $base;
                let lhs = $crate::Measure::get(self, base);
                let rhs = $crate::Measure::get(other, base);
                lhs.total_cmp(&rhs)
                    .then_with(|| self.unit.cmp(&other.unit))
                    .then_with(|| self.amount.total_cmp(&other.amount))
            }
        }

        impl ::core::fmt::Display for $measure {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&$crate::Measure::localized(self, &$crate::locale::ROOT), f)
            }
        }
    };
}
