//! Relational predicates understood by the assertion engine.

use serde::{de::Visitor, Deserialize, Serialize};
use std::cmp::Ordering;

/// String representations of predicates.
pub mod string {
    /// String representation of the equality predicate.
    pub const EQUAL: &str = "equal";
    /// String representation of the inequality predicate.
    pub const NOT_EQUAL: &str = "not-equal";
    /// String representation of the less-than predicate.
    pub const LESS: &str = "less";
    /// String representation of the less-than-or-equal predicate.
    pub const LESS_EQUAL: &str = "less-equal";
    /// String representation of the greater-than predicate.
    pub const GREATER: &str = "greater";
    /// String representation of the greater-than-or-equal predicate.
    pub const GREATER_EQUAL: &str = "greater-equal";

    /// String representations of all predicates.
    pub const ALL: &[&str] = &[EQUAL, NOT_EQUAL, LESS, LESS_EQUAL, GREATER, GREATER_EQUAL];
}

/// Enumeration of relational predicates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// `actual == bound`.
    Equal,
    /// `actual != bound`.
    NotEqual,
    /// `actual < bound`.
    Less,
    /// `actual <= bound`.
    LessEqual,
    /// `actual > bound`.
    Greater,
    /// `actual >= bound`.
    GreaterEqual,
}

impl Predicate {
    /// Gets an iterator of all predicates.
    pub fn all() -> impl Iterator<Item = Self> {
        vec![
            Self::Equal,
            Self::NotEqual,
            Self::Less,
            Self::LessEqual,
            Self::Greater,
            Self::GreaterEqual,
        ]
        .into_iter()
    }

    /// Checks whether this predicate holds between `actual` and `bound`.
    ///
    /// Values with no defined ordering (such as NaN) satisfy only
    /// [Predicate::NotEqual].
    ///
    /// # Examples
    ///
    /// ```
    /// use reagent::assert::Predicate;
    /// assert!(Predicate::LessEqual.holds(&1229, &1229));
    /// assert!(!Predicate::Greater.holds(&0, &0));
    /// assert!(!Predicate::Equal.holds(&f64::NAN, &f64::NAN));
    /// assert!(Predicate::NotEqual.holds(&f64::NAN, &f64::NAN));
    /// ```
    pub fn holds<T: PartialOrd + ?Sized>(self, actual: &T, bound: &T) -> bool {
        self.holds_eq(actual, bound).unwrap_or_else(|| {
            actual
                .partial_cmp(bound)
                .map_or(false, |o| self.accepts(o))
        })
    }

    /// Checks an equality predicate using only `PartialEq`.
    ///
    /// Returns `None` for the ordering predicates, which need [Predicate::holds].
    ///
    /// # Examples
    ///
    /// ```
    /// use reagent::assert::Predicate;
    /// use std::collections::HashSet;
    /// let a: HashSet<i32> = [1, 2].iter().copied().collect();
    /// assert_eq!(Predicate::Equal.holds_eq(&a, &a), Some(true));
    /// assert_eq!(Predicate::Less.holds_eq(&a, &a), None);
    /// ```
    pub fn holds_eq<T: PartialEq + ?Sized>(self, actual: &T, bound: &T) -> Option<bool> {
        match self {
            Self::Equal => Some(actual == bound),
            Self::NotEqual => Some(actual != bound),
            _ => None,
        }
    }

    /// Gets whether this predicate only needs `PartialEq`.
    pub fn is_equality(self) -> bool {
        matches!(self, Self::Equal | Self::NotEqual)
    }

    fn accepts(self, o: Ordering) -> bool {
        match self {
            Self::Equal => o == Ordering::Equal,
            Self::NotEqual => o != Ordering::Equal,
            Self::Less => o == Ordering::Less,
            Self::LessEqual => o != Ordering::Greater,
            Self::Greater => o == Ordering::Greater,
            Self::GreaterEqual => o != Ordering::Less,
        }
    }

    /// Gets the verb phrase used when describing this predicate in messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use reagent::assert::Predicate;
    /// assert_eq!(Predicate::Equal.phrase(), "equal");
    /// assert_eq!(Predicate::LessEqual.phrase(), "be less than or equal to");
    /// ```
    pub fn phrase(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::NotEqual => "not equal",
            Self::Less => "be less than",
            Self::LessEqual => "be less than or equal to",
            Self::Greater => "be greater than",
            Self::GreaterEqual => "be greater than or equal to",
        }
    }
}

/// Tries to parse a [Predicate] from a string.
///
/// # Examples
///
/// ```
/// use reagent::assert::Predicate;
/// assert_eq!(str::parse::<Predicate>("equal"), Ok(Predicate::Equal));
/// assert_eq!(str::parse::<Predicate>("Less-Equal"), Ok(Predicate::LessEqual));
/// assert!(str::parse::<Predicate>("about").is_err());
/// ```
impl std::str::FromStr for Predicate {
    /// Errors just take ownership of the invalid string.
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_lowercase();
        match &*s {
            string::EQUAL => Ok(Self::Equal),
            string::NOT_EQUAL => Ok(Self::NotEqual),
            string::LESS => Ok(Self::Less),
            string::LESS_EQUAL => Ok(Self::LessEqual),
            string::GREATER => Ok(Self::Greater),
            string::GREATER_EQUAL => Ok(Self::GreaterEqual),
            _ => Err(s),
        }
    }
}

/// Formats a [Predicate] by applying the inverse of [FromStr].
impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Equal => string::EQUAL,
            Self::NotEqual => string::NOT_EQUAL,
            Self::Less => string::LESS,
            Self::LessEqual => string::LESS_EQUAL,
            Self::Greater => string::GREATER,
            Self::GreaterEqual => string::GREATER_EQUAL,
        };
        write!(f, "{}", s)
    }
}

/// Serialize by stringification.
impl Serialize for Predicate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Deserialize by parsing.
impl<'de> Deserialize<'de> for Predicate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(PredicateVisitor)
    }
}

struct PredicateVisitor;

impl<'de> Visitor<'de> for PredicateVisitor {
    type Value = Predicate;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "one of: {}", string::ALL.join(", "))
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
        v.parse()
            .map_err(|s| E::custom(format!("unknown predicate: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that the ALL constant reflects the result of getting strings for
    /// each predicate in turn.
    #[test]
    fn test_all_strings_in_sync() {
        let got_set: std::collections::HashSet<String> =
            string::ALL.iter().map(|x| x.to_string()).collect();
        let want_set: std::collections::HashSet<String> =
            Predicate::all().map(|x| x.to_string()).collect();
        assert_eq!(got_set, want_set)
    }

    /// Each predicate agrees with the corresponding Rust operator on a small
    /// grid of integers.
    #[test]
    fn test_holds_matches_operators() {
        for a in -2..=2 {
            for b in -2..=2 {
                assert_eq!(Predicate::Equal.holds(&a, &b), a == b);
                assert_eq!(Predicate::NotEqual.holds(&a, &b), a != b);
                assert_eq!(Predicate::Less.holds(&a, &b), a < b);
                assert_eq!(Predicate::LessEqual.holds(&a, &b), a <= b);
                assert_eq!(Predicate::Greater.holds(&a, &b), a > b);
                assert_eq!(Predicate::GreaterEqual.holds(&a, &b), a >= b);
            }
        }
    }

    #[test]
    fn test_unordered_values_fail_orderings() {
        for p in [Predicate::Less, Predicate::LessEqual, Predicate::Greater, Predicate::GreaterEqual].iter() {
            assert!(!p.holds(&f64::NAN, &1.0));
        }
    }

    #[test]
    fn test_equality_split() {
        for p in Predicate::all() {
            assert_eq!(p.holds_eq(&1, &1).is_some(), p.is_equality());
        }
    }

    #[test]
    fn test_holds_on_unsized() {
        assert!(Predicate::Less.holds("apple", "banana"));
    }
}
