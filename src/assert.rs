//! The assertion engine.
//!
//! Each assertion compares two values of the same type under a [Predicate]
//! and produces an [Outcome].  A predicate that does not hold is not an error:
//! it is a perfectly normal [Outcome] whose status is
//! [Status::Fail](crate::model::Status::Fail).  Comparing values of different
//! types is rejected by the type checker.
//!
//! # Examples
//!
//! ```
//! use reagent::assert;
//! let o = assert::equals(120, 119);
//! assert!(!o.passed());
//! assert_eq!(o.message(), "expected 120 to equal 119");
//! ```

use crate::model::{Outcome, Status};
use std::fmt::Debug;

pub mod predicate;

pub use predicate::Predicate;

/// Checks `predicate` between `actual` and `bound`, producing an outcome
/// whose message names the predicate and both operands.
pub fn compare<T: PartialOrd + Debug + ?Sized>(predicate: Predicate, actual: &T, bound: &T) -> Outcome {
    outcome(predicate, predicate.holds(actual, bound), actual, bound)
}

/// Checks an equality predicate between `actual` and `bound`, needing only
/// `PartialEq`.  Returns `None` if `predicate` is an ordering.
///
/// # Examples
///
/// ```
/// use reagent::assert::{compare_eq, Predicate};
/// #[derive(Debug, PartialEq)]
/// enum Colour { Red, Blue }
/// let o = compare_eq(Predicate::NotEqual, &Colour::Red, &Colour::Blue).unwrap();
/// assert!(o.passed());
/// assert!(compare_eq(Predicate::Less, &Colour::Red, &Colour::Blue).is_none());
/// ```
pub fn compare_eq<T: PartialEq + Debug + ?Sized>(
    predicate: Predicate,
    actual: &T,
    bound: &T,
) -> Option<Outcome> {
    predicate
        .holds_eq(actual, bound)
        .map(|held| outcome(predicate, held, actual, bound))
}

fn outcome<T: Debug + ?Sized>(predicate: Predicate, held: bool, actual: &T, bound: &T) -> Outcome {
    Outcome::new(Status::from_pass_bool(held), message(predicate, actual, bound))
}

/// As [compare], but attaching `label` to the outcome if one is given.
///
/// # Examples
///
/// ```
/// use reagent::assert::{compare_labelled, Predicate};
/// let o = compare_labelled(Predicate::Greater, &1, &0, Some("0! > 0"));
/// assert!(o.passed());
/// assert_eq!(o.label(), Some("0! > 0"));
/// ```
pub fn compare_labelled<T: PartialOrd + Debug + ?Sized>(
    predicate: Predicate,
    actual: &T,
    bound: &T,
    label: Option<&str>,
) -> Outcome {
    let outcome = compare(predicate, actual, bound);
    match label {
        Some(l) => outcome.labelled(l),
        None => outcome,
    }
}

fn message<T: Debug + ?Sized>(predicate: Predicate, actual: &T, bound: &T) -> String {
    format!("expected {:?} to {} {:?}", actual, predicate.phrase(), bound)
}

/// Passes iff `actual == expected` under the type's own equality.
pub fn equals<T: PartialEq + Debug>(actual: T, expected: T) -> Outcome {
    outcome(Predicate::Equal, actual == expected, &actual, &expected)
}

/// Passes iff `actual != expected`.
pub fn not_equals<T: PartialEq + Debug>(actual: T, expected: T) -> Outcome {
    outcome(Predicate::NotEqual, actual != expected, &actual, &expected)
}

/// Passes iff `actual < bound`.
pub fn less_than<T: PartialOrd + Debug>(actual: T, bound: T) -> Outcome {
    compare(Predicate::Less, &actual, &bound)
}

/// Passes iff `actual <= bound`.
///
/// # Examples
///
/// ```
/// use reagent::assert;
/// assert!(assert::less_than_or_equals(1229, 1229).passed());
/// assert!(!assert::less_than_or_equals(1230, 1229).passed());
/// ```
pub fn less_than_or_equals<T: PartialOrd + Debug>(actual: T, bound: T) -> Outcome {
    compare(Predicate::LessEqual, &actual, &bound)
}

/// Passes iff `actual > bound`.
pub fn greater_than<T: PartialOrd + Debug>(actual: T, bound: T) -> Outcome {
    compare(Predicate::Greater, &actual, &bound)
}

/// Passes iff `actual >= bound`.
pub fn greater_than_or_equals<T: PartialOrd + Debug>(actual: T, bound: T) -> Outcome {
    compare(Predicate::GreaterEqual, &actual, &bound)
}
