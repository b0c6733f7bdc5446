//! Outcomes of assertions and test cases.

use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// The status of an outcome.
///
/// Statuses are ordered such that `max` on an iterator of statuses will return
/// the correct aggregate status (`None` if the statuses are empty, `Fault` if
/// any case faulted, `Pass` if all are passes, and `Fail` otherwise).
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// The check held.
    Pass,
    /// The check did not hold.
    Fail,
    /// The case computation itself broke down before producing a result.
    Fault,
}

/// String representations for statuses.
pub mod string {
    /// String representation for pass statuses.
    pub const PASS: &str = "pass";
    /// String representation for fail statuses.
    pub const FAIL: &str = "fail";
    /// String representation for fault statuses.
    pub const FAULT: &str = "fault";
}

/// Prefix attached to the messages of faulted outcomes.
pub const FAULT_PREFIX: &str = "execution fault";

/// We can produce a string representation of the status.
///
/// # Examples
///
/// ```
/// use reagent::model::Status;
/// assert_eq!(Status::Pass.to_string(), "pass");
/// assert_eq!(Status::Fail.to_string(), "fail");
/// assert_eq!(Status::Fault.to_string(), "fault");
/// ```
impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Pass => string::PASS,
                Self::Fail => string::FAIL,
                Self::Fault => string::FAULT,
            }
        )
    }
}

/// We can parse a string representation of a status.  Parsing is (relatively)
/// case insensitive.
///
/// # Examples
///
/// ```
/// use reagent::model::Status;
/// assert_eq!(str::parse::<Status>("pass"), Ok(Status::Pass));
/// assert_eq!(str::parse::<Status>("Fail"), Ok(Status::Fail));
/// assert_eq!(str::parse::<Status>("FAULT"), Ok(Status::Fault));
/// ```
impl FromStr for Status {
    /// Errors just take ownership of the invalid string.
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lc = s.to_lowercase();
        match &*lc {
            string::PASS => Ok(Self::Pass),
            string::FAIL => Ok(Self::Fail),
            string::FAULT => Ok(Self::Fault),
            _ => Err(lc),
        }
    }
}

impl Status {
    /// Gets an iterator of each [Status].
    pub fn all() -> impl Iterator<Item = Self> {
        vec![Self::Pass, Self::Fail, Self::Fault].into_iter()
    }

    /// Converts a pass/fail Boolean to a [Status].
    ///
    /// # Examples
    ///
    /// ```
    /// use reagent::model::Status;
    /// assert_eq!(Status::from_pass_bool(true), Status::Pass);
    /// assert_eq!(Status::from_pass_bool(false), Status::Fail);
    /// ```
    #[must_use]
    pub fn from_pass_bool(is_pass: bool) -> Self {
        if is_pass {
            Self::Pass
        } else {
            Self::Fail
        }
    }
}

/// The result of one assertion, or of one whole test case.
///
/// Outcomes are plain values: they can be cloned and moved freely, and are
/// never changed once built (the builder-style methods consume and return).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    status: Status,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl Outcome {
    /// Constructs an outcome with the given status and message.
    ///
    /// An empty message is replaced with the status name, so that the message
    /// is never empty.
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            status.to_string()
        } else {
            message
        };
        Self {
            status,
            message,
            label: None,
        }
    }

    /// Constructs a passing outcome.
    pub fn pass(message: impl Into<String>) -> Self {
        Self::new(Status::Pass, message)
    }

    /// Constructs a failing outcome.
    pub fn fail(message: impl Into<String>) -> Self {
        Self::new(Status::Fail, message)
    }

    /// Constructs a faulted outcome, prefixing the detail so that the message
    /// identifies it as an execution fault.
    ///
    /// # Examples
    ///
    /// ```
    /// use reagent::model::{Outcome, Status};
    /// let o = Outcome::fault("attempt to divide by zero");
    /// assert_eq!(o.status(), Status::Fault);
    /// assert_eq!(o.message(), "execution fault: attempt to divide by zero");
    /// ```
    pub fn fault(detail: impl Display) -> Self {
        Self::new(Status::Fault, format!("{}: {}", FAULT_PREFIX, detail))
    }

    /// Attaches a short caller-supplied label to this outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use reagent::assert;
    /// let o = assert::equals(1, 1).labelled("1! = 1");
    /// assert_eq!(o.label(), Some("1! = 1"));
    /// assert_eq!(o.message(), "expected 1 to equal 1");
    /// ```
    #[must_use]
    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Combines this outcome with one from a later assertion in the same
    /// case.  The first outcome that did not pass wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use reagent::assert;
    /// let o = assert::equals(2, 2).and(assert::less_than(3, 1)).and(assert::equals(0, 1));
    /// assert!(!o.passed());
    /// assert_eq!(o.message(), "expected 3 to be less than 1");
    /// ```
    #[must_use]
    pub fn and(self, next: Outcome) -> Self {
        if self.passed() {
            next
        } else {
            self
        }
    }

    /// Gets the status of this outcome.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Gets whether this outcome is a pass.
    pub fn passed(&self) -> bool {
        self.status == Status::Pass
    }

    /// Gets the human-readable message of this outcome.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Gets the label of this outcome, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Booleans are the least informative outcomes.
impl From<bool> for Outcome {
    fn from(is_pass: bool) -> Self {
        let status = Status::from_pass_bool(is_pass);
        Self::new(status, format!("expected true, got {}", is_pass))
    }
}

/// Case bodies that bail out with an error have faulted.
///
/// # Examples
///
/// ```
/// use reagent::model::{Outcome, Status};
/// let r: Result<Outcome, std::num::ParseIntError> = "x".parse::<i32>().map(|_| Outcome::pass("ok"));
/// let o = Outcome::from(r);
/// assert_eq!(o.status(), Status::Fault);
/// ```
impl<E: Display> From<Result<Outcome, E>> for Outcome {
    fn from(r: Result<Outcome, E>) -> Self {
        r.unwrap_or_else(Self::fault)
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.label {
            Some(l) => write!(f, "{} [{}]: {}", self.status, l, self.message),
            None => write!(f, "{}: {}", self.status, self.message),
        }
    }
}
