//! Support for configuring when a run stops scheduling further suites.

use super::err;
use crate::model::SuiteReport;
use serde::{de::Visitor, Deserialize, Serialize};

/// String representations of halting strategies.
pub mod string {
    /// String representation of the continue strategy.
    pub const CONTINUE: &str = "continue";
    /// String representation of the exit-on-fail strategy.
    pub const EXIT_ON_FAIL: &str = "exit-on-fail";
    /// String representations of all halting strategies.
    pub const ALL: &[&str] = &[CONTINUE, EXIT_ON_FAIL];
}

/// Enumeration of halting strategies.
///
/// Halting only ever happens between suites; a suite that has started always
/// runs every one of its cases.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Strategy {
    /// Every declared suite runs.
    Continue,
    /// No further suites are scheduled once one suite has not fully passed.
    ///
    /// With more than one job, suites are scheduled a batch at a time and
    /// this is checked after each batch, so the other suites in the failing
    /// suite's batch still run.
    ExitOnFail,
}

/// The default strategy is to run everything.
impl Default for Strategy {
    fn default() -> Self {
        Self::Continue
    }
}

/// Tries to parse a [Strategy] from a string.
///
/// # Examples
///
/// ```
/// use reagent::config::halt::Strategy;
/// assert_eq!(str::parse::<Strategy>("continue"), Ok(Strategy::Continue));
/// assert_eq!(str::parse::<Strategy>("Exit-On-Fail"), Ok(Strategy::ExitOnFail));
/// assert!(str::parse::<Strategy>("never").is_err());
/// ```
impl std::str::FromStr for Strategy {
    type Err = err::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_lowercase();
        match &*s {
            string::CONTINUE => Ok(Self::Continue),
            string::EXIT_ON_FAIL => Ok(Self::ExitOnFail),
            _ => Err(Self::Err::BadHaltStrategy(s)),
        }
    }
}

/// Formats a [Strategy] by applying the inverse of [FromStr].
impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Continue => write!(f, "{}", string::CONTINUE),
            Self::ExitOnFail => write!(f, "{}", string::EXIT_ON_FAIL),
        }
    }
}

/// Serialize by stringification.
impl Serialize for Strategy {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Deserialize by parsing.
impl<'de> Deserialize<'de> for Strategy {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(StrategyVisitor)
    }
}

struct StrategyVisitor;

impl<'de> Visitor<'de> for StrategyVisitor {
    type Value = Strategy;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "one of: {}", string::ALL.join(", "))
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }
}

impl Strategy {
    /// Gets an iterator of all available strategies.
    pub fn all() -> impl Iterator<Item = Self> {
        vec![Self::Continue, Self::ExitOnFail].into_iter()
    }

    /// Gets whether, under this strategy, the run should stop after seeing
    /// `report`.
    ///
    /// # Examples
    ///
    /// ```
    /// use reagent::{config::halt::Strategy, model::{Outcome, SuiteReport}};
    /// let mut r = SuiteReport::new("s", None);
    /// r.insert(Outcome::fail("nope"));
    /// assert!(Strategy::ExitOnFail.should_halt(&r));
    /// assert!(!Strategy::Continue.should_halt(&r));
    /// ```
    pub fn should_halt(&self, report: &SuiteReport) -> bool {
        match self {
            Self::Continue => false,
            Self::ExitOnFail => !report.passed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that the ALL constant reflects the result of getting strings for
    /// each strategy in turn.
    #[test]
    fn test_all_strings_in_sync() {
        let got_set: std::collections::HashSet<String> =
            string::ALL.iter().map(|x| x.to_string()).collect();
        let want_set: std::collections::HashSet<String> =
            Strategy::all().map(|x| Strategy::to_string(&x)).collect();
        assert_eq!(got_set, want_set)
    }

    #[test]
    fn test_passing_report_never_halts() {
        let mut r = SuiteReport::new("s", None);
        r.insert(crate::model::Outcome::pass("ok"));
        for s in Strategy::all() {
            assert!(!s.should_halt(&r));
        }
    }
}
