//! The [SuiteReport] and [RunReport] types.

use super::outcome::{Outcome, Status};
use serde::{Deserialize, Serialize};
use std::vec::Vec;

/// A final report of the outcomes coming from one suite.
///
/// Reports are built up through [SuiteReport::insert], which keeps the
/// aggregate counts in step with the recorded outcomes; the fields are then
/// only readable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// Outcomes of every case, in declaration order.
    cases: Vec<Outcome>,
    passed: usize,
    /// Outcomes of the non-passing cases, in declaration order.
    failures: Vec<Failure>,
}

/// A non-passing case together with its position in its suite.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// Zero-based index of the case in declaration order.
    pub index: usize,
    /// The outcome the case produced.
    pub outcome: Outcome,
}

impl SuiteReport {
    /// Starts an empty report for the named suite.
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
            cases: Vec::new(),
            passed: 0,
            failures: Vec::new(),
        }
    }

    /// Records the outcome of the next case, updating aggregates accordingly.
    ///
    /// # Examples
    ///
    /// ```
    /// use reagent::model::{Outcome, SuiteReport};
    /// let mut r = SuiteReport::new("s", None);
    /// r.insert(Outcome::pass("a"));
    /// r.insert(Outcome::fail("b"));
    /// assert_eq!(r.total(), 2);
    /// assert_eq!(r.passed_count(), 1);
    /// assert_eq!(r.failures()[0].index, 1);
    /// ```
    pub fn insert(&mut self, outcome: Outcome) {
        let index = self.cases.len();
        if outcome.passed() {
            self.passed += 1;
        } else {
            self.failures.push(Failure {
                index,
                outcome: outcome.clone(),
            });
        }
        self.cases.push(outcome);
    }

    /// Gets the suite name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the suite description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Gets every case outcome in declaration order.
    pub fn cases(&self) -> &[Outcome] {
        &self.cases
    }

    /// Gets the number of cases run.
    pub fn total(&self) -> usize {
        self.cases.len()
    }

    /// Gets the number of passing cases.
    pub fn passed_count(&self) -> usize {
        self.passed
    }

    /// Gets the non-passing cases, in declaration order.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Gets the aggregate status of the suite (`None` if it has no cases).
    pub fn status(&self) -> Option<Status> {
        self.cases.iter().map(Outcome::status).max()
    }

    /// Gets whether every case in the suite passed.
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A final report over every suite in one run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Reports for each suite that ran, in declaration order.
    pub suites: Vec<SuiteReport>,

    /// Whether the run stopped before every declared suite ran.
    pub halted: bool,
}

/// Exit code for a run where every suite passed.
pub const EXIT_PASS: i32 = 0;
/// Exit code for a run with at least one non-passing suite, or one that
/// halted before running every suite.
pub const EXIT_FAIL: i32 = 1;

impl RunReport {
    /// Gets the aggregate status over every suite (`None` if no cases ran).
    pub fn status(&self) -> Option<Status> {
        self.suites.iter().filter_map(SuiteReport::status).max()
    }

    /// Gets whether the whole run passed: every declared suite ran, and every
    /// one of them fully passed.
    ///
    /// A halted run never passes, since the suites it skipped were never
    /// checked.
    pub fn passed(&self) -> bool {
        !self.halted && self.suites.iter().all(SuiteReport::passed)
    }

    /// Gets the number of suites that fully passed.
    pub fn passed_suites(&self) -> usize {
        self.suites.iter().filter(|s| s.passed()).count()
    }

    /// Derives a process exit code from this report.
    ///
    /// # Examples
    ///
    /// ```
    /// use reagent::model::{Outcome, RunReport, SuiteReport};
    /// let mut s = SuiteReport::new("s", None);
    /// s.insert(Outcome::pass("ok"));
    /// let mut r = RunReport { suites: vec![s.clone()], halted: false };
    /// assert_eq!(r.exit_code(), 0);
    /// s.insert(Outcome::fail("no"));
    /// r.suites.push(s);
    /// assert_eq!(r.exit_code(), 1);
    /// ```
    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            EXIT_PASS
        } else {
            EXIT_FAIL
        }
    }
}
