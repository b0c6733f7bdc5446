//! Hooks for watching suites as they run.

use crate::model::{Outcome, SuiteReport};

/// Trait of things that want to hear about suite progress as it happens.
///
/// All methods default to doing nothing.
pub trait Observer {
    /// Called once a suite has been validated, before its first case runs.
    fn on_suite_start(&mut self, _name: &str, _cases: usize) {}

    /// Called after each case has been recorded.
    fn on_case(&mut self, _index: usize, _outcome: &Outcome) {}

    /// Called with the finalized report of a suite.
    fn on_suite_end(&mut self, _report: &SuiteReport) {}
}

/// The unit observer ignores everything.
impl Observer for () {}
