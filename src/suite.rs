//! Suites: named, ordered groups of test cases.
//!
//! A [Suite] is declared, run once, and turned into a
//! [SuiteReport](crate::model::SuiteReport).  Running consumes both the suite
//! and each of its cases, so neither can be run twice.
//!
//! # Examples
//!
//! ```
//! use reagent::{assert, suite::Suite};
//!
//! let report = Suite::new("Arithmetic")?
//!     .case(|| assert::equals(2 + 2, 4))
//!     .case(|| assert::greater_than(1, 2))
//!     .run()?;
//!
//! assert_eq!(report.total(), 2);
//! assert_eq!(report.passed_count(), 1);
//! assert_eq!(report.failures()[0].index, 1);
//! # Ok::<(), reagent::suite::Error>(())
//! ```

use crate::model::{Outcome, SuiteReport};
use tracing::{debug, info_span, warn};

pub mod case;
pub mod err;
pub mod mode;
pub mod observe;

pub use case::Case;
pub use err::{Error, Result};
pub use mode::{Local, Mode, Shared};
pub use observe::Observer;

/// A declared, not yet run, suite.
///
/// The mode `M` says whether the suite's cases must be `Send`.  [Local]
/// suites, made with [Suite::new], accept any case; [Shared] suites, made
/// with [Suite::shared], accept only `Send` cases but can run in parallel.
pub struct Suite<'a, M: Mode<'a> = Local> {
    name: String,
    description: Option<String>,
    cases: Vec<Box<M::Dyn>>,
}

impl<'a> Suite<'a, Local> {
    /// Declares a new suite with the given name and no cases.
    ///
    /// Fails if the name is empty or entirely whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::declare(name.into())
    }

    /// Appends a case to this suite.
    #[must_use]
    pub fn case(mut self, case: impl Case + 'a) -> Self {
        self.cases.push(Box::new(case));
        self
    }
}

impl<'a> Suite<'a, Shared> {
    /// Declares a new suite, able to run on another thread, with the given
    /// name and no cases.
    ///
    /// Fails if the name is empty or entirely whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use reagent::{assert, suite::Suite};
    /// let s = Suite::shared("Threaded")?.case(|| assert::equals(1, 1));
    /// std::thread::spawn(move || s.run()).join().unwrap()?;
    /// # Ok::<(), reagent::suite::Error>(())
    /// ```
    pub fn shared(name: impl Into<String>) -> Result<Self> {
        Self::declare(name.into())
    }

    /// Appends a case to this suite.
    #[must_use]
    pub fn case(mut self, case: impl Case + Send + 'a) -> Self {
        self.cases.push(Box::new(case));
        self
    }
}

impl<'a, M: Mode<'a>> Suite<'a, M> {
    fn declare(name: String) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(Error::EmptyName);
        }
        Ok(Self {
            name,
            description: None,
            cases: Vec::new(),
        })
    }

    /// Attaches a description to this suite.
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends an already-boxed case to this suite.
    #[must_use]
    pub fn boxed_case(mut self, case: Box<M::Dyn>) -> Self {
        self.cases.push(case);
        self
    }

    /// Gets the name of this suite.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the number of cases declared so far.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Gets whether this suite has no cases.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Checks that this suite is fit to run.
    pub fn validate(&self) -> Result<()> {
        if self.cases.is_empty() {
            Err(Error::NoCases(self.name.clone()))
        } else {
            Ok(())
        }
    }

    /// Runs every case in order, producing a report.
    pub fn run(self) -> Result<SuiteReport> {
        self.run_observed(&mut ())
    }

    /// Runs every case in order, telling `observer` about progress.
    ///
    /// Every case runs exactly once regardless of how earlier cases went;
    /// panics inside cases become faulted outcomes.  The only error is a
    /// malformed declaration, reported before any case runs.
    ///
    /// A faulted outcome carries the panic message but not its location.
    /// The process panic hook is left alone, so the default hook still
    /// prints each caught panic, with its location, to stderr.
    pub fn run_observed(self, observer: &mut dyn Observer) -> Result<SuiteReport> {
        self.validate()?;

        let span = info_span!("suite", name = %self.name);
        let _enter = span.enter();

        observer.on_suite_start(&self.name, self.cases.len());
        let mut report = SuiteReport::new(self.name, self.description);
        for (index, case) in self.cases.into_iter().enumerate() {
            let outcome = case::run_guarded(case);
            log_outcome(index, &outcome);
            observer.on_case(index, &outcome);
            report.insert(outcome);
        }
        debug!(
            total = report.total(),
            passed = report.passed_count(),
            "suite finished"
        );
        observer.on_suite_end(&report);
        Ok(report)
    }
}

fn log_outcome(index: usize, outcome: &Outcome) {
    use crate::model::Status;
    match outcome.status() {
        Status::Fault => warn!(index, message = outcome.message(), "case faulted"),
        status => debug!(index, %status, message = outcome.message(), "case recorded"),
    }
}

/// Declares a [Local] suite from a name, an optional description, and a list
/// of cases, evaluating to a `Result<Suite>`.
///
/// # Examples
///
/// ```
/// use reagent::{assert, suite};
///
/// let s = suite!("Small", || assert::equals(1, 1), || assert::less_than(1, 2))?;
/// assert_eq!(s.len(), 2);
///
/// let s = suite!("Described", description = "with words"; || assert::equals(1, 1))?;
/// assert_eq!(s.run()?.description(), Some("with words"));
/// # Ok::<(), reagent::suite::Error>(())
/// ```
#[macro_export]
macro_rules! suite {
    ($name:expr, description = $desc:expr; $($case:expr),+ $(,)?) => {
        $crate::suite::Suite::new($name).map(|s| s.describe($desc)$(.case($case))+)
    };
    ($name:expr, $($case:expr),+ $(,)?) => {
        $crate::suite::Suite::new($name).map(|s| s$(.case($case))+)
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{assert, model::Status};
    use std::{
        cell::RefCell,
        rc::Rc,
        sync::{Arc, Mutex},
    };

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(Suite::new("").err(), Some(Error::EmptyName));
        assert_eq!(Suite::new("  \t").err(), Some(Error::EmptyName));
    }

    #[test]
    fn test_no_cases_rejected() -> Result<()> {
        let s = Suite::new("Empty")?;
        assert_eq!(s.run().err(), Some(Error::NoCases("Empty".to_owned())));
        Ok(())
    }

    #[test]
    /// One failure among two passes is counted and located.
    fn test_one_fail_two_pass() -> Result<()> {
        let r = Suite::new("Mixed")?
            .case(|| assert::equals(1, 1))
            .case(|| assert::equals(1, 2))
            .case(|| assert::equals(2, 2))
            .run()?;
        assert_eq!(r.total(), 3);
        assert_eq!(r.passed_count(), 2);
        assert_eq!(r.failures().len(), 1);
        assert_eq!(r.failures()[0].index, 1);
        assert_eq!(r.failures()[0].outcome.message(), "expected 1 to equal 2");
        Ok(())
    }

    #[test]
    /// Cases run exactly once each, in declaration order, whatever happens.
    fn test_order_and_no_short_circuit() -> Result<()> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mk = |i: usize, pass: bool| {
            let log = log.clone();
            move || {
                log.lock().unwrap().push(i);
                Outcome::from(pass)
            }
        };
        let r = Suite::new("Ordered")?
            .case(mk(0, false))
            .case(mk(1, true))
            .case(mk(2, false))
            .run()?;
        assert_eq!(*log.lock().unwrap(), vec![0, 1, 2]);
        let statuses: Vec<Status> = r.cases().iter().map(Outcome::status).collect();
        assert_eq!(statuses, vec![Status::Fail, Status::Pass, Status::Fail]);
        Ok(())
    }

    #[test]
    /// A faulting case is recorded as a fault and later cases still run.
    fn test_fault_does_not_abort() -> Result<()> {
        let v: Vec<i32> = vec![1, 2, 3];
        let r = Suite::new("Faulty")?
            .case(move || assert::equals(v[std::hint::black_box(10_usize)], 0))
            .case(|| assert::equals(1, 2))
            .case(|| assert::equals(3, 3))
            .run()?;
        assert_eq!(r.total(), 3);
        assert_eq!(r.passed_count(), 1);
        assert_eq!(r.cases()[0].status(), Status::Fault);
        assert_eq!(r.cases()[1].status(), Status::Fail);
        assert!(r.cases()[0].message().starts_with("execution fault"));
        assert!(!r.cases()[1].message().starts_with("execution fault"));
        Ok(())
    }

    #[test]
    fn test_borrowed_fixture() -> Result<()> {
        let fixture = vec![3, 1, 2];
        let r = Suite::new("Borrowing")?
            .case(|| assert::equals(fixture.len(), 3))
            .case(|| assert::greater_than(fixture[0], fixture[1]))
            .run()?;
        assert!(r.passed());
        Ok(())
    }

    #[test]
    /// Local suites take cases sharing a single-threaded fixture.
    fn test_non_send_fixture() -> Result<()> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mk = |i: i32| {
            let seen = Rc::clone(&seen);
            move || {
                seen.borrow_mut().push(i);
                let n = seen.borrow().len();
                assert::equals(n, i as usize)
            }
        };
        let r = Suite::new("Single-threaded")?
            .case(mk(1))
            .case(mk(2))
            .case(mk(3))
            .run()?;
        assert!(r.passed());
        assert_eq!(*seen.borrow(), vec![1, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_shared_suite_runs_elsewhere() -> Result<()> {
        let s = Suite::shared("Moved")?
            .describe("runs on another thread")
            .case(|| assert::equals(1, 1))
            .case(|| assert::not_equals(1, 1));
        let r = std::thread::spawn(move || s.run())
            .join()
            .expect("suite thread panicked")?;
        assert_eq!(r.passed_count(), 1);
        assert_eq!(r.description(), Some("runs on another thread"));
        assert_eq!(Suite::shared(" ").err(), Some(Error::EmptyName));
        Ok(())
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Observer for Recorder {
        fn on_suite_start(&mut self, name: &str, cases: usize) {
            self.events.push(format!("start {} {}", name, cases));
        }

        fn on_case(&mut self, index: usize, outcome: &Outcome) {
            self.events.push(format!("case {} {}", index, outcome.status()));
        }

        fn on_suite_end(&mut self, report: &SuiteReport) {
            self.events
                .push(format!("end {}/{}", report.passed_count(), report.total()));
        }
    }

    #[test]
    fn test_observer_sees_progress() -> Result<()> {
        let mut rec = Recorder::default();
        Suite::new("Watched")?
            .case(|| assert::equals(1, 1))
            .case(|| assert::equals(1, 0))
            .run_observed(&mut rec)?;
        assert_eq!(
            rec.events,
            vec!["start Watched 2", "case 0 pass", "case 1 fail", "end 1/2"]
        );
        Ok(())
    }

    #[test]
    fn test_observer_silent_on_declaration_error() -> Result<()> {
        let mut rec = Recorder::default();
        assert!(Suite::new("Nothing")?.run_observed(&mut rec).is_err());
        assert!(rec.events.is_empty());
        Ok(())
    }

    #[test]
    fn test_macro_forms() -> Result<()> {
        let r = suite!("Plain", || assert::equals(1, 1),)?.run()?;
        assert_eq!(r.description(), None);
        assert!(suite!("", || assert::equals(1, 1)).is_err());
        Ok(())
    }
}
