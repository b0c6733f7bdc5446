//! The high-level runner, which drives a whole sequence of suites.
//!
//! Suites are independent: they share no mutable state, and each runs its own
//! cases sequentially.  With more than one job, whole [Shared] suites run side
//! by side on scoped threads, but reports always come back in declaration
//! order.  [Local] suites always run one after another.

use crate::{
    config,
    model::{RunReport, SuiteReport},
    suite::{self, Local, Mode, Shared, Suite},
};
use std::{
    num::NonZeroUsize,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};
use tracing::{debug, info};

pub mod err;

pub use err::{Error, Result};

/// Runs sequences of suites.
#[derive(Clone, Debug, Default)]
pub struct Runner {
    /// The rule for stopping between suites.
    pub halt: config::halt::Strategy,

    /// The maximum number of suites to run at once.
    ///
    /// This also sets how many suites are scheduled between halting checks.
    /// Only [Shared] suites actually run in parallel.
    pub jobs: Option<NonZeroUsize>,

    /// A flag that, once raised, stops any further suites being scheduled.
    pub interrupt: Option<Arc<AtomicBool>>,
}

impl Runner {
    /// Constructs a runner from a config.
    pub fn from_config(config: &config::Config) -> Self {
        Self {
            halt: config.halt,
            jobs: Some(config.jobs),
            interrupt: None,
        }
    }

    /// Constructs a halting callback, installs its flag into this runner, and
    /// returns the callback.  Calling it stops further suites being scheduled.
    pub fn on_callback(&mut self) -> impl FnMut() + Send + 'static {
        let signal = Arc::new(AtomicBool::new(false));
        self.interrupt = Some(signal.clone());
        move || signal.store(true, Ordering::Release)
    }

    /// Runs `suites` in order, producing a report over all of them.
    ///
    /// Every suite is validated before any case runs, so that a malformed
    /// declaration anywhere aborts the run up front.
    pub fn run<'a, M: Batch<'a>>(
        &self,
        suites: impl IntoIterator<Item = Suite<'a, M>>,
    ) -> Result<RunReport> {
        let suites: Vec<Suite<'a, M>> = suites.into_iter().collect();
        for s in &suites {
            s.validate()?;
        }

        let jobs = self.jobs.map_or(1, NonZeroUsize::get);
        info!(suites = suites.len(), jobs, "starting run");

        let mut report = RunReport::default();
        let mut pending = suites.into_iter().peekable();
        while pending.peek().is_some() {
            if self.is_interrupted() {
                debug!("interrupted; not scheduling further suites");
                report.halted = true;
                break;
            }
            let batch: Vec<Suite<'a, M>> = pending.by_ref().take(jobs).collect();
            let results = M::run_batch(batch)?;
            let halt = self.record(&mut report, results)?;
            if halt && pending.peek().is_some() {
                debug!(halt = %self.halt, "halting after failed suite");
                report.halted = true;
                break;
            }
        }
        Ok(report)
    }

    /// Records a batch of suite results, returning whether to halt.
    fn record(
        &self,
        report: &mut RunReport,
        results: Vec<suite::Result<SuiteReport>>,
    ) -> Result<bool> {
        let mut halt = false;
        for r in results {
            let r = r?;
            halt |= self.halt.should_halt(&r);
            report.suites.push(r);
        }
        Ok(halt)
    }

    fn is_interrupted(&self) -> bool {
        self.interrupt
            .as_ref()
            .map_or(false, |s| s.load(Ordering::Acquire))
    }
}

/// Trait of suite modes that know how to run a batch of suites.
pub trait Batch<'a>: Mode<'a> + Sized {
    /// Runs every suite in `batch`, returning results in order.
    fn run_batch(batch: Vec<Suite<'a, Self>>) -> Result<Vec<suite::Result<SuiteReport>>>;
}

/// Local suites run one after another on the calling thread.
impl<'a> Batch<'a> for Local {
    fn run_batch(batch: Vec<Suite<'a, Self>>) -> Result<Vec<suite::Result<SuiteReport>>> {
        Ok(batch.into_iter().map(Suite::run).collect())
    }
}

/// Shared suites run on scoped threads, one per suite.
impl<'a> Batch<'a> for Shared {
    fn run_batch(batch: Vec<Suite<'a, Self>>) -> Result<Vec<suite::Result<SuiteReport>>> {
        if batch.len() == 1 {
            return Ok(batch.into_iter().map(Suite::run).collect());
        }
        crossbeam::thread::scope(|s| -> Result<Vec<suite::Result<SuiteReport>>> {
            let handles = batch
                .into_iter()
                .map(|suite| {
                    s.builder()
                        .name(format!("suite:{}", suite.name()))
                        .spawn(move |_| suite.run())
                })
                .collect::<std::io::Result<Vec<_>>>()?;
            handles
                .into_iter()
                .map(|h| h.join().map_err(|_| Error::ThreadPanic))
                .collect()
        })
        .map_err(|_| Error::ThreadPanic)?
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{assert, config::halt, model::Status};

    fn factorial(n: u64) -> u64 {
        (1..=n).product()
    }

    fn count_primes(end: u32) -> u32 {
        let is_prime = |n: u32| n > 1 && (2..).take_while(|i| i * i <= n).all(|i| n % i != 0);
        (1..end).filter(|&n| is_prime(n)).count() as u32
    }

    fn passing(name: &str) -> Suite<'static, Shared> {
        Suite::shared(name).unwrap().case(|| assert::equals(1, 1))
    }

    fn failing(name: &str) -> Suite<'static, Shared> {
        Suite::shared(name).unwrap().case(|| assert::equals(1, 2))
    }

    fn names(r: &RunReport) -> Vec<&str> {
        r.suites.iter().map(SuiteReport::name).collect()
    }

    #[test]
    fn test_factorial_scenario() -> Result<()> {
        let s = Suite::new("Factorial")?
            .case(|| assert::greater_than(factorial(0), 0).labelled("0! > 0"))
            .case(|| assert::equals(factorial(1), 1).labelled("1! = 1"))
            .case(|| assert::equals(factorial(5), 120).labelled("5! = 120"));
        let r = Runner::default().run(vec![s])?;
        let f = &r.suites[0];
        assert_eq!(f.total(), 3);
        assert_eq!(f.passed_count(), 3);
        assert!(f.failures().is_empty());
        assert_eq!(r.exit_code(), 0);
        Ok(())
    }

    #[test]
    fn test_prime_counting_scenario() -> Result<()> {
        let s = Suite::new("Prime Counting")?
            .describe("Counting how many prime numbers are in ranges.")
            .case(|| assert::less_than_or_equals(count_primes(10000), 1229));
        let r = Runner::default().run(vec![s])?;
        assert!(r.suites[0].cases()[0].passed());
        Ok(())
    }

    #[test]
    fn test_failure_path_scenario() -> Result<()> {
        let s = Suite::new("Factorial")?.case(|| assert::equals(factorial(5), 119));
        let r = Runner::default().run(vec![s])?;
        let o = &r.suites[0].cases()[0];
        assert_eq!(o.status(), Status::Fail);
        assert!(o.message().contains("120"));
        assert!(o.message().contains("119"));
        assert_eq!(r.exit_code(), 1);
        Ok(())
    }

    #[test]
    /// A declaration error anywhere stops the run before any case runs.
    fn test_declaration_error_up_front() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = ran.clone();
        let first = Suite::new("First").unwrap().case(move || {
            flag.store(true, Ordering::SeqCst);
            assert::equals(1, 1)
        });
        let empty = Suite::new("Empty").unwrap();
        let r = Runner::default().run(vec![first, empty]);
        assert!(matches!(r, Err(Error::Declaration(suite::Error::NoCases(_)))));
        assert!(!ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_continue_runs_everything() -> Result<()> {
        let r = Runner::default().run(vec![failing("a"), passing("b"), failing("c")])?;
        assert_eq!(names(&r), vec!["a", "b", "c"]);
        assert!(!r.halted);
        assert_eq!(r.passed_suites(), 1);
        Ok(())
    }

    #[test]
    fn test_exit_on_fail_halts() -> Result<()> {
        let runner = Runner {
            halt: halt::Strategy::ExitOnFail,
            ..Runner::default()
        };
        let r = runner.run(vec![passing("a"), failing("b"), passing("c")])?;
        assert_eq!(names(&r), vec!["a", "b"]);
        assert!(r.halted);
        assert!(!r.passed());
        Ok(())
    }

    #[test]
    fn test_exit_on_fail_at_end_is_not_halt() -> Result<()> {
        let runner = Runner {
            halt: halt::Strategy::ExitOnFail,
            ..Runner::default()
        };
        let r = runner.run(vec![passing("a"), failing("b")])?;
        assert!(!r.halted);
        Ok(())
    }

    #[test]
    fn test_interrupt_stops_scheduling() -> Result<()> {
        let mut runner = Runner::default();
        let mut stop = runner.on_callback();
        stop();
        let r = runner.run(vec![passing("a"), passing("b")])?;
        assert!(r.suites.is_empty());
        assert!(r.halted);
        assert!(!r.passed());
        assert_eq!(r.exit_code(), crate::model::report::EXIT_FAIL);
        Ok(())
    }

    #[test]
    /// Parallel runs keep declaration order and per-suite case order.
    fn test_parallel_preserves_order() -> Result<()> {
        let runner = Runner {
            jobs: NonZeroUsize::new(3),
            ..Runner::default()
        };
        let suites: Vec<Suite<Shared>> = (0..7)
            .map(|i| {
                let name = format!("s{}", i);
                let suite = if i % 2 == 0 {
                    passing(&name)
                } else {
                    failing(&name)
                };
                suite.case(move || assert::less_than(i, 100))
            })
            .collect();
        let r = runner.run(suites)?;
        let want: Vec<String> = (0..7).map(|i| format!("s{}", i)).collect();
        assert_eq!(names(&r), want);
        for (i, s) in r.suites.iter().enumerate() {
            assert_eq!(s.total(), 2);
            assert_eq!(s.passed(), i % 2 == 0);
        }
        Ok(())
    }

    #[test]
    fn test_parallel_faults_contained() -> Result<()> {
        let runner = Runner {
            jobs: NonZeroUsize::new(2),
            ..Runner::default()
        };
        let faulty = Suite::shared("faulty")?.case(|| -> crate::model::Outcome { panic!("oops") });
        let r = runner.run(vec![faulty, passing("fine")])?;
        assert_eq!(r.suites[0].status(), Some(Status::Fault));
        assert!(r.suites[1].passed());
        Ok(())
    }

    #[test]
    /// Exit-on-fail is checked per batch, so the rest of a failing suite's
    /// batch still runs.
    fn test_exit_on_fail_halts_per_batch() -> Result<()> {
        let runner = Runner {
            halt: halt::Strategy::ExitOnFail,
            jobs: NonZeroUsize::new(2),
            ..Runner::default()
        };
        let r = runner.run(vec![failing("a"), passing("b"), passing("c")])?;
        assert_eq!(names(&r), vec!["a", "b"]);
        assert!(r.halted);
        Ok(())
    }

    #[test]
    /// Local suites may share non-`Send` fixtures, and run in order even with
    /// several jobs.
    fn test_local_suites_run_in_order() -> Result<()> {
        let log = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let suites: Vec<Suite> = (0..3)
            .map(|i| {
                let log = log.clone();
                Suite::new(format!("l{}", i))
                    .unwrap()
                    .case(move || {
                        log.borrow_mut().push(i);
                        assert::equals(i, i)
                    })
            })
            .collect();
        let runner = Runner {
            jobs: NonZeroUsize::new(2),
            ..Runner::default()
        };
        let r = runner.run(suites)?;
        assert_eq!(names(&r), vec!["l0", "l1", "l2"]);
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
        assert!(r.passed());
        Ok(())
    }

    #[test]
    fn test_from_config() {
        let c = config::Config {
            halt: halt::Strategy::ExitOnFail,
            jobs: NonZeroUsize::new(2).unwrap(),
        };
        let r = Runner::from_config(&c);
        assert_eq!(r.halt, halt::Strategy::ExitOnFail);
        assert_eq!(r.jobs, NonZeroUsize::new(2));
    }
}
