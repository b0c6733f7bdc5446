//! Deferred test cases.

use crate::model::Outcome;
use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

/// Trait of deferred test cases.
///
/// A case is consumed when it runs, so it can run at most once.  Cases need
/// not be `Send`; only suites declared with
/// [Suite::shared](super::Suite::shared) ask for that, so that they can run
/// side by side.
pub trait Case {
    /// Runs the case, producing its outcome.
    fn run(self: Box<Self>) -> Outcome;
}

/// Closures returning anything convertible to an [Outcome] are cases.
///
/// # Examples
///
/// ```
/// use reagent::{assert, suite::Case};
/// let case: Box<dyn Case> = Box::new(|| assert::equals(1, 1));
/// assert!(case.run().passed());
/// ```
impl<F, R> Case for F
where
    F: FnOnce() -> R,
    R: Into<Outcome>,
{
    fn run(self: Box<Self>) -> Outcome {
        (*self)().into()
    }
}

/// Runs `case`, turning any panic inside it into a faulted outcome.
///
/// The outcome keeps only the panic message.  The process panic hook still
/// runs first, so the default hook reports the message and source location on
/// stderr as usual; install a quieter hook with [std::panic::set_hook] to
/// suppress that.
pub(crate) fn run_guarded<C: Case + ?Sized>(case: Box<C>) -> Outcome {
    panic::catch_unwind(AssertUnwindSafe(move || case.run()))
        .unwrap_or_else(|payload| Outcome::fault(panic_message(payload.as_ref())))
}

/// Tries to recover a readable message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "panic with non-string payload"
    }
}
