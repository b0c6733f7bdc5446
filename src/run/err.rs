//! Errors that can occur while running suites.
use crate::suite;
use thiserror::Error;

/// A run error.
///
/// Failing and faulting cases are not errors; they end up in the report.
#[derive(Debug, Error)]
pub enum Error {
    /// One of the suites was malformed.
    #[error("bad suite declaration")]
    Declaration(#[from] suite::Error),

    /// We couldn't spawn a thread to run a suite on.
    #[error("couldn't spawn suite thread")]
    Spawn(#[from] std::io::Error),

    /// A suite thread panicked outside of any case.
    #[error("suite thread panicked")]
    ThreadPanic,
}

/// Results over [Error].
pub type Result<T> = std::result::Result<T, Error>;
