//! Errors that can occur when declaring suites.
use thiserror::Error;

/// A malformed suite declaration.
///
/// These are mistakes by the test author, and are reported before any case
/// of the offending suite runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The suite was given an empty (or blank) name.
    #[error("suite name must not be empty")]
    EmptyName,

    /// The suite was run without declaring any cases.
    #[error("suite '{0}' declares no cases")]
    NoCases(String),
}

/// Results over [Error].
pub type Result<T> = std::result::Result<T, Error>;
