//! Errors that can occur during configuration.
use thiserror::Error;

/// A configuration error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The user supplied the given string, which was a bad halt strategy.
    #[error("unsupported halting strategy: {0}")]
    BadHaltStrategy(String),

    /// The user supplied a bad job count.
    #[error("couldn't parse job count: {0}")]
    BadJobCount(std::num::ParseIntError),

    /// The user asked for zero jobs.
    #[error("job count must be at least 1")]
    ZeroJobs,

    /// We couldn't deserialise the config from TOML.
    #[error("couldn't parse config: {0}")]
    Deserialize(#[from] toml::de::Error),

    /// We couldn't serialise the config to TOML.
    #[error("couldn't dump config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Results over [Error].
pub type Result<T> = std::result::Result<T, Error>;
