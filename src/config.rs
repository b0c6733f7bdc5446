//! Top-level configuration for the runner.
//!
//! Suites can be run without pulling in this configuration layer, but it
//! provides a convenient substrate for handling the configuration.

pub mod clap;
pub mod err;
pub mod halt;
pub mod top;

pub use err::{Error, Result};
pub use top::Config;
