//! `clap` integration for config.

use std::{num::NonZeroUsize, str::FromStr};

use super::{err, halt, top};

pub mod arg {
    /// Name of the `halt` argument.
    pub const HALT: &str = "halt";
    /// Name of the `jobs` argument.
    pub const JOBS: &str = "jobs";
}

/// Trait for things that can be updated from command line arguments taken from
/// `clap`.
pub trait Clappable<'a>: Sized {
    /// Merges configuration from a clap match dictionary into this, potentially
    /// replacing it entirely.
    fn parse_clap(self, matches: &'a clap::ArgMatches) -> err::Result<Self>;
}

/// We can fill a top-level config using clap.
impl<'a> Clappable<'a> for top::Config {
    fn parse_clap(self, matches: &'a clap::ArgMatches) -> err::Result<Self> {
        Ok(Self {
            halt: self.halt.parse_clap(matches)?,
            jobs: parse_jobs(matches.value_of(arg::JOBS), self.jobs)?,
        })
    }
}

/// We can fill a halting strategy using clap.
impl<'a> Clappable<'a> for halt::Strategy {
    fn parse_clap(self, matches: &'a clap::ArgMatches) -> err::Result<Self> {
        parse_or(matches.value_of(arg::HALT), self)
    }
}

fn parse_jobs(jobs_str: Option<&str>, default: NonZeroUsize) -> err::Result<NonZeroUsize> {
    let jobs: usize = parse_or(jobs_str, default.get()).map_err(err::Error::BadJobCount)?;
    NonZeroUsize::new(jobs).ok_or(err::Error::ZeroJobs)
}

fn parse_or<T: FromStr>(int_str: Option<&str>, default: T) -> std::result::Result<T, T::Err> {
    int_str.map_or(Ok(default), |s| s.parse())
}
