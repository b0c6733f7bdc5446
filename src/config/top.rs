use super::{err, halt};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// The default number of suites that may run at once.
const DEFAULT_JOBS: NonZeroUsize = NonZeroUsize::MIN;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// The top-level config structure.
pub struct Config {
    /// The strategy for halting between suites.
    pub halt: halt::Strategy,
    /// The maximum number of suites to run at once.
    pub jobs: NonZeroUsize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            halt: halt::Strategy::default(),
            jobs: DEFAULT_JOBS,
        }
    }
}

impl Config {
    /// Tries to dump a config to a string.
    pub fn to_string(&self) -> err::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Tries to load a config from a string.
    ///
    /// Missing keys take their default values.
    ///
    /// # Examples
    ///
    /// ```
    /// use reagent::config::{halt, Config};
    /// let c = Config::from_str("halt = \"exit-on-fail\"").unwrap();
    /// assert_eq!(c.halt, halt::Strategy::ExitOnFail);
    /// assert_eq!(c.jobs.get(), 1);
    /// ```
    pub fn from_str(s: &str) -> err::Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trip() -> err::Result<()> {
        let c = Config::default();
        let s = c.to_string()?;
        assert_eq!(Config::from_str(&s)?, c);
        Ok(())
    }

    #[test]
    fn test_bad_strategy_rejected() {
        assert!(Config::from_str("halt = \"sometimes\"").is_err());
    }

    #[test]
    fn test_zero_jobs_rejected() {
        assert!(Config::from_str("jobs = 0").is_err());
    }
}
