//! Various model types used within the test framework.

pub mod outcome;
pub mod report;

pub use outcome::{Outcome, Status};
pub use report::{Failure, RunReport, SuiteReport};
