//! User-facing parts of the runner: outputting reports.

pub mod out;
