//! A lightweight, in-process test-declaration and assertion library.
//!
//! Suites of deferred cases are declared with [suite::Suite] (or the
//! [suite!] macro), cases check things with the [assert] engine, and a
//! [run::Runner] drives whole sequences of suites into a
//! [model::RunReport], which [ux::out] can render.

extern crate clap;
extern crate crossbeam;

pub mod assert;
pub mod config;
pub mod model;
pub mod run;
pub mod suite;
pub mod ux;
