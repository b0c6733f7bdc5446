//! The text outputter.

use super::{abs::Outputter, err};
use crate::model::{Outcome, RunReport, Status, SuiteReport};
use colored::Colorize;
use std::io::{self, Write};

/// An outputter that lists every case of every suite, tab-aligned, with a
/// summary per suite and for the whole run.
pub struct Text<W> {
    w: tabwriter::TabWriter<W>,
}

impl<W: Write> Outputter for Text<W> {
    fn output(mut self: Box<Self>, report: &RunReport) -> err::Result<()> {
        for suite in &report.suites {
            self.dump_suite(suite)?;
        }
        self.dump_summary(report)?;
        self.w.flush()?;
        Ok(())
    }
}

impl<W: Write> Text<W> {
    /// Constructs a new text writer.
    pub fn new(writer: W) -> Self {
        Self {
            w: tabwriter::TabWriter::new(writer).padding(1),
        }
    }

    fn dump_suite(&mut self, suite: &SuiteReport) -> io::Result<()> {
        writeln!(self.w, "{}", suite.name().bold())?;
        if let Some(d) = suite.description() {
            writeln!(self.w, "  {}", d.italic())?;
        }
        for (index, outcome) in suite.cases().iter().enumerate() {
            self.dump_case(index, outcome)?;
        }
        writeln!(
            self.w,
            "  {}/{} passed",
            suite.passed_count(),
            suite.total()
        )?;
        writeln!(self.w)
    }

    fn dump_case(&mut self, index: usize, outcome: &Outcome) -> io::Result<()> {
        let name = outcome
            .label()
            .map_or_else(|| format!("#{}", index), str::to_owned);
        writeln!(
            self.w,
            "  {sigil}>\t{name}\t{message}",
            sigil = sigil(outcome.status()),
            name = name,
            message = outcome.message(),
        )
    }

    fn dump_summary(&mut self, report: &RunReport) -> io::Result<()> {
        let verdict = if report.passed() {
            "PASS".green()
        } else {
            "FAIL".red()
        };
        write!(
            self.w,
            "{} ({}/{} suites passed",
            verdict,
            report.passed_suites(),
            report.suites.len()
        )?;
        if report.halted {
            write!(self.w, "; halted early")?;
        }
        writeln!(self.w, ")")
    }
}

fn sigil(s: Status) -> colored::ColoredString {
    match s {
        Status::Pass => "*".green(),
        Status::Fail => ":".red(),
        Status::Fault => "!".magenta(),
    }
}
