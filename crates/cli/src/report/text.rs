// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output for the fast-test report.
//!
//! ```text
//!
//!
//! These tests are fast enough: (<500ms)...
//!  1. 480ms to run db::tests::migrates
//!  2. 120ms to run db::tests::connects
//! ...and there is 1 more above your threshold hidden from view
//! ```

use std::io::Write;

use termcolor::WriteColor;

use super::{FastReport, FastTest};
use crate::color::scheme;

/// Writes a [`FastReport`] as header, body, and footer.
pub struct TextFormatter<'a, W: WriteColor> {
    out: &'a mut W,
}

impl<'a, W: WriteColor> TextFormatter<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out }
    }

    /// Write the full report: header, body, footer, in that order.
    pub fn write_report(&mut self, report: &FastReport) -> std::io::Result<()> {
        self.write_header(report.threshold)?;
        self.write_body(&report.shown)?;
        self.write_footer(report.hidden)?;
        self.out.flush()
    }

    /// Announce the threshold, separated from runner output by two blank lines.
    pub fn write_header(&mut self, threshold: u64) -> std::io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out)?;
        self.out.set_color(&scheme::header())?;
        write!(self.out, "These tests are fast enough: (<{}ms)...", threshold)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    /// One line per entry with a 1-based ordinal.
    pub fn write_body(&mut self, entries: &[FastTest]) -> std::io::Result<()> {
        for (i, entry) in entries.iter().enumerate() {
            write!(self.out, " {}. ", i + 1)?;
            self.out.set_color(&scheme::duration())?;
            write!(self.out, "{}ms", entry.millis)?;
            self.out.reset()?;
            write!(self.out, " to run ")?;
            self.out.set_color(&scheme::label())?;
            write!(self.out, "{}", entry.label)?;
            self.out.reset()?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Mention fast tests cut off by the report length, if any.
    pub fn write_footer(&mut self, hidden: usize) -> std::io::Result<()> {
        if hidden == 0 {
            return Ok(());
        }
        let verb = if hidden == 1 { "is" } else { "are" };
        self.out.set_color(&scheme::footer())?;
        write!(
            self.out,
            "...and there {} {} more above your threshold hidden from view",
            verb, hidden
        )?;
        self.out.reset()?;
        writeln!(self.out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
