// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fast-test ranking.
//!
//! Turns the collected `label -> milliseconds` table into the ordered,
//! length-limited list that gets printed at the end of a run.

pub mod text;

use std::cmp::Reverse;
use std::collections::HashMap;

use serde::Serialize;
use termcolor::NoColor;

use crate::config::TrackerConfig;

pub use text::TextFormatter;

/// One fast test in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FastTest {
    /// Test label.
    pub label: String,
    /// Measured duration in whole milliseconds.
    pub millis: u64,
}

impl FastTest {
    pub fn new(label: impl Into<String>, millis: u64) -> Self {
        Self {
            label: label.into(),
            millis,
        }
    }
}

/// A ranked, truncated view of the fast tests of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FastReport {
    /// Global threshold announced in the header.
    pub threshold: u64,
    /// Entries to list, slowest first.
    pub shown: Vec<FastTest>,
    /// Fast tests left out because of the report length.
    pub hidden: usize,
}

impl FastReport {
    /// Rank the collected fast tests.
    ///
    /// Sorted by duration descending. Equal durations are ordered by label so
    /// output is reproducible; callers should not rely on any particular tie
    /// order beyond that. Returns `None` when nothing was collected.
    pub fn rank(fast: &HashMap<String, u64>, config: &TrackerConfig) -> Option<Self> {
        if fast.is_empty() {
            return None;
        }

        let mut ranked: Vec<FastTest> = fast
            .iter()
            .map(|(label, &millis)| FastTest::new(label.clone(), millis))
            .collect();
        ranked.sort_by(|a, b| {
            Reverse(a.millis)
                .cmp(&Reverse(b.millis))
                .then_with(|| a.label.cmp(&b.label))
        });

        let total = ranked.len();
        let shown = total.min(config.report_length);
        ranked.truncate(shown);

        Some(Self {
            threshold: config.fast_threshold,
            shown: ranked,
            hidden: total.saturating_sub(shown),
        })
    }

    /// Number of listed entries.
    pub fn shown_count(&self) -> usize {
        self.shown.len()
    }

    /// Total fast tests collected (`shown + hidden`).
    pub fn total(&self) -> usize {
        self.shown.len() + self.hidden
    }
}

/// Render a report as plain text (no color codes).
pub fn format_report(report: &FastReport) -> String {
    let mut out = NoColor::new(Vec::new());
    // Writing to a Vec<u8> cannot fail
    let _ = TextFormatter::new(&mut out).write_report(report);
    String::from_utf8_lossy(&out.into_inner()).into_owned()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
