// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Host adapters that drive a [`TestListener`] from a runner's output.
//!
//! Adapters translate runner-specific records into [`RunnerEvent`]s and
//! dispatch them to listener hooks. The tracker itself never sees runner
//! formats.

pub mod libtest;

use std::io::BufRead;

use clap::ValueEnum;

use crate::tracker::{TestCase, TestEntity, TestListener};

/// Name of the synthetic suite wrapping a whole replayed stream.
pub const RUN_SUITE: &str = "run";

/// Input format of a replayed test log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Detect per line: JSON objects or human-readable libtest output
    #[default]
    Auto,
    /// libtest `--format json`
    Json,
    /// libtest human output with `--report-time`
    Text,
}

/// A runner-neutral lifecycle event.
#[derive(Debug, Clone, PartialEq)]
pub enum RunnerEvent {
    SuiteStarted(String),
    SuiteEnded(String),
    TestStarted(TestCase),
    TestPassed {
        test: TestCase,
        elapsed_secs: Option<f64>,
    },
    TestFailed {
        test: TestCase,
        elapsed_secs: Option<f64>,
    },
    TestIgnored {
        test: TestCase,
        reason: Option<String>,
    },
}

/// Counters from a replay, for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    /// Lines read from the input.
    pub lines: usize,
    /// Lines that produced an event.
    pub events: usize,
    /// Passed tests whose time could not be read.
    pub untimed: usize,
}

/// Deliver one event to the listener's hooks.
///
/// Only passed tests reach `test_ended`; failed and ignored tests go to their
/// outcome hooks and are never timed. Returns false for a passed test with no
/// readable time.
pub fn dispatch<L: TestListener + ?Sized>(event: RunnerEvent, listener: &mut L) -> bool {
    match event {
        RunnerEvent::SuiteStarted(name) => listener.suite_started(&name),
        RunnerEvent::SuiteEnded(name) => listener.suite_ended(&name),
        RunnerEvent::TestStarted(test) => listener.test_started(&TestEntity::Case(test)),
        RunnerEvent::TestPassed { test, elapsed_secs } => {
            let Some(secs) = elapsed_secs else {
                tracing::debug!("no time reported for {}, skipping", test.label());
                return false;
            };
            listener.test_ended(&TestEntity::Case(test), secs);
        }
        RunnerEvent::TestFailed { test, elapsed_secs } => listener.add_failure(
            &TestEntity::Case(test),
            "failed",
            elapsed_secs.unwrap_or(0.0),
        ),
        RunnerEvent::TestIgnored { test, reason } => listener.add_skipped(
            &TestEntity::Case(test),
            reason.as_deref().unwrap_or("ignored"),
            0.0,
        ),
    }
    true
}

/// Parse a single line in the given format.
pub fn parse_line(line: &str, format: InputFormat) -> Option<RunnerEvent> {
    match format {
        InputFormat::Json => libtest::parse_json_line(line),
        InputFormat::Text => libtest::parse_text_line(line),
        InputFormat::Auto if line.trim_start().starts_with('{') => libtest::parse_json_line(line),
        InputFormat::Auto => libtest::parse_text_line(line),
    }
}

/// Replay a whole test log into `listener` as one top-level run.
///
/// The stream is wrapped in a synthetic [`RUN_SUITE`] so that several test
/// binaries in one log produce a single report. Lines that are not
/// recognized are skipped; only read errors are returned.
pub fn replay<R, L>(
    reader: R,
    format: InputFormat,
    listener: &mut L,
) -> std::io::Result<ReplayStats>
where
    R: BufRead,
    L: TestListener + ?Sized,
{
    let mut stats = ReplayStats::default();

    listener.suite_started(RUN_SUITE);
    for line in reader.lines() {
        // An aborted read leaves the run open: nothing is reported
        let line = line?;
        stats.lines += 1;

        let Some(event) = parse_line(&line, format) else {
            tracing::trace!("skipping line: {}", line);
            continue;
        };
        stats.events += 1;
        if !dispatch(event, listener) {
            stats.untimed += 1;
        }
    }
    listener.suite_ended(RUN_SUITE);

    tracing::debug!(
        "replayed {} lines ({} events, {} untimed)",
        stats.lines,
        stats.events,
        stats.untimed
    );
    Ok(stats)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
