// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Speed tracking over a test runner's lifecycle events.
//!
//! A host adapter calls the [`TestListener`] hooks as suites and tests start
//! and finish. [`SpeedTracker`] keeps every test that finished at or below its
//! effective threshold, and prints a ranked report when the outermost suite
//! ends.
//!
//! One tracker observes one top-level run. The collection is never cleared,
//! so a tracker reused for a second top-level run reports the first run's
//! tests again alongside the new ones.

mod test_case;

use std::collections::HashMap;

use termcolor::{StandardStream, WriteColor};

use crate::color;
use crate::config::TrackerConfig;
use crate::duration::secs_to_millis;
use crate::overrides::{AnnotationOverrides, ThresholdOverrides};
use crate::report::{FastReport, TextFormatter};

pub use test_case::{Annotations, SCOPE_SEPARATOR, TestCase, TestEntity};

/// Lifecycle hooks a host test runner drives.
///
/// Every hook defaults to a no-op so listeners implement only what they need.
/// Hosts call them synchronously, in order, from a single thread.
pub trait TestListener {
    /// A suite (possibly nested) started.
    fn suite_started(&mut self, _suite: &str) {}

    /// A suite ended.
    fn suite_ended(&mut self, _suite: &str) {}

    /// A test started.
    fn test_started(&mut self, _test: &TestEntity) {}

    /// A test finished after `elapsed_secs` fractional seconds.
    fn test_ended(&mut self, _test: &TestEntity, _elapsed_secs: f64) {}

    /// A test errored.
    fn add_error(&mut self, _test: &TestEntity, _message: &str, _elapsed_secs: f64) {}

    /// A test failed an assertion.
    fn add_failure(&mut self, _test: &TestEntity, _message: &str, _elapsed_secs: f64) {}

    /// A test was marked incomplete.
    fn add_incomplete(&mut self, _test: &TestEntity, _message: &str, _elapsed_secs: f64) {}

    /// A test was flagged as risky.
    fn add_risky(&mut self, _test: &TestEntity, _message: &str, _elapsed_secs: f64) {}

    /// A test was skipped.
    fn add_skipped(&mut self, _test: &TestEntity, _message: &str, _elapsed_secs: f64) {}
}

/// Whether `millis` is fast under `threshold` (inclusive).
pub fn is_fast(millis: u64, threshold: u64) -> bool {
    millis <= threshold
}

/// Collects fast tests and reports the slowest of them at the end of a run.
pub struct SpeedTracker<O = AnnotationOverrides, W = StandardStream> {
    config: TrackerConfig,
    overrides: O,
    fast: HashMap<String, u64>,
    depth: i64,
    out: W,
}

impl SpeedTracker {
    /// Tracker reading per-test `fastThreshold` annotations, printing to stdout.
    pub fn new(config: TrackerConfig) -> Self {
        Self::with_parts(
            config,
            AnnotationOverrides,
            StandardStream::stdout(color::resolve_color()),
        )
    }
}

impl<O, W> SpeedTracker<O, W>
where
    O: ThresholdOverrides,
    W: WriteColor,
{
    /// Tracker with an explicit override source and output sink.
    pub fn with_parts(config: TrackerConfig, overrides: O, out: W) -> Self {
        Self {
            config,
            overrides,
            fast: HashMap::new(),
            depth: 0,
            out,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Current suite nesting depth. Negative only for malformed event streams.
    pub fn depth(&self) -> i64 {
        self.depth
    }

    /// Collected fast tests (label -> milliseconds).
    pub fn fast_tests(&self) -> &HashMap<String, u64> {
        &self.fast
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Threshold that applies to `test`: its declared override, else the global one.
    pub fn effective_threshold(&self, test: &TestCase) -> u64 {
        self.overrides
            .fast_threshold(test)
            .unwrap_or(self.config.fast_threshold)
    }

    /// Rank what has been collected so far.
    pub fn report(&self) -> Option<FastReport> {
        FastReport::rank(&self.fast, &self.config)
    }

    fn record(&mut self, test: &TestCase, millis: u64) {
        let label = test.label();
        tracing::debug!("fast test {} ({}ms)", label, millis);
        self.fast.insert(label, millis);
    }

    fn emit_report(&mut self) {
        let Some(report) = self.report() else {
            tracing::debug!("run finished with no fast tests");
            return;
        };
        tracing::debug!(
            "reporting {} of {} fast tests",
            report.shown_count(),
            report.total()
        );
        if let Err(e) = TextFormatter::new(&mut self.out).write_report(&report) {
            tracing::warn!("failed to write fast test report: {}", e);
        }
    }
}

impl<O, W> TestListener for SpeedTracker<O, W>
where
    O: ThresholdOverrides,
    W: WriteColor,
{
    fn suite_started(&mut self, suite: &str) {
        self.depth += 1;
        tracing::trace!("suite {} started (depth {})", suite, self.depth);
    }

    fn suite_ended(&mut self, suite: &str) {
        self.depth -= 1;
        tracing::trace!("suite {} ended (depth {})", suite, self.depth);

        if self.depth < 0 {
            tracing::warn!(
                "suite {} ended more times than suites started (depth {})",
                suite,
                self.depth
            );
            return;
        }
        if self.depth == 0 {
            self.emit_report();
        }
    }

    fn test_ended(&mut self, test: &TestEntity, elapsed_secs: f64) {
        let Some(case) = test.as_case() else {
            return;
        };
        let Some(millis) = secs_to_millis(elapsed_secs) else {
            tracing::debug!(
                "unreadable time for {} ({}), not fast",
                case.label(),
                elapsed_secs
            );
            return;
        };

        let threshold = self.effective_threshold(case);
        if is_fast(millis, threshold) {
            self.record(case, millis);
        } else {
            tracing::trace!("{} took {}ms (> {}ms)", case.label(), millis, threshold);
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
