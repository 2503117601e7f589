// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust libtest output parsing.
//!
//! JSON format (`cargo test -- -Z unstable-options --format json --report-time`):
//! ```text
//! { "type": "suite", "event": "started", "test_count": 2 }
//! { "type": "test", "event": "started", "name": "tests::add" }
//! { "type": "test", "name": "tests::add", "event": "ok", "exec_time": 0.012 }
//! { "type": "suite", "event": "ok", "passed": 2, "failed": 0, "exec_time": 0.02 }
//! ```
//!
//! Human format (`cargo test -- -Z unstable-options --report-time`):
//! ```text
//! running 2 tests
//! test tests::add ... ok <0.012s>
//! test tests::sub ... FAILED <0.003s>
//! test result: FAILED. 1 passed; 1 failed; 0 ignored; 0 measured; 0 filtered out
//! ```

use serde::Deserialize;

use super::RunnerEvent;
use crate::tracker::TestCase;

/// Suite name used for libtest binaries (the format does not name them).
pub const SUITE_NAME: &str = "libtest";

/// Suffix libtest appends to `#[should_panic]` test names.
const SHOULD_PANIC_SUFFIX: &str = " - should panic";

#[derive(Debug, Deserialize)]
struct Record {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    event: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    exec_time: Option<ExecTime>,
    #[serde(default)]
    message: Option<String>,
}

/// `exec_time` is a number of seconds in current toolchains and a string
/// like `"0.012s"` in older ones.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ExecTime {
    Secs(f64),
    Text(String),
}

impl ExecTime {
    fn secs(&self) -> Option<f64> {
        match self {
            ExecTime::Secs(secs) => Some(*secs),
            ExecTime::Text(text) => parse_secs(text),
        }
    }
}

/// Parse one line of libtest JSON output.
pub fn parse_json_line(line: &str) -> Option<RunnerEvent> {
    let record: Record = match serde_json::from_str(line.trim()) {
        Ok(record) => record,
        Err(e) => {
            tracing::trace!("not a libtest record ({}): {}", e, line);
            return None;
        }
    };

    let event = record.event.as_deref()?;
    match record.kind.as_str() {
        "suite" => match event {
            "started" => Some(RunnerEvent::SuiteStarted(SUITE_NAME.to_string())),
            "ok" | "failed" => Some(RunnerEvent::SuiteEnded(SUITE_NAME.to_string())),
            _ => None,
        },
        "test" => {
            let test = test_case(record.name.as_deref()?);
            let elapsed_secs = record.exec_time.as_ref().and_then(ExecTime::secs);
            match event {
                "started" => Some(RunnerEvent::TestStarted(test)),
                "ok" => Some(RunnerEvent::TestPassed { test, elapsed_secs }),
                "failed" => Some(RunnerEvent::TestFailed { test, elapsed_secs }),
                "ignored" => Some(RunnerEvent::TestIgnored {
                    test,
                    reason: record.message,
                }),
                // "timeout" is a progress warning; the test is still running
                _ => None,
            }
        }
        _ => None,
    }
}

/// Parse one line of libtest human-readable output.
pub fn parse_text_line(line: &str) -> Option<RunnerEvent> {
    let line = line.trim_end();

    if line.starts_with("running ") && (line.ends_with(" tests") || line.ends_with(" test")) {
        return Some(RunnerEvent::SuiteStarted(SUITE_NAME.to_string()));
    }
    if line.starts_with("test result: ") {
        return Some(RunnerEvent::SuiteEnded(SUITE_NAME.to_string()));
    }

    let rest = line.strip_prefix("test ")?;
    let (name, outcome) = rest.split_once(" ... ")?;
    let test = test_case(name);
    let (status, elapsed_secs) = split_report_time(outcome);

    match status {
        "ok" => Some(RunnerEvent::TestPassed { test, elapsed_secs }),
        "FAILED" => Some(RunnerEvent::TestFailed { test, elapsed_secs }),
        "ignored" => Some(RunnerEvent::TestIgnored { test, reason: None }),
        _ => {
            let reason = status.strip_prefix("ignored, ")?;
            Some(RunnerEvent::TestIgnored {
                test,
                reason: Some(reason.to_string()),
            })
        }
    }
}

/// Split `ok <0.012s>` into `("ok", Some(0.012))`.
fn split_report_time(outcome: &str) -> (&str, Option<f64>) {
    let Some(inner) = outcome.strip_suffix('>') else {
        return (outcome, None);
    };
    let Some((status, time)) = inner.rsplit_once(" <") else {
        return (outcome, None);
    };
    (status.trim_end(), parse_secs(time))
}

/// Parse a libtest time like `0.012s` into fractional seconds.
fn parse_secs(text: &str) -> Option<f64> {
    let secs: f64 = text.trim().strip_suffix('s')?.parse().ok()?;
    (secs.is_finite() && secs >= 0.0).then_some(secs)
}

fn test_case(name: &str) -> TestCase {
    let name = name.strip_suffix(SHOULD_PANIC_SUFFIX).unwrap_or(name);
    TestCase::from_path(name)
}

#[cfg(test)]
#[path = "libtest_tests.rs"]
mod tests;
