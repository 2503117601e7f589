// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-test fast-threshold overrides.
//!
//! The tracker asks a [`ThresholdOverrides`] for each finished test. A
//! declared value replaces the global threshold for that test only.

use std::collections::{BTreeMap, HashMap};

use crate::duration::parse_millis;
use crate::tracker::TestCase;

/// Annotation tag carrying a per-test threshold.
pub const FAST_THRESHOLD_TAG: &str = "fastThreshold";

/// Source of per-test threshold declarations.
pub trait ThresholdOverrides {
    /// Declared threshold in milliseconds for `test`, if any.
    fn fast_threshold(&self, test: &TestCase) -> Option<u64>;

    /// Consult `self` first, then `fallback`.
    fn or<B>(self, fallback: B) -> Chain<Self, B>
    where
        Self: Sized,
        B: ThresholdOverrides,
    {
        Chain {
            first: self,
            second: fallback,
        }
    }
}

/// Reads the `fastThreshold` annotation attached to the test itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnotationOverrides;

impl ThresholdOverrides for AnnotationOverrides {
    fn fast_threshold(&self, test: &TestCase) -> Option<u64> {
        let declared = test.annotations.first(FAST_THRESHOLD_TAG)?;
        match parse_millis(declared) {
            Ok(ms) => Some(ms),
            Err(e) => {
                tracing::warn!(
                    "ignoring {} annotation on {}: {}",
                    FAST_THRESHOLD_TAG,
                    test.label(),
                    e
                );
                None
            }
        }
    }
}

/// Never overrides; every test uses the global threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl ThresholdOverrides for NoOverrides {
    fn fast_threshold(&self, _test: &TestCase) -> Option<u64> {
        None
    }
}

/// Thresholds declared out of band, keyed by test label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTable {
    declared: HashMap<String, Vec<u64>>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a threshold for `label`. Earlier declarations take precedence.
    pub fn declare(&mut self, label: impl Into<String>, millis: u64) {
        self.declared.entry(label.into()).or_default().push(millis);
    }

    pub fn len(&self) -> usize {
        self.declared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }
}

impl From<BTreeMap<String, Vec<u64>>> for OverrideTable {
    fn from(thresholds: BTreeMap<String, Vec<u64>>) -> Self {
        Self {
            declared: thresholds.into_iter().collect(),
        }
    }
}

impl ThresholdOverrides for OverrideTable {
    fn fast_threshold(&self, test: &TestCase) -> Option<u64> {
        self.declared.get(&test.label())?.first().copied()
    }
}

impl<F> ThresholdOverrides for F
where
    F: Fn(&TestCase) -> Option<u64>,
{
    fn fast_threshold(&self, test: &TestCase) -> Option<u64> {
        self(test)
    }
}

/// Two override sources; the first one that declares a value wins.
#[derive(Debug, Clone, Default)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> ThresholdOverrides for Chain<A, B>
where
    A: ThresholdOverrides,
    B: ThresholdOverrides,
{
    fn fast_threshold(&self, test: &TestCase) -> Option<u64> {
        self.first
            .fast_threshold(test)
            .or_else(|| self.second.fast_threshold(test))
    }
}

#[cfg(test)]
#[path = "overrides_tests.rs"]
mod tests;
