// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test identity as seen by a listener.

use std::collections::BTreeMap;
use std::fmt;

/// Separator between a test's scope and its name.
pub const SCOPE_SEPARATOR: &str = "::";

/// Method-level metadata declared on a test (tag -> declared values).
///
/// Hosts fill this from whatever declaration mechanism they have. Only the
/// first value of a tag is authoritative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    tags: BTreeMap<String, Vec<String>>,
}

impl Annotations {
    /// Create an empty set of annotations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declared value for `tag`.
    pub fn add(&mut self, tag: impl Into<String>, value: impl Into<String>) {
        self.tags.entry(tag.into()).or_default().push(value.into());
    }

    /// Builder form of [`Annotations::add`].
    pub fn with(mut self, tag: impl Into<String>, value: impl Into<String>) -> Self {
        self.add(tag, value);
        self
    }

    /// All values declared for `tag`, in declaration order.
    pub fn values(&self, tag: &str) -> &[String] {
        self.tags.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The authoritative (first) value declared for `tag`.
    pub fn first(&self, tag: &str) -> Option<&str> {
        self.values(tag).first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// A concrete leaf test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Class-like qualifier, e.g. a module path (`crate::tests`).
    pub scope: String,
    /// Method-like name, e.g. `parses_empty_input`.
    pub name: String,
    /// Method-level metadata.
    pub annotations: Annotations,
}

impl TestCase {
    /// Create a test case from its scope and name.
    pub fn new(scope: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            name: name.into(),
            annotations: Annotations::new(),
        }
    }

    /// Split a fully qualified path (`a::b::name`) at its last separator.
    pub fn from_path(path: &str) -> Self {
        match path.rsplit_once(SCOPE_SEPARATOR) {
            Some((scope, name)) => Self::new(scope, name),
            None => Self::new("", path),
        }
    }

    /// Attach method-level annotations.
    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    /// Stable label identifying this test within a run.
    pub fn label(&self) -> String {
        if self.scope.is_empty() {
            self.name.clone()
        } else {
            format!("{}{}{}", self.scope, SCOPE_SEPARATOR, self.name)
        }
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Anything a host may report as having run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestEntity {
    /// A concrete leaf test case.
    Case(TestCase),
    /// A composite (suite-like) entity; never timed as a test.
    Suite(String),
}

impl TestEntity {
    /// The leaf test case, if this entity is one.
    pub fn as_case(&self) -> Option<&TestCase> {
        match self {
            TestEntity::Case(case) => Some(case),
            TestEntity::Suite(_) => None,
        }
    }
}

impl From<TestCase> for TestEntity {
    fn from(case: TestCase) -> Self {
        TestEntity::Case(case)
    }
}

#[cfg(test)]
#[path = "test_case_tests.rs"]
mod tests;
