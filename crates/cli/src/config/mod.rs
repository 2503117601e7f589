// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker configuration and fasttrap.toml parsing.
//!
//! The tracker only ever sees a [`TrackerConfig`], fixed at construction.
//! The config file is a CLI concern: it supplies the same two options plus a
//! `[thresholds]` table of per-test overrides.

mod parse;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::duration::deserialize_millis_option;
use crate::error::{Error, Result};

/// Default cutoff in milliseconds at or below which a test is fast.
pub const DEFAULT_FAST_THRESHOLD: u64 = 500;

/// Default number of fast tests shown in the report.
pub const DEFAULT_REPORT_LENGTH: usize = 10;

/// Config file name searched for by discovery.
pub const CONFIG_FILE_NAME: &str = "fasttrap.toml";

/// Immutable tracker configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Milliseconds at or below which a test counts as fast.
    pub fast_threshold: u64,
    /// Maximum number of fast tests listed in the report.
    pub report_length: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            fast_threshold: DEFAULT_FAST_THRESHOLD,
            report_length: DEFAULT_REPORT_LENGTH,
        }
    }
}

impl TrackerConfig {
    /// Create a config with explicit values.
    pub fn new(fast_threshold: u64, report_length: usize) -> Self {
        Self {
            fast_threshold,
            report_length,
        }
    }

    /// Build a config from an options object, defaulting absent options.
    pub fn from_options(options: &TrackerOptions) -> Self {
        Self {
            fast_threshold: options.fast_threshold.unwrap_or(DEFAULT_FAST_THRESHOLD),
            report_length: options.report_length.unwrap_or(DEFAULT_REPORT_LENGTH),
        }
    }
}

/// Options object with the recognized keys `fastThreshold` and `reportLength`.
///
/// Unrecognized keys are ignored. `fastThreshold` accepts an integer number of
/// milliseconds or a duration string such as `"750ms"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerOptions {
    #[serde(
        default,
        alias = "fast_threshold",
        deserialize_with = "deserialize_millis_option"
    )]
    pub fast_threshold: Option<u64>,

    #[serde(default, alias = "report_length")]
    pub report_length: Option<usize>,
}

impl TrackerOptions {
    /// Layer `overrides` on top of `self`; set values in `overrides` win.
    pub fn merged_with(self, overrides: &TrackerOptions) -> Self {
        Self {
            fast_threshold: overrides.fast_threshold.or(self.fast_threshold),
            report_length: overrides.report_length.or(self.report_length),
        }
    }
}

/// Contents of a fasttrap.toml file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    /// Tracker options declared in the file.
    pub options: TrackerOptions,
    /// Per-test threshold declarations (label -> declared values, first wins).
    pub thresholds: BTreeMap<String, Vec<u64>>,
}

/// Load config from a file (strict: unknown keys are silently ignored).
pub fn load(path: &Path) -> Result<FileConfig> {
    let content = read(path)?;
    parse(&content, path)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<FileConfig> {
    let content = read(path)?;
    parse_with_warnings(&content, path)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parse config from string content, ignoring unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<FileConfig> {
    let (config, _unknown) = parse::parse_file_config(content, path)?;
    Ok(config)
}

/// Parse config from string content, warning about unknown keys on stderr.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<FileConfig> {
    let (config, unknown) = parse::parse_file_config(content, path)?;
    for key in &unknown {
        parse::warn_unknown_key(path, key);
    }
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
