// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse helper functions for configuration.

use std::collections::BTreeMap;
use std::path::Path;

use super::{FileConfig, TrackerOptions};
use crate::duration::parse_millis;
use crate::error::{Error, Result};

/// Parse a fasttrap.toml document, returning the config and unknown top-level keys.
pub(super) fn parse_file_config(content: &str, path: &Path) -> Result<(FileConfig, Vec<String>)> {
    let table: toml::Table = toml::from_str(content).map_err(|e| config_error(path, e))?;

    let mut options = TrackerOptions::default();
    let mut thresholds = BTreeMap::new();
    let mut unknown = Vec::new();

    for (key, value) in &table {
        match key.as_str() {
            "fast_threshold" | "fastThreshold" => {
                let ms = parse_millis_value(value).map_err(|e| config_error(path, e))?;
                options.fast_threshold = Some(ms);
            }
            "report_length" | "reportLength" => {
                let n = parse_count(value).map_err(|e| config_error(path, e))?;
                options.report_length = Some(n);
            }
            "thresholds" => {
                thresholds = parse_thresholds(value).map_err(|e| config_error(path, e))?;
            }
            _ => unknown.push(key.clone()),
        }
    }

    Ok((
        FileConfig {
            options,
            thresholds,
        },
        unknown,
    ))
}

/// Warn about an unrecognized config key.
pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "fasttrap: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

fn config_error(path: &Path, message: impl ToString) -> Error {
    Error::Config {
        message: message.to_string(),
        path: Some(path.to_path_buf()),
    }
}

/// Parse an integer (milliseconds) or duration string.
fn parse_millis_value(value: &toml::Value) -> std::result::Result<u64, String> {
    match value {
        toml::Value::Integer(n) if *n >= 0 => Ok(*n as u64),
        toml::Value::Integer(n) => Err(format!("negative threshold: {n}")),
        toml::Value::String(s) => parse_millis(s),
        other => Err(format!(
            "expected milliseconds or a duration string, found {}",
            other.type_str()
        )),
    }
}

/// Parse a non-negative integer count.
fn parse_count(value: &toml::Value) -> std::result::Result<usize, String> {
    match value {
        toml::Value::Integer(n) if *n >= 0 => Ok(*n as usize),
        toml::Value::Integer(n) => Err(format!("report_length must not be negative: {n}")),
        other => Err(format!(
            "report_length must be an integer, found {}",
            other.type_str()
        )),
    }
}

/// Parse the `[thresholds]` table: each entry is one value or an array of values.
fn parse_thresholds(value: &toml::Value) -> std::result::Result<BTreeMap<String, Vec<u64>>, String> {
    let toml::Value::Table(table) = value else {
        return Err(format!(
            "thresholds must be a table, found {}",
            value.type_str()
        ));
    };

    let mut thresholds = BTreeMap::new();
    for (label, entry) in table {
        let values = match entry {
            toml::Value::Array(items) => items
                .iter()
                .map(parse_millis_value)
                .collect::<std::result::Result<Vec<_>, _>>(),
            single => parse_millis_value(single).map(|ms| vec![ms]),
        }
        .map_err(|e| format!("thresholds.\"{label}\": {e}"))?;
        thresholds.insert(label.clone(), values);
    }
    Ok(thresholds)
}
