// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Duration parsing and millisecond conversion.
//!
//! Supports formats:
//! - `"500"` → 500 milliseconds (bare numbers are milliseconds)
//! - `"500ms"` → 500 milliseconds
//! - `"1.5s"` → 1.5 seconds
//! - `"1m"` → 1 minute

use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// Scale used to absorb binary representation error before rounding.
///
/// `0.5005 * 1000.0` is `500.49999999999994` as an `f64`; snapping to a
/// nanosecond grid first makes it round to 501 like the decimal value does.
const SNAP: f64 = 1_000_000.0;

/// Convert fractional seconds to whole milliseconds.
///
/// Rounds half away from zero. Returns `None` for NaN, infinite, or negative
/// input so callers can treat an unreadable measurement as "not fast".
pub fn secs_to_millis(secs: f64) -> Option<u64> {
    if !secs.is_finite() || secs < 0.0 {
        return None;
    }
    let millis = secs * 1000.0;
    let snapped = (millis * SNAP).round() / SNAP;
    let rounded = snapped.round();
    if rounded > u64::MAX as f64 {
        return None;
    }
    Some(rounded as u64)
}

/// Parse a duration string into a Duration.
///
/// Bare numbers are milliseconds, matching how thresholds are declared.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    if let Ok(ms) = s.parse::<u64>() {
        return Ok(Duration::from_millis(ms));
    }

    // Check for milliseconds first (longer suffix)
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms
            .trim()
            .parse()
            .map_err(|_| format!("invalid duration: {s}"))?;
        return Ok(Duration::from_millis(n));
    }

    // Check for seconds (supports fractional)
    if let Some(secs) = s.strip_suffix('s') {
        let n: f64 = secs
            .trim()
            .parse()
            .map_err(|_| format!("invalid duration: {s}"))?;
        if n < 0.0 {
            return Err(format!("negative duration: {s}"));
        }
        return Duration::try_from_secs_f64(n).map_err(|_| format!("duration out of range: {s}"));
    }

    // Check for minutes
    if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins
            .trim()
            .parse()
            .map_err(|_| format!("invalid duration: {s}"))?;
        let secs = n
            .checked_mul(60)
            .ok_or_else(|| format!("duration out of range: {s}"))?;
        return Ok(Duration::from_secs(secs));
    }

    Err(format!(
        "invalid duration format: {s} (use 500, 500ms, 0.5s, or 1m)"
    ))
}

/// Parse a threshold string into whole milliseconds.
pub fn parse_millis(s: &str) -> Result<u64, String> {
    let duration = parse_duration(s)?;
    secs_to_millis(duration.as_secs_f64()).ok_or_else(|| format!("duration out of range: {s}"))
}

/// A millisecond value as written in config: an integer or a duration string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MillisValue {
    Integer(i64),
    Text(String),
}

impl MillisValue {
    /// Resolve to whole milliseconds.
    pub fn to_millis(&self) -> Result<u64, String> {
        match self {
            MillisValue::Integer(n) if *n < 0 => Err(format!("negative duration: {n}")),
            MillisValue::Integer(n) => Ok(*n as u64),
            MillisValue::Text(s) => parse_millis(s),
        }
    }
}

/// Deserialize an optional millisecond value (integer or duration string).
pub fn deserialize_millis_option<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<MillisValue> = Option::deserialize(deserializer)?;
    match opt {
        None => Ok(None),
        Some(v) => v.to_millis().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
