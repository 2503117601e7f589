//! Behavioral specs for configuration.
//!
//! Tests that fasttrap correctly handles:
//! - fasttrap.toml discovery and `-C` / FASTTRAP_CONFIG
//! - Per-test thresholds from the `[thresholds]` table
//! - Precedence of CLI flags over the config file
//! - Unknown keys (warned) and invalid files (rejected)

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

const THRESHOLDS_REPORT: &str = "

These tests are fast enough: (<1000ms)...
 1. 1204ms to run db::tests::migrates
 2. 120ms to run db::tests::connects
 3. 51ms to run cli::smoke
...and there is 1 more above your threshold hidden from view
";

// =============================================================================
// DISCOVERY SPECS
// =============================================================================

/// > fasttrap.toml in the working directory is picked up
#[test]
fn discovers_config_in_working_directory() {
    report()
        .on("thresholds")
        .log("libtest-text/output.txt")
        .runs()
        .stdout_eq(THRESHOLDS_REPORT);
}

/// > fasttrap.toml in a parent directory is picked up
#[test]
fn discovers_config_in_parent_directory() {
    let temp = Project::empty();
    temp.config("fast_threshold = 50\n");
    temp.file("crates/app/.keep", "");

    report()
        .pwd(temp.path().join("crates/app"))
        .log("libtest-text/output.txt")
        .runs()
        .stdout_eq("\n\nThese tests are fast enough: (<50ms)...\n 1. 3ms to run parser::tests::parses_empty\n");
}

/// > -C <FILE> specifies config file (short for --config)
#[test]
fn short_config_flag_works() {
    let config = fixture("thresholds/fasttrap.toml");
    report()
        .args(&["-C", config.to_str().unwrap()])
        .log("libtest-text/output.txt")
        .runs()
        .stdout_eq(THRESHOLDS_REPORT);
}

/// > FASTTRAP_CONFIG sets config file location
#[test]
fn env_config_sets_path() {
    let config = fixture("thresholds/fasttrap.toml");
    report()
        .env("FASTTRAP_CONFIG", config.to_str().unwrap())
        .log("libtest-text/output.txt")
        .runs()
        .stdout_eq(THRESHOLDS_REPORT);
}

/// > A missing explicit config file is a config error
#[test]
fn missing_explicit_config_fails() {
    report()
        .args(&["-C", "nowhere.toml"])
        .log("libtest-text/output.txt")
        .exits(2)
        .stderr_has("fasttrap: config error: config file not found: nowhere.toml");
}

// =============================================================================
// PRECEDENCE SPECS
// =============================================================================

/// > CLI flags override config file values
#[test]
fn flags_override_config_file() {
    report()
        .on("thresholds")
        .args(&["-n", "1"])
        .log("libtest-text/output.txt")
        .runs()
        .stdout_eq(
            "

These tests are fast enough: (<1000ms)...
 1. 1204ms to run db::tests::migrates
...and there are 3 more above your threshold hidden from view
",
        );
}

/// > Per-test thresholds apply whatever the global threshold is
#[test]
fn per_test_threshold_survives_flag_override() {
    report()
        .on("thresholds")
        .args(&["-t", "2s", "-n", "10"])
        .log("libtest-text/output.txt")
        .runs()
        .stdout_lacks("parses_nested")
        .stdout_has(" 1. 1204ms to run db::tests::migrates\n");
}

/// > camelCase option names are accepted
#[test]
fn camel_case_keys_are_accepted() {
    let temp = Project::empty();
    temp.config("fastThreshold = \"60ms\"\nreportLength = 1\n");

    report()
        .pwd(temp.path())
        .log("libtest-text/output.txt")
        .runs()
        .stdout_eq(
            "

These tests are fast enough: (<60ms)...
 1. 51ms to run cli::smoke
...and there is 1 more above your threshold hidden from view
",
        );
}

// =============================================================================
// VALIDATION SPECS
// =============================================================================

/// > Unknown keys produce a warning, not an error
#[test]
fn unknown_key_warns() {
    let temp = Project::empty();
    temp.config("fast_threshold = 500\ncolour = true\n");

    report()
        .pwd(temp.path())
        .log("libtest-text/output.txt")
        .runs()
        .stderr_has("unrecognized field `colour` (ignored)")
        .stdout_has("(<500ms)");
}

/// > Invalid TOML exits 2
#[test]
fn invalid_toml_fails() {
    let temp = Project::empty();
    temp.config("fast_threshold = \n");

    report()
        .pwd(temp.path())
        .log("libtest-text/output.txt")
        .exits(2)
        .stderr_has("fasttrap: config error");
}

/// > A malformed per-test threshold names the offending test
#[test]
fn invalid_per_test_threshold_fails() {
    let temp = Project::empty();
    temp.config("[thresholds]\n\"db::tests::migrates\" = \"eventually\"\n");

    report()
        .pwd(temp.path())
        .log("libtest-text/output.txt")
        .exits(2)
        .stderr_has("db::tests::migrates");
}
