// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::adapter::InputFormat;
use crate::config::TrackerOptions;
use crate::duration::parse_millis;
use crate::env::names;

/// Reports the slowest of your fast tests
#[derive(Parser)]
#[command(name = "fasttrap")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = names::FASTTRAP_CONFIG)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Replay libtest output and report fast tests
    Report(ReportArgs),
    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args)]
pub struct ReportArgs {
    /// libtest output to replay (stdin when omitted or "-")
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Fast threshold (e.g., 500, 750ms, 0.5s)
    #[arg(short = 't', long, value_name = "DURATION", value_parser = parse_millis)]
    pub fast_threshold: Option<u64>,

    /// Maximum fast tests to list
    #[arg(short = 'n', long, value_name = "N")]
    pub report_length: Option<usize>,

    /// Format of the replayed output
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    pub input_format: InputFormat,

    /// Force color output
    #[arg(long, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

impl ReportArgs {
    /// Tracker options given on the command line.
    pub fn options(&self) -> TrackerOptions {
        TrackerOptions {
            fast_threshold: self.fast_threshold,
            report_length: self.report_length,
        }
    }

    /// Input file, or `None` for stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|p| *p != Path::new("-"))
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
