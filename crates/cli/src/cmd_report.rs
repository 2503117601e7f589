// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report command implementation.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use termcolor::StandardStream;

use fasttrap::adapter;
use fasttrap::cli::{Cli, ReportArgs};
use fasttrap::color;
use fasttrap::config::{self, FileConfig, TrackerConfig};
use fasttrap::discovery;
use fasttrap::error::Error;
use fasttrap::overrides::OverrideTable;
use fasttrap::tracker::SpeedTracker;

/// Label used for stdin in error messages.
const STDIN_PATH: &str = "<stdin>";

/// Run the report command.
pub fn run(cli: &Cli, args: &ReportArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    // Find and load config
    let file_config = match discovery::resolve_config(cli.config.as_deref(), &cwd)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load_with_warnings(&path)?
        }
        None => FileConfig::default(),
    };

    // CLI flags override the config file
    let options = file_config.options.merged_with(&args.options());
    let tracker_config = TrackerConfig::from_options(&options);
    tracing::debug!(
        "fast threshold {}ms, report length {}",
        tracker_config.fast_threshold,
        tracker_config.report_length
    );

    let overrides = OverrideTable::from(file_config.thresholds);
    tracing::debug!("{} per-test thresholds declared", overrides.len());

    let out = StandardStream::stdout(color::choose(args.color, args.no_color));
    let mut tracker = SpeedTracker::with_parts(tracker_config, overrides, out);

    let (stats, path) = match args.input_path() {
        Some(path) => {
            if path.is_dir() {
                return Err(Error::Argument(format!(
                    "input is a directory: {}",
                    path.display()
                ))
                .into());
            }
            let file = File::open(path).map_err(|e| io_error(path, e))?;
            let stats = adapter::replay(BufReader::new(file), args.input_format, &mut tracker);
            (stats, path.to_path_buf())
        }
        None => {
            let stdin = std::io::stdin();
            let stats = adapter::replay(stdin.lock(), args.input_format, &mut tracker);
            (stats, PathBuf::from(STDIN_PATH))
        }
    };
    let stats = stats.map_err(|e| io_error(&path, e))?;

    if stats.events == 0 && stats.lines > 0 {
        tracing::warn!(
            "no libtest output recognized in {} lines from {}",
            stats.lines,
            path.display()
        );
    }
    if stats.untimed > 0 {
        tracing::info!(
            "{} passed tests had no time (run libtest with --report-time)",
            stats.untimed
        );
    }

    tracker.into_writer().flush()?;
    Ok(())
}

fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source,
    }
}
