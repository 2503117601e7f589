pub mod adapter;
pub mod cli;
pub mod color;
pub mod completions;
pub mod config;
pub mod discovery;
pub mod duration;
pub mod env;
pub mod error;
pub mod overrides;
pub mod report;
pub mod tracker;

pub use adapter::{InputFormat, ReplayStats, RunnerEvent};
pub use cli::{Cli, Command, ReportArgs};
pub use config::{TrackerConfig, TrackerOptions};
pub use error::{Error, ExitCode, Result};
pub use overrides::{AnnotationOverrides, NoOverrides, OverrideTable, ThresholdOverrides};
pub use report::{FastReport, FastTest};
pub use tracker::{Annotations, SpeedTracker, TestCase, TestEntity, TestListener};
