//! Command-line configuration.
//!
//! No environment variables are consulted; every setting comes from flags.

use clap::Parser;
use std::path::PathBuf;
use taskmgr_core::{default_log_level, DEFAULT_TASKS_FILE};

/// Interactive task tracker backed by a local JSON file.
#[derive(Debug, Clone, Parser)]
#[command(name = "taskmgr", version, about)]
pub struct Args {
    /// Task file to load on start and write on "Save & Exit".
    #[arg(long, value_name = "PATH", default_value = DEFAULT_TASKS_FILE)]
    pub file: PathBuf,

    /// Log level: trace, debug, info, warn or error.
    #[arg(long, value_name = "LEVEL", default_value = default_log_level())]
    pub log_level: String,

    /// Absolute directory for rolling log files. Logging is off when omitted.
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}
