use std::path::PathBuf;

use clap::{ArgAction, Parser};
use clipform_logging::LogDestination;

/// Submit a video clip job and show the processed result.
///
/// Without `--url` the form is filled in interactively.
#[derive(Parser, Debug)]
#[command(name = "clipform", version)]
pub struct Cli {
    /// Source video URL; submits once and exits
    #[arg(short, long, value_parser = non_empty)]
    pub url: Option<String>,

    /// Clip start in seconds (blank means from the start)
    #[arg(short, long, requires = "url", allow_hyphen_values = true)]
    pub start: Option<String>,

    /// Clip end in seconds (blank means to the end)
    #[arg(short, long, requires = "url", allow_hyphen_values = true)]
    pub end: Option<String>,

    /// Processing endpoint, overrides the config file
    #[arg(long, env = "CLIPFORM_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Config file (RON); defaults to ./clipform.ron when present
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log only to --log-file, not to the terminal
    #[arg(short, long, requires = "log_file")]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_destination(&self) -> LogDestination {
        match (&self.log_file, self.quiet) {
            (Some(path), true) => LogDestination::File(path.clone()),
            (Some(path), false) => LogDestination::Both(path.clone()),
            (None, _) => LogDestination::Terminal,
        }
    }
}

fn non_empty(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err("source URL must not be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}
