//! Command line arguments for the `lincoln-logs` demo binary

use std::path::PathBuf;

use clap::Parser;

use crate::errors::Result;
use crate::level::Verbosity;

/// Set up a logger and write a message at every severity
#[derive(Parser, Debug)]
#[command(name = "lincoln-logs")]
#[command(about = "Verbosity-driven logger setup")]
#[command(version)]
pub struct Args {
    /// Increase verbosity (can be used multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Verbosity by name (DEBUG, INFO, WARNING, ERROR, CRITICAL); overrides -v
    #[arg(long)]
    pub verbosity: Option<String>,

    /// Log file written at DEBUG verbosity
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write console output to stdout instead of stderr
    #[arg(long)]
    pub stdout: bool,

    /// Message to log
    #[arg(default_value = "hello from lincoln-logs")]
    pub message: Vec<String>,
}

impl Args {
    pub fn verbosity(&self) -> Result<Verbosity> {
        match &self.verbosity {
            Some(name) => name.parse(),
            None => Ok(Verbosity::from_count(self.verbose)),
        }
    }
}
