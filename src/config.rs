//! Logger configuration and its JSON persistence

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{LoggingError, Result};
use crate::level::Verbosity;

pub const DEFAULT_LOG_FILE: &str = "lincoln_logs.log";

/// Overrides `Config::log_file`
pub const LOG_FILE_ENV: &str = "LINCOLN_LOGS_FILE";
/// Overrides `Config::console_level`
pub const CONSOLE_LEVEL_ENV: &str = "LINCOLN_LOGS_CONSOLE_LEVEL";

/// Stream the console sink writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleStream {
    #[default]
    Stderr,
    Stdout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// File sink target, relative to the working directory unless absolute
    pub log_file: PathBuf,
    pub console: ConsoleStream,
    /// Minimum console severity; follows the setup verbosity when unset
    pub console_level: Option<Verbosity>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            console: ConsoleStream::default(),
            console_level: None,
        }
    }
}

impl Config {
    /// Configuration that writes its log file to `log_file`
    pub fn with_log_file(log_file: impl Into<PathBuf>) -> Self {
        Self {
            log_file: log_file.into(),
            ..Self::default()
        }
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| LoggingError::io(path, e))?;
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| LoggingError::io(path, e))?;
        let config: Config = serde_json::from_str(&json)?;
        Ok(config)
    }

    /// Apply `LINCOLN_LOGS_FILE` and `LINCOLN_LOGS_CONSOLE_LEVEL`
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(
            std::env::var(LOG_FILE_ENV).ok(),
            std::env::var(CONSOLE_LEVEL_ENV).ok(),
        )
    }

    fn with_overrides(mut self, log_file: Option<String>, console_level: Option<String>) -> Result<Self> {
        if let Some(log_file) = log_file.filter(|f| !f.is_empty()) {
            self.log_file = PathBuf::from(log_file);
        }
        if let Some(level) = console_level.filter(|l| !l.is_empty()) {
            self.console_level = Some(level.parse()?);
        }
        Ok(self)
    }

    /// Minimum severity of the console sink for a given setup verbosity
    pub fn console_level_for(&self, verbosity: Verbosity) -> Verbosity {
        self.console_level.unwrap_or(verbosity)
    }
}
