//! Verbosity levels and their mapping onto the `log` facade

use std::fmt;
use std::str::FromStr;

use log::{Level, LevelFilter, Record};
use serde::{Deserialize, Serialize};

use crate::errors::LoggingError;
use crate::record::SEVERITY_KEY;

/// Severity of a record, and the minimum severity a sink accepts.
///
/// Ordered from least to most severe, so `a >= b` reads "a is at least as
/// severe as b".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verbosity {
    Debug,
    Info,
    #[default]
    #[serde(alias = "WARN")]
    Warning,
    Error,
    #[serde(alias = "FATAL")]
    Critical,
}

impl Verbosity {
    pub const ALL: [Verbosity; 5] = [
        Verbosity::Debug,
        Verbosity::Info,
        Verbosity::Warning,
        Verbosity::Error,
        Verbosity::Critical,
    ];

    /// Level name as it appears in formatted lines
    pub fn as_str(self) -> &'static str {
        match self {
            Verbosity::Debug => "DEBUG",
            Verbosity::Info => "INFO",
            Verbosity::Warning => "WARNING",
            Verbosity::Error => "ERROR",
            Verbosity::Critical => "CRITICAL",
        }
    }

    /// Map a repeated `-v` count onto a verbosity
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Verbosity::Warning,
            1 => Verbosity::Info,
            _ => Verbosity::Debug,
        }
    }

    /// The `log` level records of this severity are emitted at.
    ///
    /// `log` has no critical level; critical records travel as errors and
    /// carry their real severity as a key-value.
    pub fn as_log_level(self) -> Level {
        match self {
            Verbosity::Debug => Level::Debug,
            Verbosity::Info => Level::Info,
            Verbosity::Warning => Level::Warn,
            Verbosity::Error | Verbosity::Critical => Level::Error,
        }
    }

    pub fn as_level_filter(self) -> LevelFilter {
        self.as_log_level().to_level_filter()
    }

    /// Severity of a `log` record.
    ///
    /// Records emitted through this crate's macros carry their severity
    /// explicitly. Plain `log` records are mapped from their level, and
    /// `trace` records have no severity at all.
    pub fn of_record(record: &Record<'_>) -> Option<Self> {
        if let Some(value) = record.key_values().get(log::kv::Key::from_str(SEVERITY_KEY)) {
            if let Ok(severity) = value.to_string().parse() {
                return Some(severity);
            }
        }
        Self::of_level(record.level())
    }

    pub fn of_level(level: Level) -> Option<Self> {
        match level {
            Level::Error => Some(Verbosity::Error),
            Level::Warn => Some(Verbosity::Warning),
            Level::Info => Some(Verbosity::Info),
            Level::Debug => Some(Verbosity::Debug),
            Level::Trace => None,
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verbosity {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Verbosity::Debug),
            "INFO" => Ok(Verbosity::Info),
            "WARNING" | "WARN" => Ok(Verbosity::Warning),
            "ERROR" => Ok(Verbosity::Error),
            "CRITICAL" | "FATAL" => Ok(Verbosity::Critical),
            _ => Err(LoggingError::InvalidConfiguration(format!(
                "unknown verbosity `{s}`, expected one of DEBUG, INFO, WARNING, ERROR, CRITICAL"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_case_insensitively() {
        assert_eq!("DEBUG".parse::<Verbosity>().unwrap(), Verbosity::Debug);
        assert_eq!("info".parse::<Verbosity>().unwrap(), Verbosity::Info);
        assert_eq!(" Warning ".parse::<Verbosity>().unwrap(), Verbosity::Warning);
        assert_eq!("warn".parse::<Verbosity>().unwrap(), Verbosity::Warning);
        assert_eq!("fatal".parse::<Verbosity>().unwrap(), Verbosity::Critical);
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = "LOUD".parse::<Verbosity>().unwrap_err();
        assert!(matches!(err, LoggingError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("LOUD"));
        assert!("".parse::<Verbosity>().is_err());
    }

    #[test]
    fn test_ordering_follows_severity() {
        assert!(Verbosity::Debug < Verbosity::Info);
        assert!(Verbosity::Warning < Verbosity::Error);
        assert!(Verbosity::Error < Verbosity::Critical);
        assert_eq!(Verbosity::ALL.iter().max(), Some(&Verbosity::Critical));
    }

    #[test]
    fn test_verbose_count_mapping() {
        assert_eq!(Verbosity::from_count(0), Verbosity::Warning);
        assert_eq!(Verbosity::from_count(1), Verbosity::Info);
        assert_eq!(Verbosity::from_count(2), Verbosity::Debug);
        assert_eq!(Verbosity::from_count(9), Verbosity::Debug);
    }

    #[test]
    fn test_critical_rides_on_error_level() {
        assert_eq!(Verbosity::Critical.as_log_level(), Level::Error);
        assert_eq!(Verbosity::Debug.as_level_filter(), LevelFilter::Debug);
        assert_eq!(Verbosity::of_level(Level::Trace), None);
        assert_eq!(Verbosity::of_level(Level::Warn), Some(Verbosity::Warning));
    }

    #[test]
    fn test_serde_uses_level_names() {
        let json = serde_json::to_string(&Verbosity::Warning).unwrap();
        assert_eq!(json, "\"WARNING\"");
        let parsed: Verbosity = serde_json::from_str("\"WARN\"").unwrap();
        assert_eq!(parsed, Verbosity::Warning);
    }
}
