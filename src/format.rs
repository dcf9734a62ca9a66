//! The fixed line layout every sink renders:
//!
//! ```text
//! 2024-05-01 14:03:59 DEBUG [ src.net.socket::connect():42 ] handshake done
//! ```

use std::fmt;
use std::path::PathBuf;

use log::kv::Key;
use log::Record;

use crate::level::Verbosity;
use crate::record::{dotted_source_path, FUNCTION_KEY};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Function segment for records that did not come through this crate's macros
const UNKNOWN_FUNCTION: &str = "<module>";

/// Renders records into the line layout. Each sink owns its own instance.
#[derive(Debug, Clone)]
pub struct Formatter {
    base_dir: Option<PathBuf>,
}

impl Formatter {
    pub fn new() -> Self {
        Self {
            base_dir: std::env::current_dir().ok(),
        }
    }

    /// Render `record` to a single line, without a trailing newline
    pub fn format(&self, record: &Record<'_>) -> String {
        self.line(record.args(), record).to_string()
    }

    /// Lazily rendered line; `message` is the record text
    pub fn line<'a>(&'a self, message: &'a fmt::Arguments<'a>, record: &'a Record<'a>) -> Line<'a> {
        Line {
            formatter: self,
            message,
            record,
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Line<'a> {
    formatter: &'a Formatter,
    message: &'a fmt::Arguments<'a>,
    record: &'a Record<'a>,
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record;
        let level = match Verbosity::of_record(record) {
            Some(severity) => severity.as_str(),
            None => record.level().as_str(),
        };
        let source = match record.file() {
            Some(file) => dotted_source_path(file, self.formatter.base_dir.as_deref()),
            None => record
                .module_path()
                .unwrap_or(record.target())
                .replace("::", "."),
        };

        write!(
            f,
            "{} {} [ {}::",
            chrono::Local::now().format(TIMESTAMP_FORMAT),
            level,
            source
        )?;
        match record.key_values().get(Key::from_str(FUNCTION_KEY)) {
            Some(function) => write!(f, "{function}")?,
            None => f.write_str(UNKNOWN_FUNCTION)?,
        }
        write!(f, "():{} ] {}", record.line().unwrap_or(0), self.message)
    }
}
