//! Console and file sinks, each a fern dispatch with its own formatter

use std::fmt;
use std::path::{Path, PathBuf};

use fern::Dispatch;
use log::{Log, Record};

use crate::config::ConsoleStream;
use crate::errors::{LoggingError, Result};
use crate::format::Formatter;
use crate::level::Verbosity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkKind {
    Console(ConsoleStream),
    File(PathBuf),
}

/// A destination for formatted records
pub struct Sink {
    kind: SinkKind,
    level: Verbosity,
    formatter: Formatter,
    output: Box<dyn Log>,
}

impl Sink {
    pub fn console(stream: ConsoleStream, level: Verbosity, formatter: Formatter) -> Self {
        let dispatch = Self::dispatch(level, &formatter);
        let dispatch = match stream {
            ConsoleStream::Stderr => dispatch.chain(std::io::stderr()),
            ConsoleStream::Stdout => dispatch.chain(std::io::stdout()),
        };
        Self::from_dispatch(SinkKind::Console(stream), level, formatter, dispatch)
    }

    /// Open `path` for appending, creating the file if needed.
    ///
    /// Parent directories are not created; a missing or read-only directory
    /// is an `Io` error.
    pub fn file(path: &Path, level: Verbosity, formatter: Formatter) -> Result<Self> {
        let file = fern::log_file(path).map_err(|e| LoggingError::io(path, e))?;
        let dispatch = Self::dispatch(level, &formatter).chain(file);
        Ok(Self::from_dispatch(
            SinkKind::File(path.to_path_buf()),
            level,
            formatter,
            dispatch,
        ))
    }

    fn dispatch(level: Verbosity, formatter: &Formatter) -> Dispatch {
        let formatter = formatter.clone();
        Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!("{}", formatter.line(message, record)))
            })
            .level(level.as_level_filter())
    }

    fn from_dispatch(kind: SinkKind, level: Verbosity, formatter: Formatter, dispatch: Dispatch) -> Self {
        let (_, output) = dispatch.into_log();
        Self {
            kind,
            level,
            formatter,
            output,
        }
    }

    pub fn kind(&self) -> &SinkKind {
        &self.kind
    }

    pub fn level(&self) -> Verbosity {
        self.level
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, SinkKind::File(_))
    }

    /// Target path of a file sink
    pub fn path(&self) -> Option<&Path> {
        match &self.kind {
            SinkKind::File(path) => Some(path),
            SinkKind::Console(_) => None,
        }
    }

    pub fn accepts(&self, record: &Record<'_>) -> bool {
        Verbosity::of_record(record).is_some_and(|severity| severity >= self.level)
    }

    /// Render `record` the way this sink writes it
    pub fn format(&self, record: &Record<'_>) -> String {
        self.formatter.format(record)
    }

    pub fn log(&self, record: &Record<'_>) {
        if self.accepts(record) {
            self.output.log(record);
        }
    }

    pub fn flush(&self) {
        self.output.flush();
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("kind", &self.kind)
            .field("level", &self.level)
            .field("formatter", &self.formatter)
            .finish_non_exhaustive()
    }
}
