//! Lincoln Logs
//!
//! Verbosity-driven logger setup. A logger always writes to the console, and
//! at DEBUG verbosity also appends to a log file. Every sink renders the same
//! line layout:
//!
//! ```text
//! 2024-05-01 14:03:59 DEBUG [ src.net.socket::connect():42 ] handshake done
//! ```
//!
//! ```no_run
//! let logger = lincoln_logs::setup("DEBUG")?;
//! lincoln_logs::debug!(logger: logger, "Test Log {}", 42);
//! # Ok::<(), lincoln_logs::LoggingError>(())
//! ```

pub mod args;
pub mod config;
pub mod errors;
pub mod format;
pub mod level;
pub mod logger;
mod macros;
pub mod record;
pub mod sink;

pub use config::{Config, ConsoleStream};
pub use errors::{LoggingError, Result};
pub use format::Formatter;
pub use level::Verbosity;
pub use logger::Logger;
pub use sink::{Sink, SinkKind};

/// Build a logger with the default configuration, set up for `verbosity`
pub fn setup(verbosity: &str) -> Result<Logger> {
    setup_with(Config::default(), verbosity)
}

/// Build a logger from `config`, set up for `verbosity`.
///
/// An unknown verbosity fails before any sink is opened.
pub fn setup_with(config: Config, verbosity: &str) -> Result<Logger> {
    let verbosity: Verbosity = verbosity.parse()?;
    let mut logger = Logger::new(config);
    logger.setup(verbosity)?;
    Ok(logger)
}

#[doc(hidden)]
pub mod __private {
    pub use log;

    pub fn type_name_of<T>(_: T) -> &'static str {
        std::any::type_name::<T>()
    }
}
