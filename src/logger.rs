//! The verbosity configurator
//!
//! A [`Logger`] is plain data: build one, call [`Logger::setup`] with a
//! verbosity, and write to it through the crate macros with
//! `logger: <expr>`. Nothing is global until [`Logger::install`] hands the
//! logger to the `log` facade.
//!
//! Setup policy:
//! - a console sink is always attached, at `Config::console_level` or the
//!   setup verbosity;
//! - `Verbosity::Debug` adds a file sink at `Config::log_file`, also at DEBUG;
//! - calling setup again replaces the sinks. The new list is built first and
//!   swapped in only when every sink opened, so a failed setup leaves the
//!   previous configuration in place.

use log::{LevelFilter, Log, Metadata, Record};

use crate::config::Config;
use crate::errors::{LoggingError, Result};
use crate::format::Formatter;
use crate::level::Verbosity;
use crate::sink::Sink;

#[derive(Debug, Default)]
pub struct Logger {
    config: Config,
    verbosity: Option<Verbosity>,
    sinks: Vec<Sink>,
}

impl Logger {
    /// An unconfigured logger with no sinks
    pub fn new(config: Config) -> Self {
        Self {
            config,
            verbosity: None,
            sinks: Vec::new(),
        }
    }

    /// Attach the sinks for `verbosity`, replacing any from an earlier setup
    pub fn setup(&mut self, verbosity: Verbosity) -> Result<()> {
        let sinks = self.build_sinks(verbosity)?;
        let replaced = std::mem::replace(&mut self.sinks, sinks);
        for sink in &replaced {
            sink.flush();
        }
        if !replaced.is_empty() {
            log::debug!("replaced {} sinks, verbosity now {}", replaced.len(), verbosity);
        }
        self.verbosity = Some(verbosity);
        Ok(())
    }

    fn build_sinks(&self, verbosity: Verbosity) -> Result<Vec<Sink>> {
        let mut sinks = vec![Sink::console(
            self.config.console,
            self.config.console_level_for(verbosity),
            Formatter::new(),
        )];

        if verbosity == Verbosity::Debug {
            let sink = Sink::file(&self.config.log_file, Verbosity::Debug, Formatter::new())?;
            log::debug!("attached file sink at {}", self.config.log_file.display());
            sinks.push(sink);
        }
        Ok(sinks)
    }

    /// Drop every sink; the logger discards records until set up again
    pub fn reset(&mut self) {
        self.flush();
        self.sinks.clear();
        self.verbosity = None;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Verbosity of the last successful setup
    pub fn verbosity(&self) -> Option<Verbosity> {
        self.verbosity
    }

    pub fn sinks(&self) -> &[Sink] {
        &self.sinks
    }

    pub fn file_sinks(&self) -> impl Iterator<Item = &Sink> {
        self.sinks.iter().filter(|sink| sink.is_file())
    }

    /// Most verbose `log` level any sink accepts
    pub fn max_level(&self) -> LevelFilter {
        self.sinks
            .iter()
            .map(|sink| sink.level().as_level_filter())
            .max()
            .unwrap_or(LevelFilter::Off)
    }

    /// Make this logger the process-wide `log` logger.
    ///
    /// Records from `log` macros and from this crate's macros without a
    /// `logger:` argument land here afterwards. Only one logger can be
    /// installed per process.
    pub fn install(self) -> Result<()> {
        let max_level = self.max_level();
        log::set_boxed_logger(Box::new(self)).map_err(|_| LoggingError::AlreadyInstalled)?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.sinks
            .iter()
            .any(|sink| metadata.level() <= sink.level().as_level_filter())
    }

    fn log(&self, record: &Record<'_>) {
        for sink in &self.sinks {
            sink.log(record);
        }
    }

    fn flush(&self) {
        for sink in &self.sinks {
            sink.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConsoleStream;
    use crate::sink::SinkKind;
    use std::fs;

    fn logger_in(dir: &tempfile::TempDir) -> Logger {
        Logger::new(Config::with_log_file(dir.path().join("test.log")))
    }

    #[test]
    fn test_info_has_console_only() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = logger_in(&dir);
        logger.setup(Verbosity::Info).unwrap();

        assert_eq!(logger.sinks().len(), 1);
        assert_eq!(logger.sinks()[0].kind(), &SinkKind::Console(ConsoleStream::Stderr));
        assert_eq!(logger.sinks()[0].level(), Verbosity::Info);
        assert_eq!(logger.file_sinks().count(), 0);
        assert!(!dir.path().join("test.log").exists());
        assert_eq!(logger.max_level(), LevelFilter::Info);
    }

    #[test]
    fn test_debug_adds_file_sink() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = logger_in(&dir);
        logger.setup(Verbosity::Debug).unwrap();

        let files: Vec<&Sink> = logger.file_sinks().collect();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].level(), Verbosity::Debug);
        assert!(files[0].path().unwrap().exists());
        assert_eq!(logger.verbosity(), Some(Verbosity::Debug));
    }

    #[test]
    fn test_console_level_override() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::with_log_file(dir.path().join("test.log"));
        config.console_level = Some(Verbosity::Error);
        let mut logger = Logger::new(config);
        logger.setup(Verbosity::Debug).unwrap();

        assert_eq!(logger.sinks()[0].level(), Verbosity::Error);
        assert_eq!(logger.file_sinks().next().unwrap().level(), Verbosity::Debug);
    }

    #[test]
    fn test_repeated_setup_replaces_sinks() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = logger_in(&dir);
        logger.setup(Verbosity::Debug).unwrap();
        logger.setup(Verbosity::Debug).unwrap();
        assert_eq!(logger.sinks().len(), 2);
        assert_eq!(logger.file_sinks().count(), 1);

        crate::debug!(logger: logger, "once");
        logger.flush();
        let contents = fs::read_to_string(dir.path().join("test.log")).unwrap();
        assert_eq!(contents.lines().filter(|l| l.ends_with(" once")).count(), 1);

        logger.setup(Verbosity::Warning).unwrap();
        assert_eq!(logger.sinks().len(), 1);
        assert_eq!(logger.file_sinks().count(), 0);
    }

    #[test]
    fn test_failed_setup_keeps_previous_sinks() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = Logger::new(Config::with_log_file(dir.path().join("nope").join("test.log")));
        logger.setup(Verbosity::Info).unwrap();

        let err = logger.setup(Verbosity::Debug).unwrap_err();
        assert!(matches!(err, LoggingError::Io { .. }));
        assert_eq!(logger.verbosity(), Some(Verbosity::Info));
        assert_eq!(logger.sinks().len(), 1);
    }

    #[test]
    fn test_setup_keeps_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = logger_in(&dir);
        logger.setup(Verbosity::Debug).unwrap();

        assert_eq!(logger.config().log_file, dir.path().join("test.log"));
        assert_eq!(
            logger.file_sinks().next().unwrap().path(),
            Some(logger.config().log_file.as_path())
        );
    }

    #[test]
    fn test_reset() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = logger_in(&dir);
        logger.setup(Verbosity::Debug).unwrap();
        logger.reset();

        assert!(logger.sinks().is_empty());
        assert_eq!(logger.max_level(), LevelFilter::Off);
        assert!(!logger.enabled(&Metadata::builder().level(log::Level::Error).build()));
    }

    #[test]
    fn test_enabled_follows_most_verbose_sink() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::with_log_file(dir.path().join("test.log"));
        config.console_level = Some(Verbosity::Warning);
        let mut logger = Logger::new(config);
        logger.setup(Verbosity::Debug).unwrap();

        assert!(logger.enabled(&Metadata::builder().level(log::Level::Debug).build()));
        assert!(!logger.enabled(&Metadata::builder().level(log::Level::Trace).build()));
    }
}
