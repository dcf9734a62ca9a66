//! Main entry point for the lincoln-logs demo

use anyhow::Context;
use clap::Parser;
use lincoln_logs::{args::Args, Config, ConsoleStream, Logger};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };
    let mut config = config.with_env_overrides()?;
    if let Some(log_file) = &args.log_file {
        config.log_file = log_file.clone();
    }
    if args.stdout {
        config.console = ConsoleStream::Stdout;
    }

    let verbosity = args.verbosity()?;
    let mut logger = Logger::new(config);
    logger
        .setup(verbosity)
        .with_context(|| format!("setting up logging at {verbosity}"))?;

    let message = args.message.join(" ");
    lincoln_logs::debug!(logger: logger, "{message}");
    lincoln_logs::info!(logger: logger, "{message}");
    lincoln_logs::warning!(logger: logger, "{message}");
    lincoln_logs::error!(logger: logger, "{message}");
    lincoln_logs::critical!(logger: logger, "{message}");

    log::Log::flush(&logger);
    Ok(())
}
