//! crawlsift -- split line-delimited JSON access logs into crawler,
//! non-crawler, and unparsable streams.

mod cli;
mod config;
mod error;
mod logging;
mod run;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match config::resolve(&cli) {
        Ok(config) => config,
        Err(e) => return report(&e),
    };

    if let Err(e) = logging::init_tracing(&config.general) {
        eprintln!("error: {e:#}");
        return ExitCode::from(2);
    }

    tracing::debug!(config = ?config, "effective configuration");

    let result = if cli.check {
        run::execute_check(&config.classifier, &mut std::io::stdout())
    } else {
        run::execute(&config.classifier)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn report(e: &CliError) -> ExitCode {
    eprintln!("error: {e}");
    let code = u8::try_from(e.exit_code()).unwrap_or(1);
    ExitCode::from(code)
}
