//! Effective configuration resolution
//!
//! Precedence, lowest to highest: defaults, `--config` file, `CRAWLSIFT_*`
//! environment variables, command-line flags. Validation runs once on the
//! merged result.

use crawlsift_core::config::CrawlsiftConfig;

use crate::cli::Cli;
use crate::error::CliError;

/// Build the effective configuration for this invocation.
///
/// # Errors
///
/// Returns `CliError::Config` if the named config file is missing or
/// malformed, or the merged values fail validation.
pub fn resolve(cli: &Cli) -> Result<CrawlsiftConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => CrawlsiftConfig::from_file(path)?,
        None => CrawlsiftConfig::default(),
    };
    config.apply_env_overrides();
    apply_cli_overrides(&mut config, cli);
    config.validate()?;
    Ok(config)
}

fn apply_cli_overrides(config: &mut CrawlsiftConfig, cli: &Cli) {
    if let Some(level) = &cli.log_level {
        config.general.log_level.clone_from(level);
    }
    if let Some(format) = cli.log_format {
        config.general.log_format = format.as_str().to_owned();
    }

    let classifier = &mut config.classifier;
    if let Some(path) = &cli.extra_crawler_agents_file {
        classifier.extra_agents_file = Some(path.display().to_string());
    }
    if let Some(key) = &cli.user_agent_key {
        classifier.user_agent_key.clone_from(key);
    }
    if let Some(input) = &cli.input {
        classifier.input.clone_from(input);
    }
    if let Some(selector) = &cli.crawler_output {
        classifier.crawler_output.clone_from(selector);
    }
    if let Some(selector) = &cli.non_crawler_output {
        classifier.non_crawler_output.clone_from(selector);
    }
    if let Some(selector) = &cli.error_output {
        classifier.error_output.clone_from(selector);
    }
}
