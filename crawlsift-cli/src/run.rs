//! Classification run: registry, destinations, stream

use std::io::Write;
use std::path::Path;

use tracing::info;

use crawlsift_classifier::{PatternLoader, PatternRegistry, Sinks, classify_stream, open_input};
use crawlsift_core::config::{ClassifierConfig, DEFAULT_EXTRA_AGENTS_FILE};
use crawlsift_core::types::Destination;

use crate::error::CliError;

/// Build the active pattern registry.
///
/// An explicitly configured extra-pattern file that cannot be read is logged
/// and skipped; an extra pattern that does not compile is fatal.
pub fn build_registry(config: &ClassifierConfig) -> Result<PatternRegistry, CliError> {
    let explicit = config.extra_agents_file.as_deref().map(Path::new);
    let extra = PatternLoader::resolve(explicit, Path::new(DEFAULT_EXTRA_AGENTS_FILE))
        .map(PatternLoader::load)
        .unwrap_or_default();

    Ok(PatternRegistry::builder().extra_patterns(extra).build()?)
}

/// Report the active pattern count without reading any input.
pub fn execute_check(config: &ClassifierConfig, out: &mut impl Write) -> Result<(), CliError> {
    let registry = build_registry(config)?;
    writeln!(out, "{} active crawler patterns", registry.len())?;
    Ok(())
}

/// Classify the configured input into the three configured destinations.
///
/// Destinations are opened before the first line is read, so an unwritable
/// path fails the run without consuming input.
pub fn execute(config: &ClassifierConfig) -> Result<(), CliError> {
    let registry = build_registry(config)?;

    let crawler = Destination::parse(&config.crawler_output);
    let non_crawler = Destination::parse(&config.non_crawler_output);
    let error = Destination::parse(&config.error_output);
    let mut sinks = Sinks::open(&crawler, &non_crawler, &error)?;

    let input = open_input(&config.input)?;

    info!(
        input = %config.input,
        field = %config.user_agent_key,
        crawler = %crawler,
        non_crawler = %non_crawler,
        error = %error,
        "classifying records"
    );

    classify_stream(&registry, &config.user_agent_key, input, &mut sinks)?;
    Ok(())
}
