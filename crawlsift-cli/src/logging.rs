//! Logging initialization for crawlsift.
//!
//! Configures `tracing-subscriber` from the `[general]` section of
//! `CrawlsiftConfig`. Logs are written to standard error so they never mix
//! with classified records on standard output.

use std::io::IsTerminal;

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crawlsift_core::config::GeneralConfig;

/// Targets that follow the configured log level.
const CRAWLSIFT_TARGETS: [&str; 3] = ["crawlsift", "crawlsift_core", "crawlsift_classifier"];

/// Initialize the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros are used.
/// `RUST_LOG` takes precedence over `config.log_level`.
///
/// # Formats
///
/// * `"json"` - Machine-parseable JSON lines
/// * `"pretty"` - Human-readable output (default); colored only on a terminal
pub fn init_tracing(config: &GeneralConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.log_level)));
    let ansi = std::io::stderr().is_terminal();

    match config.log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to initialize JSON logging: {e}"))?;
        }
        "pretty" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_ansi(ansi)
                        .with_writer(std::io::stderr),
                )
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to initialize pretty logging: {e}"))?;
        }
        other => {
            return Err(anyhow::anyhow!(
                "unknown log format '{other}', expected 'json' or 'pretty'"
            ));
        }
    }

    Ok(())
}

/// Filter directives used when `RUST_LOG` is unset.
///
/// crawlsift's own crates log at `level`; dependencies stay at `warn`
/// (or `error` when that is stricter).
fn default_directives(level: &str) -> String {
    let others = if level == "error" { "error" } else { "warn" };
    let mut directives = others.to_owned();
    for target in CRAWLSIFT_TARGETS {
        directives.push_str(&format!(",{target}={level}"));
    }
    directives
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_format_is_rejected() {
        let config = GeneralConfig {
            log_level: "info".to_owned(),
            log_format: "xml".to_owned(),
        };
        let err = init_tracing(&config).unwrap_err();
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn own_crates_follow_configured_level() {
        assert_eq!(
            default_directives("debug"),
            "warn,crawlsift=debug,crawlsift_core=debug,crawlsift_classifier=debug"
        );
    }

    #[test]
    fn dependencies_never_log_below_error_when_error_requested() {
        assert!(default_directives("error").starts_with("error,"));
    }

    #[test]
    fn default_directives_parse() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            assert!(EnvFilter::try_new(default_directives(level)).is_ok(), "{level}");
        }
    }
}
