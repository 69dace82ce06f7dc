//! CLI argument parsing using clap derive API
//!
//! Purely declarative. Every flag is optional so that an absent flag leaves
//! the value from the config file, environment, or defaults untouched.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// crawlsift -- split line-delimited JSON access logs by user agent.
///
/// Each input line is written unchanged to exactly one of three outputs:
/// crawler, non-crawler, or error (not a JSON object).
///
/// Output selectors: `-`, `stdout`, `/dev/stdout` for standard output;
/// `+`, `stderr`, `/dev/stderr` for standard error; `0`, `null`, `/dev/null`
/// to discard; anything else is a file path (created or truncated).
#[derive(Parser, Debug, Default)]
#[command(name = "crawlsift", version, about, long_about = None)]
pub struct Cli {
    /// File with additional crawler patterns, one regular expression per line.
    /// Defaults to `extra-crawler-agents.txt` when it exists.
    #[arg(long, value_name = "PATH")]
    pub extra_crawler_agents_file: Option<PathBuf>,

    /// Name of the JSON field holding the user agent [default: http_user_agent].
    #[arg(long, value_name = "FIELD")]
    pub user_agent_key: Option<String>,

    /// Destination for non-crawler lines [default: /dev/stdout].
    #[arg(long, value_name = "SELECTOR")]
    pub non_crawler_output: Option<String>,

    /// Destination for crawler lines [default: /dev/null].
    #[arg(long, value_name = "SELECTOR")]
    pub crawler_output: Option<String>,

    /// Destination for lines that are not JSON objects [default: /dev/null].
    #[arg(long, value_name = "SELECTOR")]
    pub error_output: Option<String>,

    /// Input to read, `-` for standard input [default: -].
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<String>,

    /// Path to a crawlsift.toml configuration file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log output format; logs always go to standard error.
    #[arg(long)]
    pub log_format: Option<LogFormat>,

    /// Build the pattern registry, print the active pattern count, and exit.
    #[arg(long)]
    pub check: bool,
}

/// Supported log formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    Pretty,
    /// Machine-readable JSON lines.
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Json => "json",
        }
    }
}
