//! CLI-specific error types and exit code mapping

use crawlsift_classifier::ClassifierError;
use crawlsift_core::error::CrawlsiftError;

/// CLI-specific error type.
///
/// The `exit_code()` method maps errors to process exit codes.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading or validation failure.
    #[error("configuration error: {0}")]
    Config(String),

    /// A crawler pattern could not be compiled or loaded.
    #[error("pattern error: {0}")]
    Pattern(String),

    /// Reading input or writing to a sink failed mid-run.
    #[error("stream error: {0}")]
    Stream(String),

    /// IO error (opening input or a destination, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning                                |
    /// |------|----------------------------------------|
    /// | 0    | Success                                |
    /// | 1    | Input read or sink write failure       |
    /// | 2    | Configuration error                    |
    /// | 3    | Invalid crawler pattern                |
    /// | 10   | IO error                               |
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Stream(_) => 1,
            Self::Config(_) => 2,
            Self::Pattern(_) => 3,
            Self::Io(_) => 10,
        }
    }
}

impl From<CrawlsiftError> for CliError {
    fn from(e: CrawlsiftError) -> Self {
        match e {
            CrawlsiftError::Config(e) => Self::Config(e.to_string()),
            CrawlsiftError::Pattern(e) => Self::Pattern(e.to_string()),
            CrawlsiftError::Stream(e) => Self::Stream(e.to_string()),
            CrawlsiftError::Io(e) => Self::Io(e),
        }
    }
}

impl From<ClassifierError> for CliError {
    fn from(e: ClassifierError) -> Self {
        match e {
            ClassifierError::Destination { selector, source } => Self::Io(std::io::Error::new(
                source.kind(),
                format!("cannot open '{selector}': {source}"),
            )),
            other => CrawlsiftError::from(other).into(),
        }
    }
}
