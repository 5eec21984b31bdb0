use thiserror::Error;

/// Failures along the query pipeline. Every variant is fatal for the
/// invocation; nothing is retried.
#[derive(Debug, Error)]
pub enum ShellbotError {
    /// Missing or empty credential. Raised before any network activity.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("failed to encode request JSON")]
    Encoding(#[source] serde_json::Error),

    /// Connection failure, timeout or any other transport-level error.
    #[error("network error")]
    Network(#[source] reqwest::Error),

    #[error("failed to parse JSON response")]
    Parse(#[source] serde_json::Error),
}

pub type Result<T, E = ShellbotError> = std::result::Result<T, E>;
