use thiserror::Error;

/// Why a snapshot could not be obtained.
///
/// Every variant has the same user-visible outcome (the view keeps showing
/// its loading placeholder). The kinds are kept apart for logs and for the
/// retry policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection failure, DNS, TLS and similar transport errors.
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    /// The endpoint answered with a non-success status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The body was not a valid snapshot document.
    #[error("parse error: {0}")]
    Parse(String),

    /// Reading a local snapshot file failed.
    #[error("io error: {0}")]
    Io(String),
}

impl FetchError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Network(_) | FetchError::Timeout => true,
            FetchError::Status(code) => *code >= 500,
            FetchError::Parse(_) | FetchError::Io(_) => false,
        }
    }
}
