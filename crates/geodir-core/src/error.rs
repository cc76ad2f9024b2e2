// crates/geodir-core/src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while constructing or configuring the directory stack.
///
/// Lookups themselves never surface these: see [`LookupError`] and the
/// sentinel policy documented on [`crate::DirectoryClient`].
#[derive(Debug, Error)]
pub enum GeoDirError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, GeoDirError>;

/// Why a single directory lookup produced no data.
///
/// The HTTP client keeps this taxonomy internally for logging and then
/// collapses every variant into an empty list or `None`.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Network unreachable, connection refused, timeout.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status (404 for unknown names).
    #[error("directory responded with status {0}")]
    Status(StatusCode),

    /// Success status but nothing usable in the payload.
    #[error("directory returned no entries")]
    Empty,

    /// Body did not match the expected JSON shape.
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("cannot build endpoint URL from base {0}")]
    Endpoint(String),
}

impl LookupError {
    /// Short, stable label used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::Transport(e) if e.is_timeout() => "timeout",
            LookupError::Transport(_) => "transport",
            LookupError::Status(_) => "status",
            LookupError::Empty => "empty",
            LookupError::Malformed(_) => "malformed",
            LookupError::Endpoint(_) => "endpoint",
        }
    }

    /// True for the "service answered, but there is nothing" family.
    pub fn is_not_found(&self) -> bool {
        match self {
            LookupError::Status(s) => *s == StatusCode::NOT_FOUND,
            LookupError::Empty => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_family() {
        assert!(LookupError::Status(StatusCode::NOT_FOUND).is_not_found());
        assert!(LookupError::Empty.is_not_found());
        assert!(!LookupError::Status(StatusCode::INTERNAL_SERVER_ERROR).is_not_found());

        let malformed = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = LookupError::from(malformed);
        assert!(!err.is_not_found());
        assert_eq!(err.kind(), "malformed");
    }
}
