//! Service-level error types
//!
//! These cover start-up and infrastructure concerns (configuration, database
//! connection, I/O). Request-pipeline outcomes use
//! [`ApiError`](crate::handlers::ApiError) instead.

use thiserror::Error;

/// Result type alias using the service error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the service
///
/// Large error variants are boxed to reduce stack size
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Database could not be reached at start-up
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

// Manual From implementation for the boxed variant
impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_display() {
        let err = Error::Unavailable("pool closed".to_string());
        assert_eq!(err.to_string(), "Service unavailable: pool closed");
    }

    #[test]
    fn test_figment_error_is_boxed() {
        let err: Error = figment::Error::from("missing field `name`".to_string()).into();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken").into();
        assert!(err.to_string().contains("port taken"));
    }
}
