//! Error types for autosign

use thiserror::Error;

/// The main error type for autosign operations
///
/// Operator-facing report text is rendered from these kinds by the flow
/// runners as a separate final step; `Display` here is for logs only.
#[derive(Error, Debug)]
pub enum Error {
    /// Required configuration is absent or empty
    #[error("Missing configuration: {0}")]
    ConfigMissing(String),

    /// Configuration is present but unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// Login was rejected or the expected session credential never appeared
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Network-level failure (connect, TLS, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote answered with something that cannot be treated as success
    #[error("Unexpected response (status {status}): {body}")]
    UnexpectedResponse { status: u16, body: String },

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A specialized Result type for autosign operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ConfigMissing("WINMOES_ACCOUNT".to_string());
        assert_eq!(err.to_string(), "Missing configuration: WINMOES_ACCOUNT");

        let err = Error::AuthFailed("no session cookie".to_string());
        assert_eq!(err.to_string(), "Authentication failed: no session cookie");

        let err = Error::UnexpectedResponse {
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected response (status 502): Bad Gateway"
        );
    }

    #[test]
    fn test_serde_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
