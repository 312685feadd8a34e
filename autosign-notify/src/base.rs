//! Base trait for notification sinks

use async_trait::async_trait;

/// Notification errors
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, NotifyError>;

/// A channel that can deliver one text report to the operator
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sink name, for logs
    fn name(&self) -> &str;

    /// Deliver a report
    async fn notify(&self, title: &str, body: &str) -> Result<()>;
}

/// Null sink used when no push endpoint is configured.
///
/// Delivery is a no-op that always succeeds, so callers never branch on
/// sink presence.
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    fn name(&self) -> &str {
        "noop"
    }

    async fn notify(&self, _title: &str, _body: &str) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_notifier_always_succeeds() {
        let sink = NoopNotifier;
        assert_eq!(sink.name(), "noop");
        assert!(sink.notify("title", "body").await.is_ok());
    }

    #[test]
    fn test_notify_error_display() {
        let err = NotifyError::SendFailed("connection reset".to_string());
        assert_eq!(err.to_string(), "Send failed: connection reset");

        let err = NotifyError::InvalidConfig("empty endpoint".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: empty endpoint");
    }
}
