//! Configuration schema definitions
//!
//! The whole configuration surface is environment variables (plus an
//! optional `.env` file loaded by the binary); see `loader` for the
//! variable names.

/// Credentials for the winmoes.com multi-account flow
///
/// The i-th account pairs with the i-th password. Excess entries on either
/// side are ignored.
#[derive(Debug, Clone, Default)]
pub struct WinmoesConfig {
    /// Account identifiers, in configured order
    pub accounts: Vec<String>,
    /// Passwords, positionally paired with `accounts`
    pub passwords: Vec<String>,
}

impl WinmoesConfig {
    /// Positionally paired credentials, in configured order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.accounts
            .iter()
            .map(String::as_str)
            .zip(self.passwords.iter().map(String::as_str))
    }
}

/// Credentials for the 3ylt.xyz single-account flow
#[derive(Debug, Clone, Default)]
pub struct Y3ltConfig {
    pub username: String,
    pub password: String,
    /// Pre-authenticated session cookie; when set, login is a cookie GET
    /// and the credentials are not submitted
    pub cookie: Option<String>,
}

/// Notification sink configuration
#[derive(Debug, Clone, Default)]
pub struct NotifyConfig {
    /// Push endpoint URL; `None` means no sink is configured and the run
    /// proceeds without notifications
    pub push_url: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (text, json)
    pub format: String,
    /// Directory for log files; `None` logs to stdout only
    pub dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            dir: None,
        }
    }
}
