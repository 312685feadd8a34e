//! Environment-variable loaders for the configuration schema

use tracing::warn;

use super::schema::{LoggingConfig, NotifyConfig, WinmoesConfig, Y3ltConfig};
use crate::error::{Error, Result};

/// `&`-joined account list for the winmoes flow
pub const ENV_WINMOES_ACCOUNT: &str = "WINMOES_ACCOUNT";
/// `&`-joined password list, positionally paired with the accounts
pub const ENV_WINMOES_PASSWORD: &str = "WINMOES_PASSWORD";
/// 3ylt username
pub const ENV_Y3LT_USERNAME: &str = "Y3LT_SIGNIN_USERNAME";
/// 3ylt password
pub const ENV_Y3LT_PASSWORD: &str = "Y3LT_SIGNIN_PASSWORD";
/// Optional pre-authenticated 3ylt session cookie
pub const ENV_Y3LT_COOKIE: &str = "Y3LT_SIGNIN_COOKIE";
/// Optional push endpoint for the winmoes report
pub const ENV_PUSH_URL: &str = "AUTOSIGN_PUSH_URL";
/// Optional log-file directory
pub const ENV_LOG_DIR: &str = "AUTOSIGN_LOG_DIR";

/// Delimiter between entries of the multi-account variables
pub const ACCOUNT_DELIMITER: char = '&';

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

impl WinmoesConfig {
    /// Load the multi-account credentials from the environment.
    ///
    /// Absent or empty variables are `ConfigMissing`; the caller decides
    /// whether that terminates the run.
    pub fn from_env() -> Result<Self> {
        let accounts = env_non_empty(ENV_WINMOES_ACCOUNT)
            .ok_or_else(|| Error::ConfigMissing(ENV_WINMOES_ACCOUNT.to_string()))?;
        let passwords = env_non_empty(ENV_WINMOES_PASSWORD)
            .ok_or_else(|| Error::ConfigMissing(ENV_WINMOES_PASSWORD.to_string()))?;

        let accounts: Vec<String> = accounts
            .split(ACCOUNT_DELIMITER)
            .map(str::to_string)
            .collect();
        let passwords: Vec<String> = passwords
            .split(ACCOUNT_DELIMITER)
            .map(str::to_string)
            .collect();

        if accounts.len() != passwords.len() {
            warn!(
                "{} has {} entries but {} has {}; extra entries are ignored",
                ENV_WINMOES_ACCOUNT,
                accounts.len(),
                ENV_WINMOES_PASSWORD,
                passwords.len()
            );
        }

        Ok(Self {
            accounts,
            passwords,
        })
    }
}

impl Y3ltConfig {
    /// Load the single-account credentials from the environment.
    ///
    /// Username and password are required; the session cookie is optional
    /// and an empty value counts as absent.
    pub fn from_env() -> Result<Self> {
        let username = env_non_empty(ENV_Y3LT_USERNAME)
            .ok_or_else(|| Error::ConfigMissing(ENV_Y3LT_USERNAME.to_string()))?;
        let password = env_non_empty(ENV_Y3LT_PASSWORD)
            .ok_or_else(|| Error::ConfigMissing(ENV_Y3LT_PASSWORD.to_string()))?;

        Ok(Self {
            username,
            password,
            cookie: env_non_empty(ENV_Y3LT_COOKIE),
        })
    }
}

impl NotifyConfig {
    /// Load the sink endpoint from the environment; absence is not an error.
    pub fn from_env() -> Self {
        Self {
            push_url: env_non_empty(ENV_PUSH_URL),
        }
    }
}

impl LoggingConfig {
    /// Load logging overrides from the environment.
    ///
    /// `RUST_LOG` is handled later by the `EnvFilter` itself; only the
    /// format and file directory are read here.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: defaults.level,
            format: std::env::var("LOG_FORMAT").unwrap_or(defaults.format),
            dir: env_non_empty(ENV_LOG_DIR),
        }
    }
}
