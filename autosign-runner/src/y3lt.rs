//! Single-account 3ylt check-in flow
//!
//! Login, one check-in, one push. A failed login halts the flow before the
//! push is ever reached, so only sign-in outcomes are reported; that gap is
//! kept deliberately.

use serde_json::Value;
use tracing::{error, info, warn};

use autosign_clients::y3lt::{Y3ltClient, Y3LT_BASE_URL};
use autosign_core::config::Y3ltConfig;
use autosign_notify::{PushServiceClient, DEFAULT_PUSH_URL};

/// Fixed message pushed when the check-in call fails
pub const MSG_SIGNIN_FAILED: &str = "签到失败";

/// Drives the single-account portal flow end to end.
pub struct Y3ltRunner {
    base_url: String,
    push_url: String,
}

impl Y3ltRunner {
    pub fn new() -> Self {
        Self::with_endpoints(Y3LT_BASE_URL, DEFAULT_PUSH_URL)
    }

    pub fn with_endpoints(base_url: impl Into<String>, push_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            push_url: push_url.into(),
        }
    }

    /// Run the flow. Returns the check-in payload when the whole chain
    /// succeeded, `None` otherwise; all failures are already logged.
    pub async fn run(&self, config: &Y3ltConfig) -> Option<Value> {
        let client = match Y3ltClient::new(&self.base_url) {
            Ok(client) => client,
            Err(e) => {
                error!("{e}");
                return None;
            }
        };

        let token = match client
            .login(&config.username, &config.password, config.cookie.as_deref())
            .await
        {
            Ok(token) => token,
            Err(e) => {
                // No push on a failed login; the failure body was already
                // logged by the client.
                warn!("{e}");
                return None;
            }
        };

        let (message, outcome) = match client.sign_in(&token).await {
            Ok(result) => (format!("签到成功: {result}"), Some(result)),
            Err(e) => {
                warn!("{e}");
                (MSG_SIGNIN_FAILED.to_string(), None)
            }
        };

        let push = PushServiceClient::new(self.push_url.clone());
        match push.send_message(&message).await {
            Ok(reply) => info!("消息推送结果: {reply}"),
            Err(e) => warn!("消息推送失败: {e}"),
        }

        outcome
    }
}

impl Default for Y3ltRunner {
    fn default() -> Self {
        Self::new()
    }
}
