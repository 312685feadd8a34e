//! Generic push-message endpoint client
//!
//! The endpoint takes a JSON body with a single `message` field and answers
//! with JSON; the reply only matters for logging.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::base::{Notifier, NotifyError, Result};

/// Production push endpoint
pub const DEFAULT_PUSH_URL: &str = "https://api.pushservice.com/send";

#[derive(Debug, Serialize)]
struct PushRequest<'a> {
    message: &'a str,
}

/// Client for the push endpoint
pub struct PushServiceClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PushServiceClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            endpoint: endpoint.into(),
        }
    }

    /// Send one message; returns the endpoint's JSON reply for logging.
    pub async fn send_message(&self, message: &str) -> Result<Value> {
        let res = self
            .http
            .post(&self.endpoint)
            .json(&PushRequest { message })
            .send()
            .await
            .map_err(|e| NotifyError::SendFailed(e.to_string()))?;

        let status = res.status();
        let body = res.json::<Value>().await.unwrap_or(Value::Null);
        if !status.is_success() {
            return Err(NotifyError::SendFailed(format!(
                "push endpoint returned status {status}: {body}"
            )));
        }
        Ok(body)
    }
}

#[async_trait]
impl Notifier for PushServiceClient {
    fn name(&self) -> &str {
        "pushservice"
    }

    async fn notify(&self, title: &str, body: &str) -> Result<()> {
        let message = format!("{title}\n{body}");
        let reply = self.send_message(&message).await?;
        debug!("消息推送结果: {reply}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_send_message_posts_message_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/send"))
            .and(body_json(json!({"message": "签到成功"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
            .expect(1)
            .mount(&server)
            .await;

        let client = PushServiceClient::new(format!("{}/send", server.uri()));
        let reply = client.send_message("签到成功").await.unwrap();
        assert_eq!(reply, json!({"code": 0}));
    }

    #[tokio::test]
    async fn test_send_message_non_success_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/send"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"code": 1})))
            .mount(&server)
            .await;

        let client = PushServiceClient::new(format!("{}/send", server.uri()));
        let err = client.send_message("签到成功").await.unwrap_err();
        assert!(matches!(err, NotifyError::SendFailed(_)));
    }

    #[tokio::test]
    async fn test_notify_joins_title_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/send"))
            .and(body_json(json!({"message": "报告\n第一行\n第二行"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
            .expect(1)
            .mount(&server)
            .await;

        let client = PushServiceClient::new(format!("{}/send", server.uri()));
        client.notify("报告", "第一行\n第二行").await.unwrap();
    }
}
