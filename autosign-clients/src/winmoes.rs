//! winmoes.com rewards-site client
//!
//! The site is WordPress with the B2 theme: login and daily check-in are
//! both action-tagged form POSTs to the same admin-ajax endpoint, and login
//! state lives entirely in the `b2_token` cookie. The login response body is
//! not authoritative, so success is judged by cookie presence alone.

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, REFERER, USER_AGENT};
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use autosign_core::{Error, Result};

/// Production base URL
pub const WINMOES_BASE_URL: &str = "https://winmoes.com";

const AJAX_PATH: &str = "/wp-admin/admin-ajax.php";
const ACTION_LOGIN: &str = "b2_login";
const ACTION_SIGN: &str = "user_sign";
const SESSION_COOKIE: &str = "b2_token";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

// The ajax endpoint rejects requests that do not look like the site's own
// front-end javascript.
const BROWSER_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Fixed message for a repeat check-in
pub const MSG_ALREADY_SIGNED: &str = "今日已签到，请勿重复操作。";

const ALREADY_SIGNED_MARKER: &str = "已经";

/// A check-in response in a form the reporting layer can render without
/// re-parsing: either a decoded JSON document or the raw body text.
#[derive(Debug, Clone)]
pub enum CheckinReply {
    Structured(Value),
    RawText(String),
}

/// One account's session against winmoes.com.
///
/// Each account gets its own cookie jar; a client is never reused across
/// accounts.
pub struct WinmoesClient {
    http: reqwest::Client,
    jar: Arc<Jar>,
    base_url: Url,
    ajax_url: Url,
    account: String,
    password: String,
}

impl WinmoesClient {
    /// Create a client for one account.
    pub fn new(
        base_url: &str,
        account: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let base = base_url.trim_end_matches('/');
        let base_url = Url::parse(base)
            .map_err(|e| Error::Config(format!("invalid base url {base}: {e}")))?;
        let ajax_url = base_url
            .join(AJAX_PATH)
            .map_err(|e| Error::Config(e.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_UA));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/javascript, */*; q=0.01"),
        );
        headers.insert("X-Requested-With", HeaderValue::from_static("XMLHttpRequest"));
        if let Ok(referer) = HeaderValue::from_str(base) {
            headers.insert(REFERER, referer);
        }

        let jar = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .cookie_provider(jar.clone())
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            jar,
            base_url,
            ajax_url,
            account: account.into(),
            password: password.into(),
        })
    }

    /// The account this session belongs to
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Log in and establish the session.
    ///
    /// Succeeds only when the session cookie appears in the jar afterwards;
    /// the response body and status are ignored.
    pub async fn login(&self) -> Result<()> {
        let params = [
            ("action", ACTION_LOGIN),
            ("username", self.account.as_str()),
            ("password", self.password.as_str()),
        ];
        self.http
            .post(self.ajax_url.clone())
            .form(&params)
            .send()
            .await?;

        if self.has_session_cookie() {
            debug!("account {} logged in", self.account);
            Ok(())
        } else {
            Err(Error::AuthFailed(format!(
                "no {SESSION_COOKIE} cookie after login for {}",
                self.account
            )))
        }
    }

    /// Perform the daily check-in on an established session.
    pub async fn check_in(&self) -> Result<CheckinReply> {
        let params = [("action", ACTION_SIGN)];
        let res = self
            .http
            .post(self.ajax_url.clone())
            .form(&params)
            .send()
            .await?;

        let status = res.status().as_u16();
        let body = res.text().await?;
        if status != 200 {
            return Err(Error::UnexpectedResponse { status, body });
        }

        Ok(match serde_json::from_str::<Value>(&body) {
            Ok(value) => CheckinReply::Structured(value),
            Err(_) => CheckinReply::RawText(body),
        })
    }

    fn has_session_cookie(&self) -> bool {
        let Some(header) = self.jar.cookies(&self.base_url) else {
            return false;
        };
        let Ok(cookies) = header.to_str() else {
            return false;
        };
        let prefix = format!("{SESSION_COOKIE}=");
        cookies
            .split(';')
            .any(|c| c.trim_start().starts_with(&prefix))
    }
}

/// Render a check-in reply into the operator-facing message.
///
/// Pure; the priority order mirrors how the site actually answers: a JSON
/// object on a normal day, a plain-text complaint on a repeat check-in, and
/// assorted raw bodies otherwise.
pub fn render_reply(reply: &CheckinReply) -> String {
    match reply {
        CheckinReply::Structured(Value::Object(map)) => {
            let data = match map.get("data") {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
            };
            format!("签到成功！{data}")
        }
        CheckinReply::Structured(other) => {
            format!("签到返回: {}", truncate_chars(&other.to_string(), 50))
        }
        CheckinReply::RawText(text) if text.contains(ALREADY_SIGNED_MARKER) => {
            MSG_ALREADY_SIGNED.to_string()
        }
        CheckinReply::RawText(text) => {
            format!("签到成功 (原始响应): {}", truncate_chars(text, 30))
        }
    }
}

// Char-boundary-safe prefix; byte slicing would panic mid-codepoint on the
// site's Chinese bodies.
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
