//! 3ylt.xyz account-portal client
//!
//! JSON login that hands back a bearer token, then a bearer-authenticated
//! check-in call. A pre-authenticated session cookie can stand in for the
//! credentials, in which case login is a plain GET.

use reqwest::header::COOKIE;
use reqwest::Url;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use autosign_core::{Error, Result};

/// Production base URL
pub const Y3LT_BASE_URL: &str = "https://www.3ylt.xyz";

const LOGIN_PATH: &str = "/api/login";
const SIGNIN_PATH: &str = "/api/signin";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Stateless client for the 3ylt portal; authentication is carried per call
/// (cookie on login, bearer token on check-in), so one client serves the
/// whole flow.
pub struct Y3ltClient {
    http: reqwest::Client,
    login_url: Url,
    signin_url: Url,
}

impl Y3ltClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| Error::Config(format!("invalid base url {base_url}: {e}")))?;
        let login_url = base
            .join(LOGIN_PATH)
            .map_err(|e| Error::Config(e.to_string()))?;
        let signin_url = base
            .join(SIGNIN_PATH)
            .map_err(|e| Error::Config(e.to_string()))?;

        Ok(Self {
            // No request timeout here; the portal is slow on cold starts and
            // the flow runs unattended.
            http: reqwest::Client::new(),
            login_url,
            signin_url,
        })
    }

    /// Log in and return the bearer token.
    ///
    /// With a cookie the credentials are not submitted at all; the portal
    /// refreshes the session from the cookie on a plain GET. Success is
    /// status 200 plus a string `token` field in the body.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        cookie: Option<&str>,
    ) -> Result<String> {
        let res = match cookie {
            Some(cookie) => {
                self.http
                    .get(self.login_url.clone())
                    .header(COOKIE, cookie)
                    .send()
                    .await?
            }
            None => {
                self.http
                    .post(self.login_url.clone())
                    .json(&LoginRequest { username, password })
                    .send()
                    .await?
            }
        };

        let status = res.status().as_u16();
        let body = res.json::<Value>().await.unwrap_or(Value::Null);

        if status == 200 {
            if let Some(token) = body.get("token").and_then(Value::as_str) {
                return Ok(token.to_string());
            }
        }
        warn!("登录失败: {body}");
        Err(Error::AuthFailed(format!(
            "3ylt login rejected with status {status}"
        )))
    }

    /// Perform the check-in with the token obtained from [`login`].
    ///
    /// [`login`]: Y3ltClient::login
    pub async fn sign_in(&self, token: &str) -> Result<Value> {
        let res = self
            .http
            .post(self.signin_url.clone())
            .bearer_auth(token)
            .send()
            .await?;

        let status = res.status().as_u16();
        let body = res.json::<Value>().await.unwrap_or(Value::Null);

        if status == 200 {
            return Ok(body);
        }
        warn!("签到失败: {body}");
        Err(Error::UnexpectedResponse {
            status,
            body: body.to_string(),
        })
    }
}
