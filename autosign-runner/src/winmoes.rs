//! Multi-account winmoes check-in flow
//!
//! Accounts run strictly one after another, each on a fresh session. Every
//! outcome — success, repeat check-in, login rejection, transport fault —
//! becomes one report line; nothing aborts the run.

use std::time::Duration;

use tracing::{info, warn};

use autosign_clients::winmoes::{render_reply, WinmoesClient, WINMOES_BASE_URL};
use autosign_core::config::WinmoesConfig;
use autosign_core::Error;
use autosign_notify::Notifier;

use crate::report::Report;

/// Title of the consolidated report push
pub const REPORT_TITLE: &str = "云间签到任务报告";

/// Fixed message for a rejected or failed login
pub const MSG_LOGIN_FAILED: &str = "登录失败，请检查账号密码或网站是否开启了验证码/防火墙。";

const DEFAULT_ACCOUNT_DELAY: Duration = Duration::from_secs(1);

/// Drives check-in for every configured account and pushes one report.
pub struct WinmoesRunner {
    base_url: String,
    account_delay: Duration,
}

impl WinmoesRunner {
    pub fn new() -> Self {
        Self::with_base_url(WINMOES_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            account_delay: DEFAULT_ACCOUNT_DELAY,
        }
    }

    /// Pause between consecutive accounts; the site rate-limits bursts.
    pub fn account_delay(mut self, delay: Duration) -> Self {
        self.account_delay = delay;
        self
    }

    /// Run every configured account in order, then push the consolidated
    /// report to the sink. Returns the report for the caller to display.
    pub async fn run(&self, config: &WinmoesConfig, notifier: &dyn Notifier) -> Report {
        let mut report = Report::new();

        for (idx, (account, password)) in config.pairs().enumerate() {
            if idx > 0 && !self.account_delay.is_zero() {
                tokio::time::sleep(self.account_delay).await;
            }
            info!("--- 账号 {account} 开始执行 ---");
            let message = self.checkin_message(account, password).await;
            info!("{message}");
            report.push(format!("账号[{account}]: {message}"));
        }

        if let Err(e) = notifier.notify(REPORT_TITLE, &report.render()).await {
            warn!("推送失败 ({}): {e}", notifier.name());
        }

        report
    }

    async fn checkin_message(&self, account: &str, password: &str) -> String {
        let client = match WinmoesClient::new(&self.base_url, account, password) {
            Ok(client) => client,
            Err(e) => return render_checkin_error(&e),
        };

        if let Err(e) = client.login().await {
            warn!("登录异常: {e}");
            return MSG_LOGIN_FAILED.to_string();
        }

        match client.check_in().await {
            Ok(reply) => render_reply(&reply),
            Err(e) => render_checkin_error(&e),
        }
    }
}

impl Default for WinmoesRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Final rendering step for check-in failures
fn render_checkin_error(err: &Error) -> String {
    match err {
        Error::UnexpectedResponse { status, .. } => {
            format!("签到请求失败，状态码: {status}")
        }
        other => format!("签到过程出错: {other}"),
    }
}
