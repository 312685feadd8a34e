//! End-to-end tests for the single-account 3ylt flow against a mock portal.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use autosign_core::config::Y3ltConfig;
use autosign_runner::Y3ltRunner;

fn config(cookie: Option<&str>) -> Y3ltConfig {
    Y3ltConfig {
        username: "alice".to_string(),
        password: "pw1".to_string(),
        cookie: cookie.map(str::to_string),
    }
}

fn runner(server: &MockServer) -> Y3ltRunner {
    Y3ltRunner::with_endpoints(server.uri(), format!("{}/send", server.uri()))
}

#[tokio::test]
async fn test_success_path_pushes_result_exactly_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({"username": "alice", "password": "pw1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "tok-1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/signin"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reward": 1})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/send"))
        .and(body_json(json!({"message": "签到成功: {\"reward\":1}"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = runner(&server).run(&config(None)).await;
    assert_eq!(outcome, Some(json!({"reward": 1})));
}

#[tokio::test]
async fn test_signin_failure_pushes_fixed_failure_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "tok-1"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/signin"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/send"))
        .and(body_json(json!({"message": "签到失败"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = runner(&server).run(&config(None)).await;
    assert_eq!(outcome, None);
}

#[tokio::test]
async fn test_login_failure_skips_signin_and_push_entirely() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "bad password"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/signin"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/send"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let outcome = runner(&server).run(&config(None)).await;
    assert_eq!(outcome, None);
}

#[tokio::test]
async fn test_cookie_login_uses_get_without_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/login"))
        .and(header("cookie", "session=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "tok-2"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/signin"))
        .and(header("authorization", "Bearer tok-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = runner(&server).run(&config(Some("session=abc"))).await;
    assert_eq!(outcome, Some(json!({"ok": true})));
}
