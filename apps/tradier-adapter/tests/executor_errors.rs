//! Request Executor Integration Tests
//!
//! Status classification, decoding, timeouts and session release against a
//! mock Tradier server.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::json;
use test_case::test_case;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tradier_adapter::{
    ErrorKind, RawDataKey, Session, TradierAdapter, TradierConfig, TradierEnvironment,
    TradierError, TransportFailure,
};

fn config(server: &MockServer) -> TradierConfig {
    TradierConfig::new("test-token", TradierEnvironment::Sandbox).with_base_url(server.uri())
}

async fn mount_clock(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/v1/markets/clock"))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn sends_bearer_token_and_accept_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/user/profile"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"profile": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = TradierAdapter::new(&config(&server), None).unwrap();
    adapter.get_user_profile().await.unwrap();
}

#[test_case(400, ErrorKind::Request ; "bad request")]
#[test_case(401, ErrorKind::Authorization ; "unauthorized")]
#[test_case(403, ErrorKind::Transport ; "forbidden")]
#[test_case(404, ErrorKind::Transport ; "not found")]
#[test_case(500, ErrorKind::Transport ; "server error")]
#[test_case(503, ErrorKind::Transport ; "unavailable")]
#[tokio::test]
async fn status_classification(status: u16, expected: ErrorKind) {
    let server = MockServer::start().await;
    mount_clock(
        &server,
        ResponseTemplate::new(status).set_body_string("upstream said no"),
    )
    .await;

    let adapter = TradierAdapter::new(&config(&server), None).unwrap();
    let err = adapter.get_clock(false).await.unwrap_err();

    assert_eq!(err.kind(), expected);
    assert_eq!(err.status(), StatusCode::from_u16(status).ok());
    assert_eq!(err.body(), Some("upstream said no"));
    assert!(!adapter.raw_data().contains(RawDataKey::Clock));
}

#[tokio::test]
async fn unauthorized_keeps_prior_cache_entry() {
    let server = MockServer::start().await;
    let first = json!({"clock": {"state": "open"}});

    Mock::given(method("GET"))
        .and(path("/v1/markets/clock"))
        .respond_with(ResponseTemplate::new(200).set_body_json(first.clone()))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/markets/clock"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"fault": {"faultstring": "Invalid access token"}})),
        )
        .mount(&server)
        .await;

    let adapter = TradierAdapter::new(&config(&server), None).unwrap();
    assert_eq!(adapter.get_clock(false).await.unwrap(), first);

    let err = adapter.get_clock(false).await.unwrap_err();
    assert!(matches!(err, TradierError::Authorization { .. }));
    assert!(err.is_login_error());
    assert!(err.body().unwrap().contains("Invalid access token"));
    assert_eq!(adapter.raw_data().get(RawDataKey::Clock), Some(first));
}

#[tokio::test]
async fn unauthorized_leaves_unset_key_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/accounts/VA000001/balances"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"fault": {"faultstring": "Invalid access token"}})),
        )
        .mount(&server)
        .await;

    let adapter = TradierAdapter::new(&config(&server), None).unwrap();
    let err = adapter.get_balances("VA000001").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Authorization);
    assert!(adapter.raw_data().get(RawDataKey::Balances).is_none());
    assert!(adapter.raw_data().is_empty());
}

#[tokio::test]
async fn invalid_json_is_transport_decode() {
    let server = MockServer::start().await;
    mount_clock(
        &server,
        ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
    )
    .await;

    let adapter = TradierAdapter::new(&config(&server), None).unwrap();
    let err = adapter.get_clock(false).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(matches!(
        err,
        TradierError::Transport(TransportFailure::Decode { .. })
    ));
    assert_eq!(err.body(), Some("<html>maintenance</html>"));
    assert!(adapter.raw_data().is_empty());
}

#[tokio::test]
async fn json_scalar_body_is_accepted() {
    let server = MockServer::start().await;
    mount_clock(&server, ResponseTemplate::new(200).set_body_string("null")).await;

    let adapter = TradierAdapter::new(&config(&server), None).unwrap();
    let document = adapter.get_clock(false).await.unwrap();

    assert!(document.is_null());
    assert_eq!(
        adapter.raw_data().get(RawDataKey::Clock),
        Some(serde_json::Value::Null)
    );
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    mount_clock(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"clock": {}}))
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    let config = config(&server).with_timeout(Duration::from_millis(100));
    let adapter = TradierAdapter::new(&config, None).unwrap();
    let err = adapter.get_clock(false).await.unwrap_err();

    assert!(matches!(
        err,
        TradierError::Transport(TransportFailure::Timeout(_))
    ));
    assert!(adapter.raw_data().is_empty());

    let stats = adapter.session_stats();
    assert_eq!(stats.opened, 1);
    assert_eq!(stats.released, 1);
}

#[tokio::test]
async fn refused_connection_is_transport() {
    let config =
        TradierConfig::new("test-token", TradierEnvironment::Sandbox).with_base_url("http://127.0.0.1:1");
    let adapter = TradierAdapter::new(&config, None).unwrap();

    let err = adapter.get_user_profile().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.status().is_none());
    assert!(adapter.raw_data().is_empty());
}

#[tokio::test]
async fn ephemeral_sessions_released_once_per_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/markets/clock"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"clock": {}})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/markets/calendar"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/markets/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{broken"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/markets/lookup"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let adapter = TradierAdapter::new(&config(&server), None).unwrap();
    assert!(adapter.get_clock(false).await.is_ok());
    assert!(adapter.get_market_calendar(None, None).await.is_err());
    assert!(adapter.search_symbols("apple", false).await.is_err());
    assert!(
        adapter
            .lookup_symbols::<&str>("AA", &[], &[])
            .await
            .is_err()
    );

    let stats = adapter.session_stats();
    assert_eq!(stats.opened, 4);
    assert_eq!(stats.released, 4);
    assert_eq!(stats.in_flight(), 0);
}

#[tokio::test]
async fn borrowed_session_is_never_released() {
    let server = MockServer::start().await;
    mount_clock(&server, ResponseTemplate::new(200).set_body_json(json!({"clock": {}}))).await;
    Mock::given(method("GET"))
        .and(path("/v1/markets/calendar"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let adapter =
        TradierAdapter::with_session(&config(&server), Session::borrowed(client.clone())).unwrap();

    for _ in 0..3 {
        adapter.get_clock(false).await.unwrap();
        adapter.get_market_calendar(Some(6), Some(2024)).await.unwrap_err();
    }

    let stats = adapter.session_stats();
    assert_eq!(stats.opened, 0);
    assert_eq!(stats.released, 0);

    // The caller's client is still usable after the adapter is gone.
    drop(adapter);
    let response = client
        .get(format!("{}/v1/markets/clock", server.uri()))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
}

#[tokio::test]
async fn empty_token_fails_before_any_request() {
    let server = MockServer::start().await;
    let config = TradierConfig::new("", TradierEnvironment::Sandbox).with_base_url(server.uri());

    let err = TradierAdapter::new(&config, None).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Login);
    assert!(server.received_requests().await.unwrap().is_empty());
}
