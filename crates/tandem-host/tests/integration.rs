//! Integration tests for the HTTP host client using wiremock.

use std::time::Duration;

use serde_json::json;
use tandem_core::{ClientError, HostClient};
use tandem_host::{HostConfig, HttpHost};
use tandem_model::{Condition, HostStatus, Observation};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn host(server: &MockServer) -> HttpHost {
    HttpHost::new(HostConfig::new(server.uri(), "host-secret")).unwrap()
}

#[tokio::test]
async fn send_conditions_puts_batch_with_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/namespaces/autora/conditions"))
        .and(header("authorization", "Bearer host-secret"))
        .and(body_json(json!({"conditions": [{"soa": 100}, {"soa": 200}]})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let conditions = vec![
        Condition(json!({"soa": 100})),
        Condition(json!({"soa": 200})),
    ];
    let result = host(&server).send_conditions("autora", &conditions).await;
    assert!(result.is_ok(), "expected Ok, got: {:?}", result.err());
}

#[tokio::test]
async fn host_status_passes_time_out_in_seconds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/namespaces/autora/status"))
        .and(query_param("time_out_secs", "1800"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "available"})))
        .expect(1)
        .mount(&server)
        .await;

    let status = host(&server)
        .host_status("autora", Duration::from_secs(1800))
        .await
        .unwrap();
    assert_eq!(status, HostStatus::Available);
}

#[tokio::test]
async fn host_status_rejects_unknown_value() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/namespaces/autora/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "closed"})))
        .mount(&server)
        .await;

    let err = host(&server)
        .host_status("autora", Duration::from_secs(60))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn fetch_observations_returns_keyed_map() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/namespaces/pilot/observations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "observations": {"1": {"rt": 640}, "0": {"rt": 512}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let map = host(&server).fetch_observations("pilot").await.unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map["0"], Observation(json!({"rt": 512})));
}

#[tokio::test]
async fn unauthorized_maps_to_auth() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/namespaces/autora/observations"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid credentials"))
        .mount(&server)
        .await;

    let err = host(&server).fetch_observations("autora").await.unwrap_err();
    assert_eq!(err, ClientError::Auth("invalid credentials".into()));
}

#[tokio::test]
async fn server_error_maps_to_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/namespaces/autora/conditions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = host(&server)
        .send_conditions("autora", &[Condition(json!(1))])
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Rejected { status: 500, .. }));
}

#[tokio::test]
async fn unreachable_host_maps_to_transport() {
    let client = HttpHost::new(HostConfig::new("http://127.0.0.1:1", "host-secret")).unwrap();
    let err = client
        .host_status("autora", Duration::from_secs(60))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}
