//! Integration tests for the HTTP client.
//!
//! These tests verify header handling, query encoding, response
//! normalization, and error mapping against a mock server.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lemonsqueezy_api::{ApiKey, Client, Error, HttpMethod, Request};

fn test_client(mock_server: &MockServer) -> Client {
    Client::with_base_url(ApiKey::new("test-key").unwrap(), mock_server.uri())
}

#[tokio::test]
async fn test_requests_carry_bearer_auth_and_json_api_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores"))
        .and(header("Authorization", "Bearer test-key"))
        .and(header("Accept", "application/vnd.api+json"))
        .and(header("Content-Type", "application/vnd.api+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client.list_stores(Default::default()).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_get_encodes_query_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders"))
        .and(query_param("filter[store_id]", "1234"))
        .and(query_param("page[number]", "2"))
        .and(query_param("page[size]", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let request = Request::new(HttpMethod::Get, "orders").query(vec![
        ("filter[store_id]".to_string(), "1234".to_string()),
        ("page[number]".to_string(), "2".to_string()),
        ("page[size]".to_string(), "50".to_string()),
    ]);

    let result = client.send(request).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_success_envelope_passes_through_unchanged() {
    let mock_server = MockServer::start().await;

    let envelope = json!({
        "data": { "type": "orders", "id": "1", "attributes": { "total": 999 } },
        "included": [{ "type": "customers", "id": "7" }],
        "meta": { "page": { "total": 1 } },
        "links": { "self": "https://api.lemonsqueezy.com/v1/orders/1" },
    });

    Mock::given(method("GET"))
        .and(path("/orders/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope.clone()))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let document = client.get_order("1", None).await.unwrap();

    assert_eq!(document, envelope);
}

#[tokio::test]
async fn test_non_2xx_response_maps_to_api_error_with_errors_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{ "status": "404", "detail": "Not found" }],
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let error = client.get_order("999", None).await.unwrap_err();

    match error {
        Error::Api(e) => {
            assert_eq!(e.status, 404);
            assert_eq!(e.status_text, "Not Found");
            assert_eq!(e.errors.len(), 1);
            assert_eq!(e.errors[0]["detail"], "Not found");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_yields_empty_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let error = client.list_stores(Default::default()).await.unwrap_err();

    match error {
        Error::Api(e) => {
            assert_eq!(e.status, 502);
            assert_eq!(e.status_text, "Bad Gateway");
            assert!(e.errors.is_empty());
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_ignores_response_body() {
    let mock_server = MockServer::start().await;

    // Some deployments answer DELETE with a JSON body anyway; it must be
    // discarded, not parsed.
    Mock::given(method("DELETE"))
        .and(path("/webhooks/5"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json {"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client.delete_webhook("5").await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_delete_failure_still_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/discounts/5"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{ "detail": "Discount not found" }],
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let error = client.delete_discount("5").await.unwrap_err();

    match error {
        Error::Api(e) => {
            assert_eq!(e.status, 404);
            assert_eq!(e.errors[0]["detail"], "Discount not found");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_network_failure_maps_to_network_error() {
    // Point at a closed port; no server is listening.
    let client = Client::with_base_url(
        ApiKey::new("test-key").unwrap(),
        "http://127.0.0.1:1/v1",
    );

    let error = client.list_stores(Default::default()).await.unwrap_err();
    assert!(matches!(error, Error::Network(_)));
}

#[tokio::test]
async fn test_error_message_formats() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": [{ "detail": "Unauthorized" }],
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let error = client.list_stores(Default::default()).await.unwrap_err();

    assert_eq!(
        error.to_string(),
        "Lemon Squeezy API returned 401 Unauthorized",
    );
}
