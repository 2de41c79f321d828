//! Integration tests for client construction and credential headers.

use discourse::{AuthStrategy, DiscourseClient};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn ok_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"notifications": []})))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_anonymous_sends_only_content_type() {
    let server = ok_server().await;
    let client = DiscourseClient::new(server.uri()).unwrap();
    client.get_notifications().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let headers = &requests[0].headers;
    assert_eq!(headers.get("content-type").unwrap(), "application/json");
    assert!(!headers.contains_key("api-key"));
    assert!(!headers.contains_key("api-username"));
    assert!(!headers.contains_key("user-api-key"));
}

#[tokio::test]
async fn test_admin_headers_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notifications.json"))
        .and(header("api-key", "admin-key"))
        .and(header("api-username", "system"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"notifications": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = DiscourseClient::with_api_key(server.uri(), "admin-key", "system").unwrap();
    client.get_notifications().await.unwrap();
}

#[tokio::test]
async fn test_user_key_without_client_id_omits_header() {
    let server = ok_server().await;
    let client = DiscourseClient::with_user_api_key(server.uri(), "user-key", None).unwrap();
    client.get_notifications().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let headers = &requests[0].headers;
    assert_eq!(headers.get("user-api-key").unwrap(), "user-key");
    assert!(!headers.contains_key("user-api-client-id"));
}

#[tokio::test]
async fn test_user_key_with_client_id_sends_header() {
    let server = ok_server().await;
    let client =
        DiscourseClient::with_user_api_key(server.uri(), "user-key", Some("my-app".to_string()))
            .unwrap();
    client.get_notifications().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].headers.get("user-api-client-id").unwrap(), "my-app");
}

#[tokio::test]
async fn test_trailing_slash_yields_same_urls() {
    let server = ok_server().await;

    let plain = DiscourseClient::new(server.uri()).unwrap();
    let slashed = DiscourseClient::new(format!("{}/", server.uri())).unwrap();
    plain.get_notifications().await.unwrap();
    slashed.get_notifications().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url, requests[1].url);
    assert_eq!(requests[0].url.path(), "/notifications.json");
}

#[tokio::test]
async fn test_custom_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", "forum-bot/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"notifications": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = DiscourseClient::builder(server.uri())
        .user_agent("forum-bot/2.0")
        .build()
        .unwrap();
    client.get_notifications().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_calls_share_client() {
    let server = ok_server().await;
    let client = DiscourseClient::builder(server.uri())
        .auth(AuthStrategy::admin("k", "system"))
        .build()
        .unwrap();

    let other = client.clone();
    let (a, b) = tokio::join!(client.get_notifications(), other.get_notifications());
    assert!(a.is_ok());
    assert!(b.is_ok());
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}
