#![allow(clippy::unwrap_used)]
// Integration tests for the OH2 (JSON) surface using wiremock.

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hably_api::{Connection, ConnectionKind, Error, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Connection) {
    let server = MockServer::start().await;
    let uri = server.uri();
    // `Connection::new` builds a blocking reqwest client, so construct it on
    // the blocking pool rather than directly on the async runtime thread.
    let connection = tokio::task::spawn_blocking(move || {
        Connection::new(
            ConnectionKind::Local,
            &uri,
            None,
            None,
            &TransportConfig::default(),
        )
        .unwrap()
    })
    .await
    .unwrap();
    (server, connection)
}

// ── Sitemap list ────────────────────────────────────────────────────

#[tokio::test]
async fn test_sitemap_list() {
    let (server, connection) = setup().await;

    let payload = json!([
        {
            "name": "demo",
            "label": "Main Menu",
            "link": "http://myopenhab/rest/sitemaps/demo",
            "homepage": { "link": "http://myopenhab/rest/sitemaps/demo/demo", "leaf": false }
        },
        { "name": "_default", "label": "Home" }
    ]);

    Mock::given(method("GET"))
        .and(path("/rest/sitemaps"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&payload))
        .mount(&server)
        .await;

    let sitemaps = connection.sitemap_list_v2().await.unwrap();

    assert_eq!(sitemaps.len(), 2);
    assert_eq!(sitemaps[0].name, "demo");
    assert_eq!(sitemaps[0].label.as_deref(), Some("Main Menu"));
    assert_eq!(
        sitemaps[0].homepage.as_ref().unwrap().link.as_deref(),
        Some("http://myopenhab/rest/sitemaps/demo/demo")
    );
    assert_eq!(sitemaps[1].name, "_default");
    assert!(sitemaps[1].link.is_none());
}

#[tokio::test]
async fn test_sitemap_list_malformed_payload() {
    let (server, connection) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/sitemaps"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let result = connection.sitemap_list_v2().await;

    match result {
        Err(Error::Deserialization { ref body, .. }) => {
            assert!(body.contains("not json"), "raw body should be retained");
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_sitemap_list_server_error() {
    let (server, connection) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/sitemaps"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = connection.sitemap_list_v2().await;

    assert!(
        matches!(result, Err(Error::UnexpectedStatus { status: 500, .. })),
        "expected UnexpectedStatus, got: {result:?}"
    );
}

// ── Authentication ──────────────────────────────────────────────────

#[tokio::test]
async fn test_credentials_attach_as_basic_auth() {
    let server = MockServer::start().await;
    let password: SecretString = "pass".to_string().into();
    let uri = server.uri();
    // `Connection::new` builds a blocking reqwest client, so construct it on
    // the blocking pool rather than directly on the async runtime thread.
    let connection = tokio::task::spawn_blocking(move || {
        Connection::new(
            ConnectionKind::Remote,
            &uri,
            Some("user".into()),
            Some(password),
            &TransportConfig::default(),
        )
        .unwrap()
    })
    .await
    .unwrap();

    // "user:pass" in base64 -- only a request carrying it matches.
    Mock::given(method("GET"))
        .and(path("/rest/sitemaps"))
        .and(header("authorization", "Basic dXNlcjpwYXNz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let sitemaps = connection.sitemap_list_v2().await.unwrap();
    assert!(sitemaps.is_empty());
}

// ── Items ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_item() {
    let (server, connection) = setup().await;

    let payload = json!({
        "name": "DemoSwitch",
        "type": "Switch",
        "state": "ON",
        "link": "http://myopenhab/rest/items/DemoSwitch"
    });

    Mock::given(method("GET"))
        .and(path("/rest/items/DemoSwitch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&payload))
        .mount(&server)
        .await;

    let item = connection.item("DemoSwitch").await.unwrap();

    assert_eq!(item.name, "DemoSwitch");
    assert_eq!(item.item_type.as_deref(), Some("Switch"));
    assert_eq!(item.state.as_deref(), Some("ON"));
    assert!(item.group_type.is_none());
}

#[tokio::test]
async fn test_send_command() {
    let (server, connection) = setup().await;

    Mock::given(method("POST"))
        .and(path("/rest/items/DemoSwitch"))
        .and(header("content-type", "text/plain;charset=UTF-8"))
        .and(body_string("ON"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let link = format!("{}/rest/items/DemoSwitch", server.uri());
    connection.send_command(&link, "ON").await.unwrap();
}

#[tokio::test]
async fn test_send_command_rejected() {
    let (server, connection) = setup().await;

    Mock::given(method("POST"))
        .and(path("/rest/items/ReadOnly"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such item"))
        .mount(&server)
        .await;

    let link = format!("{}/rest/items/ReadOnly", server.uri());
    let result = connection.send_command(&link, "ON").await;

    assert!(
        matches!(result, Err(Error::UnexpectedStatus { status: 404, .. })),
        "expected UnexpectedStatus, got: {result:?}"
    );
}
