//! Shared fixtures: canned org responses and client constructors.

use serde_json::{json, Value};
use sfsdk::net::NetClient;
use sfsdk::{ClientConfig, SessionCredentials};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "00Dxx0000001gPL!AQ4AQFakeTokenForTests";

/// Client against a mock server, with retries off so failures surface at once.
pub fn mock_client(server: &MockServer) -> NetClient {
    NetClient::with_config(
        server.uri(),
        TOKEN,
        ClientConfig::builder().without_retry().build(),
    )
    .expect("client for mock server")
}

pub fn versions_body() -> Value {
    json!([
        {"label": "Winter '18", "url": "/services/data/v41.0", "version": "41.0"},
        {"label": "Spring ’18", "url": "/services/data/v42.0", "version": "42.0"}
    ])
}

pub fn resources_body() -> Value {
    json!({
        "tooling": "/services/data/v42.0/tooling",
        "metadata": "/services/data/v42.0/metadata",
        "connect": "/services/data/v42.0/connect",
        "sobjects": "/services/data/v42.0/sobjects",
        "query": "/services/data/v42.0/query",
        "search": "/services/data/v42.0/search"
    })
}

pub fn describe_global_body() -> Value {
    json!({
        "encoding": "UTF-8",
        "maxBatchSize": 200,
        "sobjects": [
            {"name": "Account", "label": "Account", "labelPlural": "Accounts", "keyPrefix": "001",
             "custom": false, "queryable": true, "createable": true},
            {"name": "Contact", "label": "Contact", "labelPlural": "Contacts", "keyPrefix": "003",
             "custom": false, "queryable": true, "createable": true}
        ]
    })
}

pub fn describe_account_body() -> Value {
    json!({
        "name": "Account",
        "label": "Account",
        "labelPlural": "Accounts",
        "keyPrefix": "001",
        "custom": false,
        "createable": true,
        "queryable": true,
        "fields": [
            {"name": "Id", "label": "Account ID", "type": "id", "idLookup": true},
            {"name": "Name", "label": "Account Name", "type": "string", "length": 255,
             "createable": true, "updateable": true}
        ]
    })
}

pub fn metadata_account_body() -> Value {
    json!({
        "objectDescribe": {"name": "Account", "label": "Account", "custom": false, "keyPrefix": "001"},
        "recentItems": [
            {"attributes": {"type": "Account"}, "Id": "001000000000001AAA", "Name": "Acme"}
        ]
    })
}

/// Mount a GET that only answers requests carrying the test token.
pub async fn mount_get(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// A mock org answering the discovery and describe endpoints for `v42.0`.
pub async fn mock_org() -> MockServer {
    let server = MockServer::start().await;
    mount_get(&server, "/services/data/", versions_body()).await;
    mount_get(&server, "/services/data/v42.0/", resources_body()).await;
    mount_get(&server, "/services/data/v42.0/sobjects/", describe_global_body()).await;
    mount_get(
        &server,
        "/services/data/v42.0/sobjects/account/describe/",
        describe_account_body(),
    )
    .await;
    mount_get(&server, "/services/data/v42.0/sobjects/account/", metadata_account_body()).await;
    server
}

/// Session for the live suite.
///
/// Panics with instructions when the environment is not set up; live tests
/// must not pass silently without an org.
pub fn live_credentials() -> SessionCredentials {
    SessionCredentials::from_env().unwrap_or_else(|e| {
        panic!(
            "\n\nLive tests need a session: {e}\n\
             \n\
             To fix:\n\
             1. Authenticate:  sf org login web -d\n\
             2. Show session:  sf org display --verbose\n\
             3. Export:        export SF_INSTANCE_URL=... SF_ACCESS_TOKEN=...\n\n"
        )
    })
}
