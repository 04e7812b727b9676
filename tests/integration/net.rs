//! REST facade against a mock org.

use super::common::{mock_client, mock_org, mount_get};
use futures::future::join_all;
use serde_json::{json, Value};
use sfsdk::net::{dispatch, ErrorKind, QueryResult, VersionInfo};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Discovery & Describe
// ============================================================================

#[tokio::test]
async fn test_api_version_is_default_and_stable() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    assert_eq!(client.api_version().as_str(), "v42.0");
    assert_eq!(client.api_version(), client.api_version());
}

#[tokio::test]
async fn test_versions_ends_with_current_release() {
    let server = mock_org().await;
    let client = mock_client(&server);

    let versions = client.versions().await.expect("versions should succeed");
    assert_eq!(
        versions.last(),
        Some(&VersionInfo {
            label: "Spring ’18".to_string(),
            url: "/services/data/v42.0".to_string(),
            version: "42.0".to_string(),
        })
    );
}

#[tokio::test]
async fn test_resources_connect_path() {
    let server = mock_org().await;
    let client = mock_client(&server);

    let resources = client.resources().await.expect("resources should succeed");
    assert_eq!(
        resources.get("connect").map(String::as_str),
        Some("/services/data/v42.0/connect")
    );
}

#[tokio::test]
async fn test_describe_global_lists_sobjects() {
    let server = mock_org().await;
    let client = mock_client(&server);

    let global = client.describe_global().await.expect("describeGlobal should succeed");
    let names: Vec<&str> = global.sobjects.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Account", "Contact"]);
}

#[tokio::test]
async fn test_describe_account() {
    let server = mock_org().await;
    let client = mock_client(&server);

    let describe = client.describe("account").await.expect("describe should succeed");
    assert!(!describe.custom);
    assert!(!describe.fields.is_empty());
    assert_eq!(describe.field("name").map(|f| f.length), Some(Some(255)));
}

#[tokio::test]
async fn test_metadata_account() {
    let server = mock_org().await;
    let client = mock_client(&server);

    let metadata = client.metadata("account").await.expect("metadata should succeed");
    assert_eq!(metadata.object_describe.key_prefix.as_deref(), Some("001"));
    assert_eq!(metadata.recent_items.len(), 1);
}

#[tokio::test]
async fn test_unknown_object_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/data/v42.0/sobjects/Nope__c/describe/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!([
            {"errorCode": "NOT_FOUND", "message": "The requested resource does not exist"}
        ])))
        .mount(&server)
        .await;
    let client = mock_client(&server);

    let err = client.describe("Nope__c").await.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownObject(ref name) if name == "Nope__c"));
}

#[tokio::test]
async fn test_null_sobjects_is_malformed() {
    let server = MockServer::start().await;
    mount_get(&server, "/services/data/v42.0/sobjects/", json!({"sobjects": null})).await;
    let client = mock_client(&server);

    let err = client.describe_global().await.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_html_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/data/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;
    let client = mock_client(&server);

    let err = client.versions().await.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedResponse { ref endpoint, .. } if endpoint == "versions"));
}

#[tokio::test]
async fn test_server_error_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/data/v42.0/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;
    let client = mock_client(&server);

    let err = client.resources().await.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Transport(_)));
    assert!(err.transport_error().is_some());
}

#[tokio::test]
async fn test_expired_session_is_not_unknown_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/data/v42.0/sobjects/account/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!([
            {"errorCode": "INVALID_SESSION_ID", "message": "Session expired or invalid"}
        ])))
        .mount(&server)
        .await;
    let client = mock_client(&server);

    let err = client.metadata("account").await.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Transport(_)));
    assert!(err.transport_error().unwrap().is_auth_error());
}

// ============================================================================
// Concurrency & continuations
// ============================================================================

#[tokio::test]
async fn test_concurrent_calls_complete_independently() {
    let server = mock_org().await;
    let client = mock_client(&server);

    let (versions, resources, global) = tokio::join!(
        client.versions(),
        client.resources(),
        client.describe_global()
    );
    assert_eq!(versions.unwrap().len(), 2);
    assert!(resources.unwrap().contains_key("connect"));
    assert_eq!(global.unwrap().sobjects.len(), 2);

    let describes = join_all((0..5).map(|_| client.describe("account"))).await;
    assert!(describes.iter().all(|d| d.as_ref().is_ok_and(|d| !d.custom)));
}

#[tokio::test]
async fn test_dispatch_delivers_once() {
    let server = mock_org().await;
    let client = mock_client(&server);
    let (tx, rx) = tokio::sync::oneshot::channel();

    let worker = client.clone();
    dispatch(
        async move { worker.resources().await },
        move |resources| {
            let _ = tx.send(Ok(resources["connect"].clone()));
        },
        |err| panic!("resources failed: {err}"),
    )
    .await
    .expect("continuation task should not panic");

    let connect: Result<String, ()> = rx.await.expect("success continuation must run");
    assert_eq!(connect.unwrap(), "/services/data/v42.0/connect");
}

// ============================================================================
// Records & Query
// ============================================================================

#[tokio::test]
async fn test_create_and_delete_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/data/v42.0/sobjects/Account/"))
        .and(body_json(json!({"Name": "Acme"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "001000000000001AAA", "success": true, "errors": []
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/services/data/v42.0/sobjects/Account/001000000000001AAA"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    let client = mock_client(&server);

    let created = client.create("Account", &json!({"Name": "Acme"})).await.unwrap();
    assert!(created.success);
    client.delete("Account", &created.id).await.unwrap();
}

#[tokio::test]
async fn test_upsert_insert_then_update() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/services/data/v42.0/sobjects/Account/Ext_Id__c/EXT-1"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "001000000000001AAA", "success": true, "created": true
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/services/data/v42.0/sobjects/Account/Ext_Id__c/EXT-1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    let client = mock_client(&server);
    let record = json!({"Name": "Acme"});

    let first = client.upsert("Account", "Ext_Id__c", "EXT-1", &record).await.unwrap();
    assert!(first.created);
    let second = client.upsert("Account", "Ext_Id__c", "EXT-1", &record).await.unwrap();
    assert!(!second.created);
}

#[tokio::test]
async fn test_query_follows_next_records_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/data/v42.0/query"))
        .and(query_param("q", "SELECT Name FROM Account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalSize": 2,
            "done": false,
            "nextRecordsUrl": "/services/data/v42.0/query/01gD0000002HU6KIAW-1",
            "records": [{"Name": "A"}]
        })))
        .mount(&server)
        .await;
    mount_get(
        &server,
        "/services/data/v42.0/query/01gD0000002HU6KIAW-1",
        json!({"totalSize": 2, "done": true, "records": [{"Name": "B"}]}),
    )
    .await;
    let client = mock_client(&server);

    let mut page: QueryResult<Value> = client.query("SELECT Name FROM Account").await.unwrap();
    let mut names = Vec::new();
    loop {
        names.extend(page.records.iter().map(|r| r["Name"].as_str().unwrap_or_default().to_string()));
        match page.next_records_url.take() {
            Some(next) if !page.done => page = client.query_more(&next).await.unwrap(),
            _ => break,
        }
    }
    assert_eq!(names, vec!["A", "B"]);
}
