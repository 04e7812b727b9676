//! Facade checks against a real org (ignored by default).

use super::common::live_credentials;
use sfsdk::net::{ErrorKind, NetClient};

fn client() -> NetClient {
    NetClient::from_credentials(&live_credentials()).expect("Failed to create client")
}

#[tokio::test]
#[ignore]
async fn test_live_versions_include_configured() {
    let client = client();
    let versions = client.versions().await.expect("versions should succeed");

    assert!(!versions.is_empty());
    assert!(
        versions
            .iter()
            .any(|v| v.version == client.api_version().number()),
        "org should support {}",
        client.api_version()
    );
}

#[tokio::test]
#[ignore]
async fn test_live_resources_connect() {
    let client = client();
    let resources = client.resources().await.expect("resources should succeed");

    assert_eq!(
        resources.get("connect"),
        Some(&format!("/services/data/{}/connect", client.api_version()))
    );
}

#[tokio::test]
#[ignore]
async fn test_live_describe_account() {
    let client = client();

    let global = client.describe_global().await.expect("describeGlobal should succeed");
    assert!(global.sobjects.iter().any(|s| s.name == "Account"));

    let describe = client.describe("account").await.expect("describe should succeed");
    assert!(!describe.custom);
    assert!(!describe.fields.is_empty());

    let metadata = client.metadata("account").await.expect("metadata should succeed");
    assert_eq!(metadata.object_describe.name, "Account");
}

#[tokio::test]
#[ignore]
async fn test_live_unknown_object() {
    let err = client()
        .describe("Sfsdk_Does_Not_Exist__c")
        .await
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownObject(_)));
}
