//! App configuration builder driving the facade.

use std::sync::{Arc, Mutex};

use super::common::{mock_client, mock_org};
use sfsdk::app::{ErrorKind, LaunchError};
use sfsdk::{AppConfig, LaunchAction, LaunchActions, SdkManager, UserAccount};

const BOOTCONFIG: &str = r#"{
    "remoteAccessConsumerKey": "3MVG9Iu66FKeHhINkB1l7xt7kR8czFcCTUhgoA8Ol2Ltf1eYHOU4SqQRSEitYFDUpqRWcoQ2.dBv_a1Dyu5xa",
    "oauthRedirectURI": "testsfdc:///mobilesdk/detect/oauth/done",
    "oauthScopes": ["web", "api"],
    "shouldAuthenticate": true
}"#;

#[test]
fn test_builder_from_bootconfig() {
    let config = AppConfig::from_json_str(BOOTCONFIG).unwrap();
    let manager = SdkManager::builder().app_config(config).build().unwrap();

    assert_eq!(manager.app_config().scopes, vec!["web", "api"]);
    assert!(manager.app_config().should_authenticate);
}

#[test]
fn test_builder_rejects_incomplete_config() {
    let err = SdkManager::builder()
        .configure(|config| config.consumer_key = "key".into())
        .build()
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidConfig(_)));
}

#[test]
fn test_full_lifecycle() {
    let events = Arc::new(Mutex::new(Vec::<String>::new()));

    let (launch, logout, switch, error) = (events.clone(), events.clone(), events.clone(), events.clone());
    let manager = SdkManager::builder()
        .configure(|config| *config = AppConfig::from_json_str(BOOTCONFIG).unwrap())
        .post_launch(move |actions| launch.lock().unwrap().push(format!("launch {actions}")))
        .post_logout(move || logout.lock().unwrap().push("logout".into()))
        .switch_user(move |from, to| {
            let name = |u: Option<&UserAccount>| u.map_or("-".to_string(), |u| u.username.clone());
            switch.lock().unwrap().push(format!("switch {} -> {}", name(from), name(to)));
        })
        .launch_error(move |err, actions| error.lock().unwrap().push(format!("error {err} after {actions}")))
        .build()
        .unwrap();

    let actions: LaunchActions = [LaunchAction::Authenticated, LaunchAction::PasscodeVerified]
        .into_iter()
        .collect();
    let alice = UserAccount::new("005A", "00DA", "alice@example.com");

    manager.fire_post_launch(actions);
    manager.fire_switch_user(None, Some(&alice));
    manager.fire_post_logout();
    manager.fire_launch_error(&LaunchError::new("offline"), LaunchActions::NONE);

    assert_eq!(
        *events.lock().unwrap(),
        vec![
            "launch Authenticated|PasscodeVerified",
            "switch - -> alice@example.com",
            "logout",
            "error offline after None",
        ]
    );
}

#[tokio::test]
async fn test_rebuilding_manager_leaves_facade_alone() {
    let server = mock_org().await;
    let client = mock_client(&server);

    let pending = client.describe_global();
    let _first = SdkManager::builder()
        .configure(|config| config.should_authenticate = false)
        .build()
        .unwrap();
    let _second = SdkManager::builder()
        .app_config(AppConfig::from_json_str(BOOTCONFIG).unwrap())
        .build()
        .unwrap();

    let global = pending.await.unwrap();
    assert_eq!(global.sobjects.len(), 2);
    assert_eq!(client.api_version().as_str(), "v42.0");
}
