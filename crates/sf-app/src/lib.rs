//! # sfsdk-app
//!
//! App configuration builder for the Salesforce SDK manager.
//!
//! An app describes its connected app (consumer key, redirect URI, OAuth
//! scopes) and registers up to four lifecycle callbacks in one chained
//! expression. [`SdkManagerBuilder::build`] checks the configuration and
//! returns an immutable [`SdkManager`] that the lifecycle driver fires
//! callbacks through.
//!
//! ## Example
//!
//! ```rust
//! use sfsdk_app::SdkManager;
//!
//! let manager = SdkManager::builder()
//!     .configure(|config| {
//!         config.consumer_key = "3MVG9...".into();
//!         config.redirect_uri = "myapp://auth/success".into();
//!         config.scopes = vec!["web".into(), "api".into()];
//!     })
//!     .post_launch(|actions| println!("launched: {actions}"))
//!     .post_logout(|| println!("logged out"))
//!     .switch_user(|from, to| {
//!         let name = |u: Option<&sfsdk_app::UserAccount>| {
//!             u.map(|u| u.username.clone()).unwrap_or_default()
//!         };
//!         println!("{} -> {}", name(from), name(to));
//!     })
//!     .launch_error(|err, actions| eprintln!("launch failed after {actions}: {err}"))
//!     .build()?;
//!
//! assert_eq!(manager.app_config().scope_string(), "web api");
//! # Ok::<(), sfsdk_app::Error>(())
//! ```

mod config;
mod error;
mod lifecycle;
mod manager;

pub use config::AppConfig;
pub use error::{Error, ErrorKind, LaunchError, Result};
pub use lifecycle::{
    LaunchAction, LaunchActions, LaunchErrorCallback, PostLaunchCallback, PostLogoutCallback,
    SwitchUserCallback, UserAccount,
};
pub use manager::{SdkManager, SdkManagerBuilder};
