//! The SDK manager and its builder.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::config::AppConfig;
use crate::error::{LaunchError, Result};
use crate::lifecycle::{
    LaunchActions, LaunchErrorCallback, PostLaunchCallback, PostLogoutCallback,
    SwitchUserCallback, UserAccount,
};

#[derive(Clone, Default)]
struct Callbacks {
    post_launch: Option<PostLaunchCallback>,
    post_logout: Option<PostLogoutCallback>,
    switch_user: Option<SwitchUserCallback>,
    launch_error: Option<LaunchErrorCallback>,
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("post_launch", &self.post_launch.is_some())
            .field("post_logout", &self.post_logout.is_some())
            .field("switch_user", &self.switch_user.is_some())
            .field("launch_error", &self.launch_error.is_some())
            .finish()
    }
}

/// Immutable app configuration plus lifecycle callbacks.
///
/// Built once at startup with [`SdkManager::builder`] and shared by
/// cloning; clones point at the same configuration. The lifecycle driver
/// calls the `fire_*` methods as launch, logout and user switches happen.
///
/// ```rust
/// use sfsdk_app::{LaunchAction, SdkManager};
///
/// let manager = SdkManager::builder()
///     .configure(|config| {
///         config.consumer_key = "3MVG9...".into();
///         config.redirect_uri = "myapp://auth/success".into();
///         config.scopes = vec!["web".into(), "api".into()];
///     })
///     .post_launch(|actions| println!("Post-launch: launch actions taken: {actions}"))
///     .post_logout(|| println!("Logged out"))
///     .build()
///     .unwrap();
///
/// assert!(manager.fire_post_launch(LaunchAction::Authenticated.into()));
/// assert!(!manager.has_switch_user());
/// ```
#[derive(Clone)]
pub struct SdkManager {
    inner: Arc<Inner>,
}

struct Inner {
    app_config: AppConfig,
    callbacks: Callbacks,
}

impl fmt::Debug for SdkManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SdkManager")
            .field("app_config", &self.inner.app_config)
            .field("callbacks", &self.inner.callbacks)
            .finish()
    }
}

impl SdkManager {
    /// Start building a manager.
    pub fn builder() -> SdkManagerBuilder {
        SdkManagerBuilder::new()
    }

    /// The validated app config.
    pub fn app_config(&self) -> &AppConfig {
        &self.inner.app_config
    }

    /// Whether a post-launch callback was registered.
    pub fn has_post_launch(&self) -> bool {
        self.inner.callbacks.post_launch.is_some()
    }

    /// Whether a post-logout callback was registered.
    pub fn has_post_logout(&self) -> bool {
        self.inner.callbacks.post_logout.is_some()
    }

    /// Whether a switch-user callback was registered.
    pub fn has_switch_user(&self) -> bool {
        self.inner.callbacks.switch_user.is_some()
    }

    /// Whether a launch-error callback was registered.
    pub fn has_launch_error(&self) -> bool {
        self.inner.callbacks.launch_error.is_some()
    }

    /// Run the post-launch callback. Returns false if none is registered.
    #[instrument(skip(self, actions), fields(actions = %actions))]
    pub fn fire_post_launch(&self, actions: LaunchActions) -> bool {
        match &self.inner.callbacks.post_launch {
            Some(callback) => {
                callback(actions);
                true
            }
            None => {
                debug!("No post-launch callback registered");
                false
            }
        }
    }

    /// Run the post-logout callback. Returns false if none is registered.
    #[instrument(skip(self))]
    pub fn fire_post_logout(&self) -> bool {
        match &self.inner.callbacks.post_logout {
            Some(callback) => {
                callback();
                true
            }
            None => {
                debug!("No post-logout callback registered");
                false
            }
        }
    }

    /// Run the switch-user callback. Returns false if none is registered.
    #[instrument(skip_all, fields(
        from = from.map(|u| u.username.as_str()),
        to = to.map(|u| u.username.as_str()),
    ))]
    pub fn fire_switch_user(&self, from: Option<&UserAccount>, to: Option<&UserAccount>) -> bool {
        match &self.inner.callbacks.switch_user {
            Some(callback) => {
                callback(from, to);
                true
            }
            None => {
                debug!("No switch-user callback registered");
                false
            }
        }
    }

    /// Run the launch-error callback. Returns false if none is registered.
    #[instrument(skip(self, error, actions), fields(error = %error, actions = %actions))]
    pub fn fire_launch_error(&self, error: &LaunchError, actions: LaunchActions) -> bool {
        match &self.inner.callbacks.launch_error {
            Some(callback) => {
                callback(error, actions);
                true
            }
            None => {
                debug!(%error, "No launch-error callback registered");
                false
            }
        }
    }
}

/// Accumulates an [`AppConfig`] and the four lifecycle callbacks.
///
/// Calls may come in any order. Each callback setter overwrites exactly
/// one slot, so the last registration wins. Nothing is checked until
/// [`build`](Self::build).
#[derive(Debug, Default)]
#[must_use = "call build() to obtain the manager"]
pub struct SdkManagerBuilder {
    app_config: AppConfig,
    callbacks: Callbacks,
}

impl SdkManagerBuilder {
    /// Builder with a default config and no callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit the app config in place.
    pub fn configure(mut self, mutator: impl FnOnce(&mut AppConfig)) -> Self {
        mutator(&mut self.app_config);
        self
    }

    /// Replace the app config, e.g. with one from [`AppConfig::from_env`].
    pub fn app_config(mut self, config: AppConfig) -> Self {
        self.app_config = config;
        self
    }

    /// Set the callback run after launch completes.
    pub fn post_launch(mut self, callback: impl Fn(LaunchActions) + Send + Sync + 'static) -> Self {
        self.callbacks.post_launch = Some(Arc::new(callback));
        self
    }

    /// Set the callback run after logout.
    pub fn post_logout(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.callbacks.post_logout = Some(Arc::new(callback));
        self
    }

    /// Set the callback run when the current user changes.
    pub fn switch_user(
        mut self,
        callback: impl Fn(Option<&UserAccount>, Option<&UserAccount>) + Send + Sync + 'static,
    ) -> Self {
        self.callbacks.switch_user = Some(Arc::new(callback));
        self
    }

    /// Set the callback run when launch fails.
    pub fn launch_error(
        mut self,
        callback: impl Fn(&LaunchError, LaunchActions) + Send + Sync + 'static,
    ) -> Self {
        self.callbacks.launch_error = Some(Arc::new(callback));
        debug!("Launch-error callback registered");
        self
    }

    /// Validate the app config and produce the manager.
    pub fn build(self) -> Result<SdkManager> {
        self.app_config.validate()?;

        info!(
            consumer_key = %self.app_config.consumer_key,
            scopes = %self.app_config.scope_string(),
            should_authenticate = self.app_config.should_authenticate,
            callbacks = ?self.callbacks,
            "SDK manager configured"
        );

        Ok(SdkManager {
            inner: Arc::new(Inner {
                app_config: self.app_config,
                callbacks: self.callbacks,
            }),
        })
    }
}
