//! Launch actions, user accounts and the callback signatures of the four
//! lifecycle slots.

use std::fmt;
use std::sync::Arc;

use crate::error::LaunchError;

/// One step taken while launching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaunchAction {
    /// The user went through the login flow.
    Authenticated,
    /// A stored session was reused.
    AlreadyAuthenticated,
    /// Authentication is disabled in the app config.
    AuthBypassed,
    /// The user entered the app passcode.
    PasscodeVerified,
}

impl LaunchAction {
    const ALL: [LaunchAction; 4] = [
        LaunchAction::Authenticated,
        LaunchAction::AlreadyAuthenticated,
        LaunchAction::AuthBypassed,
        LaunchAction::PasscodeVerified,
    ];

    /// Name used in logs and [`LaunchActions`] display.
    pub fn as_str(self) -> &'static str {
        match self {
            LaunchAction::Authenticated => "Authenticated",
            LaunchAction::AlreadyAuthenticated => "AlreadyAuthenticated",
            LaunchAction::AuthBypassed => "AuthBypassed",
            LaunchAction::PasscodeVerified => "PasscodeVerified",
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for LaunchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of [`LaunchAction`]s, displayed as `Authenticated|PasscodeVerified`
/// or `None` when empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LaunchActions(u8);

impl LaunchActions {
    /// No actions taken.
    pub const NONE: LaunchActions = LaunchActions(0);

    /// Add an action, builder style.
    pub fn with(mut self, action: LaunchAction) -> Self {
        self.insert(action);
        self
    }

    /// Add an action in place.
    pub fn insert(&mut self, action: LaunchAction) {
        self.0 |= action.bit();
    }

    /// Whether the action is in the set.
    pub fn contains(self, action: LaunchAction) -> bool {
        self.0 & action.bit() != 0
    }

    /// True when no action was taken.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Actions in declaration order.
    pub fn iter(self) -> impl Iterator<Item = LaunchAction> {
        LaunchAction::ALL
            .into_iter()
            .filter(move |action| self.contains(*action))
    }
}

impl From<LaunchAction> for LaunchActions {
    fn from(action: LaunchAction) -> Self {
        LaunchActions::NONE.with(action)
    }
}

impl FromIterator<LaunchAction> for LaunchActions {
    fn from_iter<I: IntoIterator<Item = LaunchAction>>(iter: I) -> Self {
        iter.into_iter().fold(LaunchActions::NONE, LaunchActions::with)
    }
}

impl fmt::Display for LaunchActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }
        for (i, action) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            f.write_str(action.as_str())?;
        }
        Ok(())
    }
}

/// The signed-in user handed to the switch-user callback.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserAccount {
    pub user_id: String,
    pub org_id: String,
    pub username: String,
}

impl UserAccount {
    /// Create an account from its user id, org id and username.
    pub fn new(
        user_id: impl Into<String>,
        org_id: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            org_id: org_id.into(),
            username: username.into(),
        }
    }
}

/// Runs after a successful launch.
pub type PostLaunchCallback = Arc<dyn Fn(LaunchActions) + Send + Sync>;

/// Runs after the current user logs out.
pub type PostLogoutCallback = Arc<dyn Fn() + Send + Sync>;

/// Runs when the active user changes; either side may be absent.
pub type SwitchUserCallback = Arc<dyn Fn(Option<&UserAccount>, Option<&UserAccount>) + Send + Sync>;

/// Runs when launching fails, with the actions taken before the failure.
pub type LaunchErrorCallback = Arc<dyn Fn(&LaunchError, LaunchActions) + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(LaunchActions::NONE.to_string(), "None");
        assert_eq!(
            LaunchActions::from(LaunchAction::AuthBypassed).to_string(),
            "AuthBypassed"
        );

        let actions: LaunchActions = [LaunchAction::PasscodeVerified, LaunchAction::Authenticated]
            .into_iter()
            .collect();
        assert_eq!(actions.to_string(), "Authenticated|PasscodeVerified");
    }

    #[test]
    fn test_set_semantics() {
        let mut actions = LaunchActions::default();
        assert!(actions.is_empty());

        actions.insert(LaunchAction::AlreadyAuthenticated);
        actions.insert(LaunchAction::AlreadyAuthenticated);
        assert!(actions.contains(LaunchAction::AlreadyAuthenticated));
        assert!(!actions.contains(LaunchAction::Authenticated));
        assert_eq!(actions.iter().count(), 1);
    }
}
