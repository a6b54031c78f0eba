//! State for the authentication slice.

use serde::{Deserialize, Serialize};

use crate::slice::SliceState;

use super::user::UserRecord;

/// Session state.
///
/// `is_logged_in` tracks `user.is_some()` after login success, `setUser` and
/// logout. A failed login keeps whatever session was already there.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub user: Option<UserRecord>,
    pub is_logged_in: bool,
    /// True between a login request and its resolution.
    pub loading: bool,
    pub error: Option<String>,
}

impl SliceState for AuthState {
    const NAME: &'static str = "auth";
}

impl AuthState {
    /// Check if a login request is in flight.
    pub fn is_authenticating(&self) -> bool {
        self.loading
    }

    /// Get the current error message, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_logged_out() {
        let state = AuthState::default();
        assert!(state.user.is_none());
        assert!(!state.is_logged_in);
        assert!(!state.is_authenticating());
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(AuthState::default()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "user": null,
                "isLoggedIn": false,
                "loading": false,
                "error": null
            })
        );
    }
}
