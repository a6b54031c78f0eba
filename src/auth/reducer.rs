//! Reducer for the authentication slice.

use crate::slice::Reducer;

use super::intent::AuthIntent;
use super::state::AuthState;

/// Reducer for session state transitions.
///
/// Total over every intent: no transition is rejected, some are redundant
/// (e.g. logout while logged out).
pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Intent = AuthIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AuthIntent::LoginStart => AuthState {
                loading: true,
                error: None,
                ..state
            },

            AuthIntent::LoginSuccess(user) => AuthState {
                user: Some(user),
                is_logged_in: true,
                loading: false,
                error: None,
            },

            // The current session, if any, survives a failed re-login.
            AuthIntent::LoginFailure(message) => AuthState {
                loading: false,
                error: Some(message),
                ..state
            },

            AuthIntent::Logout => AuthState {
                user: None,
                is_logged_in: false,
                error: None,
                ..state
            },

            AuthIntent::UpdateUserProfile(patch) => {
                let user = state.user.unwrap_or_default().merged_with(patch);
                AuthState {
                    user: Some(user),
                    ..state
                }
            }

            AuthIntent::SetUser(user) => AuthState {
                is_logged_in: user.is_some(),
                user,
                ..state
            },

            AuthIntent::ClearError => AuthState {
                error: None,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{ProfilePatch, UserRecord};

    fn user(name: &str) -> UserRecord {
        UserRecord {
            uid: Some(format!("uid-{name}")),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    #[test]
    fn login_start_sets_loading_and_clears_error() {
        let state = AuthState {
            error: Some("stale".into()),
            ..Default::default()
        };
        let new_state = AuthReducer::reduce(state, AuthIntent::LoginStart);
        assert!(new_state.loading);
        assert_eq!(new_state.error, None);
        assert!(!new_state.is_logged_in);
    }

    #[test]
    fn login_success_stores_user() {
        let state = AuthReducer::reduce(AuthState::default(), AuthIntent::LoginStart);
        let new_state = AuthReducer::reduce(state, AuthIntent::LoginSuccess(user("ada")));
        assert!(!new_state.loading);
        assert!(new_state.is_logged_in);
        assert_eq!(new_state.user, Some(user("ada")));
        assert_eq!(new_state.error, None);
    }

    #[test]
    fn login_failure_keeps_existing_session() {
        let state = AuthReducer::reduce(AuthState::default(), AuthIntent::LoginSuccess(user("ada")));
        let state = AuthReducer::reduce(state, AuthIntent::LoginStart);
        let new_state = AuthReducer::reduce(state, AuthIntent::LoginFailure("bad password".into()));

        assert!(!new_state.loading);
        assert_eq!(new_state.error.as_deref(), Some("bad password"));
        assert!(new_state.is_logged_in);
        assert_eq!(new_state.user, Some(user("ada")));
    }

    #[test]
    fn logout_keeps_loading_flag() {
        let state = AuthState {
            user: Some(user("ada")),
            is_logged_in: true,
            loading: true,
            error: Some("oops".into()),
        };
        let new_state = AuthReducer::reduce(state, AuthIntent::Logout);
        assert_eq!(new_state.user, None);
        assert!(!new_state.is_logged_in);
        assert_eq!(new_state.error, None);
        assert!(new_state.loading);
    }

    #[test]
    fn update_profile_does_not_touch_logged_in_flag() {
        let new_state = AuthReducer::reduce(
            AuthState::default(),
            AuthIntent::UpdateUserProfile(ProfilePatch {
                name: Some(Some("x".into())),
                ..Default::default()
            }),
        );
        assert!(new_state.user.is_some());
        assert!(!new_state.is_logged_in);
    }

    #[test]
    fn set_user_none_logs_out() {
        let state = AuthReducer::reduce(AuthState::default(), AuthIntent::LoginSuccess(user("ada")));
        let new_state = AuthReducer::reduce(state, AuthIntent::SetUser(None));
        assert_eq!(new_state.user, None);
        assert!(!new_state.is_logged_in);
    }
}
