//! Intents for the authentication slice.

use serde::{Deserialize, Serialize};

use crate::slice::Intent;

use super::user::{ProfilePatch, UserRecord};

/// Intents that can be dispatched to the authentication slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum AuthIntent {
    /// A login request was sent to the identity provider.
    LoginStart,

    /// The provider accepted the credentials.
    LoginSuccess(UserRecord),

    /// The provider rejected the credentials or could not be reached.
    ///
    /// Leaves any existing session in place.
    LoginFailure(String),

    /// End the session.
    Logout,

    /// Shallow-merge a partial record into the current user.
    UpdateUserProfile(ProfilePatch),

    /// Replace the user wholesale, e.g. when the provider restores a session.
    SetUser(Option<UserRecord>),

    /// Dismiss the current error message.
    ClearError,
}

impl AuthIntent {
    /// Every action name this slice understands.
    pub const KINDS: &'static [&'static str] = &[
        "loginStart",
        "loginSuccess",
        "loginFailure",
        "logout",
        "updateUserProfile",
        "setUser",
        "clearError",
    ];
}

impl Intent for AuthIntent {
    fn kind(&self) -> &'static str {
        match self {
            Self::LoginStart => "loginStart",
            Self::LoginSuccess(_) => "loginSuccess",
            Self::LoginFailure(_) => "loginFailure",
            Self::Logout => "logout",
            Self::UpdateUserProfile(_) => "updateUserProfile",
            Self::SetUser(_) => "setUser",
            Self::ClearError => "clearError",
        }
    }
}
