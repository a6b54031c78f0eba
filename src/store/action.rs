//! Store-level action: an intent tagged with the slice that owns it.

use serde::{Deserialize, Serialize};

use crate::auth::{AuthIntent, AuthState};
use crate::catalog::{CatalogIntent, CatalogState};
use crate::slice::{Intent, SliceState};

/// An action addressed to one slice.
///
/// Wire form: `{"slice": "auth", "action": {"type": "logout"}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "slice", content = "action")]
pub enum Action {
    #[serde(rename = "auth")]
    Auth(AuthIntent),
    #[serde(rename = "products")]
    Catalog(CatalogIntent),
}

impl Action {
    /// Full action type, e.g. `auth/loginStart` or `products/sortProducts`.
    pub fn kind(&self) -> String {
        match self {
            Self::Auth(intent) => format!("{}/{}", AuthState::NAME, intent.kind()),
            Self::Catalog(intent) => format!("{}/{}", CatalogState::NAME, intent.kind()),
        }
    }

    /// Every action type the store understands.
    pub fn vocabulary() -> Vec<String> {
        let auth = AuthIntent::KINDS
            .iter()
            .map(|kind| format!("{}/{}", AuthState::NAME, kind));
        let catalog = CatalogIntent::KINDS
            .iter()
            .map(|kind| format!("{}/{}", CatalogState::NAME, kind));
        auth.chain(catalog).collect()
    }
}

impl From<AuthIntent> for Action {
    fn from(intent: AuthIntent) -> Self {
        Self::Auth(intent)
    }
}

impl From<CatalogIntent> for Action {
    fn from(intent: CatalogIntent) -> Self {
        Self::Catalog(intent)
    }
}
