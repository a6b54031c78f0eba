//! Explicit state container for all slices.
//!
//! The store owns one state per slice and replaces it wholesale on every
//! dispatch. Whoever dispatches holds the store by `&mut`; there is no
//! global instance.

mod action;

pub use action::Action;

use serde::Serialize;

use crate::auth::{AuthIntent, AuthReducer, AuthState};
use crate::catalog::{CatalogIntent, CatalogReducer, CatalogState};
use crate::slice::{Intent, Reducer, SliceState};

/// Run one slice reducer over the store field, moving the old state out and
/// the new one in. Evaluates to whether the state changed.
macro_rules! dispatch_slice {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {{
        let intent = $intent;
        let kind = intent.kind();
        let before = $self.$field.clone();
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), intent);
        let changed = $self.$field != before;
        let action = format!("{}/{}", <<$reducer as Reducer>::State as SliceState>::NAME, kind);
        tracing::debug!(
            action = %action,
            changed,
            "Dispatched action"
        );
        changed
    }};
}

/// Application state: one field per slice.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Store {
    auth: AuthState,
    #[serde(rename = "products")]
    catalog: CatalogState,
}

impl Store {
    /// Create a store with every slice at its initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the authentication slice state.
    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    /// Get the product catalog slice state.
    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    /// Apply an action to the slice that owns it.
    ///
    /// Returns `true` if the slice state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Auth(intent) => self.dispatch_auth(intent),
            Action::Catalog(intent) => self.dispatch_catalog(intent),
        }
    }

    /// Dispatch an intent to the authentication reducer.
    pub fn dispatch_auth(&mut self, intent: AuthIntent) -> bool {
        dispatch_slice!(self, auth, AuthReducer, intent)
    }

    /// Dispatch an intent to the product catalog reducer.
    pub fn dispatch_catalog(&mut self, intent: CatalogIntent) -> bool {
        dispatch_slice!(self, catalog, CatalogReducer, intent)
    }
}
