//! Authentication slice.
//!
//! Tracks the signed-in user record and the login request lifecycle.
//!
//! # Architecture
//!
//! - `user.rs` - Typed user record and the partial profile patch
//! - `state.rs` - Session state (user, logged-in flag, loading, error)
//! - `intent.rs` - Login lifecycle and profile actions
//! - `reducer.rs` - State transitions (pure, total)

mod intent;
mod reducer;
mod state;
mod user;

pub use intent::AuthIntent;
pub use reducer::AuthReducer;
pub use state::AuthState;
pub use user::{ProfilePatch, UserRecord};
