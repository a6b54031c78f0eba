//! Base trait for intents (actions) dispatched to a slice.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (login, logout, picking a sort order)
/// - Provider responses (product lists, user records, failures)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {
    /// Action name within its slice, e.g. `loginStart`.
    fn kind(&self) -> &'static str;
}
