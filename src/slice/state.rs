//! Base trait for slice state.

/// Marker trait for slice state objects.
///
/// States should be:
/// - Replaced wholesale on every transition (Clone to snapshot)
/// - Self-contained (everything a reader needs)
/// - Comparable (PartialEq for detecting changes)
pub trait SliceState: Clone + PartialEq + Default + Send + 'static {
    /// Slice name used as the action type prefix, e.g. `auth`.
    const NAME: &'static str;
}
