//! Base trait for slice state.

/// Marker trait for state slices.
///
/// States should be:
/// - Cloneable (views read snapshots)
/// - Comparable (PartialEq for detecting changes)
/// - Constructible with fixed initial values (Default)
pub trait SliceState: Clone + PartialEq + Default + Send + Sync + 'static {}
