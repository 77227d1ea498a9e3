//! Base trait for intents dispatched to a slice.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User mutations (select period, change filters)
/// - Fetch lifecycle transitions (pending, fulfilled, rejected)
pub trait Intent: Send + 'static {}
