//! Application state: two independent slices behind an injected container.

mod container;
pub mod dashboard;
pub mod mvi;
mod thunks;
pub mod transactions;

pub use container::Store;
pub use thunks::Thunks;
