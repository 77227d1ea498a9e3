//! Page controllers: observe slice state and decide which async operation to
//! enqueue next.
//!
//! Controllers never await anything themselves. Each call returns the
//! [`Effect`] it wants executed (if any), and an [`EffectRunner`] spawns it on
//! the runtime. This keeps "on state transition X, run Y" explicit and
//! testable without a runtime.

mod dashboard;
mod effect;
mod transactions;

pub use dashboard::DashboardController;
pub use effect::{Effect, EffectRunner};
pub use transactions::TransactionsController;
