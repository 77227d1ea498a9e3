//! Model-View-Intent (MVI) primitives shared by every state slice.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── controller ◀─────────┘
//! ```
//!
//! - **State**: plain value describing one slice
//! - **Intent**: synchronous mutation or async lifecycle transition
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::SliceState;
