//! Date range picker popover.
//!
//! Uses the MVI pattern:
//! - `state.rs` - open/closed state with the pending selection
//! - `intent.rs` - cursor moves and selections
//! - `reducer.rs` - state transitions

mod intent;
mod reducer;
mod state;

pub use intent::DatePickerIntent;
pub use reducer::DatePickerReducer;
pub use state::DatePickerState;
