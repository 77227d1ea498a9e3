//! Dashboard slice: metrics, chart series and the selected period.

mod intent;
mod reducer;
mod state;

pub use intent::DashboardAction;
pub(crate) use intent::{DashboardIntent, FetchKind};
pub(crate) use reducer::DashboardReducer;
pub use reducer::{FETCH_DASHBOARD_FAILED, UPDATE_CHART_FAILED};
pub use state::DashboardState;
