//! Side effects requested by controllers and the runner that executes them.

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::api::types::{Period, TransactionFilters};
use crate::store::Thunks;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchDashboard(Period),
    UpdateChart(Period),
    FetchTransactions {
        page: u32,
        filters: TransactionFilters,
    },
}

/// Spawns effects onto a tokio runtime.
#[derive(Clone)]
pub struct EffectRunner {
    thunks: Thunks,
    handle: Handle,
}

impl EffectRunner {
    pub fn new(thunks: Thunks, handle: Handle) -> Self {
        Self { thunks, handle }
    }

    /// Start the effect. Its slice is marked pending before this returns.
    pub fn run(&self, effect: Effect) -> JoinHandle<()> {
        debug!(?effect, "Spawning effect");
        match effect {
            Effect::FetchDashboard(period) => {
                self.handle.spawn(self.thunks.fetch_dashboard_data(period))
            }
            Effect::UpdateChart(period) => self.handle.spawn(self.thunks.update_chart_data(period)),
            Effect::FetchTransactions { page, filters } => {
                self.handle.spawn(self.thunks.fetch_transactions(page, filters))
            }
        }
    }

    pub fn run_opt(&self, effect: Option<Effect>) -> Option<JoinHandle<()>> {
        effect.map(|effect| self.run(effect))
    }
}
