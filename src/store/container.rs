//! Explicitly constructed state container holding both slices.
//!
//! A `Store` is a cheap clonable handle; every clone observes the same state.
//! Mutations go through the slice reducers under a write lock, so each intent
//! is applied atomically. Subscribers are woken through a revision counter.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::debug;

use crate::api::types::{DashboardData, TransactionsData};
use crate::error::ApiError;
use crate::store::dashboard::{
    DashboardAction, DashboardIntent, DashboardReducer, DashboardState, FetchKind,
};
use crate::store::mvi::Reducer;
use crate::store::transactions::{
    TransactionsAction, TransactionsIntent, TransactionsReducer, TransactionsState,
};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($slot:expr, $reducer:ty, $intent:expr) => {
        $slot = <$reducer>::reduce(std::mem::take(&mut $slot), $intent);
    };
}

/// Request generations for the dashboard slice.
///
/// `latest` orders every dashboard request; `load` and `chart` remember the
/// newest request of each kind so its loading flag is released by the right
/// response.
#[derive(Debug, Default, Clone, Copy)]
struct DashboardGenerations {
    latest: u64,
    load: u64,
    chart: u64,
}

impl DashboardGenerations {
    fn issue(&mut self, kind: FetchKind) -> u64 {
        self.latest += 1;
        match kind {
            FetchKind::Load => self.load = self.latest,
            FetchKind::Chart => self.chart = self.latest,
        }
        self.latest
    }

    fn latest_of(&self, kind: FetchKind) -> u64 {
        match kind {
            FetchKind::Load => self.load,
            FetchKind::Chart => self.chart,
        }
    }
}

struct StoreInner {
    dashboard: DashboardState,
    transactions: TransactionsState,
    dashboard_generations: DashboardGenerations,
    transactions_generation: u64,
}

#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<StoreInner>>,
    revision: Arc<watch::Sender<u64>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(DashboardState::default(), TransactionsState::default())
    }
}

impl Store {
    pub fn new(dashboard: DashboardState, transactions: TransactionsState) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                dashboard,
                transactions,
                dashboard_generations: DashboardGenerations::default(),
                transactions_generation: 0,
            })),
            revision: Arc::new(revision),
        }
    }

    /// Snapshot of the dashboard slice.
    pub fn dashboard(&self) -> DashboardState {
        self.inner.read().dashboard.clone()
    }

    /// Snapshot of the transactions slice.
    pub fn transactions(&self) -> TransactionsState {
        self.inner.read().transactions.clone()
    }

    /// Receiver that changes every time any slice is mutated.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Number of mutations applied so far.
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Apply a caller-level dashboard mutation. Fetch state is only changed
    /// through the request lifecycle below.
    pub fn dispatch_dashboard(&self, action: DashboardAction) {
        {
            let mut inner = self.inner.write();
            dispatch_mvi!(inner.dashboard, DashboardReducer, action.into());
        }
        self.bump();
    }

    pub fn dispatch_transactions(&self, action: TransactionsAction) {
        {
            let mut inner = self.inner.write();
            dispatch_mvi!(inner.transactions, TransactionsReducer, action.into());
        }
        self.bump();
    }

    /// Register a new dashboard request and mark it pending.
    pub(crate) fn begin_dashboard(&self, kind: FetchKind) -> u64 {
        let generation = {
            let mut inner = self.inner.write();
            let generation = inner.dashboard_generations.issue(kind);
            dispatch_mvi!(
                inner.dashboard,
                DashboardReducer,
                DashboardIntent::FetchPending { kind }
            );
            generation
        };
        debug!(?kind, generation, "Dashboard request issued");
        self.bump();
        generation
    }

    /// Apply the outcome of dashboard request `generation`.
    ///
    /// Only the newest dashboard request may commit `data`/`error`. An older
    /// request that is still the newest of its kind only releases its flag.
    pub(crate) fn settle_dashboard(
        &self,
        kind: FetchKind,
        generation: u64,
        outcome: Result<DashboardData, ApiError>,
    ) {
        let changed = {
            let mut inner = self.inner.write();
            let generations = inner.dashboard_generations;
            let intent = if generation == generations.latest {
                Some(match outcome {
                    Ok(data) => DashboardIntent::FetchFulfilled { kind, data },
                    Err(err) => DashboardIntent::FetchRejected {
                        kind,
                        message: err.message().map(str::to_string),
                    },
                })
            } else if generation == generations.latest_of(kind) {
                Some(DashboardIntent::FetchSuperseded { kind })
            } else {
                None
            };

            match intent {
                Some(intent) => {
                    dispatch_mvi!(inner.dashboard, DashboardReducer, intent);
                    true
                }
                None => false,
            }
        };

        if changed {
            debug!(?kind, generation, "Dashboard request settled");
            self.bump();
        } else {
            debug!(?kind, generation, "Discarding stale dashboard response");
        }
    }

    pub(crate) fn begin_transactions(&self) -> u64 {
        let generation = {
            let mut inner = self.inner.write();
            inner.transactions_generation += 1;
            dispatch_mvi!(
                inner.transactions,
                TransactionsReducer,
                TransactionsIntent::FetchPending
            );
            inner.transactions_generation
        };
        debug!(generation, "Transactions request issued");
        self.bump();
        generation
    }

    /// Apply the outcome of transactions request `generation`; stale outcomes
    /// are dropped since a newer request is still pending.
    pub(crate) fn settle_transactions(
        &self,
        generation: u64,
        outcome: Result<TransactionsData, ApiError>,
    ) {
        let committed = {
            let mut inner = self.inner.write();
            if generation != inner.transactions_generation {
                false
            } else {
                let intent = match outcome {
                    Ok(data) => TransactionsIntent::FetchFulfilled { data },
                    Err(err) => TransactionsIntent::FetchRejected {
                        message: err.message().map(str::to_string),
                    },
                };
                dispatch_mvi!(inner.transactions, TransactionsReducer, intent);
                true
            }
        };

        if committed {
            debug!(generation, "Transactions request settled");
            self.bump();
        } else {
            debug!(generation, "Discarding stale transactions response");
        }
    }

    fn bump(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }
}
