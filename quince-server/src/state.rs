use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use quince_solver::ExecutionLedger;

/// Shared state handed to every handler.
///
/// Each request runs its own solver; the ledger is the only thing requests
/// share, so it sits behind a mutex while the engines stay lock-free.
#[derive(Clone, Debug, Default)]
pub(crate) struct AppState {
    ledger: Arc<Mutex<ExecutionLedger>>,
}

impl AppState {
    pub(crate) fn ledger(&self) -> MutexGuard<'_, ExecutionLedger> {
        self.ledger.lock().expect("the ledger mutex is not poisoned")
    }
}
