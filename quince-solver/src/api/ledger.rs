use serde::Serialize;

use crate::api::StrategyKind;
use crate::api::StrategyOutcome;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;

/// Identifies one recorded execution; ids are sequential from zero for the
/// lifetime of the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ExecutionId(u32);

impl StorageKey for ExecutionId {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        ExecutionId(index as u32)
    }
}

impl From<u32> for ExecutionId {
    fn from(id: u32) -> ExecutionId {
        ExecutionId(id)
    }
}

/// One solved instance as remembered by the boundary.
#[derive(Clone, Debug, Serialize)]
pub struct ExecutionRecord {
    pub id: ExecutionId,
    pub strategy: StrategyKind,
    pub outcome: StrategyOutcome,
}

/// The process-lifetime, append-only record of solve executions.
///
/// The ledger is bookkeeping at the request boundary, not part of the search
/// engine: a solve that fails validation never reaches it, and a recorded
/// execution is never mutated or removed.
#[derive(Debug, Default)]
pub struct ExecutionLedger {
    entries: KeyedVec<ExecutionId, ExecutionRecord>,
}

impl ExecutionLedger {
    /// Appends an execution and returns the id under which it can be
    /// queried.
    pub fn record(&mut self, strategy: StrategyKind, outcome: StrategyOutcome) -> ExecutionId {
        let id = self.entries.next_key();

        self.entries.push(ExecutionRecord {
            id,
            strategy,
            outcome,
        })
    }

    pub fn get(&self, id: ExecutionId) -> Option<&ExecutionRecord> {
        self.entries.get(id)
    }

    /// Iterates over all recorded executions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &'_ ExecutionRecord> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
