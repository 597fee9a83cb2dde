use crate::domain::model::{Snapshot, TrademarkRecord};
use std::sync::{Arc, PoisonError, RwLock};

/// Holder for the currently published snapshot.
///
/// Readers clone the inner `Arc` and release the lock before scanning, so a
/// reload never blocks an in-flight query and a query never sees a partially
/// built snapshot.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: RwLock<Snapshot>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Snapshot {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Publish a fully built snapshot, returning the one it replaced.
    pub fn replace(&self, records: Vec<TrademarkRecord>) -> Snapshot {
        let next = Arc::new(records);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }
}
