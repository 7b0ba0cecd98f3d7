use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{error::SnapshotError, snapshot::SnapshotStore, store::StoreState};

/// The single application-state container shared by every handler.
///
/// Writers are serialized by the lock and each accepted mutation is persisted
/// as a full snapshot before the lock is released.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<StoreState>>,
    snapshots: SnapshotStore,
}

impl AppState {
    pub fn new(state: StoreState, snapshots: SnapshotStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(state)),
            snapshots,
        }
    }

    /// Boots from the persisted snapshot, seeding it on first run.
    pub async fn open(snapshots: SnapshotStore) -> Result<Self, SnapshotError> {
        let state = snapshots.load_or_seed().await?;
        Ok(Self::new(state, snapshots))
    }

    pub async fn read<R>(&self, f: impl FnOnce(&StoreState) -> R) -> R {
        let guard = self.store.read().await;
        f(&guard)
    }

    /// Applies `f` to a copy of the state; on `Ok` the copy is saved and
    /// becomes current, on `Err` nothing changes.
    pub async fn mutate<R, E>(
        &self,
        f: impl FnOnce(&mut StoreState) -> Result<R, E>,
    ) -> Result<R, E>
    where
        E: From<SnapshotError>,
    {
        let mut guard = self.store.write().await;
        let mut next = guard.clone();
        let out = f(&mut next)?;
        self.snapshots.save(&next).await?;
        *guard = next;
        Ok(out)
    }

    pub fn snapshots(&self) -> &SnapshotStore {
        &self.snapshots
    }
}
