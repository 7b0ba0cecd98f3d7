use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::{error::SnapshotError, seed, store::StoreState};

pub const STORAGE_NAME: &str = "lanchonete-storage";

#[derive(Debug, Deserialize)]
struct PersistedSnapshot {
    state: StoreState,
    #[serde(default)]
    #[allow(dead_code)]
    version: u32,
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    state: &'a StoreState,
    version: u32,
}

/// Whole-state persistence to a single JSON file.
///
/// No partial writes: every save serializes the entire state. Two processes
/// writing the same file simply overwrite each other.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_NAME}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<Option<StoreState>, SnapshotError> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let snapshot: PersistedSnapshot = serde_json::from_slice(&raw)?;
        tracing::info!(path = %self.path.display(), "snapshot loaded");
        Ok(Some(snapshot.state))
    }

    /// Loads the snapshot, or writes and returns the seed state when none exists.
    pub async fn load_or_seed(&self) -> Result<StoreState, SnapshotError> {
        if let Some(state) = self.load().await? {
            return Ok(state);
        }
        let state = seed::initial_state();
        self.save(&state).await?;
        tracing::info!(path = %self.path.display(), "no snapshot found, seeded catalog");
        Ok(state)
    }

    pub async fn save(&self, state: &StoreState) -> Result<(), SnapshotError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await?;
        }
        let snapshot = SnapshotRef { state, version: 0 };
        let body = serde_json::to_vec_pretty(&snapshot)?;

        // Readers see the old file or the new one, never a partial write.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body).await?;
        fs::rename(&tmp, &self.path).await?;
        tracing::debug!(path = %self.path.display(), "snapshot saved");
        Ok(())
    }
}
