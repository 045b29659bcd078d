// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::core::error::{EventFluxError, EventFluxResult};

/// Store for full checkpoint snapshots, keyed by application and revision.
pub trait PersistenceStore: Send + Sync {
    fn save(&self, eventflux_app_id: &str, revision: &str, snapshot: &[u8]) -> EventFluxResult<()>;
    fn load(&self, eventflux_app_id: &str, revision: &str) -> EventFluxResult<Option<Vec<u8>>>;
    fn get_last_revision(&self, eventflux_app_id: &str) -> EventFluxResult<Option<String>>;
    fn clear_all_revisions(&self, eventflux_app_id: &str) -> EventFluxResult<()>;
    fn delete_revision(&self, eventflux_app_id: &str, revision: &str) -> EventFluxResult<()>;
}

/// Very small in-memory implementation useful for tests.
#[derive(Default)]
pub struct InMemoryPersistenceStore {
    inner: Mutex<HashMap<String, HashMap<String, Vec<u8>>>>,
    last_revision: Mutex<HashMap<String, String>>,
}

fn lock<T>(m: &Mutex<T>) -> EventFluxResult<MutexGuard<'_, T>> {
    m.lock()
        .map_err(|_| EventFluxError::persistence("persistence store lock poisoned"))
}

impl InMemoryPersistenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistenceStore for InMemoryPersistenceStore {
    fn save(&self, eventflux_app_id: &str, revision: &str, snapshot: &[u8]) -> EventFluxResult<()> {
        lock(&self.inner)?
            .entry(eventflux_app_id.to_string())
            .or_default()
            .insert(revision.to_string(), snapshot.to_vec());
        lock(&self.last_revision)?.insert(eventflux_app_id.to_string(), revision.to_string());
        log::debug!(
            "Saved revision {}/{} ({} bytes)",
            eventflux_app_id,
            revision,
            snapshot.len()
        );
        Ok(())
    }

    fn load(&self, eventflux_app_id: &str, revision: &str) -> EventFluxResult<Option<Vec<u8>>> {
        Ok(lock(&self.inner)?
            .get(eventflux_app_id)
            .and_then(|m| m.get(revision).cloned()))
    }

    fn get_last_revision(&self, eventflux_app_id: &str) -> EventFluxResult<Option<String>> {
        Ok(lock(&self.last_revision)?.get(eventflux_app_id).cloned())
    }

    fn clear_all_revisions(&self, eventflux_app_id: &str) -> EventFluxResult<()> {
        lock(&self.inner)?.remove(eventflux_app_id);
        lock(&self.last_revision)?.remove(eventflux_app_id);
        Ok(())
    }

    fn delete_revision(&self, eventflux_app_id: &str, revision: &str) -> EventFluxResult<()> {
        if let Some(entry) = lock(&self.inner)?.get_mut(eventflux_app_id) {
            entry.remove(revision);
        }
        let mut last = lock(&self.last_revision)?;
        if last.get(eventflux_app_id).map(String::as_str) == Some(revision) {
            last.remove(eventflux_app_id);
        }
        Ok(())
    }
}
