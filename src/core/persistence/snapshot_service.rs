// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::core::error::{EventFluxError, EventFluxResult};
use crate::core::persistence::{StateHolder, StateSnapshot};
use crate::core::util::{from_bytes, to_bytes};

use super::persistence_store::PersistenceStore;

/// Report of a persistence operation
#[derive(Debug, Clone)]
pub struct PersistReport {
    /// Revision ID that was created
    pub revision: String,
    /// Number of components successfully persisted
    pub success_count: usize,
    /// Component IDs that succeeded
    pub succeeded_components: Vec<String>,
}

/// Checkpoint coordinator for registered state holders.
///
/// Holders sit behind a `Mutex`, so a capture always observes a holder between
/// two of its `execute` calls, never in the middle of one.
pub struct SnapshotService {
    persistence_store: Arc<dyn PersistenceStore>,
    eventflux_app_id: String,
    state_holders: Mutex<HashMap<String, Arc<Mutex<dyn StateHolder>>>>,
}

#[derive(Serialize, Deserialize, Default)]
struct SnapshotData {
    holders: HashMap<String, StateSnapshot>,
}

impl std::fmt::Debug for SnapshotService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotService")
            .field("eventflux_app_id", &self.eventflux_app_id)
            .finish()
    }
}

fn poisoned(what: &str) -> EventFluxError {
    EventFluxError::persistence(format!("{what} lock poisoned"))
}

impl SnapshotService {
    pub fn new(eventflux_app_id: impl Into<String>, persistence_store: Arc<dyn PersistenceStore>) -> Self {
        Self {
            persistence_store,
            eventflux_app_id: eventflux_app_id.into(),
            state_holders: Mutex::new(HashMap::new()),
        }
    }

    pub fn eventflux_app_id(&self) -> &str {
        &self.eventflux_app_id
    }

    /// Register a state holder to be included in snapshots.
    pub fn register_state_holder(
        &self,
        id: impl Into<String>,
        holder: Arc<Mutex<dyn StateHolder>>,
    ) -> EventFluxResult<()> {
        let id = id.into();
        log::info!("SnapshotService: Registering state holder: {}", id);
        let mut holders = self.state_holders.lock().map_err(|_| poisoned("holder registry"))?;
        holders.insert(id, holder);
        log::debug!("SnapshotService: Total registered holders: {}", holders.len());
        Ok(())
    }

    /// Capture every registered holder and save the result under a new revision.
    ///
    /// Any holder failing to serialize fails the whole checkpoint; nothing is
    /// written to the store in that case.
    pub fn persist(&self) -> EventFluxResult<PersistReport> {
        let mut snapshot = SnapshotData::default();
        let mut succeeded_components = Vec::new();

        let holders = self.state_holders.lock().map_err(|_| poisoned("holder registry"))?;
        for (id, holder) in holders.iter() {
            let state = holder
                .lock()
                .map_err(|_| poisoned(id))?
                .serialize_state()
                .map_err(|e| {
                    log::error!("Failed to serialize state for {id}: {e}");
                    EventFluxError::persistence(format!("component '{id}' failed to persist: {e}"))
                })?;
            snapshot.holders.insert(id.clone(), state);
            succeeded_components.push(id.clone());
        }
        drop(holders);

        let data = to_bytes(&snapshot).map_err(|e| EventFluxError::persistence(e.to_string()))?;
        let revision = format!("{}-{}", Utc::now().timestamp_millis(), Uuid::new_v4());
        self.persistence_store
            .save(&self.eventflux_app_id, &revision, &data)?;
        log::info!(
            "Persisted revision {} for {} ({} components)",
            revision,
            self.eventflux_app_id,
            succeeded_components.len()
        );

        Ok(PersistReport {
            revision,
            success_count: succeeded_components.len(),
            succeeded_components,
        })
    }

    /// Load the given revision from the store and restore every known holder.
    pub fn restore_revision(&self, revision: &str) -> EventFluxResult<()> {
        let data = self
            .persistence_store
            .load(&self.eventflux_app_id, revision)?
            .ok_or_else(|| EventFluxError::persistence(format!("Revision '{revision}' not found")))?;
        let snap: SnapshotData =
            from_bytes(&data).map_err(|e| EventFluxError::persistence(e.to_string()))?;

        let holders = self.state_holders.lock().map_err(|_| poisoned("holder registry"))?;
        for (id, state) in snap.holders {
            match holders.get(&id) {
                Some(holder) => {
                    holder
                        .lock()
                        .map_err(|_| poisoned(&id))?
                        .deserialize_state(&state)
                        .map_err(|e| {
                            log::error!("Failed to restore state for {id}: {e}");
                            EventFluxError::from(e)
                        })?;
                    log::info!("Restored state for component: {}", id);
                }
                None => log::info!("No state holder found for component: {}", id),
            }
        }
        Ok(())
    }

    /// Restore the most recent revision, returning its id, or `None` when
    /// nothing has been persisted yet.
    pub fn restore_last_revision(&self) -> EventFluxResult<Option<String>> {
        match self.persistence_store.get_last_revision(&self.eventflux_app_id)? {
            Some(revision) => {
                self.restore_revision(&revision)?;
                Ok(Some(revision))
            }
            None => Ok(None),
        }
    }
}
