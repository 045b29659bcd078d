// SPDX-License-Identifier: MIT OR Apache-2.0

//! Checkpoint support for function executors.
//!
//! A [`StateSnapshot`] is the opaque blob a [`StateHolder`] hands to the
//! checkpoint coordinator. Stateless holders return [`StateSnapshot::empty`].
//! Any holder that does carry state must round-trip it exactly and must accept
//! a restore before it has been started.

pub mod persistence_store;
pub mod snapshot_service;

pub use persistence_store::{InMemoryPersistenceStore, PersistenceStore};
pub use snapshot_service::{PersistReport, SnapshotService};

use crate::core::error::StateError;
use crate::core::util::{from_bytes, to_bytes};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub version: u32,
    pub data: Vec<u8>,
}

impl StateSnapshot {
    /// Marker returned by holders without state.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.version == 0 && self.data.is_empty()
    }

    /// Encode `state` under a holder-defined schema version.
    pub fn encode<T: Serialize>(version: u32, state: &T) -> Result<Self, StateError> {
        let data = to_bytes(state).map_err(|e| StateError::Encode(e.to_string()))?;
        Ok(Self { version, data })
    }

    /// Decode state written by [`StateSnapshot::encode`] with the same version.
    pub fn decode<T: DeserializeOwned>(&self, expected_version: u32) -> Result<T, StateError> {
        if self.version != expected_version {
            return Err(StateError::VersionMismatch {
                expected: expected_version,
                found: self.version,
            });
        }
        from_bytes(&self.data).map_err(|e| StateError::Decode(e.to_string()))
    }
}

/// Components whose state is captured by the [`SnapshotService`].
pub trait StateHolder: Send {
    fn serialize_state(&self) -> Result<StateSnapshot, StateError>;

    fn deserialize_state(&mut self, snapshot: &StateSnapshot) -> Result<(), StateError>;
}
