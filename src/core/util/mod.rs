// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serialize a value with bincode.
pub fn to_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, bincode::Error> {
    bincode::serialize(value)
}

/// Deserialize a value previously produced by [`to_bytes`].
pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, bincode::Error> {
    bincode::deserialize(bytes)
}
