// SPDX-License-Identifier: MIT OR Apache-2.0

use super::value::AttributeValue;
use serde::{Deserialize, Serialize};

/// An event as seen by expression executors: a timestamp plus positional
/// attribute data, where `None` marks an absent attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub timestamp: i64,
    pub data: Vec<Option<AttributeValue>>,
}

impl Event {
    pub fn new(timestamp: i64, data: Vec<Option<AttributeValue>>) -> Self {
        Self { timestamp, data }
    }

    /// Build an event where every attribute is present.
    pub fn from_values(timestamp: i64, values: Vec<AttributeValue>) -> Self {
        Self {
            timestamp,
            data: values.into_iter().map(Some).collect(),
        }
    }

    pub fn get(&self, position: usize) -> Option<&AttributeValue> {
        self.data.get(position).and_then(|v| v.as_ref())
    }
}
