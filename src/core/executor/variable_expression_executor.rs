// SPDX-License-Identifier: MIT OR Apache-2.0

use super::expression_executor::ExpressionExecutor;
use crate::core::event::{AttributeValue, Event};
use crate::query_api::definition::attribute::Type as ApiAttributeType;

/// Reads the attribute at a fixed position of the incoming event.
#[derive(Debug, Clone)]
pub struct VariableExpressionExecutor {
    position: usize,
    return_type: ApiAttributeType,
}

impl VariableExpressionExecutor {
    pub fn new(position: usize, return_type: ApiAttributeType) -> Self {
        Self {
            position,
            return_type,
        }
    }
}

impl ExpressionExecutor for VariableExpressionExecutor {
    fn execute(&self, event: Option<&Event>) -> Option<AttributeValue> {
        event?.get(self.position).cloned()
    }

    fn get_return_type(&self) -> ApiAttributeType {
        self.return_type
    }
}
