// SPDX-License-Identifier: MIT OR Apache-2.0

use super::expression_executor::ExpressionExecutor;
use crate::core::event::{AttributeValue, Event};
use crate::query_api::definition::attribute::Type as ApiAttributeType;

/// Evaluates to the same value for every event.
#[derive(Debug, Clone)]
pub struct ConstantExpressionExecutor {
    value: Option<AttributeValue>,
    return_type: ApiAttributeType,
}

impl ConstantExpressionExecutor {
    pub fn new(value: AttributeValue) -> Self {
        let return_type = value.attribute_type();
        Self {
            value: Some(value),
            return_type,
        }
    }

    /// A typed constant with no value, e.g. `cast(null as double)`.
    pub fn absent(return_type: ApiAttributeType) -> Self {
        Self {
            value: None,
            return_type,
        }
    }
}

impl ExpressionExecutor for ConstantExpressionExecutor {
    fn execute(&self, _event: Option<&Event>) -> Option<AttributeValue> {
        self.value.clone()
    }

    fn get_return_type(&self) -> ApiAttributeType {
        self.return_type
    }
}
