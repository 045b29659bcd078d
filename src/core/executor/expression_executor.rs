// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::core::event::{AttributeValue, Event};
use crate::query_api::definition::attribute::Type as ApiAttributeType;
use std::fmt::Debug;

/// An already-typed expression supplied by the host for a function argument.
///
/// The declared type is known before any event flows and is what function
/// validation inspects; `execute` yields the runtime value, `None` when the
/// value is absent for this event.
pub trait ExpressionExecutor: Debug + Send + Sync {
    fn execute(&self, event: Option<&Event>) -> Option<AttributeValue>;

    fn get_return_type(&self) -> ApiAttributeType;
}
