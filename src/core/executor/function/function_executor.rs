// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/executor/function/function_executor.rs
use crate::core::config::eventflux_app_context::EventFluxAppContext;
use crate::core::error::{ExecutionError, StateError, ValidationError};
use crate::core::event::value::{coerce_to_double, AttributeValue, CoercionError};
use crate::core::executor::expression_executor::ExpressionExecutor;
use crate::core::persistence::StateSnapshot;
use crate::query_api::definition::attribute::Type as ApiAttributeType;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Contract for scalar extension functions such as `math:log(x, 2)`.
///
/// The host creates one instance per call site and drives it through
/// `Created -> Validated -> Started -> execute* -> Stopped`:
///
/// * [`validate`](FunctionExecutor::validate) is called exactly once, before
///   anything else, with the typed argument expressions. It checks arity and
///   declared types and fixes the return type. A failure rejects the query.
/// * [`return_type`](FunctionExecutor::return_type) is only meaningful after
///   validation succeeded and depends solely on the declared argument types.
/// * [`execute`](FunctionExecutor::execute) runs once per event. An error fails
///   that event only; the instance remains usable.
/// * [`snapshot_state`](FunctionExecutor::snapshot_state) and
///   [`restore_state`](FunctionExecutor::restore_state) may be called any
///   number of times by the checkpoint coordinator.
///
/// At most one `execute` runs per instance at a time. Stateful extensions rely
/// on this, and on the host serialising snapshots with `execute`, so a capture
/// always reflects some point between two events.
pub trait FunctionExecutor: Debug + Send {
    /// Unqualified function name, e.g. `log`.
    fn name(&self) -> &'static str;

    fn validate(
        &mut self,
        argument_executors: &[Box<dyn ExpressionExecutor>],
        eventflux_app_context: &Arc<EventFluxAppContext>,
    ) -> Result<(), ValidationError>;

    fn return_type(&self) -> ApiAttributeType;

    fn execute(&mut self, data: &[Option<AttributeValue>]) -> Result<AttributeValue, ExecutionError>;

    /// Acquire external resources. Nothing to start for pure functions.
    fn start(&mut self) {}

    /// Release external resources. Nothing to stop for pure functions.
    fn stop(&mut self) {}

    /// Capture internal state. Must round-trip exactly through
    /// [`restore_state`](FunctionExecutor::restore_state).
    fn snapshot_state(&self) -> Result<StateSnapshot, StateError> {
        Ok(StateSnapshot::empty())
    }

    /// Restore state captured earlier. Must be safe without a prior `start`.
    fn restore_state(&mut self, snapshot: &StateSnapshot) -> Result<(), StateError> {
        if !snapshot.is_empty() {
            log::warn!(
                "Ignoring {} byte state restored into stateless function '{}'",
                snapshot.data.len(),
                self.name()
            );
        }
        Ok(())
    }
}

/// Lifecycle position of a function call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Created,
    Validated,
    Started,
    Stopped,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LifecycleState::Created => "created",
            LifecycleState::Validated => "validated",
            LifecycleState::Started => "started",
            LifecycleState::Stopped => "stopped",
        };
        f.write_str(s)
    }
}

/// Name used in messages, e.g. `math:log()`.
pub fn display_name(ctx: &EventFluxAppContext, name: &str) -> String {
    format!("{}()", ctx.config.qualify(name))
}

pub fn check_arity(
    function: &str,
    argument_executors: &[Box<dyn ExpressionExecutor>],
    expected: usize,
) -> Result<(), ValidationError> {
    if argument_executors.len() != expected {
        return Err(ValidationError::ArityMismatch {
            function: function.to_string(),
            expected,
            found: argument_executors.len(),
        });
    }
    Ok(())
}

/// Check the declared type of argument `position` against `accepted` and
/// return it.
pub fn check_argument_type(
    function: &str,
    argument_executors: &[Box<dyn ExpressionExecutor>],
    position: usize,
    accepted: &[ApiAttributeType],
) -> Result<ApiAttributeType, ValidationError> {
    let found = argument_executors[position].get_return_type();
    if !accepted.contains(&found) {
        return Err(ValidationError::TypeMismatch {
            function: function.to_string(),
            position,
            expected: accepted.to_vec(),
            found,
        });
    }
    Ok(found)
}

/// Coerce argument `position` of an event's data to `f64`.
pub fn numeric_argument(
    function: &str,
    data: &[Option<AttributeValue>],
    position: usize,
    declared: ApiAttributeType,
) -> Result<f64, ExecutionError> {
    let value = data.get(position).and_then(Option::as_ref);
    coerce_to_double(value, declared).map_err(|e| match e {
        CoercionError::Absent => ExecutionError::NullArgument {
            function: function.to_string(),
            position,
        },
        CoercionError::NonNumericType(found) | CoercionError::NonNumericValue(found) => {
            ExecutionError::UnsupportedValue {
                function: function.to_string(),
                position,
                found,
            }
        }
    })
}

/// Error for `execute` on an instance that never passed validation.
pub fn not_validated(function: &str) -> ExecutionError {
    ExecutionError::InvalidState {
        function: function.to_string(),
        operation: "execute",
        state: LifecycleState::Created,
    }
}
