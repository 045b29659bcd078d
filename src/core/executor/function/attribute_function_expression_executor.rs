// SPDX-License-Identifier: MIT OR Apache-2.0

use super::function_executor::{FunctionExecutor, LifecycleState};
use crate::core::config::eventflux_app_context::EventFluxAppContext;
use crate::core::error::{ExecutionError, StateError, ValidationError};
use crate::core::event::{AttributeValue, Event};
use crate::core::executor::expression_executor::ExpressionExecutor;
use crate::core::persistence::{StateHolder, StateSnapshot};
use crate::query_api::definition::attribute::Type as ApiAttributeType;
use std::sync::Arc;

/// A function call site as the host sees it: one [`FunctionExecutor`] plus the
/// argument expressions feeding it.
///
/// Construction runs validation exactly once. Afterwards the call site only
/// moves forward through its lifecycle, and calls made out of order fail with
/// [`ExecutionError::InvalidState`] instead of reaching the function.
#[derive(Debug)]
pub struct AttributeFunctionExpressionExecutor {
    function: Box<dyn FunctionExecutor>,
    argument_executors: Vec<Box<dyn ExpressionExecutor>>,
    qualified_name: String,
    state: LifecycleState,
}

impl AttributeFunctionExpressionExecutor {
    pub fn new(
        mut function: Box<dyn FunctionExecutor>,
        argument_executors: Vec<Box<dyn ExpressionExecutor>>,
        eventflux_app_context: &Arc<EventFluxAppContext>,
    ) -> Result<Self, ValidationError> {
        let qualified_name = eventflux_app_context.config.qualify(function.name());
        if let Err(e) = function.validate(&argument_executors, eventflux_app_context) {
            log::debug!(
                "[{}] rejected {}: {}",
                eventflux_app_context.name,
                qualified_name,
                e
            );
            return Err(e);
        }
        log::debug!(
            "[{}] validated {} returning {}",
            eventflux_app_context.name,
            qualified_name,
            function.return_type()
        );
        Ok(Self {
            function,
            argument_executors,
            qualified_name,
            state: LifecycleState::Validated,
        })
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn get_return_type(&self) -> ApiAttributeType {
        self.function.return_type()
    }

    fn invalid(&self, operation: &'static str) -> ExecutionError {
        ExecutionError::InvalidState {
            function: self.qualified_name.clone(),
            operation,
            state: self.state,
        }
    }

    pub fn start(&mut self) -> Result<(), ExecutionError> {
        if self.state != LifecycleState::Validated {
            return Err(self.invalid("start"));
        }
        self.function.start();
        self.state = LifecycleState::Started;
        log::debug!("{} started", self.qualified_name);
        Ok(())
    }

    /// Stop the call site. Allowed once, whether or not it was started.
    pub fn stop(&mut self) -> Result<(), ExecutionError> {
        if self.state == LifecycleState::Stopped {
            return Err(self.invalid("stop"));
        }
        self.function.stop();
        self.state = LifecycleState::Stopped;
        log::debug!("{} stopped", self.qualified_name);
        Ok(())
    }

    /// Run the function on argument values already evaluated by the host.
    pub fn execute(&mut self, data: &[Option<AttributeValue>]) -> Result<AttributeValue, ExecutionError> {
        if self.state != LifecycleState::Started {
            return Err(self.invalid("execute"));
        }
        self.function.execute(data).inspect_err(|e| {
            log::warn!("{} failed for event: {}", self.qualified_name, e);
        })
    }

    /// Evaluate the argument expressions against `event` and run the function.
    pub fn process(&mut self, event: Option<&Event>) -> Result<AttributeValue, ExecutionError> {
        let data: Vec<Option<AttributeValue>> = self
            .argument_executors
            .iter()
            .map(|e| e.execute(event))
            .collect();
        self.execute(&data)
    }
}

impl StateHolder for AttributeFunctionExpressionExecutor {
    fn serialize_state(&self) -> Result<StateSnapshot, StateError> {
        self.function.snapshot_state()
    }

    fn deserialize_state(&mut self, snapshot: &StateSnapshot) -> Result<(), StateError> {
        self.function.restore_state(snapshot)
    }
}
