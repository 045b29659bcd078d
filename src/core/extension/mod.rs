// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extension System for EventFlux Math
//!
//! Scalar functions are registered as factories under a namespace and looked
//! up by qualified name (`math:log`) while a query is compiled. Every lookup
//! yields a fresh [`FunctionExecutor`], so each call site owns its instance.
//!
//! # Example: Adding a Custom Function
//!
//! ```ignore
//! #[derive(Debug, Clone)]
//! pub struct CoshFactory;
//!
//! impl FunctionExecutorFactory for CoshFactory {
//!     fn name(&self) -> &'static str { "cosh" }
//!     fn create(&self) -> Box<dyn FunctionExecutor> {
//!         Box::new(CoshFunctionExecutor::default())
//!     }
//!     fn clone_box(&self) -> Box<dyn FunctionExecutorFactory> {
//!         Box::new(self.clone())
//!     }
//! }
//!
//! registry.add_function_factory(Box::new(CoshFactory));
//! ```

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use crate::core::config::{EventFluxAppContext, ExtensionConfig};
use crate::core::error::{EventFluxError, EventFluxResult};
use crate::core::executor::expression_executor::ExpressionExecutor;
use crate::core::executor::function::{
    AttributeFunctionExpressionExecutor, FunctionExecutor, LogFunctionExecutor,
    RoundFunctionExecutor, SinhFunctionExecutor,
};

pub trait FunctionExecutorFactory: Debug + Send + Sync {
    /// Unqualified name, e.g. `log`
    fn name(&self) -> &'static str;
    fn create(&self) -> Box<dyn FunctionExecutor>;
    fn clone_box(&self) -> Box<dyn FunctionExecutorFactory>;

    /// Description for documentation/help
    fn description(&self) -> &str {
        ""
    }
}
impl Clone for Box<dyn FunctionExecutorFactory> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[derive(Debug, Clone)]
pub struct LogFunctionFactory;

impl FunctionExecutorFactory for LogFunctionFactory {
    fn name(&self) -> &'static str {
        "log"
    }

    fn create(&self) -> Box<dyn FunctionExecutor> {
        Box::new(LogFunctionExecutor::new())
    }

    fn clone_box(&self) -> Box<dyn FunctionExecutorFactory> {
        Box::new(self.clone())
    }

    fn description(&self) -> &str {
        "log(number, base): logarithm of number to the given base"
    }
}

#[derive(Debug, Clone)]
pub struct RoundFunctionFactory;

impl FunctionExecutorFactory for RoundFunctionFactory {
    fn name(&self) -> &'static str {
        "round"
    }

    fn create(&self) -> Box<dyn FunctionExecutor> {
        Box::new(RoundFunctionExecutor::new())
    }

    fn clone_box(&self) -> Box<dyn FunctionExecutorFactory> {
        Box::new(self.clone())
    }

    fn description(&self) -> &str {
        "round(a): closest integer with ties rounding up; FLOAT -> INT, DOUBLE -> LONG"
    }
}

#[derive(Debug, Clone)]
pub struct SinhFunctionFactory;

impl FunctionExecutorFactory for SinhFunctionFactory {
    fn name(&self) -> &'static str {
        "sinh"
    }

    fn create(&self) -> Box<dyn FunctionExecutor> {
        Box::new(SinhFunctionExecutor::new())
    }

    fn clone_box(&self) -> Box<dyn FunctionExecutorFactory> {
        Box::new(self.clone())
    }

    fn description(&self) -> &str {
        "sinh(a): hyperbolic sine of a in radians"
    }
}

/// Function factories keyed by qualified name.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    config: Arc<ExtensionConfig>,
    factories: HashMap<String, Box<dyn FunctionExecutorFactory>>,
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new(Arc::new(ExtensionConfig::default()))
    }
}

impl FunctionRegistry {
    /// Registry with the built-in math functions allowed by `config`.
    pub fn new(config: Arc<ExtensionConfig>) -> Self {
        let mut registry = Self::empty(config);
        registry.register_default_extensions();
        registry
    }

    pub fn empty(config: Arc<ExtensionConfig>) -> Self {
        Self {
            config,
            factories: HashMap::new(),
        }
    }

    pub fn config(&self) -> &Arc<ExtensionConfig> {
        &self.config
    }

    pub fn register_default_extensions(&mut self) {
        let defaults: [Box<dyn FunctionExecutorFactory>; 3] = [
            Box::new(LogFunctionFactory),
            Box::new(RoundFunctionFactory),
            Box::new(SinhFunctionFactory),
        ];
        for factory in defaults {
            if self.config.is_enabled(factory.name()) {
                self.add_function_factory(factory);
            } else {
                log::info!("Skipping disabled function '{}'", factory.name());
            }
        }
    }

    /// Register a factory under this registry's namespace, replacing any
    /// factory already registered under the same name.
    pub fn add_function_factory(&mut self, factory: Box<dyn FunctionExecutorFactory>) {
        let key = self.config.qualify(factory.name());
        log::info!("Registering function '{}'", key);
        if self.factories.insert(key.clone(), factory).is_some() {
            log::warn!("Function '{}' was already registered and has been replaced", key);
        }
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.factories.contains_key(qualified_name)
    }

    /// Registered qualified names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }

    /// Fresh, unvalidated instance of `qualified_name`.
    pub fn create(&self, qualified_name: &str) -> EventFluxResult<Box<dyn FunctionExecutor>> {
        self.factories
            .get(qualified_name)
            .map(|f| f.create())
            .ok_or_else(|| EventFluxError::extension_not_found("function", qualified_name))
    }

    /// Create and validate a call site for `qualified_name`.
    pub fn build(
        &self,
        qualified_name: &str,
        argument_executors: Vec<Box<dyn ExpressionExecutor>>,
        eventflux_app_context: &Arc<EventFluxAppContext>,
    ) -> EventFluxResult<AttributeFunctionExpressionExecutor> {
        let function = self.create(qualified_name)?;
        Ok(AttributeFunctionExpressionExecutor::new(
            function,
            argument_executors,
            eventflux_app_context,
        )?)
    }
}
