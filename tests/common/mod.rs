// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Shared harness: a single function call site fed from a typed input stream.

#![allow(dead_code)]

use eventflux_math::core::config::{EventFluxAppContext, ExtensionConfig};
use eventflux_math::core::error::{EventFluxResult, ExecutionError};
use eventflux_math::core::event::{AttributeValue, Event};
use eventflux_math::core::executor::function::AttributeFunctionExpressionExecutor;
use eventflux_math::core::executor::{ExpressionExecutor, VariableExpressionExecutor};
use eventflux_math::core::extension::FunctionRegistry;
use eventflux_math::query_api::definition::attribute::Type as ApiAttributeType;
use std::sync::Arc;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn context() -> Arc<EventFluxAppContext> {
    Arc::new(EventFluxAppContext::new(
        "compatibility",
        Arc::new(ExtensionConfig::default()),
    ))
}

/// Argument executors reading positions `0..schema.len()` of each event.
pub fn stream_arguments(schema: &[ApiAttributeType]) -> Vec<Box<dyn ExpressionExecutor>> {
    schema
        .iter()
        .enumerate()
        .map(|(i, t)| Box::new(VariableExpressionExecutor::new(i, *t)) as Box<dyn ExpressionExecutor>)
        .collect()
}

/// Compile `function(attr0, attr1, ...)` over a stream with the given schema.
pub fn compile(
    function: &str,
    schema: &[ApiAttributeType],
) -> EventFluxResult<AttributeFunctionExpressionExecutor> {
    init_logging();
    FunctionRegistry::default().build(function, stream_arguments(schema), &context())
}

pub struct CallSiteRunner {
    site: AttributeFunctionExpressionExecutor,
    timestamp: i64,
}

impl CallSiteRunner {
    pub fn new(function: &str, schema: &[ApiAttributeType]) -> Self {
        let mut site = compile(function, schema).expect("query should compile");
        site.start().expect("call site should start");
        Self { site, timestamp: 0 }
    }

    pub fn return_type(&self) -> ApiAttributeType {
        self.site.get_return_type()
    }

    pub fn send(&mut self, data: Vec<Option<AttributeValue>>) -> Result<AttributeValue, ExecutionError> {
        self.timestamp += 1;
        let event = Event::new(self.timestamp, data);
        self.site.process(Some(&event))
    }

    pub fn site_mut(&mut self) -> &mut AttributeFunctionExpressionExecutor {
        &mut self.site
    }

    pub fn shutdown(mut self) -> AttributeFunctionExpressionExecutor {
        self.site.stop().expect("call site should stop once");
        self.site
    }
}

pub fn double(v: f64) -> Option<AttributeValue> {
    Some(AttributeValue::Double(v))
}

pub fn as_f64(v: &AttributeValue) -> f64 {
    match v {
        AttributeValue::Double(d) => *d,
        other => panic!("expected DOUBLE, got {other:?}"),
    }
}
