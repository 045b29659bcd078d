// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod attribute_function_expression_executor;
pub mod function_executor;
pub mod math_functions;

pub use attribute_function_expression_executor::AttributeFunctionExpressionExecutor;
pub use function_executor::{FunctionExecutor, LifecycleState};
pub use math_functions::{LogFunctionExecutor, RoundFunctionExecutor, SinhFunctionExecutor};
