// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod constant_expression_executor;
pub mod expression_executor;
pub mod function;
pub mod variable_expression_executor;

pub use constant_expression_executor::ConstantExpressionExecutor;
pub use expression_executor::ExpressionExecutor;
pub use variable_expression_executor::VariableExpressionExecutor;
