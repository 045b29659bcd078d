// SPDX-License-Identifier: MIT OR Apache-2.0

// eventflux_math/src/core/executor/function/math_functions.rs
use super::function_executor::{
    check_argument_type, check_arity, display_name, not_validated, numeric_argument,
    FunctionExecutor,
};
use crate::core::config::eventflux_app_context::EventFluxAppContext;
use crate::core::error::{ExecutionError, ValidationError};
use crate::core::event::value::AttributeValue;
use crate::core::executor::expression_executor::ExpressionExecutor;
use crate::query_api::definition::attribute::Type as ApiAttributeType;
use std::sync::Arc;

const FLOATING: [ApiAttributeType; 2] = [ApiAttributeType::FLOAT, ApiAttributeType::DOUBLE];

/// `log(number, base)`: logarithm of `number` to `base`, always DOUBLE.
///
/// `base == 1` is rejected per event. Other degenerate bases (zero, negative)
/// follow IEEE-754 and yield NaN or an infinity.
#[derive(Debug)]
pub struct LogFunctionExecutor {
    function: String,
    argument_types: Option<[ApiAttributeType; 2]>,
}

impl Default for LogFunctionExecutor {
    fn default() -> Self {
        Self {
            function: "math:log()".to_string(),
            argument_types: None,
        }
    }
}

impl LogFunctionExecutor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FunctionExecutor for LogFunctionExecutor {
    fn name(&self) -> &'static str {
        "log"
    }

    fn validate(
        &mut self,
        argument_executors: &[Box<dyn ExpressionExecutor>],
        ctx: &Arc<EventFluxAppContext>,
    ) -> Result<(), ValidationError> {
        self.function = display_name(ctx, self.name());
        check_arity(&self.function, argument_executors, 2)?;
        let number = check_argument_type(&self.function, argument_executors, 0, &ApiAttributeType::NUMERIC)?;
        let base = check_argument_type(&self.function, argument_executors, 1, &ApiAttributeType::NUMERIC)?;
        self.argument_types = Some([number, base]);
        Ok(())
    }

    fn return_type(&self) -> ApiAttributeType {
        ApiAttributeType::DOUBLE
    }

    fn execute(&mut self, data: &[Option<AttributeValue>]) -> Result<AttributeValue, ExecutionError> {
        let [number_type, base_type] = self
            .argument_types
            .ok_or_else(|| not_validated(&self.function))?;
        let number = numeric_argument(&self.function, data, 0, number_type)?;
        let base = numeric_argument(&self.function, data, 1, base_type)?;
        if base == 1.0 {
            return Err(ExecutionError::UndefinedDomain {
                function: self.function.clone(),
                message: format!("logarithm to base 1 is undefined (number = {number})"),
            });
        }
        Ok(AttributeValue::Double(number.ln() / base.ln()))
    }
}

/// `round(a)`: closest integer, ties toward positive infinity.
///
/// Only FLOAT and DOUBLE inputs are accepted. The return type follows the
/// declared input: FLOAT rounds to INT, DOUBLE rounds to LONG.
#[derive(Debug)]
pub struct RoundFunctionExecutor {
    function: String,
    /// (declared input type, return type)
    signature: Option<(ApiAttributeType, ApiAttributeType)>,
}

impl Default for RoundFunctionExecutor {
    fn default() -> Self {
        Self {
            function: "math:round()".to_string(),
            signature: None,
        }
    }
}

impl RoundFunctionExecutor {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Round half up: `floor(x + 0.5)` without the precision loss of adding 0.5
/// to values just below a tie.
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

impl FunctionExecutor for RoundFunctionExecutor {
    fn name(&self) -> &'static str {
        "round"
    }

    fn validate(
        &mut self,
        argument_executors: &[Box<dyn ExpressionExecutor>],
        ctx: &Arc<EventFluxAppContext>,
    ) -> Result<(), ValidationError> {
        self.function = display_name(ctx, self.name());
        check_arity(&self.function, argument_executors, 1)?;
        let input = check_argument_type(&self.function, argument_executors, 0, &FLOATING)?;
        let output = match input {
            ApiAttributeType::FLOAT => ApiAttributeType::INT,
            _ => ApiAttributeType::LONG,
        };
        self.signature = Some((input, output));
        Ok(())
    }

    fn return_type(&self) -> ApiAttributeType {
        self.signature
            .map(|(_, output)| output)
            .unwrap_or(ApiAttributeType::OBJECT)
    }

    fn execute(&mut self, data: &[Option<AttributeValue>]) -> Result<AttributeValue, ExecutionError> {
        let (input, output) = self.signature.ok_or_else(|| not_validated(&self.function))?;
        let rounded = round_half_up(numeric_argument(&self.function, data, 0, input)?);
        // `as` saturates at the target bounds and maps NaN to zero
        Ok(match output {
            ApiAttributeType::INT => AttributeValue::Int(rounded as i32),
            _ => AttributeValue::Long(rounded as i64),
        })
    }
}

/// `sinh(a)`: hyperbolic sine of `a` (radians), always DOUBLE.
#[derive(Debug)]
pub struct SinhFunctionExecutor {
    function: String,
    argument_type: Option<ApiAttributeType>,
}

impl Default for SinhFunctionExecutor {
    fn default() -> Self {
        Self {
            function: "math:sinh()".to_string(),
            argument_type: None,
        }
    }
}

impl SinhFunctionExecutor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FunctionExecutor for SinhFunctionExecutor {
    fn name(&self) -> &'static str {
        "sinh"
    }

    fn validate(
        &mut self,
        argument_executors: &[Box<dyn ExpressionExecutor>],
        ctx: &Arc<EventFluxAppContext>,
    ) -> Result<(), ValidationError> {
        self.function = display_name(ctx, self.name());
        check_arity(&self.function, argument_executors, 1)?;
        let input = check_argument_type(&self.function, argument_executors, 0, &ApiAttributeType::NUMERIC)?;
        self.argument_type = Some(input);
        Ok(())
    }

    fn return_type(&self) -> ApiAttributeType {
        ApiAttributeType::DOUBLE
    }

    fn execute(&mut self, data: &[Option<AttributeValue>]) -> Result<AttributeValue, ExecutionError> {
        let input = self.argument_type.ok_or_else(|| not_validated(&self.function))?;
        let value = numeric_argument(&self.function, data, 0, input)?;
        Ok(AttributeValue::Double(value.sinh()))
    }
}
