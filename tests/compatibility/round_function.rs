// SPDX-License-Identifier: MIT OR Apache-2.0
//
// math:round(a)

use super::common::{compile, double, CallSiteRunner};
use eventflux_math::core::error::{EventFluxError, ExecutionError, ValidationError};
use eventflux_math::core::event::AttributeValue;
use eventflux_math::query_api::definition::attribute::Type as ApiAttributeType;

#[test]
fn round_double_returns_long() {
    let mut runner = CallSiteRunner::new("math:round", &[ApiAttributeType::DOUBLE]);
    assert_eq!(runner.return_type(), ApiAttributeType::LONG);
    assert_eq!(runner.send(vec![double(3.5)]), Ok(AttributeValue::Long(4)));
    assert_eq!(runner.send(vec![double(-3.5)]), Ok(AttributeValue::Long(-3)));
    assert_eq!(runner.send(vec![double(3.35)]), Ok(AttributeValue::Long(3)));
    assert_eq!(
        runner.send(vec![double(4_000_000_000.7)]),
        Ok(AttributeValue::Long(4_000_000_001))
    );
    runner.shutdown();
}

#[test]
fn round_float_returns_int() {
    let mut runner = CallSiteRunner::new("math:round", &[ApiAttributeType::FLOAT]);
    assert_eq!(runner.return_type(), ApiAttributeType::INT);
    assert_eq!(
        runner.send(vec![Some(AttributeValue::Float(7.5))]),
        Ok(AttributeValue::Int(8))
    );
    assert_eq!(
        runner.send(vec![Some(AttributeValue::Float(-7.5))]),
        Ok(AttributeValue::Int(-7))
    );
    runner.shutdown();
}

#[test]
fn round_rejects_integer_input() {
    for t in [ApiAttributeType::INT, ApiAttributeType::LONG] {
        let err = compile("math:round", &[t]).unwrap_err();
        assert!(matches!(
            err,
            EventFluxError::Validation(ValidationError::TypeMismatch { position: 0, .. })
        ));
    }
}

#[test]
fn round_null_input() {
    let mut runner = CallSiteRunner::new("math:round", &[ApiAttributeType::DOUBLE]);
    assert!(matches!(
        runner.send(vec![None]),
        Err(ExecutionError::NullArgument { .. })
    ));
    assert_eq!(runner.send(vec![double(0.5)]), Ok(AttributeValue::Long(1)));
    runner.shutdown();
}
