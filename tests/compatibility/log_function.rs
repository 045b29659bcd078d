// SPDX-License-Identifier: MIT OR Apache-2.0
//
// math:log(number, base)

use super::common::{as_f64, compile, double, CallSiteRunner};
use eventflux_math::core::error::{EventFluxError, ExecutionError, ValidationError};
use eventflux_math::core::event::AttributeValue;
use eventflux_math::query_api::definition::attribute::Type as ApiAttributeType;

#[test]
fn log_double_inputs() {
    let mut runner = CallSiteRunner::new(
        "math:log",
        &[ApiAttributeType::DOUBLE, ApiAttributeType::DOUBLE],
    );
    assert_eq!(runner.return_type(), ApiAttributeType::DOUBLE);
    assert_eq!(runner.send(vec![double(10.0), double(10.0)]), Ok(AttributeValue::Double(1.0)));
    assert_eq!(runner.send(vec![double(8.0), double(2.0)]), Ok(AttributeValue::Double(3.0)));
    runner.shutdown();
}

#[test]
fn log_integer_and_float_inputs() {
    let mut runner = CallSiteRunner::new(
        "math:log",
        &[ApiAttributeType::INT, ApiAttributeType::FLOAT],
    );
    let out = runner
        .send(vec![Some(AttributeValue::Int(81)), Some(AttributeValue::Float(3.0))])
        .unwrap();
    assert!((as_f64(&out) - 4.0).abs() < 1e-12);
    runner.shutdown();
}

#[test]
fn log_rejects_wrong_argument_count() {
    let err = compile("math:log", &[ApiAttributeType::DOUBLE]).unwrap_err();
    match err {
        EventFluxError::Validation(ValidationError::ArityMismatch { expected, found, .. }) => {
            assert_eq!((expected, found), (2, 1));
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(compile(
        "math:log",
        &[ApiAttributeType::DOUBLE, ApiAttributeType::DOUBLE, ApiAttributeType::DOUBLE]
    )
    .is_err());
}

#[test]
fn log_rejects_string_base() {
    let err = compile("math:log", &[ApiAttributeType::LONG, ApiAttributeType::STRING]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("math:log()"), "{msg}");
    assert!(msg.contains("required INT or LONG or FLOAT or DOUBLE, but found STRING"), "{msg}");
}

#[test]
fn log_base_one_fails_single_event() {
    let mut runner = CallSiteRunner::new(
        "math:log",
        &[ApiAttributeType::DOUBLE, ApiAttributeType::DOUBLE],
    );
    assert!(matches!(
        runner.send(vec![double(5.0), double(1.0)]),
        Err(ExecutionError::UndefinedDomain { .. })
    ));
    assert!(matches!(
        runner.send(vec![None, double(2.0)]),
        Err(ExecutionError::NullArgument { position: 0, .. })
    ));
    // subsequent events are unaffected
    assert_eq!(runner.send(vec![double(8.0), double(2.0)]), Ok(AttributeValue::Double(3.0)));
    runner.shutdown();
}
