// SPDX-License-Identifier: MIT OR Apache-2.0
//
// math:sinh(a)

use super::common::{as_f64, compile, double, CallSiteRunner};
use eventflux_math::core::error::ExecutionError;
use eventflux_math::core::event::AttributeValue;
use eventflux_math::query_api::definition::attribute::Type as ApiAttributeType;

#[test]
fn sinh_double_input() {
    let mut runner = CallSiteRunner::new("math:sinh", &[ApiAttributeType::DOUBLE]);
    assert_eq!(runner.return_type(), ApiAttributeType::DOUBLE);
    assert_eq!(runner.send(vec![double(0.0)]), Ok(AttributeValue::Double(0.0)));
    let v = as_f64(&runner.send(vec![double(1.0)]).unwrap());
    assert!((v - 1.1752011936438014).abs() < 1e-12);
    let v = as_f64(&runner.send(vec![double(-1.0)]).unwrap());
    assert!((v + 1.1752011936438014).abs() < 1e-12);
    runner.shutdown();
}

#[test]
fn sinh_long_input() {
    let mut runner = CallSiteRunner::new("math:sinh", &[ApiAttributeType::LONG]);
    let v = as_f64(&runner.send(vec![Some(AttributeValue::Long(2))]).unwrap());
    assert!((v - 3.626860407847019).abs() < 1e-12);
    runner.shutdown();
}

#[test]
fn sinh_rejects_bool_input() {
    assert!(compile("math:sinh", &[ApiAttributeType::BOOL]).is_err());
    assert!(compile("math:sinh", &[]).is_err());
}

#[test]
fn sinh_null_input() {
    let mut runner = CallSiteRunner::new("math:sinh", &[ApiAttributeType::INT]);
    assert!(matches!(
        runner.send(vec![None]),
        Err(ExecutionError::NullArgument { position: 0, .. })
    ));
    runner.shutdown();
}
