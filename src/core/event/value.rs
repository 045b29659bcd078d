// SPDX-License-Identifier: MIT OR Apache-2.0

//! Attribute values and numeric coercion.
//!
//! Absent values are modelled as `Option<AttributeValue>::None` rather than a
//! null variant, so every function sees "missing" as a distinct case.

use crate::query_api::definition::attribute::Type as ApiAttributeType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single attribute value carried by an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Bool(bool),
    String(String),
}

impl AttributeValue {
    /// The attribute type this value is tagged with.
    pub fn attribute_type(&self) -> ApiAttributeType {
        match self {
            AttributeValue::Int(_) => ApiAttributeType::INT,
            AttributeValue::Long(_) => ApiAttributeType::LONG,
            AttributeValue::Float(_) => ApiAttributeType::FLOAT,
            AttributeValue::Double(_) => ApiAttributeType::DOUBLE,
            AttributeValue::Bool(_) => ApiAttributeType::BOOL,
            AttributeValue::String(_) => ApiAttributeType::STRING,
        }
    }

    /// Project onto the numeric subset, `None` for non-numeric values.
    pub fn as_numeric(&self) -> Option<NumericValue> {
        match self {
            AttributeValue::Int(v) => Some(NumericValue::Int(*v)),
            AttributeValue::Long(v) => Some(NumericValue::Long(*v)),
            AttributeValue::Float(v) => Some(NumericValue::Float(*v)),
            AttributeValue::Double(v) => Some(NumericValue::Double(*v)),
            AttributeValue::Bool(_) | AttributeValue::String(_) => None,
        }
    }
}

impl From<NumericValue> for AttributeValue {
    fn from(value: NumericValue) -> Self {
        match value {
            NumericValue::Int(v) => AttributeValue::Int(v),
            NumericValue::Long(v) => AttributeValue::Long(v),
            NumericValue::Float(v) => AttributeValue::Float(v),
            NumericValue::Double(v) => AttributeValue::Double(v),
        }
    }
}

/// Numeric subset of [`AttributeValue`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

impl NumericValue {
    /// Canonical double precision representation.
    ///
    /// Exact for every `Int`, `Float` and `Double`; exact for `Long` within
    /// the 2^53 integer range of an `f64`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        match self {
            NumericValue::Int(v) => v as f64,
            NumericValue::Long(v) => v as f64,
            NumericValue::Float(v) => v as f64,
            NumericValue::Double(v) => v,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoercionError {
    #[error("value is absent")]
    Absent,

    #[error("declared type {0} is not numeric")]
    NonNumericType(ApiAttributeType),

    #[error("value of type {0} is not numeric")]
    NonNumericValue(ApiAttributeType),
}

/// Coerce a value whose declared type is numeric into an `f64`.
///
/// Every math function funnels its inputs through here so that integer and
/// single precision inputs are widened identically.
pub fn coerce_to_double(
    value: Option<&AttributeValue>,
    declared: ApiAttributeType,
) -> Result<f64, CoercionError> {
    if !declared.is_numeric() {
        return Err(CoercionError::NonNumericType(declared));
    }
    let value = value.ok_or(CoercionError::Absent)?;
    value
        .as_numeric()
        .map(NumericValue::to_f64)
        .ok_or_else(|| CoercionError::NonNumericValue(value.attribute_type()))
}
