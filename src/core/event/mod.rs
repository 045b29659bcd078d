// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod event;
pub mod value;

pub use event::Event;
pub use value::{coerce_to_double, AttributeValue, CoercionError, NumericValue};
