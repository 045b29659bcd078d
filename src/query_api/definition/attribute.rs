// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute types understood by the query engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum Type {
    STRING,
    INT,
    LONG,
    FLOAT,
    DOUBLE,
    BOOL,
    OBJECT,
}

impl Type {
    /// Types accepted by every floating point math function.
    pub const NUMERIC: [Type; 4] = [Type::INT, Type::LONG, Type::FLOAT, Type::DOUBLE];

    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::INT | Type::LONG | Type::FLOAT | Type::DOUBLE)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Type::STRING => "STRING",
            Type::INT => "INT",
            Type::LONG => "LONG",
            Type::FLOAT => "FLOAT",
            Type::DOUBLE => "DOUBLE",
            Type::BOOL => "BOOL",
            Type::OBJECT => "OBJECT",
        };
        f.write_str(name)
    }
}

/// Render an accepted-type set the way validation messages expect:
/// `INT or LONG or FLOAT or DOUBLE`.
pub fn join_types(types: &[Type]) -> String {
    types
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" or ")
}
