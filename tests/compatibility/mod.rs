// SPDX-License-Identifier: MIT OR Apache-2.0

#[path = "../common/mod.rs"]
pub mod common;

pub mod log_function;
pub mod round_function;
pub mod sinh_function;
