// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod config;
pub mod error;
pub mod event;
pub mod executor;
pub mod extension;
pub mod persistence;
pub mod util;
