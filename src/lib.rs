// SPDX-License-Identifier: MIT OR Apache-2.0

//! Math scalar function extensions for the EventFlux streaming engine.
//!
//! Provides the `FunctionExecutor` extension contract together with the
//! `math:log`, `math:round` and `math:sinh` functions, the host-side call-site
//! wrapper that drives their lifecycle, and checkpoint support.

pub mod core;
pub mod query_api;
