// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod eventflux_app_context;
pub mod extension_config;

pub use eventflux_app_context::EventFluxAppContext;
pub use extension_config::ExtensionConfig;
