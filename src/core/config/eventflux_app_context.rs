// SPDX-License-Identifier: MIT OR Apache-2.0

use super::extension_config::ExtensionConfig;
use std::sync::Arc;

/// Compile-time context handed to every function during validation.
///
/// The math functions do not read it; it exists so extensions that need
/// application-level settings receive them through the same call.
#[derive(Debug, Clone)]
pub struct EventFluxAppContext {
    pub name: String,
    pub config: Arc<ExtensionConfig>,
}

impl EventFluxAppContext {
    pub fn new(name: impl Into<String>, config: Arc<ExtensionConfig>) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}

impl Default for EventFluxAppContext {
    fn default() -> Self {
        Self::new("default", Arc::new(ExtensionConfig::default()))
    }
}
