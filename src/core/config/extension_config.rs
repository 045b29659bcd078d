// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Extension Configuration
//!
//! Controls the namespace the math functions are registered under and which of
//! them are available. Loadable from TOML or YAML.
//!
//! ```toml
//! namespace = "math"
//! disabled_functions = ["sinh"]
//! ```

use crate::core::error::{EventFluxError, EventFluxResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_NAMESPACE: &str = "math";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionConfig {
    /// Prefix used in queries, e.g. `math` for `math:log(x, 2)`
    pub namespace: String,
    /// Function names that are not registered
    pub disabled_functions: Vec<String>,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            disabled_functions: Vec::new(),
        }
    }
}

impl ExtensionConfig {
    pub fn from_toml_str(content: &str) -> EventFluxResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| EventFluxError::configuration(format!("Invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> EventFluxResult<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| EventFluxError::configuration(format!("Invalid YAML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.toml`, `.yaml` or `.yml` file.
    pub fn from_file(path: impl AsRef<Path>) -> EventFluxResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            other => Err(EventFluxError::configuration(format!(
                "Unsupported config file extension: {}",
                other.unwrap_or("<none>")
            ))),
        }
    }

    pub fn is_enabled(&self, function: &str) -> bool {
        !self.disabled_functions.iter().any(|f| f == function)
    }

    /// Qualified name used for lookups and messages, e.g. `math:log`.
    pub fn qualify(&self, function: &str) -> String {
        format!("{}:{}", self.namespace, function)
    }

    fn validate(&self) -> EventFluxResult<()> {
        let ns = self.namespace.trim();
        if ns.is_empty() || ns.contains(':') {
            return Err(EventFluxError::configuration_with_key(
                format!("namespace '{}' must be non-empty and contain no ':'", self.namespace),
                "namespace",
            ));
        }
        Ok(())
    }
}
