//! Registry and resource configuration with TOML/JSON support.
//!
//! Options serialize to/from TOML for host-side config files and to/from
//! JSON for values embedded in a page (e.g. a `data-` attribute).

mod registry;
mod resource;

use std::path::Path;

pub use registry::{RegistryOptions, DEFAULT_ID_PREFIX};
pub use resource::ResourceOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FinnError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial files (e.g. only overriding `[resource]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Registry policy.
    pub registry: RegistryOptions,
    /// Defaults for resources built from options.
    pub resource: ResourceOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FinnError> {
        let content = std::fs::read_to_string(path).map_err(FinnError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!("Loaded options from '{}'", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FinnError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FinnError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FinnError::Io)?;
        }
        std::fs::write(path, content).map_err(FinnError::Io)
    }

    /// Parse options from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, FinnError> {
        toml::from_str(content)
            .map_err(|e| FinnError::OptionsParse(e.to_string()))
    }

    /// Parse options from a JSON string.
    pub fn from_json(content: &str) -> Result<Self, FinnError> {
        serde_json::from_str(content)
            .map_err(|e| FinnError::OptionsParse(e.to_string()))
    }
}
