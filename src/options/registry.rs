use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Prefix of generated ref ids unless configured otherwise.
pub const DEFAULT_ID_PREFIX: &str = "animation-registered-";

/// Registry policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Registry", inline)]
#[serde(default)]
pub struct RegistryOptions {
    /// Prefix for generated ref ids (and element ids assigned to elements
    /// that have none).
    #[schemars(title = "Id Prefix")]
    pub id_prefix: String,
    /// Run every live behavior's detach hook on `destroy`. Disable to keep
    /// hooks untouched on bulk teardown.
    #[schemars(title = "Detach On Destroy")]
    pub detach_on_destroy: bool,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_owned(),
            detach_on_destroy: true,
        }
    }
}
