use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Reaction modes a behavior can serve.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum AnimationType {
    /// React to scroll-induced visibility changes.
    #[serde(rename = "animationType.scrollReact")]
    ScrollReact,
}

impl AnimationType {
    /// Stable string key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ScrollReact => "animationType.scrollReact",
        }
    }
}

impl fmt::Display for AnimationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
