use std::rc::Rc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::host::Element;
use crate::resource::{AnimationResource, OffsetFallback, DEFAULT_THRESHOLD};

/// Measurement configuration applied to resources built from options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Resource", inline)]
#[serde(default)]
pub struct ResourceOptions {
    /// Key of the behavior factory to use.
    #[schemars(title = "Behavior")]
    pub behavior_id: String,
    /// Axis used to measure elements.
    #[schemars(title = "Offset Fallback")]
    pub offset_fallback: OffsetFallback,
    /// Padding in pixels added to both ends of the matched range.
    #[schemars(
        title = "Threshold",
        range(min = 0.0, max = 1000.0),
        extend("step" = 1.0)
    )]
    pub threshold: f64,
}

impl Default for ResourceOptions {
    fn default() -> Self {
        Self {
            behavior_id: String::new(),
            offset_fallback: OffsetFallback::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl ResourceOptions {
    /// Build a resource for `element` with this configuration.
    #[must_use]
    pub fn build(&self, element: Rc<dyn Element>) -> AnimationResource {
        AnimationResource::new(element, self.behavior_id.clone())
            .with_offset_fallback(self.offset_fallback)
            .with_threshold(self.threshold)
    }
}
