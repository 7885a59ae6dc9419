//! Animation resources: an element plus how to measure it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::host::Element;

/// Padding in pixels applied to both sides of a resource range when none is
/// configured.
pub const DEFAULT_THRESHOLD: f64 = 50.0;

/// Which element dimension defines the resource's extent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum OffsetFallback {
    /// Measure with the element's height.
    #[default]
    Vertical,
    /// Measure with the element's width.
    Horizontal,
}

/// What to animate and how to measure its visible extent.
///
/// Resources are owned by the caller and shared with the registry as a
/// [`SharedResource`]; changes made after registration (e.g. a new
/// `threshold`) are picked up on the next scroll tick.
#[derive(Clone)]
pub struct AnimationResource {
    /// Element being animated.
    pub element: Rc<dyn Element>,
    /// Key of the behavior factory to instantiate.
    pub behavior_id: String,
    /// Axis used to measure the element.
    pub offset_fallback: OffsetFallback,
    /// Padding added to both ends of the measured range.
    pub threshold: f64,
}

/// Resource handle shared between the caller, its behavior and the
/// registry's derived stream.
pub type SharedResource = Rc<RefCell<AnimationResource>>;

impl AnimationResource {
    /// Resource for `element` using `behavior_id`, vertical measurement and
    /// the default threshold.
    pub fn new(
        element: Rc<dyn Element>,
        behavior_id: impl Into<String>,
    ) -> Self {
        Self {
            element,
            behavior_id: behavior_id.into(),
            offset_fallback: OffsetFallback::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Set the measurement axis.
    #[must_use]
    pub fn with_offset_fallback(mut self, fallback: OffsetFallback) -> Self {
        self.offset_fallback = fallback;
        self
    }

    /// Set the range padding.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Wrap into a [`SharedResource`] for registration.
    #[must_use]
    pub fn shared(self) -> SharedResource {
        Rc::new(RefCell::new(self))
    }
}

impl fmt::Debug for AnimationResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationResource")
            .field("element", &self.element.id())
            .field("behavior_id", &self.behavior_id)
            .field("offset_fallback", &self.offset_fallback)
            .field("threshold", &self.threshold)
            .finish()
    }
}
