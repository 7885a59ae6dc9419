//! Core trait for animation behaviors.

use std::cell::RefCell;
use std::rc::Rc;

use super::super::{ActStateSnapshot, AnimationType};
use crate::resource::SharedResource;

/// Pluggable logic that reacts to computed state by altering presentation.
///
/// One instance is created per registration and bound to exactly one
/// resource. The attach/detach hooks default to no-ops; most behaviors only
/// implement [`play_animation`](Self::play_animation).
pub trait AnimationBehavior {
    /// Animation type this behavior serves.
    fn animation_type(&self) -> AnimationType;

    /// The resource this instance animates, once bound.
    fn resource(&self) -> Option<&SharedResource>;

    /// Bind the instance to its resource. Called by the registry right
    /// after construction.
    fn set_resource(&mut self, resource: SharedResource);

    /// Called once at registration, before the first snapshot.
    fn on_attached(&mut self) {}

    /// Called once when the registration is removed.
    fn on_detached(&mut self) {}

    /// React to the snapshot of the current scroll tick.
    fn play_animation(&mut self, snapshot: &ActStateSnapshot);

    /// Optional name for debugging/logging.
    fn name(&self) -> &'static str {
        "unnamed"
    }
}

/// Zero-argument producer of fresh behavior instances.
pub type BehaviorFactory = Rc<dyn Fn() -> Box<dyn AnimationBehavior>>;

/// Behavior instance shared by a ref and its subscription.
pub type SharedBehavior = Rc<RefCell<Box<dyn AnimationBehavior>>>;

/// Factory producing `B::default()` for every registration.
#[must_use]
pub fn factory<B: AnimationBehavior + Default + 'static>() -> BehaviorFactory {
    Rc::new(|| -> Box<dyn AnimationBehavior> { Box::new(B::default()) })
}
