//! Animation behaviors react to per-tick snapshots of their resource.
//!
//! Behaviors are registered with the registry as factories under a string
//! key, so the same behavior can serve any number of resources, one fresh
//! instance per registration.

mod fly_in_out;
mod traits;

pub use fly_in_out::{FlyInOut, ANIM_ACT_CLASS_NAME, BASE_CLASS_NAME};
pub use traits::{factory, AnimationBehavior, BehaviorFactory, SharedBehavior};
