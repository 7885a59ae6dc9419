//! Animation types, behaviors and the per-tick state they react to.

pub mod behaviors;
mod kind;
mod snapshot;
mod stream;

pub use kind::AnimationType;
pub use snapshot::{ActState, ActStateSnapshot};
pub use stream::ActStream;
