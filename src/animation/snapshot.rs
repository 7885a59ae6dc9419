//! Per-tick state handed to behaviors.

use std::fmt;

use super::AnimationType;
use crate::geometry::{
    client_window, resource_offset, scroll_match, ResourceOffset, Viewport,
};
use crate::resource::SharedResource;

/// Type-specific part of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActState {
    /// Scroll-react state.
    ScrollReact {
        /// Whether the viewport window overlaps the resource range.
        scroll_matched: bool,
        /// Raw vertical scroll offset of this tick.
        scrolled_distance: f64,
    },
}

/// State of one resource at one scroll tick.
#[derive(Clone)]
pub struct ActStateSnapshot {
    resource: SharedResource,
    viewport_offset: Viewport,
    resource_offset: ResourceOffset,
    state: ActState,
}

impl ActStateSnapshot {
    /// Compute the scroll-react snapshot of `resource` at `scroll_top`.
    #[must_use]
    pub fn scroll_react(
        resource: &SharedResource,
        viewport: Viewport,
        scroll_top: f64,
    ) -> Self {
        let (offset, fallback) = {
            let r = resource.borrow();
            (resource_offset(&r), r.offset_fallback)
        };
        let (client_start, client_end) =
            client_window(viewport, fallback, scroll_top);

        Self {
            resource: SharedResource::clone(resource),
            viewport_offset: viewport,
            resource_offset: offset,
            state: ActState::ScrollReact {
                scroll_matched: scroll_match(offset, client_start, client_end),
                scrolled_distance: scroll_top,
            },
        }
    }

    /// The measured resource.
    #[must_use]
    pub fn resource(&self) -> &SharedResource {
        &self.resource
    }

    /// Viewport size at this tick.
    #[must_use]
    pub fn viewport_offset(&self) -> Viewport {
        self.viewport_offset
    }

    /// Padded resource range at this tick.
    #[must_use]
    pub fn resource_offset(&self) -> ResourceOffset {
        self.resource_offset
    }

    /// Type-specific state.
    #[must_use]
    pub fn state(&self) -> ActState {
        self.state
    }

    /// Animation type this snapshot was computed for.
    #[must_use]
    pub fn animation_type(&self) -> AnimationType {
        match self.state {
            ActState::ScrollReact { .. } => AnimationType::ScrollReact,
        }
    }

    /// Whether the viewport overlaps the resource.
    #[must_use]
    pub fn scroll_matched(&self) -> bool {
        match self.state {
            ActState::ScrollReact { scroll_matched, .. } => scroll_matched,
        }
    }

    /// Raw scroll offset the snapshot was computed from.
    #[must_use]
    pub fn scrolled_distance(&self) -> f64 {
        match self.state {
            ActState::ScrollReact {
                scrolled_distance, ..
            } => scrolled_distance,
        }
    }
}

impl fmt::Debug for ActStateSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let borrowed = self.resource.try_borrow();
        let resource: &dyn fmt::Debug = match &borrowed {
            Ok(r) => &**r,
            Err(_) => &"<busy>",
        };
        f.debug_struct("ActStateSnapshot")
            .field("resource", resource)
            .field("viewport_offset", &self.viewport_offset)
            .field("resource_offset", &self.resource_offset)
            .field("state", &self.state)
            .finish()
    }
}
