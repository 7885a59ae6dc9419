//! Viewport / element overlap arithmetic.
//!
//! Everything here is pure: the registry feeds in the current scroll offset
//! and the resource's box geometry and gets back the resource's padded
//! range and whether the viewport window currently overlaps it.

use serde::{Deserialize, Serialize};

use crate::resource::{AnimationResource, OffsetFallback};

/// Size of the visible window in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    /// Visible width.
    pub width: f64,
    /// Visible height.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport of the given size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Extent of the viewport along the measurement axis.
    #[must_use]
    pub fn extent(self, fallback: OffsetFallback) -> f64 {
        match fallback {
            OffsetFallback::Vertical => self.height,
            OffsetFallback::Horizontal => self.width,
        }
    }
}

/// Padded range a resource occupies along its measurement axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceOffset {
    /// Leading edge minus threshold.
    pub start: f64,
    /// Trailing edge plus threshold.
    pub end: f64,
}

/// Compute the padded range of `resource`'s element.
///
/// Both axes measure from the element's top offset; horizontal mode only
/// swaps the height for the width. The threshold pads both sides.
#[must_use]
pub fn resource_offset(resource: &AnimationResource) -> ResourceOffset {
    let element = &resource.element;
    let top = element.offset_top();
    let size = match resource.offset_fallback {
        OffsetFallback::Vertical => element.offset_height(),
        OffsetFallback::Horizontal => element.offset_width(),
    };

    ResourceOffset {
        start: top - resource.threshold,
        end: top + size + resource.threshold,
    }
}

/// Viewport window `(client_start, client_end)` at `scroll_top`.
#[must_use]
pub fn client_window(
    viewport: Viewport,
    fallback: OffsetFallback,
    scroll_top: f64,
) -> (f64, f64) {
    (scroll_top, scroll_top + viewport.extent(fallback))
}

/// Whether the viewport window overlaps a resource range.
///
/// Matches when the viewport's far edge lies inside the range, the range
/// lies inside the viewport, or the range straddles the viewport's near
/// edge. All comparisons are strict, so exact boundary contact is not a
/// match.
#[must_use]
pub fn scroll_match(
    offset: ResourceOffset,
    client_start: f64,
    client_end: f64,
) -> bool {
    let far_edge_inside = offset.start < client_end && client_end < offset.end;
    let contained = client_start < offset.start && offset.end < client_end;
    let straddles_near_edge =
        offset.start < client_start && offset.end > client_start;

    far_edge_inside || contained || straddles_near_edge
}
