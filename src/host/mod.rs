//! Host-page contracts the registry and behaviors are written against.
//!
//! The registry never talks to a browser directly. It reads element box
//! geometry through [`Element`] and receives scroll offsets through a
//! [`ScrollHost`]. [`memory`] provides an in-process host for headless use
//! and tests; the `web` feature adds a DOM-backed host in `web`.

pub mod class_list;
pub mod memory;
#[cfg(feature = "web")]
pub mod web;

use crate::geometry::Viewport;

/// A UI element handle.
///
/// Mirrors the small slice of the DOM element API the crate needs. Methods
/// take `&self`; implementations use interior mutability the way DOM
/// handles do.
pub trait Element {
    /// Current element id (empty when unset).
    fn id(&self) -> String;

    /// Replace the element id.
    fn set_id(&self, id: &str);

    /// Distance from the offset parent's top edge.
    fn offset_top(&self) -> f64;

    /// Rendered height.
    fn offset_height(&self) -> f64;

    /// Rendered width.
    fn offset_width(&self) -> f64;

    /// Whether the class list contains `token`.
    fn class_contains(&self, token: &str) -> bool;

    /// Add `token` to the class list.
    fn class_add(&self, token: &str);

    /// Remove `token` from the class list.
    fn class_remove(&self, token: &str);
}

/// Callback a [`ScrollHost`] invokes with the new vertical scroll offset.
pub type ScrollListener = Box<dyn FnMut(f64)>;

/// A registered native scroll listener.
pub trait NativeListener {
    /// Remove the listener from the host event source.
    fn detach(self: Box<Self>);
}

/// The page-wide scroll event source and viewport accessor.
pub trait ScrollHost {
    /// Current vertical scroll offset of the document.
    fn scroll_top(&self) -> f64;

    /// Current size of the visible window.
    fn viewport(&self) -> Viewport;

    /// Register `listener` for scroll events.
    fn listen(&self, listener: ScrollListener) -> Box<dyn NativeListener>;
}
