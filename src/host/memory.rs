//! In-process host: elements and a scroll source driven by method calls.
//!
//! Useful for headless hosts (server-side layout, native shells) and for
//! exercising behaviors without a browser.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::{Element, NativeListener, ScrollHost, ScrollListener};
use crate::geometry::Viewport;

/// Element with explicitly set box geometry and an in-memory class list.
#[derive(Debug, Default)]
pub struct VirtualElement {
    id: RefCell<String>,
    top: Cell<f64>,
    width: Cell<f64>,
    height: Cell<f64>,
    classes: RefCell<Vec<String>>,
}

impl VirtualElement {
    /// Create an element at `top` with the given size.
    #[must_use]
    pub fn new(id: &str, top: f64, width: f64, height: f64) -> Self {
        Self {
            id: RefCell::new(id.to_owned()),
            top: Cell::new(top),
            width: Cell::new(width),
            height: Cell::new(height),
            classes: RefCell::new(Vec::new()),
        }
    }

    /// Move the element.
    pub fn set_top(&self, top: f64) {
        self.top.set(top);
    }

    /// Resize the element.
    pub fn set_size(&self, width: f64, height: f64) {
        self.width.set(width);
        self.height.set(height);
    }

    /// Current class tokens in insertion order.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().clone()
    }
}

impl Element for VirtualElement {
    fn id(&self) -> String {
        self.id.borrow().clone()
    }

    fn set_id(&self, id: &str) {
        id.clone_into(&mut self.id.borrow_mut());
    }

    fn offset_top(&self) -> f64 {
        self.top.get()
    }

    fn offset_height(&self) -> f64 {
        self.height.get()
    }

    fn offset_width(&self) -> f64 {
        self.width.get()
    }

    fn class_contains(&self, token: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == token)
    }

    fn class_add(&self, token: &str) {
        if !self.class_contains(token) {
            self.classes.borrow_mut().push(token.to_owned());
        }
    }

    fn class_remove(&self, token: &str) {
        self.classes.borrow_mut().retain(|c| c != token);
    }
}

type ListenerSlot = Rc<RefCell<ScrollListener>>;
type ListenerList = Rc<RefCell<Vec<(u64, ListenerSlot)>>>;

/// Scroll source whose offset and viewport are set by the caller.
///
/// [`scroll_to`](Self::scroll_to) plays the role of the native scroll
/// event: it updates the offset and synchronously notifies every listener.
pub struct ManualScrollHost {
    scroll_top: Cell<f64>,
    viewport: Cell<Viewport>,
    listeners: ListenerList,
    next_listener: Cell<u64>,
}

impl ManualScrollHost {
    /// Host scrolled to the top with the given viewport.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            scroll_top: Cell::new(0.0),
            viewport: Cell::new(viewport),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_listener: Cell::new(0),
        }
    }

    /// Scroll to `top` and dispatch a scroll event.
    pub fn scroll_to(&self, top: f64) {
        self.scroll_top.set(top);
        let slots: Vec<ListenerSlot> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, slot)| Rc::clone(slot))
            .collect();
        for slot in slots {
            if let Ok(mut listener) = slot.try_borrow_mut() {
                (*listener)(top);
            } else {
                log::warn!("skipping re-entrant scroll listener");
            }
        }
    }

    /// Resize the viewport without dispatching an event.
    pub fn resize(&self, viewport: Viewport) {
        self.viewport.set(viewport);
    }

    /// Number of attached native listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl ScrollHost for ManualScrollHost {
    fn scroll_top(&self) -> f64 {
        self.scroll_top.get()
    }

    fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    fn listen(&self, listener: ScrollListener) -> Box<dyn NativeListener> {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.listeners
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(listener))));
        Box::new(ManualListener {
            listeners: Rc::downgrade(&self.listeners),
            id,
        })
    }
}

struct ManualListener {
    listeners: Weak<RefCell<Vec<(u64, ListenerSlot)>>>,
    id: u64,
}

impl NativeListener for ManualListener {
    fn detach(self: Box<Self>) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}
