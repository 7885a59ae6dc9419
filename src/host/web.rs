//! Browser host built on `web-sys`.
//!
//! [`DomElement`] adapts an `HtmlElement`; [`WindowScrollHost`] reads
//! `document.documentElement.scrollTop` and the window's inner size and
//! listens for `scroll` on the document.

use wasm_bindgen::prelude::*;

use super::{Element, NativeListener, ScrollHost, ScrollListener};
use crate::geometry::Viewport;

/// Install the console logger and panic hook. Call once at startup.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already initialized");
    }
}

/// [`Element`] backed by a DOM `HtmlElement`.
#[derive(Debug, Clone)]
pub struct DomElement {
    inner: web_sys::HtmlElement,
}

impl DomElement {
    /// Wrap an existing element.
    #[must_use]
    pub fn new(inner: web_sys::HtmlElement) -> Self {
        Self { inner }
    }

    /// Look up an element by id in the current document.
    #[must_use]
    pub fn by_id(id: &str) -> Option<Self> {
        web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()
            .map(Self::new)
    }

    /// The wrapped element.
    #[must_use]
    pub fn html_element(&self) -> &web_sys::HtmlElement {
        &self.inner
    }
}

impl Element for DomElement {
    fn id(&self) -> String {
        self.inner.id()
    }

    fn set_id(&self, id: &str) {
        self.inner.set_id(id);
    }

    fn offset_top(&self) -> f64 {
        f64::from(self.inner.offset_top())
    }

    fn offset_height(&self) -> f64 {
        f64::from(self.inner.offset_height())
    }

    fn offset_width(&self) -> f64 {
        f64::from(self.inner.offset_width())
    }

    fn class_contains(&self, token: &str) -> bool {
        self.inner.class_list().contains(token)
    }

    fn class_add(&self, token: &str) {
        if let Err(e) = self.inner.class_list().add_1(token) {
            log::warn!("failed to add class '{token}': {e:?}");
        }
    }

    fn class_remove(&self, token: &str) {
        if let Err(e) = self.inner.class_list().remove_1(token) {
            log::warn!("failed to remove class '{token}': {e:?}");
        }
    }
}

/// Scroll source for the page the module is running in.
///
/// Without a `window` (e.g. inside a worker) offsets read as zero and
/// listening is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowScrollHost;

impl WindowScrollHost {
    /// Create the host.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn document_scroll_top() -> f64 {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map_or(0.0, |el| f64::from(el.scroll_top()))
}

impl ScrollHost for WindowScrollHost {
    fn scroll_top(&self) -> f64 {
        document_scroll_top()
    }

    fn viewport(&self) -> Viewport {
        let Some(window) = web_sys::window() else {
            return Viewport::default();
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        Viewport::new(width, height)
    }

    fn listen(&self, mut listener: ScrollListener) -> Box<dyn NativeListener> {
        let Some(document) = web_sys::window().and_then(|w| w.document())
        else {
            log::warn!("no document; scroll listener not attached");
            return Box::new(DocumentListener { binding: None });
        };

        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(
            move |_evt: web_sys::Event| listener(document_scroll_top()),
        );
        let target: web_sys::EventTarget = document.into();
        if let Err(e) = target.add_event_listener_with_callback(
            "scroll",
            closure.as_ref().unchecked_ref(),
        ) {
            log::error!("failed to add scroll listener: {e:?}");
            return Box::new(DocumentListener { binding: None });
        }

        Box::new(DocumentListener {
            binding: Some((target, closure)),
        })
    }
}

struct DocumentListener {
    binding: Option<(web_sys::EventTarget, Closure<dyn FnMut(web_sys::Event)>)>,
}

impl NativeListener for DocumentListener {
    fn detach(self: Box<Self>) {
        let Some((target, closure)) = self.binding else {
            return;
        };
        if let Err(e) = target.remove_event_listener_with_callback(
            "scroll",
            closure.as_ref().unchecked_ref(),
        ) {
            log::error!("failed to remove scroll listener: {e:?}");
        }
    }
}
