//! Broadcast signal with a cached current value.
//!
//! [`Signal`] is a minimal hot observable: it remembers the latest value,
//! hands it to every new subscriber immediately, and fans each new value
//! out to all subscribers in subscription order. [`ScrollSignal`] wires
//! one signal to a host's native scroll events so any number of
//! registrations share a single native listener.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::host::{NativeListener, ScrollHost};

type Callback<T> = Rc<RefCell<dyn FnMut(T)>>;

struct Listener<T> {
    id: u64,
    active: Rc<Cell<bool>>,
    callback: Callback<T>,
}

struct SignalState<T> {
    value: T,
    listeners: Vec<Listener<T>>,
    next_id: u64,
}

/// Latest value plus an ordered list of listeners.
pub struct Signal<T> {
    state: Rc<RefCell<SignalState<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Signal")
            .field("value", &state.value)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

impl<T: Copy + 'static> Signal<T> {
    /// Create a signal holding `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            state: Rc::new(RefCell::new(SignalState {
                value: initial,
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.state.borrow().value
    }

    /// Store `value` and deliver it to every active listener.
    ///
    /// The value is captured once; every listener sees the same one, in
    /// subscription order. A listener cancelled by an earlier listener in
    /// the same fan-out is not invoked.
    pub fn set(&self, value: T) {
        let targets: Vec<(Rc<Cell<bool>>, Callback<T>)> = {
            let mut state = self.state.borrow_mut();
            state.value = value;
            state
                .listeners
                .iter()
                .map(|l| (Rc::clone(&l.active), Rc::clone(&l.callback)))
                .collect()
        };

        for (active, callback) in targets {
            if active.get() {
                deliver(&callback, value);
            }
        }
    }

    /// Subscribe `listener`. It receives the current value before this call
    /// returns and every subsequent [`set`](Self::set) until the returned
    /// [`Subscription`] is cancelled. Dropping the subscription does not
    /// cancel it.
    #[must_use = "dropping a Subscription leaves the listener attached"]
    pub fn subscribe(&self, listener: impl FnMut(T) + 'static) -> Subscription {
        let active = Rc::new(Cell::new(true));
        let callback: Callback<T> = Rc::new(RefCell::new(listener));

        let (id, value) = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.push(Listener {
                id,
                active: Rc::clone(&active),
                callback: Rc::clone(&callback),
            });
            (id, state.value)
        };

        deliver(&callback, value);

        let weak: Weak<RefCell<SignalState<T>>> = Rc::downgrade(&self.state);
        Subscription {
            active,
            remove: Some(Box::new(move || {
                if let Some(state) = weak.upgrade() {
                    state.borrow_mut().listeners.retain(|l| l.id != id);
                }
            })),
        }
    }

    /// Number of attached listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

fn deliver<T>(callback: &Callback<T>, value: T) {
    match callback.try_borrow_mut() {
        Ok(mut f) => (*f)(value),
        Err(_) => log::warn!("skipping re-entrant signal listener"),
    }
}

/// Handle to an attached [`Signal`] listener.
pub struct Subscription {
    active: Rc<Cell<bool>>,
    remove: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Detach the listener. Takes effect immediately; calling it again is a
    /// no-op.
    pub fn unsubscribe(&mut self) {
        self.active.set(false);
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }

    /// Whether [`unsubscribe`](Self::unsubscribe) has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        !self.active.get()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Current vertical scroll offset, shared by every registration of one
/// registry.
///
/// Owns exactly one native listener on the host. Disconnecting (or
/// dropping) detaches it; the cached value and existing subscribers stay
/// but no longer receive ticks.
pub struct ScrollSignal {
    signal: Signal<f64>,
    native: Option<Box<dyn NativeListener>>,
}

impl ScrollSignal {
    /// Seed a signal with the host's current offset and start listening.
    #[must_use]
    pub fn connect(host: &dyn ScrollHost) -> Self {
        let signal = Signal::new(host.scroll_top());
        let feed = signal.clone();
        let native = host.listen(Box::new(move |top| feed.set(top)));
        log::debug!("scroll signal connected at offset {}", signal.get());
        Self {
            signal,
            native: Some(native),
        }
    }

    /// The underlying signal.
    #[must_use]
    pub fn signal(&self) -> &Signal<f64> {
        &self.signal
    }

    /// Whether the native listener is still attached.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.native.is_some()
    }

    /// Detach the native listener. Idempotent.
    pub fn disconnect(&mut self) {
        if let Some(native) = self.native.take() {
            native.detach();
            log::debug!("scroll signal disconnected");
        }
    }
}

impl Drop for ScrollSignal {
    fn drop(&mut self) {
        self.disconnect();
    }
}

impl fmt::Debug for ScrollSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSignal")
            .field("signal", &self.signal)
            .field("connected", &self.is_connected())
            .finish()
    }
}
