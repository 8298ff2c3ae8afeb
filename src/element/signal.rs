//! Synchronous publish/subscribe for grid and profile notifications
//!
//! Listeners are keyed by the handle returned from `subscribe` and stay
//! registered until explicitly removed. `emit` iterates over a copy of the
//! listener list, so a listener may subscribe or unsubscribe while being
//! notified.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Handle identifying one registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener<T> = Rc<dyn Fn(&T)>;

/// Observer list notified in subscription order
pub struct Signal<T: ?Sized> {
    next_id: Cell<u64>,
    listeners: RefCell<BTreeMap<ListenerId, Listener<T>>>,
}

/// Argument-less signal fired when an element's logical state changes
pub type UpdateSignal = Signal<()>;

impl<T: ?Sized> Signal<T> {
    /// Create a signal with no listeners
    pub const fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            listeners: RefCell::new(BTreeMap::new()),
        }
    }

    /// Register a listener, returning the handle needed to remove it
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.listeners.borrow_mut().insert(id, Rc::new(listener));
        id
    }

    /// Remove a listener; `false` if the handle was not registered
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners.borrow_mut().remove(&id).is_some()
    }

    /// Notify every listener registered at the time of the call
    ///
    /// Returns the number of listeners notified.
    pub fn emit(&self, value: &T) -> usize {
        let snapshot: Vec<Listener<T>> = self.listeners.borrow().values().cloned().collect();
        for listener in &snapshot {
            listener(value);
        }
        snapshot.len()
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl<T: ?Sized> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
