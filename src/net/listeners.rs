//! Auth-change listener registry.
//!
//! DESIGN
//! ======
//! Registration hands back a `Subscription` token; the listener stays live
//! until the token is dropped or `unsubscribe` is called. The registry holds
//! only weak ownership from the token side, so a token outliving its provider
//! releases nothing and does not panic.
//!
//! Emission snapshots the listener list before invoking callbacks, so a
//! callback may register or release listeners without a `RefCell` double
//! borrow. A listener released mid-emission is skipped.

#[cfg(test)]
#[path = "listeners_test.rs"]
mod listeners_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::types::{AuthEvent, Session};

type Listener = Rc<dyn Fn(AuthEvent, Option<Session>)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

impl Registry {
    fn contains(&self, id: u64) -> bool {
        self.listeners.iter().any(|(lid, _)| *lid == id)
    }
}

/// Shared, single-threaded set of auth-change callbacks.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Rc<RefCell<Registry>>,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for every subsequent emission.
    pub fn register<F>(&self, callback: F) -> Subscription
    where
        F: Fn(AuthEvent, Option<Session>) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(callback)));
        Subscription { id, registry: Rc::downgrade(&self.inner), released: false }
    }

    /// Invoke every live listener exactly once with `event` and `session`.
    pub fn emit(&self, event: AuthEvent, session: Option<&Session>) {
        let snapshot: Vec<(u64, Listener)> = self.inner.borrow().listeners.clone();
        for (id, listener) in snapshot {
            if !self.inner.borrow().contains(id) {
                continue;
            }
            listener(event, session.cloned());
        }
    }

    /// Number of live listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Disposable handle for one registered listener.
///
/// Dropping the handle releases the listener.
#[must_use = "dropping a Subscription immediately releases the listener"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
    released: bool,
}

impl Subscription {
    /// Release the listener now.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    /// Whether the listener is still registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.released
            && self
                .registry
                .upgrade()
                .is_some_and(|registry| registry.borrow().contains(self.id))
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("released", &self.released)
            .finish()
    }
}
