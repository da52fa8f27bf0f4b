//! Document-level dismissal listeners
//!
//! A visible panel holds a [`Subscription`] on the host document so that any
//! click outside its items dismisses it. Dropping the subscription detaches
//! the listener, which makes release exactly-once on every exit path.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    active: Vec<ListenerId>,
}

/// Click listeners attached to the host document
#[derive(Debug, Clone, Default)]
pub struct DocumentListeners {
    registry: Rc<RefCell<Registry>>,
}

impl DocumentListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.active.push(id);
        log::debug!("Attached document click listener {:?}", id);

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    pub fn active_count(&self) -> usize {
        self.registry.borrow().active.len()
    }

    pub fn is_listening(&self) -> bool {
        self.active_count() > 0
    }

    #[cfg(test)]
    pub fn contains(&self, id: ListenerId) -> bool {
        self.registry.borrow().active.contains(&id)
    }
}

/// Attached listener, detached on drop
#[derive(Debug)]
pub struct Subscription {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().active.retain(|id| *id != self.id);
            log::debug!("Detached document click listener {:?}", self.id);
        }
    }
}
