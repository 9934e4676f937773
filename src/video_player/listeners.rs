// SPDX-License-Identifier: MPL-2.0
//! Scoped event-listener registrations.
//!
//! Listeners attached outside a component's own subtree (on the window or
//! the player root) must be removed when the interaction ends or the
//! component goes away. Registrations are RAII guards: dropping a
//! [`ListenerGuard`] removes the listener, so early returns and teardown
//! cannot leak handlers.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// The top-level window/document.
    Window,
    /// The player's root element.
    PlayerRoot,
}

/// Which event a listener receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    KeyDown,
    PointerMove,
    PointerUp,
}

type Counts = HashMap<(ListenerTarget, ListenerKind), usize>;

/// Tracks live listener registrations for one UI thread.
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    counts: Rc<RefCell<Counts>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener; it stays registered until the guard is dropped.
    #[must_use = "dropping the guard removes the listener immediately"]
    pub fn register(&self, target: ListenerTarget, kind: ListenerKind) -> ListenerGuard {
        *self.counts.borrow_mut().entry((target, kind)).or_insert(0) += 1;
        tracing::trace!(listener_target = ?target, ?kind, "listener added");
        ListenerGuard {
            counts: Rc::clone(&self.counts),
            key: (target, kind),
        }
    }

    /// Number of live listeners for `target`/`kind`.
    pub fn count(&self, target: ListenerTarget, kind: ListenerKind) -> usize {
        self.counts
            .borrow()
            .get(&(target, kind))
            .copied()
            .unwrap_or(0)
    }

    /// Number of live listeners of any kind.
    pub fn total(&self) -> usize {
        self.counts.borrow().values().sum()
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("total", &self.total())
            .finish()
    }
}

/// A live listener registration. Dropping it removes the listener.
pub struct ListenerGuard {
    counts: Rc<RefCell<Counts>>,
    key: (ListenerTarget, ListenerKind),
}

impl ListenerGuard {
    pub fn target(&self) -> ListenerTarget {
        self.key.0
    }

    pub fn kind(&self) -> ListenerKind {
        self.key.1
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("target", &self.key.0)
            .field("kind", &self.key.1)
            .finish()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let mut counts = self.counts.borrow_mut();
        if let Some(count) = counts.get_mut(&self.key) {
            *count -= 1;
            if *count == 0 {
                counts.remove(&self.key);
            }
        }
        tracing::trace!(target_kind = ?self.key, "listener removed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_drop_removes_listener() {
        let registry = ListenerRegistry::new();
        let guard = registry.register(ListenerTarget::Window, ListenerKind::PointerMove);
        assert_eq!(
            registry.count(ListenerTarget::Window, ListenerKind::PointerMove),
            1
        );
        assert_eq!(guard.target(), ListenerTarget::Window);

        drop(guard);
        assert_eq!(registry.total(), 0);
    }

    #[test]
    fn counts_are_per_target_and_kind() {
        let registry = ListenerRegistry::new();
        let _a = registry.register(ListenerTarget::Window, ListenerKind::KeyDown);
        let _b = registry.register(ListenerTarget::Window, ListenerKind::KeyDown);
        let _c = registry.register(ListenerTarget::PlayerRoot, ListenerKind::KeyDown);

        assert_eq!(registry.count(ListenerTarget::Window, ListenerKind::KeyDown), 2);
        assert_eq!(
            registry.count(ListenerTarget::PlayerRoot, ListenerKind::KeyDown),
            1
        );
        assert_eq!(registry.total(), 3);
    }

    #[test]
    fn clones_share_state() {
        let registry = ListenerRegistry::new();
        let other = registry.clone();
        let _guard = other.register(ListenerTarget::Window, ListenerKind::PointerUp);
        assert_eq!(registry.total(), 1);
    }
}
