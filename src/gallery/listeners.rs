//! Plugin-wide Escape key listener registry.
//!
//! Zellij delivers every key press to the plugin; whether Escape means
//! "close the modal" depends on whether something is listening for it. The
//! modal acquires an [`EscapeGuard`] when it opens and drops it when it
//! closes, so the registration can never outlive the modal.

use std::cell::Cell;
use std::rc::Rc;

/// Registry counting live Escape listeners.
///
/// Cloning shares the same registry.
#[derive(Debug, Clone, Default)]
pub struct EscapeListeners {
    active: Rc<Cell<usize>>,
}

impl EscapeListeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener. It stays registered until the guard is dropped.
    #[must_use]
    pub fn acquire(&self) -> EscapeGuard {
        self.active.set(self.active.get() + 1);
        tracing::trace!(active = self.active.get(), "escape listener registered");
        EscapeGuard {
            active: Rc::clone(&self.active),
        }
    }

    /// Number of listeners currently registered.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active.get()
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.active.get() > 0
    }
}

/// Scoped Escape listener registration; released on drop.
#[derive(Debug)]
pub struct EscapeGuard {
    active: Rc<Cell<usize>>,
}

impl Drop for EscapeGuard {
    fn drop(&mut self) {
        self.active.set(self.active.get().saturating_sub(1));
        tracing::trace!(active = self.active.get(), "escape listener released");
    }
}
