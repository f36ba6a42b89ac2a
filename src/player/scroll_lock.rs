use std::{cell::Cell, rc::Rc};

/// Host capability that suspends page scrolling while frames load.
pub trait ScrollLock {
    fn engage(&mut self);
    fn release(&mut self);
}

/// Ignores lock requests (hosts without a scroll container, headless rendering).
#[derive(Clone, Copy, Debug, Default)]
pub struct NoScrollLock;

impl ScrollLock for NoScrollLock {
    fn engage(&mut self) {}
    fn release(&mut self) {}
}

/// Shared boolean lock; clones observe the same state.
#[derive(Clone, Debug, Default)]
pub struct ScrollLockFlag {
    locked: Rc<Cell<bool>>,
    engagements: Rc<Cell<u32>>,
}

impl ScrollLockFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    /// How many times the lock went from released to engaged.
    pub fn engagements(&self) -> u32 {
        self.engagements.get()
    }
}

impl ScrollLock for ScrollLockFlag {
    fn engage(&mut self) {
        if !self.locked.replace(true) {
            self.engagements.set(self.engagements.get() + 1);
        }
    }

    fn release(&mut self) {
        self.locked.set(false);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/scroll_lock.rs"]
mod tests;
