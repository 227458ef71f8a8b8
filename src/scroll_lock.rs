//! Document-level scroll locking shared by every modal dialog.
//!
//! The lock is reference-counted rather than a plain boolean so that one
//! dialog closing can never unlock the page while another dialog still holds
//! the lock.

use std::cell::RefCell;

/// Pure depth counter behind the process-wide lock.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LockDepth {
    depth: u32,
}

impl LockDepth {
    /// Bumps the depth. Returns true while at least one holder remains.
    pub fn acquire(&mut self) -> bool {
        self.depth += 1;
        self.locked()
    }

    /// Drops one holder. Releasing with no holders is a no-op.
    pub fn release(&mut self) -> bool {
        self.depth = self.depth.saturating_sub(1);
        self.locked()
    }

    pub fn locked(self) -> bool {
        self.depth > 0
    }
}

thread_local! {
    static DEPTH: RefCell<LockDepth> = RefCell::new(LockDepth::default());
}

/// Takes a hold on the scroll lock and mirrors it onto the document body.
pub fn acquire() {
    let locked = DEPTH.with(|d| d.borrow_mut().acquire());
    apply(locked);
}

/// Releases one hold; the body style is restored once the last holder exits.
pub fn release() {
    let locked = DEPTH.with(|d| d.borrow_mut().release());
    apply(locked);
}

fn apply(locked: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let value = if locked { "hidden" } else { "unset" };
        let _ = body.style().set_property("overflow", value);
    }
}

#[cfg(test)]
mod tests {
    use super::LockDepth;

    #[test]
    fn single_dialog_locks_and_unlocks() {
        let mut lock = LockDepth::default();
        assert!(!lock.locked());
        assert!(lock.acquire());
        assert!(!lock.release());
    }

    #[test]
    fn stacked_dialogs_keep_the_lock_until_the_last_close() {
        let mut lock = LockDepth::default();
        lock.acquire();
        lock.acquire();
        assert!(lock.release(), "inner close must not unlock the outer dialog");
        assert!(!lock.release());
    }

    #[test]
    fn release_without_acquire_is_a_no_op() {
        let mut lock = LockDepth::default();
        assert!(!lock.release());
        assert!(lock.acquire());
        assert!(!lock.release());
    }

    #[test]
    fn any_balanced_sequence_ends_unlocked() {
        let mut lock = LockDepth::default();
        for _ in 0..5 {
            lock.acquire();
        }
        for _ in 0..5 {
            lock.release();
        }
        assert!(!lock.locked());
    }
}
