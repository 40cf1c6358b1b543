// SPDX-License-Identifier: MPL-2.0
//! Page scroll lock held while the gallery modal is open.
//!
//! The lock is a single shared flag read by the page view. It is only set by
//! [`ScrollLock::acquire`] and only cleared when the returned
//! [`ScrollLockGuard`] is dropped, so acquire/release can never be mismatched.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared page scroll-lock flag. Cloning shares the same flag.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    locked: Arc<AtomicBool>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether page scrolling is currently suppressed.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Acquire)
    }

    /// Takes the lock. Returns `None` if it is already held, so a second
    /// acquisition can never double-lock or, on drop, release someone else's
    /// hold.
    #[must_use]
    pub fn acquire(&self) -> Option<ScrollLockGuard> {
        self.locked
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| ScrollLockGuard {
                locked: Arc::clone(&self.locked),
            })
    }
}

/// Releases the page scroll lock when dropped.
#[derive(Debug)]
pub struct ScrollLockGuard {
    locked: Arc<AtomicBool>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.locked.store(false, Ordering::Release);
    }
}
