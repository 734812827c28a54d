//! Cooperative cancellation for searches.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared "is thinking" flag.
///
/// A search raises it on entry and clears it on every exit path through a
/// [`ThinkingGuard`]. Clearing it from anywhere else asks the running search
/// to unwind; the search polls it at every node and between root moves.
#[derive(Clone, Debug, Default)]
pub struct ThinkingFlag(Arc<AtomicBool>);

impl ThinkingFlag {
    /// Create a new flag (initially idle).
    #[must_use]
    pub fn new() -> Self {
        ThinkingFlag(Arc::new(AtomicBool::new(false)))
    }

    /// Whether a search currently holds the flag and has not been stopped.
    #[inline]
    #[must_use]
    pub fn is_thinking(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Ask the running search, if any, to stop.
    #[inline]
    pub fn stop(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Raise the flag for the lifetime of the returned guard.
    pub(crate) fn start(&self) -> ThinkingGuard {
        self.0.store(true, Ordering::Relaxed);
        ThinkingGuard { flag: self.clone() }
    }
}

/// Clears the flag when dropped, whichever way the search exits.
#[derive(Debug)]
pub(crate) struct ThinkingGuard {
    flag: ThinkingFlag,
}

impl Drop for ThinkingGuard {
    fn drop(&mut self) {
        self.flag.stop();
    }
}
