//! Cooperative cancellation (§5): checked at the head of each generation.
//!
//! No module in the teacher crate exposes cancellation (`evolve_population`
//! always runs to completion). Modeled as a small `Arc<AtomicBool>` wrapper
//! so a caller on another thread can flip it; the driver treats an absent
//! token as "never cancels".

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A `Clone`, `Send + Sync` flag a caller can signal from another thread to
/// stop a run between generations.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Checked by the driver at the top of each generation.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn starts_uncancelled() {
        assert!(!CancellationToken::new().is_cancelled());
    }

    #[test]
    fn cancel_is_visible_through_clones() {
        let token = CancellationToken::new();
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn cancel_is_visible_across_threads() {
        let token = CancellationToken::new();
        let clone = token.clone();
        let handle = thread::spawn(move || clone.cancel());
        handle.join().unwrap();
        assert!(token.is_cancelled());
    }
}
