use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A cooperative-cancellation token backed by an [`AtomicBool`].
///
/// A [`Search`](crate::Search) started with one checks it before every
/// frontier pop. Once cancelled, the search stops yielding events and its
/// status becomes [`SearchStatus::Cancelled`](crate::SearchStatus::Cancelled)
/// with an empty path. Clones share the same flag, so a handle may be kept
/// on another thread to stop a long search.
#[derive(Clone, Debug)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    /// Create a new, non-cancelled context.
    pub fn new() -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_cancellation() {
        let ctx = Context::new();
        let handle = ctx.clone();
        assert!(!ctx.is_done());
        handle.cancel();
        assert!(ctx.is_done());
    }

    #[test]
    fn cancel_from_another_thread() {
        let ctx = Context::default();
        let handle = ctx.clone();
        std::thread::spawn(move || handle.cancel()).join().unwrap();
        assert!(ctx.is_done());
    }
}
