//! Per-exploration traversal state.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use crate::cancel::CancelToken;

/// State threaded through every recursive step of one exploration: the
/// visited set, the cancellation token and the depth bound. Created per
/// `explore` call and dropped with it.
#[derive(Debug)]
pub struct TraversalContext {
    visited: Mutex<HashSet<String>>,
    cancel: CancelToken,
    max_depth: usize,
}

impl TraversalContext {
    #[must_use]
    pub fn new(cancel: CancelToken, max_depth: usize) -> Self {
        Self {
            visited: Mutex::new(HashSet::new()),
            cancel,
            max_depth,
        }
    }

    /// Claim `node_id` at `depth`. Returns `false` when the node is past the
    /// depth bound, was already entered, or the exploration is cancelled.
    /// The check and the insert happen under one lock.
    pub fn try_enter(&self, node_id: &str, depth: usize) -> bool {
        if depth > self.max_depth || self.cancel.is_cancelled() {
            return false;
        }
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(node_id.to_string())
    }

    #[must_use]
    pub const fn cancel(&self) -> &CancelToken {
        &self.cancel
    }

    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_is_entered_once() {
        let ctx = TraversalContext::new(CancelToken::new(), 10);
        assert!(ctx.try_enter("a", 0));
        assert!(!ctx.try_enter("a", 3));
        assert!(ctx.try_enter("b", 10));
        assert_eq!(ctx.visited_count(), 2);
    }

    #[test]
    fn depth_bound_is_inclusive() {
        let ctx = TraversalContext::new(CancelToken::new(), 2);
        assert!(ctx.try_enter("a", 2));
        assert!(!ctx.try_enter("b", 3));
        // Rejected by depth, so still enterable at a shallower level.
        assert!(ctx.try_enter("b", 1));
    }

    #[test]
    fn cancelled_context_enters_nothing() {
        let cancel = CancelToken::new();
        let ctx = TraversalContext::new(cancel.clone(), 10);
        cancel.cancel();
        assert!(!ctx.try_enter("a", 0));
        assert_eq!(ctx.visited_count(), 0);
    }
}
