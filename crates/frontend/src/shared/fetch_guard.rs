//! Stale-response guard for overlapping fetches.
//!
//! Requests are never aborted mid-flight; instead each view issues a token
//! before fetching and checks it before writing the response into state, so
//! a superseded fetch can no longer overwrite newer state. Stale completions
//! are simply dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct FetchGuard {
    generation: Arc<AtomicU64>,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch cycle, invalidating every earlier token.
    pub fn issue(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// A token is current only until the next `issue` call.
    pub fn is_current(&self, token: u64) -> bool {
        self.generation.load(Ordering::Relaxed) == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_token_wins() {
        let guard = FetchGuard::new();
        let first = guard.issue();
        let second = guard.issue();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_retry_invalidates_in_flight_request() {
        let guard = FetchGuard::new();
        let in_flight = guard.issue();
        assert!(guard.is_current(in_flight));
        let retry = guard.issue();
        // The slow first response must now be discarded.
        assert!(!guard.is_current(in_flight));
        assert!(guard.is_current(retry));
    }

    #[test]
    fn test_clones_share_the_generation() {
        let guard = FetchGuard::new();
        let clone = guard.clone();
        let token = guard.issue();
        assert!(clone.is_current(token));
        clone.issue();
        assert!(!guard.is_current(token));
    }
}
