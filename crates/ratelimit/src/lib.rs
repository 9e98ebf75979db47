//! Fixed-window request rate limiter keyed by client identity.
//!
//! Each client gets a counter that resets entirely at fixed intervals.
//! Within a live window, requests are admitted until the configured
//! maximum is reached; denied requests do not consume further quota.
//! Expired windows are replaced on the next request and evicted in bulk
//! by [`RateLimiter::sweep`].
//!
//! The known tradeoff of fixed windows applies: up to 2x the maximum can
//! pass across a window edge. Callers that need strict smoothing should
//! substitute a sliding-window variant behind the same interface.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use ratelimit::RateLimiter;
//!
//! let limiter = RateLimiter::new(10, Duration::from_secs(60));
//!
//! let decision = limiter.check("203.0.113.7");
//! assert!(decision.allowed);
//! assert_eq!(decision.remaining, 9);
//! ```

use std::collections::HashMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;

/// Per-client window state.
struct WindowEntry {
    count: u32,
    reset_at_ms: u64,
}

/// Outcome of an admission check.
///
/// `reset_at_ms` is epoch milliseconds, the unit exposed in the
/// `X-RateLimit-Reset` response header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub remaining: u32,
    pub reset_at_ms: u64,
}

/// Fixed-window counter over a shared client table.
///
/// Every check is a single locked read-modify-write, so two concurrent
/// requests for the same key cannot both observe `count < max` and
/// overshoot the quota.
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    windows: Mutex<HashMap<String, WindowEntry>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Admit or deny a request for `key`.
    ///
    /// This never errors; the only outcomes are an allowed decision with
    /// the remaining quota or a denied decision carrying the reset time.
    pub fn check(&self, key: &str) -> RateLimitDecision {
        self.check_at(key, now_ms())
    }

    /// Remove entries whose window has lapsed, returning the eviction
    /// count. Entries are also replaced lazily on access; the sweep only
    /// bounds memory for clients that went quiet.
    pub fn sweep(&self) -> usize {
        self.sweep_at(now_ms())
    }

    /// Number of clients currently tracked.
    pub fn tracked_clients(&self) -> usize {
        self.windows.lock().len()
    }

    fn check_at(&self, key: &str, now_ms: u64) -> RateLimitDecision {
        let mut windows = self.windows.lock();

        match windows.get_mut(key) {
            Some(entry) if now_ms < entry.reset_at_ms => {
                if entry.count >= self.max_requests {
                    // Denied requests must not push the count past max.
                    return RateLimitDecision {
                        allowed: false,
                        remaining: 0,
                        reset_at_ms: entry.reset_at_ms,
                    };
                }

                entry.count += 1;
                RateLimitDecision {
                    allowed: true,
                    remaining: self.max_requests - entry.count,
                    reset_at_ms: entry.reset_at_ms,
                }
            }
            // Absent, or expired: start a fresh window.
            _ => {
                let reset_at_ms = now_ms + self.window.as_millis() as u64;
                windows.insert(
                    key.to_string(),
                    WindowEntry {
                        count: 1,
                        reset_at_ms,
                    },
                );
                RateLimitDecision {
                    allowed: true,
                    remaining: self.max_requests.saturating_sub(1),
                    reset_at_ms,
                }
            }
        }
    }

    fn sweep_at(&self, now_ms: u64) -> usize {
        let mut windows = self.windows.lock();
        let before = windows.len();
        windows.retain(|_, entry| now_ms < entry.reset_at_ms);
        before - windows.len()
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis() as u64
}
