use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use parking_lot::Mutex;

/// Rolling window within which admitted requests are counted.
pub const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(60 * 60);
/// Maximum admitted requests per client per window.
pub const MAX_REQUESTS_PER_WINDOW: usize = 3;

/// Once more than this many clients are tracked, a full sweep of the store
/// runs after the next admission. Bounds memory growth from one-off clients;
/// degrades to O(n) per request under sustained high-cardinality traffic,
/// which is fine for a personal site.
const CLEANUP_THRESHOLD: usize = 100;

/// Outcome of a single rate-limit check. Computed fresh per request and
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub remaining: usize,
    /// When the oldest counted request ages out (on rejection), or the end of
    /// the window opened by this request (on admission).
    pub reset_time: Instant,
}

/// Storage for per-client request timestamps. Injected into the limiter so
/// tests don't share a global map. Timestamp sequences are kept in insertion
/// order, which is chronological order.
pub trait RequestLogStore {
    fn get(&self, key: &str) -> Option<Vec<Instant>>;
    fn set(&mut self, key: &str, timestamps: Vec<Instant>);
    fn delete(&mut self, key: &str);
    fn size(&self) -> usize;
    fn keys(&self) -> Vec<String>;
}

/// Process-lifetime in-memory store. Lost on restart, by design.
#[derive(Debug, Default)]
pub struct InMemoryRequestLog {
    entries: HashMap<String, Vec<Instant>>,
}

impl InMemoryRequestLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RequestLogStore for InMemoryRequestLog {
    fn get(&self, key: &str) -> Option<Vec<Instant>> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, timestamps: Vec<Instant>) {
        self.entries.insert(key.to_string(), timestamps);
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn size(&self) -> usize {
        self.entries.len()
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

/// Sliding-window limiter over per-client timestamp logs.
///
/// The whole read-filter-append-store sequence for a check runs under one
/// mutex: two concurrent requests from the same client must not both read the
/// same prior count and both be admitted. `check` is synchronous and does no
/// I/O, so the lock is never held across an await point.
pub struct SlidingWindowLimiter<S: RequestLogStore> {
    store: Mutex<S>,
    window: Duration,
    max_requests: usize,
}

impl<S: RequestLogStore> SlidingWindowLimiter<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Mutex::new(store),
            window: RATE_LIMIT_WINDOW,
            max_requests: MAX_REQUESTS_PER_WINDOW,
        }
    }

    /// Decide whether the request arriving at `now` from `client` is admitted.
    ///
    /// A rejected request is not recorded as an attempt; retrying immediately
    /// after a rejection does not consume any budget.
    pub fn check(&self, client: &str, now: Instant) -> RateLimitDecision {
        let mut store = self.store.lock();

        let mut recent = store.get(client).unwrap_or_default();
        recent.retain(|t| now.saturating_duration_since(*t) < self.window);

        if recent.len() >= self.max_requests {
            // Oldest surviving timestamp frees the next slot when it ages out.
            let oldest = recent.first().copied().unwrap_or(now);
            return RateLimitDecision {
                allowed: false,
                remaining: 0,
                reset_time: oldest + self.window,
            };
        }

        recent.push(now);
        let remaining = self.max_requests - recent.len();
        store.set(client, recent);

        if store.size() > CLEANUP_THRESHOLD {
            sweep(&mut *store, now, self.window);
        }

        RateLimitDecision {
            allowed: true,
            remaining,
            reset_time: now + self.window,
        }
    }

    /// Number of clients currently tracked by the underlying store.
    pub fn tracked_clients(&self) -> usize {
        self.store.lock().size()
    }
}

/// Drop clients whose timestamps have all expired; prune the rest down to
/// their live timestamps.
fn sweep<S: RequestLogStore>(store: &mut S, now: Instant, window: Duration) {
    let before = store.size();
    for key in store.keys() {
        if let Some(mut timestamps) = store.get(&key) {
            timestamps.retain(|t| now.saturating_duration_since(*t) < window);
            if timestamps.is_empty() {
                store.delete(&key);
            } else {
                store.set(&key, timestamps);
            }
        }
    }
    tracing::debug!(
        before,
        after = store.size(),
        "swept expired rate-limit entries"
    );
}

/// Whole-minute ceiling of the time left until `reset`, for the 429 message.
pub fn minutes_until(reset: Instant, now: Instant) -> u64 {
    let secs = reset.saturating_duration_since(now).as_secs_f64();
    (secs / 60.0).ceil() as u64
}
