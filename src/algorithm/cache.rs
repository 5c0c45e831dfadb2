//! Token-addressed store for analyze results between the two pipeline phases

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::algorithm::clock::{Clock, SystemClock};
use crate::io::configuration::{
    DEFAULT_CACHE_TTL, DEFAULT_TOMBSTONE_RETENTION, MAX_CACHE_TTL, MIN_CACHE_TTL,
};
use crate::io::error::{BrickError, Result};

/// Expiry policy for the analysis cache
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheConfig {
    /// Time-to-live applied when `put` is not given one
    pub default_ttl: Duration,
    /// Floor applied to every requested time-to-live
    pub min_ttl: Duration,
    /// Ceiling applied to every requested time-to-live; the floor wins if they cross
    pub max_ttl: Duration,
    /// How long an expired token still reports `Expired` instead of `NotFound`
    pub tombstone_retention: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_CACHE_TTL,
            min_ttl: MIN_CACHE_TTL,
            max_ttl: MAX_CACHE_TTL,
            tombstone_retention: DEFAULT_TOMBSTONE_RETENTION,
        }
    }
}

// An expired slot keeps its expiry but drops the payload
struct CacheSlot<T> {
    payload: Option<Arc<T>>,
    expires_at: Instant,
}

/// Token-addressed store bridging the analyze and build-steps phases
///
/// Entries are created by `put`, read any number of times by `get`, and
/// dropped once their time-to-live elapses. The map is sharded, so callers
/// working with unrelated tokens rarely contend, and every operation is
/// atomic with respect to a single entry. Expired entries are swept lazily
/// on every `put` and `get`. A sweep touches each shard once and performs
/// no I/O.
///
/// Payloads are handed out as `Arc`s; `get` returns the same allocation
/// every time.
pub struct AnalysisCache<T> {
    entries: DashMap<String, CacheSlot<T>>,
    config: CacheConfig,
    clock: Arc<dyn Clock>,
}

impl<T: Send + Sync> Default for AnalysisCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + Sync> AnalysisCache<T> {
    /// Create an empty cache with default expiry on the system clock
    pub fn new() -> Self {
        Self::with_clock(CacheConfig::default(), Arc::new(SystemClock))
    }

    /// Create an empty cache with an explicit policy and time source
    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            config,
            clock,
        }
    }

    /// Expiry policy in effect
    pub const fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Time-to-live that `put` applies for a requested value
    pub fn effective_ttl(&self, requested: Option<Duration>) -> Duration {
        requested
            .unwrap_or(self.config.default_ttl)
            .min(self.config.max_ttl)
            .max(self.config.min_ttl)
    }

    /// Store a payload under a fresh token
    pub fn put(&self, payload: T, ttl: Option<Duration>) -> String {
        self.put_shared(Arc::new(payload), ttl)
    }

    /// Store an already shared payload under a fresh token
    ///
    /// The token is 128 bits from the thread-local CSPRNG rendered as hex.
    /// A colliding token is regenerated rather than overwritten.
    pub fn put_shared(&self, payload: Arc<T>, ttl: Option<Duration>) -> String {
        let now = self.clock.now();
        self.sweep_at(now);

        let ttl = self.effective_ttl(ttl);
        let expires_at = deadline(now, ttl);

        let (token, vacant) = loop {
            let token = generate_token();
            if let Entry::Vacant(vacant) = self.entries.entry(token.clone()) {
                break (token, vacant);
            }
        };

        vacant.insert(CacheSlot {
            payload: Some(payload),
            expires_at,
        });

        info!(
            token = %token,
            ttl_secs = ttl.as_secs(),
            entries = self.entries.len(),
            "stored analysis"
        );
        token
    }

    /// Retrieve the payload stored under a token
    ///
    /// Non-destructive: repeated calls before expiry return the same payload.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if this cache never issued the token and `Expired`
    /// if it did but the time-to-live has elapsed
    pub fn get(&self, token: &str) -> Result<Arc<T>> {
        let now = self.clock.now();
        self.sweep_at(now);

        let found = self
            .entries
            .get(token)
            .map(|slot| (slot.payload.clone(), slot.expires_at));

        debug!(token, entries = self.entries.len(), "analysis lookup");

        match found {
            None => Err(BrickError::NotFound {
                token: token.to_string(),
            }),
            Some((Some(payload), expires_at)) if expires_at >= now => Ok(payload),
            Some(_) => Err(BrickError::Expired {
                token: token.to_string(),
            }),
        }
    }

    /// Release expired payloads and forget old tombstones
    ///
    /// Returns the number of records affected.
    pub fn sweep(&self) -> usize {
        self.sweep_at(self.clock.now())
    }

    fn sweep_at(&self, now: Instant) -> usize {
        let retention = self.config.tombstone_retention;
        let mut affected = 0;

        self.entries.retain(|_, slot| {
            if slot.expires_at >= now {
                return true;
            }

            let released = slot.payload.take().is_some();
            let forget = slot
                .expires_at
                .checked_add(retention)
                .is_some_and(|deadline| deadline < now);

            if released || forget {
                affected += 1;
            }
            !forget
        });

        if affected > 0 {
            debug!(affected, "swept expired analyses");
        }
        affected
    }

    /// Number of records still holding a payload
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|slot| slot.payload.is_some())
            .count()
    }

    /// Check if no record holds a payload
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Saturates instead of overflowing when a configured ceiling is unrepresentable
fn deadline(now: Instant, ttl: Duration) -> Instant {
    now.checked_add(ttl)
        .or_else(|| now.checked_add(MAX_CACHE_TTL))
        .unwrap_or(now)
}

fn generate_token() -> String {
    format!("{:032x}", rand::random::<u128>())
}
