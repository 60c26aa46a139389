//! In-memory throttling for login attempts.
//!
//! DESIGN
//! ======
//! Sliding windows backed by `VecDeque<Instant>`:
//! - Per-username: failed attempts within the configured window
//! - Global: every attempt, across all usernames
//!
//! A throttled attempt is rejected before any password hashing happens, so
//! the global window also caps how much bcrypt work a flood can cause.
//! A successful login clears that username's failures. Every admitted check
//! also drops buckets whose failures have all aged out, so usernames that
//! never return do not accumulate.
//!
//! TRADE-OFFS
//! ==========
//! State is per process and lost on restart. Usernames are lower-cased and
//! namespaced by role so an admin and a student with the same name do not
//! share a bucket.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use roster::Role;

use crate::config::ThrottleConfig;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ThrottleError {
    #[error("too many failed logins (max {limit} per {window_secs}s)")]
    TooManyFailures { limit: usize, window_secs: u64 },
    #[error("login attempts exhausted globally (max {limit} per {window_secs}s)")]
    GlobalExceeded { limit: usize, window_secs: u64 },
}

impl ThrottleError {
    /// Text shown on the login page.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        "Too many login attempts, try again later."
    }
}

// =============================================================================
// LOGIN THROTTLE
// =============================================================================

#[derive(Clone)]
pub struct LoginThrottle {
    inner: Arc<Mutex<ThrottleInner>>,
    config: ThrottleConfig,
}

#[derive(Default)]
struct ThrottleInner {
    /// Failed attempt timestamps per throttle key.
    failures: HashMap<String, VecDeque<Instant>>,
    /// All attempt timestamps.
    attempts: VecDeque<Instant>,
}

fn throttle_key(role: Role, username: &str) -> String {
    format!("{}:{}", role.as_str(), username.trim().to_lowercase())
}

impl LoginThrottle {
    #[must_use]
    pub fn new(config: ThrottleConfig) -> Self {
        Self { inner: Arc::new(Mutex::new(ThrottleInner::default())), config }
    }

    /// Admit a login attempt and count it toward the global window.
    pub fn check_attempt(&self, role: Role, username: &str) -> Result<(), ThrottleError> {
        self.check_attempt_at(role, username, Instant::now())
    }

    /// Usernames with failures still inside the window.
    #[cfg(test)]
    fn tracked_usernames(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .failures
            .len()
    }

    fn check_attempt_at(&self, role: Role, username: &str, now: Instant) -> Result<(), ThrottleError> {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let cfg = self.config;

        prune_window(&mut inner.attempts, now, cfg.global_window);
        if inner.attempts.len() >= cfg.global_limit {
            return Err(ThrottleError::GlobalExceeded {
                limit: cfg.global_limit,
                window_secs: cfg.global_window.as_secs(),
            });
        }

        inner.failures.retain(|_, failures| {
            prune_window(failures, now, cfg.per_user_window);
            !failures.is_empty()
        });

        let key = throttle_key(role, username);
        if inner.failures.get(&key).is_some_and(|f| f.len() >= cfg.per_user_limit) {
            return Err(ThrottleError::TooManyFailures {
                limit: cfg.per_user_limit,
                window_secs: cfg.per_user_window.as_secs(),
            });
        }

        inner.attempts.push_back(now);
        Ok(())
    }

    /// Count a failed password check against `username`.
    pub fn record_failure(&self, role: Role, username: &str) {
        self.record_failure_at(role, username, Instant::now());
    }

    fn record_failure_at(&self, role: Role, username: &str, now: Instant) {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let window = self.config.per_user_window;
        let failures = inner.failures.entry(throttle_key(role, username)).or_default();
        prune_window(failures, now, window);
        failures.push_back(now);
    }

    /// Forget failures after a successful login.
    pub fn clear(&self, role: Role, username: &str) {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        inner.failures.remove(&throttle_key(role, username));
    }
}

impl Default for LoginThrottle {
    fn default() -> Self {
        Self::new(ThrottleConfig::default())
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
