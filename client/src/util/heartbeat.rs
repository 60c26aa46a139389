//! Liveness heartbeat for logged-in students.
//!
//! One beat goes out as soon as the sender starts, then one per interval.
//! Responses are discarded and failures ignored; a missed beat only makes the
//! student show as idle on the admin roster until the next one lands.

#[cfg(test)]
#[path = "heartbeat_test.rs"]
mod heartbeat_test;

use std::time::Duration;

pub const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(60);

/// Decides when the next beat is due, on a millisecond wall clock.
#[derive(Clone, Debug, PartialEq)]
pub struct HeartbeatSchedule {
    interval_ms: f64,
    last_sent_ms: Option<f64>,
}

impl HeartbeatSchedule {
    pub fn new(interval: Duration) -> Self {
        Self { interval_ms: interval.as_secs_f64() * 1000.0, last_sent_ms: None }
    }

    /// Due immediately before the first beat, then only once a full interval has elapsed.
    pub fn is_due(&self, now_ms: f64) -> bool {
        match self.last_sent_ms {
            None => true,
            Some(last) => now_ms - last >= self.interval_ms,
        }
    }

    pub fn record_sent(&mut self, now_ms: f64) {
        self.last_sent_ms = Some(now_ms);
    }

    /// Time left until the next beat is due (zero if already due).
    pub fn delay_until_due(&self, now_ms: f64) -> Duration {
        let Some(last) = self.last_sent_ms else {
            return Duration::ZERO;
        };
        let remaining = (last + self.interval_ms - now_ms).max(0.0);
        Duration::from_secs_f64(remaining / 1000.0)
    }
}

impl Default for HeartbeatSchedule {
    fn default() -> Self {
        Self::new(HEARTBEAT_INTERVAL)
    }
}

/// Run the heartbeat loop until `alive` is cleared.
#[cfg(feature = "hydrate")]
pub fn spawn_heartbeat(alive: std::sync::Arc<std::sync::atomic::AtomicBool>) {
    use std::sync::atomic::Ordering;

    leptos::task::spawn_local(async move {
        let mut schedule = HeartbeatSchedule::default();
        loop {
            if !alive.load(Ordering::Relaxed) {
                break;
            }
            let now = js_sys::Date::now();
            if schedule.is_due(now) {
                schedule.record_sent(now);
                leptos::task::spawn_local(crate::net::api::send_heartbeat());
            }
            let wait = schedule.delay_until_due(js_sys::Date::now());
            gloo_timers::future::sleep(wait).await;
        }
    });
}
