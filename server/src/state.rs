//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the database pool, the resolved configuration, and the in-memory
//! login throttle. Clone is required by Axum; every field is cheap to clone.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::rate_limit::LoginThrottle;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub login_throttle: LoginThrottle,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, config: Config) -> Self {
        let login_throttle = LoginThrottle::new(config.throttle);
        Self { pool, config: Arc::new(config), login_throttle }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_state_carries_config() {
        let state = test_helpers::test_app_state();
        assert_eq!(state.config.idle_threshold_secs, 120);
        assert_eq!(
            state.config.admin_registration_key.as_deref(),
            Some(test_helpers::TEST_REGISTRATION_KEY)
        );
    }

    #[tokio::test]
    async fn clones_share_the_login_throttle() {
        let state = test_helpers::test_app_state();
        let clone = state.clone();
        for _ in 0..5 {
            state.login_throttle.record_failure(roster::Role::Student, "alice");
        }
        assert!(clone.login_throttle.check_attempt(roster::Role::Student, "alice").is_err());
    }
}
