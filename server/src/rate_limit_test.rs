use super::*;

fn small_config() -> ThrottleConfig {
    ThrottleConfig {
        per_user_limit: 3,
        per_user_window: Duration::from_secs(300),
        global_limit: 10,
        global_window: Duration::from_secs(60),
    }
}

#[test]
fn failures_up_to_limit_are_admitted() {
    let throttle = LoginThrottle::new(small_config());
    let now = Instant::now();

    for i in 0..3 {
        assert!(throttle.check_attempt_at(Role::Student, "alice", now).is_ok(), "attempt {i} should pass");
        throttle.record_failure_at(Role::Student, "alice", now);
    }
    assert!(matches!(
        throttle.check_attempt_at(Role::Student, "alice", now),
        Err(ThrottleError::TooManyFailures { limit: 3, window_secs: 300 })
    ));
}

#[test]
fn successful_attempts_do_not_count_as_failures() {
    let throttle = LoginThrottle::new(small_config());
    let now = Instant::now();

    for _ in 0..5 {
        assert!(throttle.check_attempt_at(Role::Admin, "teacher", now).is_ok());
    }
}

#[test]
fn global_limit_caps_all_usernames() {
    let throttle = LoginThrottle::new(small_config());
    let now = Instant::now();

    for i in 0..10 {
        let name = format!("user{i}");
        assert!(throttle.check_attempt_at(Role::Student, &name, now).is_ok());
    }
    assert!(matches!(
        throttle.check_attempt_at(Role::Student, "fresh", now),
        Err(ThrottleError::GlobalExceeded { limit: 10, window_secs: 60 })
    ));
}

#[test]
fn window_expiry_allows_new_attempts() {
    let throttle = LoginThrottle::new(small_config());
    let start = Instant::now();

    for _ in 0..3 {
        throttle.record_failure_at(Role::Student, "alice", start);
    }
    assert!(throttle.check_attempt_at(Role::Student, "alice", start).is_err());

    let after_window = start + Duration::from_secs(300) + Duration::from_millis(1);
    assert!(throttle.check_attempt_at(Role::Student, "alice", after_window).is_ok());
}

#[test]
fn clear_resets_failures() {
    let throttle = LoginThrottle::new(small_config());
    let now = Instant::now();

    for _ in 0..3 {
        throttle.record_failure_at(Role::Student, "alice", now);
    }
    throttle.clear(Role::Student, "alice");
    assert!(throttle.check_attempt_at(Role::Student, "alice", now).is_ok());
}

#[test]
fn keys_are_case_insensitive_and_role_scoped() {
    let throttle = LoginThrottle::new(small_config());
    let now = Instant::now();

    for _ in 0..3 {
        throttle.record_failure_at(Role::Student, "Alice ", now);
    }
    assert!(throttle.check_attempt_at(Role::Student, "alice", now).is_err());
    assert!(throttle.check_attempt_at(Role::Admin, "alice", now).is_ok());
}

#[test]
fn user_message_is_generic() {
    let err = ThrottleError::GlobalExceeded { limit: 1, window_secs: 1 };
    assert_eq!(err.user_message(), "Too many login attempts, try again later.");
}

#[test]
fn expired_buckets_of_other_usernames_are_dropped() {
    let throttle = LoginThrottle::new(small_config());
    let start = Instant::now();

    for i in 0..1000 {
        throttle.record_failure_at(Role::Student, &format!("ghost{i}"), start);
    }
    assert_eq!(throttle.tracked_usernames(), 1000);

    let later = start + Duration::from_secs(3600);
    assert!(throttle.check_attempt_at(Role::Student, "someone-else", later).is_ok());
    assert_eq!(throttle.tracked_usernames(), 0);
}

#[test]
fn sweep_keeps_buckets_still_inside_window() {
    let throttle = LoginThrottle::new(small_config());
    let start = Instant::now();

    throttle.record_failure_at(Role::Student, "old", start);
    let recent = start + Duration::from_secs(200);
    for _ in 0..3 {
        throttle.record_failure_at(Role::Student, "bob", recent);
    }

    let check = start + Duration::from_secs(400);
    assert!(throttle.check_attempt_at(Role::Admin, "carol", check).is_ok());
    assert_eq!(throttle.tracked_usernames(), 1);
    assert!(matches!(
        throttle.check_attempt_at(Role::Student, "bob", check),
        Err(ThrottleError::TooManyFailures { .. })
    ));
}
