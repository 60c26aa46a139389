use super::*;

#[test]
fn first_tick_issues_ticket() {
    let mut gate = PollGate::default();
    assert!(gate.begin().is_some());
}

#[test]
fn tick_while_in_flight_is_skipped() {
    let mut gate = PollGate::default();
    let _ticket = gate.begin().expect("first ticket");
    assert_eq!(gate.begin(), None);
    assert_eq!(gate.begin(), None);
}

#[test]
fn finish_releases_gate_for_next_tick() {
    let mut gate = PollGate::default();
    let first = gate.begin().expect("first ticket");
    assert!(gate.finish(first));

    let second = gate.begin().expect("second ticket");
    assert_ne!(first, second);
}

#[test]
fn finishing_same_ticket_twice_is_rejected() {
    let mut gate = PollGate::default();
    let ticket = gate.begin().expect("ticket");
    assert!(gate.finish(ticket));
    assert!(!gate.finish(ticket));
}

#[test]
fn cancelled_response_is_ignored() {
    let mut gate = PollGate::default();
    let stale = gate.begin().expect("ticket");
    gate.cancel();
    let fresh = gate.begin().expect("fresh ticket after cancel");

    assert!(!gate.finish(stale));
    assert_eq!(gate.begin(), None, "fresh request still outstanding");
    assert!(gate.finish(fresh));
}

#[test]
fn hung_request_is_abandoned_after_stale_ticks() {
    let mut gate = PollGate::default();
    let hung = gate.begin().expect("ticket");
    for _ in 0..STALE_AFTER_TICKS {
        assert_eq!(gate.begin(), None);
    }

    let retry = gate.begin().expect("retry after stale ticks");
    assert_ne!(hung, retry);
    assert!(!gate.finish(hung), "late response from the hung request is dropped");
    assert!(gate.finish(retry));
}

#[test]
fn settled_request_resets_stale_count() {
    let mut gate = PollGate::default();
    let first = gate.begin().expect("ticket");
    for _ in 0..STALE_AFTER_TICKS - 1 {
        assert_eq!(gate.begin(), None);
    }
    assert!(gate.finish(first));

    let _second = gate.begin().expect("second ticket");
    assert_eq!(gate.begin(), None, "new request gets a full wait budget");
}
