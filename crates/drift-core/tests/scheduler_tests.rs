use drift_core::{Phase, PhaseScheduler};

#[test]
fn starts_visible_with_a_full_period_ahead() {
    let mut sched = PhaseScheduler::new(0.0);
    assert_eq!(sched.phase(), Phase::Visible);
    assert_eq!(sched.poll(5999.9), None);
    assert_eq!(sched.phase(), Phase::Visible);
}

#[test]
fn alternates_with_a_shorter_clear_period() {
    let mut sched = PhaseScheduler::new(0.0);
    assert_eq!(sched.poll(6000.0), Some(Phase::Clear));
    assert_eq!(sched.poll(6001.0), None);
    assert_eq!(sched.poll(8999.9), None);
    assert_eq!(sched.poll(9000.0), Some(Phase::Visible));
    // re-armed with the visible duration again
    assert_eq!(sched.poll(14999.9), None);
    assert_eq!(sched.poll(15000.0), Some(Phase::Clear));
}

#[test]
fn late_polls_fire_once_and_rearm_from_now() {
    let mut sched = PhaseScheduler::new(0.0);
    // one-shot semantics: a very late poll does not replay missed cycles
    assert_eq!(sched.poll(100_000.0), Some(Phase::Clear));
    assert_eq!(sched.poll(100_000.0), None);
    assert_eq!(sched.poll(102_999.9), None);
    assert_eq!(sched.poll(103_000.0), Some(Phase::Visible));
}
