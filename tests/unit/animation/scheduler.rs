use super::*;

#[test]
fn ticks_arrive_in_time_order_across_timers() {
    let mut s = VirtualScheduler::new();
    let a = s.start_repeating(10);
    let b = s.start_repeating(15);

    let mut seen = Vec::new();
    while let Some(tick) = s.pop_due(TimeMs(30)) {
        seen.push((tick.at.0, tick.timer));
    }
    assert_eq!(seen, vec![(10, a), (15, b), (20, a), (30, a), (30, b)]);
    assert_eq!(s.now(), TimeMs(30));
}

#[test]
fn cancelled_timer_stops_firing() {
    let mut s = VirtualScheduler::new();
    let a = s.start_repeating(10);
    assert_eq!(s.pop_due(TimeMs(100)).map(|t| t.timer), Some(a));
    s.cancel(a);
    assert_eq!(s.pop_due(TimeMs(100)), None);
    assert!(!s.is_live(a));

    // Double cancel is a no-op.
    s.cancel(a);
    assert_eq!((s.starts(), s.cancels()), (1, 1));
}

#[test]
fn shared_handles_observe_the_same_clock() {
    let observer = VirtualScheduler::new();
    let mut owner = observer.clone();
    let id = owner.start_repeating(25);
    assert_eq!(observer.live_timers(), 1);
    observer.advance_to(TimeMs(40));
    assert_eq!(owner.now(), TimeMs(40));
    // Overdue tick is still delivered at its due time.
    assert_eq!(
        owner.pop_due(TimeMs(40)),
        Some(Tick {
            at: TimeMs(25),
            timer: id
        })
    );
    assert_eq!(owner.now(), TimeMs(40));
}

#[test]
fn zero_interval_is_clamped() {
    let mut s = VirtualScheduler::new();
    s.start_repeating(0);
    assert_eq!(s.pop_due(TimeMs(0)), None);
    assert!(s.pop_due(TimeMs(1)).is_some());
}
