use super::*;

#[test]
fn time_since_saturates() {
    let a = TimeMs(25);
    let b = TimeMs(100);
    assert_eq!(b.since(a), 75);
    assert_eq!(a.since(b), 0);
}

#[test]
fn time_add_saturates_at_max() {
    assert_eq!(TimeMs(u64::MAX - 1).saturating_add(5), TimeMs(u64::MAX));
    assert_eq!(TimeMs::ZERO.saturating_add(500), TimeMs(500));
}
