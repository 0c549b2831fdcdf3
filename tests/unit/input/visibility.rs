use super::*;

#[test]
fn fires_only_on_change() {
    let mut trigger = VisibilityTrigger::new(0.3, false);
    assert_eq!(trigger.update(0.1), None);
    assert_eq!(trigger.update(0.35), Some(true));
    assert_eq!(trigger.update(0.9), None);
    assert_eq!(trigger.update(0.2), Some(false));
    assert_eq!(trigger.update(0.0), None);
}

#[test]
fn one_shot_latches_after_first_crossing() {
    let mut trigger = VisibilityTrigger::new(0.5, true);
    assert_eq!(trigger.update(0.6), Some(true));
    assert_eq!(trigger.update(0.0), None);
    assert_eq!(trigger.update(1.0), None);
    assert!(trigger.is_visible());
}

#[test]
fn threshold_zero_counts_any_sample_as_visible() {
    let mut trigger = VisibilityTrigger::new(0.0, false);
    assert_eq!(trigger.update(0.0), Some(true));
}

#[test]
fn threshold_is_sanitized() {
    let mut trigger = VisibilityTrigger::new(7.0, false);
    assert_eq!(trigger.update(0.99), None);
    assert_eq!(trigger.update(1.0), Some(true));

    let mut trigger = VisibilityTrigger::new(f64::NAN, false);
    assert_eq!(trigger.update(0.0), Some(true));
}

#[test]
fn non_finite_ratio_ignored() {
    let mut trigger = VisibilityTrigger::new(0.3, false);
    assert_eq!(trigger.update(f64::NAN), None);
    assert!(!trigger.is_visible());
}
