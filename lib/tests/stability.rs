use lifestat_lib::{StabilityDetector, DEFAULT_THRESHOLD};

#[test]
fn stable_on_the_sixth_equal_count() {
    let mut detector = StabilityDetector::default();
    assert_eq!(detector.threshold(), DEFAULT_THRESHOLD);
    let results: Vec<bool> = (0..6).map(|_| detector.check(5)).collect();
    assert_eq!(results, vec![false, false, false, false, false, true]);
    assert!(detector.is_stable());
}

#[test]
fn not_enough_equal_counts() {
    let mut detector = StabilityDetector::default();
    for _ in 0..5 {
        assert!(!detector.check(10));
    }
    assert!(!detector.is_stable());
    assert_eq!(detector.streak(), 5);
}

#[test]
fn changing_counts() {
    let mut detector = StabilityDetector::default();
    assert!(!detector.check(5));
    assert!(!detector.check(7));
    for count in 0..20 {
        assert!(!detector.check(count));
        assert_eq!(detector.streak(), 1);
    }
}

#[test]
fn stays_stable() {
    let mut detector = StabilityDetector::default();
    for i in 1..=20 {
        assert_eq!(detector.check(3), i >= 6);
    }
}

#[test]
fn change_restarts_the_streak() {
    let mut detector = StabilityDetector::default();
    for _ in 0..8 {
        detector.check(4);
    }
    assert!(detector.is_stable());
    assert!(!detector.check(5));
    assert_eq!(detector.streak(), 1);
    for _ in 0..4 {
        assert!(!detector.check(5));
    }
    assert!(detector.check(5));
}

#[test]
fn zero_population_is_a_count_like_any_other() {
    let mut detector = StabilityDetector::default();
    for _ in 0..5 {
        assert!(!detector.check(0));
    }
    assert!(detector.check(0));
}

#[test]
fn custom_threshold() {
    let mut detector = StabilityDetector::new(2);
    assert!(!detector.check(9));
    assert!(detector.check(9));

    let mut detector = StabilityDetector::new(1);
    assert!(!detector.check(9));
    assert!(detector.check(9));
}

#[test]
fn reset() {
    let mut detector = StabilityDetector::new(3);
    for _ in 0..3 {
        detector.check(1);
    }
    assert!(detector.is_stable());
    detector.reset();
    assert_eq!(detector.streak(), 0);
    assert!(!detector.check(1));
    assert!(!detector.check(1));
    assert!(detector.check(1));
}
