use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_default_limit() {
    assert_eq!(StepLimit::default().get(), Some(DEFAULT_STEP_LIMIT));
    assert_eq!(MatchConfig::default().step_limit.get(), Some(10_000));
}

#[test]
fn test_non_positive_means_unbounded() {
    assert_eq!(StepLimit::from(0_i64), StepLimit::Unbounded);
    assert_eq!(StepLimit::from(-5_i64), StepLimit::Unbounded);
    assert_eq!(StepLimit::steps(0), StepLimit::Unbounded);
    assert_eq!(StepLimit::from(12_i64).get(), Some(12));
}

#[test]
fn test_is_exceeded_boundary() {
    let limit = StepLimit::steps(3);
    assert!(!limit.is_exceeded(1));
    assert!(!limit.is_exceeded(3));
    assert!(limit.is_exceeded(4));
    assert!(!StepLimit::Unbounded.is_exceeded(usize::MAX));
}

#[test]
fn test_with_step_limit() {
    let config = MatchConfig::default().with_step_limit(-1_i64);
    assert_eq!(config.step_limit, StepLimit::Unbounded);
    let config = config.with_step_limit(StepLimit::steps(50));
    assert_eq!(config.step_limit.get(), Some(50));
}

#[test]
fn test_display() {
    assert_eq!(StepLimit::steps(7).to_string(), "7 steps");
    assert_eq!(StepLimit::Unbounded.to_string(), "unbounded");
}
