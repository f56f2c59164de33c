use super::*;

#[test]
fn advances_monotonically() {
    let mut c = Clock::new(1.0).unwrap();
    assert_eq!(c.advance(0.5).unwrap(), 1.5);
    assert_eq!(c.advance(0.0).unwrap(), 1.5);
    assert!(c.advance(-0.1).is_err());
    assert!(c.advance(f64::NAN).is_err());
    assert_eq!(c.now(), 1.5);
}

#[test]
fn frozen_clock_holds_its_value() {
    let mut c = Clock::new(0.0).unwrap();
    c.freeze();
    assert!(c.is_frozen());
    assert_eq!(c.advance(3.0).unwrap(), 0.0);
    c.resume();
    assert_eq!(c.advance(3.0).unwrap(), 3.0);
}

#[test]
fn start_must_be_valid() {
    assert!(Clock::new(-1.0).is_err());
    assert!(Clock::new(f64::INFINITY).is_err());
    assert!(Clock::new(f64::MAX).unwrap().advance(f64::MAX).is_err());
}
