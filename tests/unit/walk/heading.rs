use std::f64::consts::{PI, TAU};

use super::*;

#[test]
fn digit_targets_span_zero_to_324_degrees() {
    for d in 0..=9u8 {
        let t = HeadingSmoother::target_for_digit(d);
        assert!((0.0..TAU).contains(&t));
        assert!((t.to_degrees() - f64::from(d) * 36.0).abs() < 1e-9);
    }
    assert!((HeadingSmoother::target_for_digit(9).to_degrees() - 324.0).abs() < 1e-9);
}

#[test]
fn delta_never_exceeds_half_turn() {
    let smoother = HeadingSmoother::default();
    let mut h = -7.0;
    while h < 7.0 {
        for d in 0..=9u8 {
            let u = smoother.advance(h, d);
            assert!(u.delta > -PI - 1e-12 && u.delta <= PI + 1e-12);
            assert!((u.heading - (h + u.delta * HEADING_EASING)).abs() < 1e-12);
        }
        h += 0.37;
    }
}

#[test]
fn fixed_point_is_unchanged() {
    let smoother = HeadingSmoother::default();
    let target = HeadingSmoother::target_for_digit(3);
    let u = smoother.advance(target, 3);
    assert_eq!(u.delta, 0.0);
    assert_eq!(u.heading, target);
}

#[test]
fn turns_along_shorter_arc() {
    let smoother = HeadingSmoother::default();
    // From 0 toward digit 9 (324 degrees) the short way is clockwise, by -36 degrees.
    let u = smoother.advance(0.0, 9);
    assert!((u.delta.to_degrees() + 36.0).abs() < 1e-9);
    assert!(u.heading < 0.0);
}

#[test]
fn repeated_digit_converges_on_target() {
    let smoother = HeadingSmoother::default();
    let mut h = 0.0;
    for _ in 0..200 {
        h = smoother.advance(h, 5).heading;
    }
    assert!((h - PI).abs() < 1e-9);
}
