use super::*;

#[test]
fn whole_multipliers_run_floor_steps() {
    assert_eq!(steps_for_frame(1.0, FrameIndex(3)), 1);
    assert_eq!(steps_for_frame(2.9, FrameIndex(3)), 2);
    assert_eq!(steps_for_frame(4.0, FrameIndex(0)), 4);
}

#[test]
fn sub_unit_multipliers_throttle_by_frame() {
    let steps: Vec<u32> = (0..8).map(|f| steps_for_frame(0.25, FrameIndex(f))).collect();
    assert_eq!(steps, vec![1, 0, 0, 0, 1, 0, 0, 0]);
    assert_eq!(steps_for_frame(0.6, FrameIndex(7)), 1);
}

#[test]
fn zero_speed_never_steps() {
    for f in 0..10 {
        assert_eq!(steps_for_frame(0.0, FrameIndex(f)), 0);
    }
}

#[test]
fn speed_eases_toward_target() {
    let mut c = SimulationClock::new(1.0).unwrap();
    c.set_target_speed(3.0).unwrap();
    c.next_frame();
    assert!((c.speed() - 1.16).abs() < 1e-12);
    for _ in 0..300 {
        c.next_frame();
    }
    assert!((c.speed() - 3.0).abs() < 1e-6);
}

#[test]
fn rejected_target_keeps_previous() {
    let mut c = SimulationClock::new(1.0).unwrap();
    c.set_target_speed(2.0).unwrap();
    assert!(c.set_target_speed(4.5).is_err());
    assert!(c.set_target_speed(-0.1).is_err());
    assert!(c.set_target_speed(f64::NAN).is_err());
    assert_eq!(c.target_speed(), 2.0);
    assert!(SimulationClock::new(9.0).is_err());
}

#[test]
fn sustained_quarter_speed_runs_two_steps_in_eight_frames() {
    let mut c = SimulationClock::new(0.25).unwrap();
    let plans: Vec<FramePlan> = (0..8).map(|_| c.next_frame()).collect();
    let total: u32 = plans.iter().map(|p| p.steps).sum();
    assert_eq!(total, 2);
    assert_eq!(plans.iter().filter(|p| p.draw).count(), 2);
    assert_eq!(c.frame(), FrameIndex(8));
}

#[test]
fn playback_toggles() {
    assert_eq!(Playback::default(), Playback::Playing);
    assert_eq!(Playback::Playing.toggled(), Playback::Stopped);
    assert_eq!(Playback::Stopped.toggled(), Playback::Playing);
}
