use super::*;

fn wheel(delta_y: f64) -> InputEvent {
    InputEvent::Wheel { delta_y }
}

#[test]
fn small_wheel_deltas_are_ignored() {
    let mut gate = NavigationGate::default();
    assert_eq!(gate.translate(wheel(19.9), Seconds::ZERO), None);
    assert_eq!(gate.translate(wheel(-5.0), Seconds::ZERO), None);
    assert_eq!(gate.translate(wheel(f64::NAN), Seconds::ZERO), None);
    assert!(!gate.is_wheel_locked(Seconds::ZERO));
}

#[test]
fn wheel_sign_picks_direction() {
    let mut gate = NavigationGate::default();
    assert_eq!(
        gate.translate(wheel(120.0), Seconds::ZERO),
        Some(Direction::Next)
    );
    assert_eq!(
        gate.translate(wheel(-120.0), Seconds(2.0)),
        Some(Direction::Prev)
    );
}

#[test]
fn burst_collapses_to_one_step_per_cooldown() {
    let mut gate = NavigationGate::default();
    let accepted = (0..30)
        .filter_map(|i| gate.translate(wheel(60.0), Seconds(f64::from(i) * 0.1)))
        .count();
    assert_eq!(accepted, 3);
}

#[test]
fn keys_bypass_the_wheel_lock() {
    let mut gate = NavigationGate::default();
    gate.translate(wheel(50.0), Seconds::ZERO);
    assert!(gate.is_wheel_locked(Seconds(0.5)));
    assert_eq!(
        gate.translate(InputEvent::Key(Key::ArrowRight), Seconds(0.5)),
        Some(Direction::Next)
    );
    assert_eq!(
        gate.translate(InputEvent::Key(Key::ArrowLeft), Seconds(0.5)),
        Some(Direction::Prev)
    );
    assert_eq!(
        gate.translate(InputEvent::Key(Key::Other), Seconds(0.5)),
        None
    );
}

#[test]
fn dispatch_drives_the_controller() {
    let mut gate = NavigationGate::default();
    let mut c = PhaseTransitionController::reference();

    assert!(!gate.dispatch(wheel(-80.0), &mut c));
    assert!(gate.is_wheel_locked(c.clock()));
    assert!(!gate.dispatch(wheel(80.0), &mut c));
    assert_eq!(c.index(), 0);

    c.tick(1.3);
    assert!(gate.dispatch(wheel(80.0), &mut c));
    assert_eq!(c.index(), 1);
    assert!(gate.dispatch(InputEvent::Key(Key::ArrowRight), &mut c));
    assert_eq!(c.index(), 2);
}
