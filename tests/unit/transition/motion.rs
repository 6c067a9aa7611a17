use super::*;

fn run(seconds: f64, star_speed: f64) -> DecorativeMotion {
    let mut m = DecorativeMotion::default();
    let dt = 1.0 / 60.0;
    let mut now = Seconds::ZERO;
    let steps = (seconds / dt).round() as usize;
    for _ in 0..steps {
        now = now.advance(dt);
        m.step(now, dt, star_speed);
    }
    m
}

#[test]
fn bob_stays_small_over_long_runs() {
    // Integral of sin(0.6 t) * 0.25 is bounded by 2 * 0.25 / 0.6.
    let m = run(120.0, 0.0);
    assert!(m.left.bob.abs() <= 0.84);
    assert!(m.right.bob.abs() <= 0.84);
}

#[test]
fn bodies_spin_in_opposite_directions() {
    let m = run(10.0, 0.0);
    assert!((m.left.rotation.y - 1.2).abs() < 1e-6);
    assert!((m.right.rotation.y + 1.0).abs() < 1e-6);
    assert!(m.left.rotation.x.abs() <= 0.08);
    assert!(m.right.rotation.x.abs() <= 0.06);
}

#[test]
fn stars_integrate_drift_speed() {
    let m = run(5.0, 0.1);
    assert!((m.stars.y - 0.5).abs() < 1e-6);
    assert!((m.stars.x - 0.175).abs() < 1e-6);
}

#[test]
fn positions_add_bob_to_offsets_only_vertically() {
    let mut m = DecorativeMotion::default();
    m.left.bob = 0.3;
    m.right.bob = -0.2;
    let p = m.left_position(DVec3::new(-8.0, 1.4, -6.0));
    assert_eq!(p.x, -8.0);
    assert!((p.y - 1.7).abs() < 1e-12);
    assert_eq!(p.z, -6.0);
    assert!((m.right_position(DVec3::ZERO).y + 0.2).abs() < 1e-12);
}
