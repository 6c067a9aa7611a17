use super::*;

#[test]
fn tween_hits_exact_target_once_finished() {
    let tw = Tween::new(0.0f64, 10.0, Seconds(1.0), 2.0, Ease::InOutCubic);
    assert_eq!(tw.sample(Seconds(0.0)), 0.0);
    assert_eq!(tw.sample(Seconds(1.0)), 0.0);
    assert!((tw.sample(Seconds(2.0)) - 5.0).abs() < 1e-9);
    assert_eq!(tw.sample(Seconds(3.0)), 10.0);
    assert_eq!(tw.sample(Seconds(99.0)), 10.0);
    assert!(tw.is_finished(Seconds(3.0)));
    assert!(!tw.is_finished(Seconds(2.9)));
}

#[test]
fn zero_duration_tween_is_already_finished() {
    let tw = Tween::new(1.0f64, 4.0, Seconds(5.0), 0.0, Ease::Linear);
    assert_eq!(tw.progress(Seconds(0.0)), 1.0);
    assert_eq!(tw.sample(Seconds(0.0)), 4.0);
}

#[test]
fn retarget_starts_from_current_value() {
    let mut v = Tweened::at_rest(0.0f64);
    v.retarget(1.0, Seconds(0.0), 1.0, Ease::Linear);
    assert!((*v.update(Seconds(0.5)) - 0.5).abs() < 1e-12);

    // Superseding mid-flight cancels the first tween; no jump back to 0.
    v.retarget(-1.0, Seconds(0.5), 1.0, Ease::Linear);
    assert!((*v.update(Seconds(0.5)) - 0.5).abs() < 1e-12);
    assert!((*v.update(Seconds(1.0)) - (-0.25)).abs() < 1e-12);
    assert_eq!(*v.update(Seconds(1.5)), -1.0);
    assert_eq!(*v.target(), -1.0);
}

#[test]
fn vectors_and_colours_interpolate_componentwise() {
    let a = DVec3::new(-8.0, 1.4, -6.0);
    let b = DVec3::new(-5.6, 1.0, -5.2);
    let mid = <DVec3 as Lerp>::lerp(&a, &b, 0.5);
    assert!((mid - DVec3::new(-6.8, 1.2, -5.6)).length() < 1e-12);

    let c = <Rgb as Lerp>::lerp(&Rgb::new(0.0, 0.0, 0.0), &Rgb::WHITE, 0.25);
    assert_eq!(c, Rgb::new(0.25, 0.25, 0.25));
}

#[test]
fn smoothing_converges_and_never_overshoots() {
    let mut s = Smoothed::new(0.04f64, 2.0);
    s.set_target(0.12);
    let mut prev = s.value;
    for _ in 0..600 {
        let v = *s.step(1.0 / 60.0);
        assert!(v >= prev);
        assert!(v <= 0.12);
        prev = v;
    }
    assert!((s.value - 0.12).abs() < 1e-6);
}

#[test]
fn large_delta_snaps_to_target() {
    let mut s = Smoothed::new(0.6f64, 1.8);
    s.set_target(1.32);
    s.step(1.0);
    assert_eq!(s.value, 1.32);
}
