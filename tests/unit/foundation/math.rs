use super::*;

#[test]
fn smoothing_factor_saturates_at_one() {
    assert_eq!(smoothing_factor(0.0, 2.0), 0.0);
    assert!((smoothing_factor(0.1, 2.0) - 0.2).abs() < 1e-12);
    assert_eq!(smoothing_factor(5.0, 2.0), 1.0);
}

#[test]
fn validators_name_the_field() {
    assert!(ensure_finite_non_negative("glow", 0.0).is_ok());
    let err = ensure_finite_non_negative("glow", -1.0).unwrap_err();
    assert!(err.to_string().contains("glow"));

    assert!(ensure_positive("rate", 0.0).is_err());
    assert!(ensure_positive("rate", f64::NAN).is_err());

    assert!(ensure_finite_vec3("left", DVec3::new(1.0, f64::INFINITY, 0.0)).is_err());
}
