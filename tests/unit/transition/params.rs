use super::*;
use crate::narrative::catalog::PhaseCatalog;

#[test]
fn derived_tints_blend_accent_toward_white() {
    let catalog = PhaseCatalog::reference();
    let phase = &catalog[4];
    let p = SceneParams::from_phase(phase);

    assert_eq!(p.ambient_color, phase.accent);
    assert_eq!(p.fog_color(), phase.background);
    let expected_moon = phase.accent.mix(MOON_BASE, 0.35);
    assert_eq!(p.moon_tint, expected_moon);
    assert!(p.light_tint.r > phase.accent.r);
    assert!(p.light_tint.g > phase.accent.g);
    assert_eq!(p.light_tint.b, 1.0);
}

#[test]
fn scalar_fields_copy_the_phase() {
    let catalog = PhaseCatalog::reference();
    let phase = &catalog[3];
    let p = SceneParams::from_phase(phase);
    assert_eq!(p.left_offset, phase.left_offset);
    assert_eq!(p.right_offset, phase.right_offset);
    assert_eq!(p.light_intensity, 1.6);
    assert_eq!(p.ambient_intensity, 0.58);
    assert_eq!(p.glow_intensity, 1.48);
    assert_eq!(p.halo_opacity, 0.74);
    assert_eq!(p.star_drift_speed, 0.1);
    assert_eq!(p.bloom_intensity, 1.08);
}

#[test]
fn deltas_measure_every_field() {
    let catalog = PhaseCatalog::reference();
    let a = SceneParams::from_phase(&catalog[0]);
    assert_eq!(a.max_delta(&a), 0.0);

    let mut b = a.clone();
    b.bloom_intensity += 0.5;
    assert!((a.max_delta(&b) - 0.5).abs() < 1e-12);
    assert_eq!(a.max_tweened_delta(&b), 0.0);

    b.left_offset.y += 2.0;
    assert!((a.max_tweened_delta(&b) - 2.0).abs() < 1e-12);
}

#[test]
fn state_starts_at_rest() {
    let catalog = PhaseCatalog::reference();
    let st = TransitionState::at_rest(0, catalog.first());
    assert_eq!(st.current, st.target);
    assert_eq!(st.current_index, 0);
}
