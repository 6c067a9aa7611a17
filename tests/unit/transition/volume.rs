use std::sync::Arc;

use super::*;
use crate::audio::{host::MemoryHost, synth::AmbientSpec};

fn audio() -> AmbientAudio {
    let spec = AmbientSpec::new(0.1, 8_000).unwrap();
    AmbientAudio::create(spec, Arc::new(MemoryHost::new())).unwrap()
}

#[test]
fn eases_between_endpoints() {
    let fade = VolumeFade::new(0.0, 0.5, Seconds(1.0), 2.0, Ease::InOutSine);
    assert_eq!(fade.volume_at(Seconds(0.5)), 0.0);
    assert!((fade.volume_at(Seconds(2.0)) - 0.25).abs() < 1e-9);
    assert_eq!(fade.volume_at(Seconds(3.0)), 0.5);
    assert_eq!(fade.target(), 0.5);
    assert!(!fade.pauses_on_finish());
}

#[test]
fn pause_only_after_landing() {
    let mut a = audio();
    a.play().unwrap();
    let fade = VolumeFade::new(0.4, 0.0, Seconds::ZERO, 1.6, Ease::InOutSine).then_pause();

    assert!(!fade.apply(&mut a, Seconds(0.8)));
    assert!(a.is_audible());
    assert!(a.volume() > 0.0);

    assert!(fade.apply(&mut a, Seconds(1.6)));
    assert!(!a.is_audible());
    assert_eq!(a.volume(), 0.0);
}

#[test]
fn plain_fade_never_pauses() {
    let mut a = audio();
    a.play().unwrap();
    let fade = VolumeFade::new(0.0, 0.3, Seconds::ZERO, 0.5, Ease::Linear);
    assert!(fade.apply(&mut a, Seconds(1.0)));
    assert!(a.is_audible());
    assert!((a.volume() - 0.3).abs() < 1e-12);
}
