use super::*;
use crate::audio::host::{AutoplayPolicy, MemoryHost};
use crate::audio::wav::WavInfo;

fn spec() -> AmbientSpec {
    AmbientSpec::new(0.25, 8_000).unwrap()
}

#[test]
fn create_registers_a_looping_quiet_handle() {
    let host = MemoryHost::new();
    let audio = AmbientAudio::create(spec(), Arc::new(host.clone())).unwrap();

    assert_eq!(host.live_resources(), 1);
    assert_eq!(host.open_handles(), 1);
    assert!(audio.is_looping());
    assert_eq!(audio.volume(), INITIAL_VOLUME);
    assert!(!audio.is_playing());
    assert!(!audio.is_audible());

    let id = audio.resource().unwrap();
    assert_eq!(host.resource_mime(id).as_deref(), Some("audio/wav"));
    assert_eq!(&*host.resource_bytes(id).unwrap(), audio.container());
}

#[test]
fn container_wraps_the_waveform() {
    let audio = AmbientAudio::create(spec(), Arc::new(MemoryHost::new())).unwrap();
    let info = WavInfo::parse(audio.container()).unwrap();
    assert_eq!(info.frame_count(), audio.waveform().len());
    assert_eq!(audio.waveform().len(), 2_000);
}

#[test]
fn dispose_twice_is_harmless() {
    let host = MemoryHost::new();
    let mut audio = AmbientAudio::create(spec(), Arc::new(host.clone())).unwrap();
    audio.play().unwrap();

    audio.dispose();
    assert!(audio.is_disposed());
    assert_eq!(host.live_resources(), 0);
    assert_eq!(host.open_handles(), 0);

    audio.dispose();
    assert_eq!(host.live_resources(), 0);
    assert!(audio.play().unwrap_err().is_playback_rejection());
    assert_eq!(audio.volume(), 0.0);
}

#[test]
fn drop_releases_host_resources() {
    let host = MemoryHost::new();
    {
        let _audio = AmbientAudio::create(spec(), Arc::new(host.clone())).unwrap();
        assert_eq!(host.live_resources(), 1);
    }
    assert_eq!(host.live_resources(), 0);
    assert_eq!(host.open_handles(), 0);
}

#[test]
fn dispose_without_ever_playing_is_fine() {
    let host = MemoryHost::with_policy(AutoplayPolicy::Block);
    let mut audio = AmbientAudio::create(spec(), Arc::new(host.clone())).unwrap();
    assert!(audio.play().is_err());
    audio.dispose();
    assert_eq!(host.live_resources(), 0);
}

#[test]
fn invalid_spec_allocates_nothing() {
    let host = MemoryHost::new();
    let bad = AmbientSpec {
        duration_secs: 0.0,
        sample_rate: 8_000,
    };
    assert!(AmbientAudio::create(bad, Arc::new(host.clone())).is_err());
    assert_eq!(host.live_resources(), 0);
}
