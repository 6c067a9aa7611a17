use super::*;

fn bytes() -> Arc<[u8]> {
    Arc::from(vec![1u8, 2, 3, 4])
}

#[test]
fn resources_are_registered_and_revoked_once() {
    let host = MemoryHost::new();
    let id = host.create_resource(bytes(), "audio/wav").unwrap();
    assert_eq!(host.live_resources(), 1);
    assert_eq!(host.resource_mime(id).as_deref(), Some("audio/wav"));
    assert_eq!(host.resource_bytes(id).unwrap().len(), 4);

    host.revoke_resource(id).unwrap();
    assert_eq!(host.live_resources(), 0);
    assert!(host.revoke_resource(id).is_err());
}

#[test]
fn empty_resources_are_refused() {
    let host = MemoryHost::new();
    assert!(host.create_resource(Arc::from(Vec::new()), "audio/wav").is_err());
}

#[test]
fn handles_start_paused_and_clamp_volume() {
    let host = MemoryHost::new();
    let id = host.create_resource(bytes(), "audio/wav").unwrap();
    let mut h = host.open(id).unwrap();
    assert!(h.is_paused());
    assert_eq!(h.preload(), Preload::Auto);

    h.set_volume(1.7);
    assert_eq!(h.volume(), 1.0);
    h.set_volume(-0.3);
    assert_eq!(h.volume(), 0.0);
    h.set_volume(f64::NAN);
    assert_eq!(h.volume(), 0.0);

    h.play().unwrap();
    assert!(!h.is_paused());
    h.pause();
    assert!(h.is_paused());
}

#[test]
fn blocked_policy_rejects_play_without_side_effects() {
    let host = MemoryHost::with_policy(AutoplayPolicy::Block);
    let id = host.create_resource(bytes(), "audio/wav").unwrap();
    let mut h = host.open(id).unwrap();

    let err = h.play().unwrap_err();
    assert!(err.is_playback_rejection());
    assert!(h.is_paused());
    assert_eq!(host.rejected_plays(), 1);

    host.set_policy(AutoplayPolicy::Allow);
    h.play().unwrap();
    assert_eq!(host.play_requests(), 2);
}

#[test]
fn close_is_idempotent() {
    let host = MemoryHost::new();
    let id = host.create_resource(bytes(), "audio/wav").unwrap();
    let mut h = host.open(id).unwrap();
    assert_eq!(host.open_handles(), 1);
    h.close();
    h.close();
    assert_eq!(host.open_handles(), 0);
    assert!(h.play().is_err());
}

#[test]
fn opening_unknown_resource_fails() {
    let host = MemoryHost::new();
    assert!(host.open(ResourceId(42)).is_err());
}
