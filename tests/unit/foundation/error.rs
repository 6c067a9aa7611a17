use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LunaError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(LunaError::audio("x").to_string().contains("audio error:"));
    assert!(
        LunaError::playback("x")
            .to_string()
            .contains("playback error:")
    );
    assert!(
        LunaError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LunaError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn only_playback_errors_count_as_rejections() {
    assert!(LunaError::playback("autoplay blocked").is_playback_rejection());
    assert!(!LunaError::audio("bad header").is_playback_rejection());
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: LunaError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, LunaError::Serde(_)));
}
