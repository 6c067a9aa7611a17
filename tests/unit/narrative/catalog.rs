use super::*;

#[test]
fn reference_catalog_is_valid_and_ordered() {
    let catalog = PhaseCatalog::reference();
    catalog.validate().unwrap();
    assert_eq!(catalog.len(), 5);
    let ids: Vec<_> = catalog.phases().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["lua-nova", "crescente", "quarto", "gibosa", "eclipse"]);
    assert_eq!(catalog.position("gibosa"), Some(3));
    assert_eq!(catalog.position("missing"), None);
}

#[test]
fn reference_bodies_mirror_each_other() {
    for phase in PhaseCatalog::reference().phases() {
        assert_eq!(phase.right_offset.x, -phase.left_offset.x);
        assert_eq!(phase.right_offset.y, -phase.left_offset.y);
        assert_eq!(phase.right_offset.z, phase.left_offset.z);
    }
}

#[test]
fn reference_values_escalate_toward_eclipse() {
    let catalog = PhaseCatalog::reference();
    for pair in catalog.phases().windows(2) {
        assert!(pair[0].light_intensity < pair[1].light_intensity);
        assert!(pair[0].star_drift_speed < pair[1].star_drift_speed);
        assert!(pair[0].bloom_intensity < pair[1].bloom_intensity);
        assert!(pair[0].left_offset.x < pair[1].left_offset.x);
    }
    assert_eq!(catalog[4].accent.to_hex(), "#9b7bff");
    assert_eq!(catalog[0].background.to_hex(), "#050316");
    assert_eq!(catalog[2].poem_lines().count(), 4);
}

#[test]
fn json_round_trip_preserves_catalog() {
    let catalog = PhaseCatalog::reference();
    let json = catalog.to_json_pretty().unwrap();
    let back = PhaseCatalog::from_json_str(&json).unwrap();
    assert_eq!(back, catalog);
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut phases = PhaseCatalog::reference().phases().to_vec();
    phases[1].id = phases[0].id.clone();
    let err = PhaseCatalog::new(phases).unwrap_err();
    assert!(err.to_string().contains("duplicate phase id"));
}

#[test]
fn empty_and_negative_catalogs_are_rejected() {
    assert!(PhaseCatalog::new(Vec::new()).is_err());
    assert!(PhaseCatalog::from_json_str("[]").is_err());

    let mut phases = PhaseCatalog::reference().phases().to_vec();
    phases[2].halo_opacity = -0.1;
    let err = PhaseCatalog::new(phases).unwrap_err();
    assert!(err.to_string().contains("halo_opacity"));
}

#[test]
fn hex_colours_are_accepted_in_json() {
    let json = r##"[{
        "id": "solo",
        "title": "Solo",
        "tagline": "",
        "poem": "one\ntwo",
        "left_offset": [-1.0, 0.0, -2.0],
        "right_offset": [1.0, 0.0, -2.0],
        "background": "#000000",
        "accent": "#ffffff",
        "light_intensity": 1.0,
        "ambient_intensity": 0.5,
        "glow_intensity": 1.0,
        "halo_opacity": 0.5,
        "star_drift_speed": 0.1,
        "bloom_intensity": 1.0
    }]"##;
    let catalog = PhaseCatalog::from_json_str(json).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.first().accent, Rgb::WHITE);
}
