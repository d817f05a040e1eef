use bijoy2uni::config::Config;

#[test]
fn parse_example_config() {
    let raw = include_str!("../bijoy2uni.example.toml");
    let cfg: Config = toml::from_str(raw).expect("parse TOML");
    assert!(cfg.detection.marker_min_count >= 1);
    assert!(!cfg.detection.hint_patterns.is_empty());
    assert!(!cfg.paths.out_dir.is_empty());
    assert!(!cfg.conversion.unmapped_marker.is_empty());
}

#[test]
fn defaults_round_trip_through_toml() {
    let cfg = Config::default();
    let raw = cfg.normalized_for_hash();
    let parsed: Config = toml::from_str(&raw).expect("parse serialized defaults");
    assert_eq!(
        parsed.detection.pattern_weight,
        cfg.detection.pattern_weight
    );
    assert_eq!(parsed.output.text_filename, cfg.output.text_filename);
}
