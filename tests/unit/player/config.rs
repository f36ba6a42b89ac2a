use super::*;

#[test]
fn empty_json_is_the_default_showcase() {
    let cfg = PlayerConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, PlayerConfig::default());
    assert_eq!(cfg.frame_count, 80);
    assert_eq!(cfg.retain_fraction, 0.85);
    assert_eq!(cfg.captions.layers.len(), 4);
    assert_eq!(cfg.gate, RenderGate::WhenReady);
    assert_eq!(cfg.strategy, LoadStrategy::Sequential);
    assert_eq!(
        cfg.sources()[79],
        "/iphone17blackvid_000/iphone17blackvid_079.jpg"
    );
}

#[test]
fn partial_json_overrides_fields() {
    let cfg = PlayerConfig::from_json_str(
        r#"{
            "frame_count": 120,
            "naming": { "base_dir": "/frames", "prefix": "frame", "ext": "webp" },
            "retain_fraction": 1.0,
            "clear_rgba": null,
            "gate": "opportunistic",
            "strategy": { "kind": "parallel", "threads": 2 }
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.frame_count, 120);
    assert_eq!(cfg.sources()[0], "/frames/frame_000.webp");
    assert_eq!(cfg.clear_rgba, None);
    assert_eq!(cfg.gate, RenderGate::Opportunistic);
    assert_eq!(cfg.strategy, LoadStrategy::Parallel { threads: Some(2) });
    assert_eq!(cfg.render_settings().retain_fraction, 1.0);
}

#[test]
fn invalid_values_are_rejected() {
    for json in [
        r#"{"frame_count": 0}"#,
        r#"{"retain_fraction": 0.0}"#,
        r#"{"retain_fraction": 1.5}"#,
        r#"{"scroll_span_viewports": 0.5}"#,
        r#"{"naming": {"base_dir": "/a", "prefix": "", "ext": "jpg"}}"#,
        r#"{"captions": [{"name": "a", "breakpoints": [0.5, 0.1], "opacities": [1, 0]}]}"#,
    ] {
        let err = PlayerConfig::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("validation error"), "{json}: {err}");
    }
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = PlayerConfig::from_json_str("{ nope").unwrap_err();
    assert!(err.to_string().contains("serialization error"));
}

#[test]
fn json_roundtrip_preserves_config() {
    let cfg = PlayerConfig::default();
    let json = cfg.to_json_pretty().unwrap();
    assert_eq!(PlayerConfig::from_json_str(&json).unwrap(), cfg);
}

#[test]
fn missing_config_file_is_reported() {
    let path = std::env::temp_dir().join("scrollreel_missing_config.json");
    let err = PlayerConfig::from_json_path(&path).unwrap_err();
    assert!(err.to_string().contains("open player config"));
}
