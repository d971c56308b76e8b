use super::*;

#[test]
fn empty_json_uses_defaults() {
    let cfg = EngineConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, EngineConfig::default());
    assert_eq!(cfg.scene_lengths(), [320.0, 380.0, 0.0]);
    assert!(!cfg.has_closing_scene());
    assert_eq!(cfg.next_section_selector, None);
}

#[test]
fn camel_case_keys_are_recognized() {
    let cfg = EngineConfig::from_json_str(
        r##"{
            "p2Length": 200,
            "p4Length": 120,
            "overlap": 0.5,
            "globalRawEnd": 0.9,
            "nextSectionSelector": "#pricing",
            "content": { "phrase": "Go" },
            "pricing": { "base": 10, "rows": [] }
        }"##,
    )
    .unwrap();
    assert_eq!(cfg.p2_length, 200.0);
    assert_eq!(cfg.p3_length, 380.0);
    assert!(cfg.has_closing_scene());
    assert_eq!(cfg.capped_overlap(), MAX_OVERLAP);
    assert_eq!(cfg.next_section_selector.as_deref(), Some("#pricing"));
    assert_eq!(cfg.content.phrase, "Go");
    assert_eq!(cfg.content.labels.len(), 3);
    assert_eq!(cfg.pricing.smoothing, DEFAULT_SMOOTHING);
    assert!(cfg.pricing.rows.is_empty());
}

#[test]
fn rejects_invalid_values() {
    for json in [
        r#"{ "p2Length": 0 }"#,
        r#"{ "p4Length": -1 }"#,
        r#"{ "overlap": -0.1 }"#,
        r#"{ "globalRawEnd": 0 }"#,
        r#"{ "globalRawEnd": 1.5 }"#,
        r#"{ "pricing": { "smoothing": 0 } }"#,
        r#"{ "pricing": { "rows": [ { "kind": { "type": "slider", "fill": 2 }, "price": 1 } ] } }"#,
    ] {
        let err = EngineConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ReelError::Validation(_)), "{json}: {err}");
    }
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = EngineConfig::from_json_str("{ nope").unwrap_err();
    assert!(matches!(err, ReelError::Serde(_)));
}

#[test]
fn missing_file_keeps_path_in_message() {
    let err = EngineConfig::from_path(Path::new("definitely/not/here.json")).unwrap_err();
    assert!(format!("{err:#}").contains("definitely/not/here.json"));
}

#[test]
fn headline_accepts_any_text() {
    let cfg = EngineConfig::from_json_str(r#"{ "content": { "headline": "" } }"#).unwrap();
    assert_eq!(cfg.content.headline, "");
    assert_eq!(cfg.content.phrase, ContentConfig::default().phrase);
}
