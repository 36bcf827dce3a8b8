use super::*;

#[test]
fn empty_object_is_the_default_config() {
    let cfg = AppConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.canvas, Canvas::default());
    assert_eq!(cfg.fps, Fps::default());
    assert_eq!(cfg.timeline.duration(), 20.0);
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn export_settings_follow_format_and_overrides() {
    let cfg = AppConfig::from_json_str(
        r#"{ "export": { "format": "mp4", "pacing": "unthrottled" } }"#,
    )
    .unwrap();
    let s = cfg.export_settings();
    assert_eq!(s.file_name, "swargayatra-ad.mp4");
    assert_eq!(s.pacing, Pacing::Unthrottled);
    assert_eq!(s.total_frames().unwrap(), 600);

    let cfg = AppConfig::from_json_str(r#"{ "export": { "file_name": "promo.webm" } }"#).unwrap();
    assert_eq!(cfg.export_settings().file_name, "promo.webm");
}

#[test]
fn invalid_values_are_rejected() {
    assert!(AppConfig::from_json_str(r#"{ "fps": { "num": 0, "den": 1 } }"#).is_err());
    assert!(AppConfig::from_json_str(r#"{ "canvas": { "width": 0, "height": 720 } }"#).is_err());
    assert!(AppConfig::from_json_str(r#"{ "export": { "format": "raw_rgba" } }"#).is_err());
    assert!(AppConfig::from_json_str(r#"{ "export": { "file_name": "a/b.webm" } }"#).is_err());
    assert!(matches!(
        AppConfig::from_json_str("{ nope"),
        Err(AdError::Serde(_))
    ));
}

#[test]
fn serialized_default_loads_back() {
    let json = serde_json::to_string_pretty(&AppConfig::default()).unwrap();
    assert_eq!(AppConfig::from_json_str(&json).unwrap(), AppConfig::default());
}
