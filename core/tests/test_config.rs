// tests/test_config.rs
use sportperf_core::*;
use std::fs;

#[test]
fn partial_json_keeps_defaults() {
    let cfg = EngineConfig::from_json(r#"{"report_detail_rows": 5}"#).unwrap();
    assert_eq!(cfg.report_detail_rows, 5);
    assert_eq!(cfg.default_resting_hr, 60.0);
    assert!(cfg.export_bom);
}

#[test]
fn parse_error_points_at_field() {
    let err = EngineConfig::from_json(r#"{"export_bom": "yes"}"#).unwrap_err();
    match err {
        EngineError::Json { what, path, .. } => {
            assert_eq!(what, "EngineConfig");
            assert_eq!(path, "export_bom");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = EngineConfig::load(dir.path().join("engine.json")).unwrap();
    assert_eq!(cfg, EngineConfig::default());
}

#[test]
fn load_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.json");
    fs::write(&path, r#"{"default_resting_hr": 52.0, "export_bom": false}"#).unwrap();

    let cfg = EngineConfig::load(&path).unwrap();
    assert_eq!(cfg.default_resting_hr, 52.0);
    assert!(!cfg.export_bom);
    assert_eq!(cfg.report_detail_rows, 10);
}
