//! Loading table files and querying them through the service layer.

use std::path::PathBuf;

use pc_app::{AppError, PhaseChangeResponse, handle_phase_change, load_table, sweep};

fn temp_file(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("pc_app_table_config");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn yaml_table_drives_queries() {
    let path = temp_file(
        "three_rows.yaml",
        "points:
  - pressure: 0.1
    liquid_volume: 0.001043
    vapor_volume: 1.694
  - pressure: 1.0
    liquid_volume: 0.001127
    vapor_volume: 0.19444
  - pressure: 10.0
    liquid_volume: 0.001452
    vapor_volume: 0.01803
",
    );
    let table = load_table(&path).unwrap();
    assert_eq!(table.len(), 3);

    let resp = handle_phase_change(&table, &"1 MPa".into()).unwrap();
    assert_eq!(
        resp,
        PhaseChangeResponse::Reading {
            specific_volume_liquid: 0.001127,
            specific_volume_vapor: 0.19444,
        }
    );

    let resp = handle_phase_change(&table, &"0.05".into()).unwrap();
    assert_eq!(resp, PhaseChangeResponse::out_of_range());

    let pts = sweep(&table, "0.1", "10", 4).unwrap();
    assert!(pts.iter().all(|p| !p.response.is_error()));
}

#[test]
fn json_table_with_duplicates_is_rejected() {
    let path = temp_file(
        "dupes.json",
        r#"{"points":[
            {"pressure":1.0,"liquid_volume":0.001,"vapor_volume":1.0},
            {"pressure":1.0,"liquid_volume":0.002,"vapor_volume":2.0}
        ]}"#,
    );
    let err = load_table(&path).unwrap_err();
    assert!(matches!(err, AppError::Table(_)), "{err}");
}

#[test]
fn malformed_json_table_is_not_a_client_error() {
    let path = temp_file("broken.json", "{ not json");
    let err = load_table(&path).unwrap_err();
    assert!(matches!(err, AppError::Json(_)), "{err}");
    assert!(!err.is_client_error());
}

#[test]
fn unknown_extension_is_config_error() {
    let path = temp_file("table.toml", "points = []");
    assert!(matches!(load_table(&path), Err(AppError::Config { .. })));
}

#[test]
fn missing_file_is_read_error() {
    let path = std::env::temp_dir().join("pc_app_table_config_missing.yaml");
    let _ = std::fs::remove_file(&path);
    assert!(matches!(
        load_table(&path),
        Err(AppError::TableFileRead { .. })
    ));
}
