use crate::{CoreError, ExportKind, MANIFEST_VERSION, Manifest};

fn sample_manifest() -> Manifest {
    Manifest::new(
        ExportKind::Epic,
        "2026-01-01T00:00:00+00:00".to_string(),
        "alice".to_string(),
        "0.1.4".to_string(),
        "Source".to_string(),
    )
}

#[test]
fn test_new_manifest_uses_current_version() {
    let manifest = sample_manifest();
    assert_eq!(manifest.version, MANIFEST_VERSION);
    assert!(manifest.check_version().is_ok());
    assert_eq!(manifest.entity_count(), 0);
}

#[test]
fn test_unknown_version_is_rejected() {
    let mut manifest = sample_manifest();
    manifest.version = MANIFEST_VERSION + 1;

    let err = manifest.check_version().unwrap_err();
    match err {
        CoreError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("version")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_json_document_uses_snake_case_kind() {
    let bytes = sample_manifest().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["export_kind"], "epic");
    assert_eq!(value["exported_by"], "alice");
}

#[test]
fn test_from_json_tolerates_missing_optional_collections() {
    let json = r#"{
        "version": 1,
        "export_kind": "project",
        "exported_at": "2026-01-01T00:00:00+00:00",
        "exported_by": "bob",
        "producer_version": "0.1.0",
        "source_project_name": "Legacy",
        "epics": [],
        "tickets": []
    }"#;

    let manifest = Manifest::from_json(json.as_bytes()).unwrap();
    assert_eq!(manifest.export_kind, ExportKind::Project);
    assert!(manifest.comments.is_empty());
    assert!(manifest.attachment_files.is_empty());
}

#[test]
fn test_from_json_rejects_garbage() {
    let result = Manifest::from_json(b"not json");
    assert!(matches!(result, Err(CoreError::Serialization { .. })));
}
