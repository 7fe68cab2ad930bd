use crate::{ConflictResolution, ExportKind};

use std::str::FromStr;

#[test]
fn test_conflict_resolution_round_trips_through_str() {
    for strategy in [
        ConflictResolution::Replace,
        ConflictResolution::Merge,
        ConflictResolution::CreateNew,
    ] {
        assert_eq!(
            ConflictResolution::from_str(strategy.as_str()).unwrap(),
            strategy
        );
    }
}

#[test]
fn test_conflict_resolution_accepts_hyphenated_create_new() {
    assert_eq!(
        ConflictResolution::from_str("create-new").unwrap(),
        ConflictResolution::CreateNew
    );
}

#[test]
fn test_conflict_resolution_rejects_unknown() {
    assert!(ConflictResolution::from_str("overwrite").is_err());
}

#[test]
fn test_conflict_resolution_default_is_create_new() {
    assert_eq!(ConflictResolution::default(), ConflictResolution::CreateNew);
}

#[test]
fn test_export_kind_from_str() {
    assert_eq!(ExportKind::from_str("epic").unwrap(), ExportKind::Epic);
    assert_eq!(ExportKind::from_str("project").unwrap(), ExportKind::Project);
    assert!(ExportKind::from_str("board").is_err());
}
