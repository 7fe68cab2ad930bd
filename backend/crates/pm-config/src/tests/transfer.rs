use crate::tests::TestConfigDir;
use crate::{Config, MAX_MAX_ARCHIVE_BYTES, MIN_MAX_ARCHIVE_BYTES};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok, some};
use serial_test::serial;

const BELOW_MIN_ARCHIVE: u64 = MIN_MAX_ARCHIVE_BYTES - 1;
const ABOVE_MAX_ARCHIVE: u64 = MAX_MAX_ARCHIVE_BYTES + 1;

fn load_with(key: &'static str, value: &str) -> (TestConfigDir, Config) {
    let mut env = TestConfigDir::new();
    env.set(key, value);
    let config = Config::load().unwrap();
    (env, config)
}

// =========================================================================
// Validation Tests - Transfer Config
// =========================================================================

#[test]
#[serial]
fn given_archive_ceiling_below_min_when_validate_then_error() {
    // Given
    let (_env, config) = load_with(
        "PM_TRANSFER_MAX_ARCHIVE_BYTES",
        &BELOW_MIN_ARCHIVE.to_string(),
    );

    // When
    let error = config.validate().unwrap_err();

    // Then
    assert_that!(error.key(), some(eq("transfer.max_archive_bytes")));
}

#[test]
#[serial]
fn given_archive_ceiling_above_max_when_validate_then_error() {
    let (_env, config) = load_with(
        "PM_TRANSFER_MAX_ARCHIVE_BYTES",
        &ABOVE_MAX_ARCHIVE.to_string(),
    );

    let error = config.validate().unwrap_err();

    assert_that!(error.key(), some(eq("transfer.max_archive_bytes")));
}

#[test]
#[serial]
fn given_archive_ceiling_at_bounds_when_validate_then_ok() {
    let (_env, config) = load_with(
        "PM_TRANSFER_MAX_ARCHIVE_BYTES",
        &MIN_MAX_ARCHIVE_BYTES.to_string(),
    );
    assert_that!(config.validate(), ok(anything()));

    let (_env, config) = load_with(
        "PM_TRANSFER_MAX_ARCHIVE_BYTES",
        &MAX_MAX_ARCHIVE_BYTES.to_string(),
    );
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_blank_exporting_user_when_validate_then_error() {
    let (_env, config) = load_with("PM_TRANSFER_EXPORTED_BY", "   ");

    let error = config.validate().unwrap_err();

    assert_that!(error.key(), some(eq("transfer.exported_by")));
}

#[test]
#[serial]
fn given_absolute_attachments_dir_when_resolving_then_used_as_is() {
    let elsewhere = tempfile::TempDir::new().unwrap();
    let (_env, config) = load_with(
        "PM_TRANSFER_ATTACHMENTS_DIR",
        elsewhere.path().to_str().unwrap(),
    );

    assert_eq!(config.attachments_root().unwrap(), elsewhere.path());
}
