use std::fs;

use mpu6050::OffsetStore;

use crate::*;

/// A store under a unique path in the system temp directory, removed up front so every test
/// starts from a missing file.
fn temp_store(name: &str) -> FileStore {
    let path = std::env::temp_dir().join(format!("offset-store-{}-{}.ini", std::process::id(), name));
    let _ = fs::remove_file(&path);
    FileStore::new(path)
}

#[test]
fn get_before_any_write_is_an_error() {
    let mut store = temp_store("missing");
    assert!(matches!(store.get("gyro_raw_offset_x"), Err(StoreError::Missing(_))));
}

#[test]
fn set_creates_the_file_and_get_round_trips() {
    let mut store = temp_store("roundtrip");
    store.set("gyro_raw_offset_x", -1.625).unwrap();
    store.set("acc_angle_offset_y", 0.5).unwrap();

    assert_eq!(store.get("gyro_raw_offset_x").unwrap(), Some(-1.625));
    assert_eq!(store.get("acc_angle_offset_y").unwrap(), Some(0.5));
}

#[test]
fn unknown_key_in_existing_file_is_none() {
    let mut store = temp_store("unknown");
    store.set("gyro_raw_offset_x", 1.0).unwrap();
    assert_eq!(store.get("gyro_raw_offset_z").unwrap(), None);
}

#[test]
fn set_rewrites_the_existing_line_instead_of_appending() {
    let mut store = temp_store("rewrite");
    store.set("gyro_raw_offset_x", 1.0).unwrap();
    store.set("gyro_raw_offset_x", 2.0).unwrap();

    assert_eq!(store.get("gyro_raw_offset_x").unwrap(), Some(2.0));
    let contents = fs::read_to_string(&store.path).unwrap();
    assert_eq!(contents.lines().count(), 1);
}

#[test]
fn keys_match_exactly_not_by_substring() {
    // "offset_x" is a substring of the stored key but not a stored key itself.
    let mut store = temp_store("exact");
    store.set("gyro_raw_offset_x", 1.0).unwrap();
    assert_eq!(store.get("offset_x").unwrap(), None);
}

#[test]
fn unparsable_value_is_a_typed_error() {
    let mut store = temp_store("garbage");
    store.set("gyro_raw_offset_x", 1.0).unwrap();
    fs::write(&store.path, "gyro_raw_offset_x:=not-a-float\n").unwrap();

    assert!(matches!(
        store.get("gyro_raw_offset_x"),
        Err(StoreError::BadValue { .. })
    ));
}
