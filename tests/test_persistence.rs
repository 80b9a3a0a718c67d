//! Persistence round-trip tests: what a restarted process sees on disk.

use contact_assistant::error::StorageError;
use contact_assistant::{Directory, JsonFileStore, Record};

fn store_at(dir: &tempfile::TempDir) -> JsonFileStore {
    JsonFileStore::new(dir.path().join("book.dat"))
}

#[test]
fn test_restart_reconstructs_records() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut directory = Directory::load(Box::new(store_at(&dir))).unwrap();

        let mut alice = Record::new("alice", Some("1990-06-15")).unwrap();
        alice.add_phone("5551234567").unwrap();
        alice.add_phone("5559876543").unwrap();
        directory.add_record(alice).unwrap();

        let bob = Record::new("bob", None).unwrap();
        directory.add_record(bob).unwrap();
    }

    // Process-restart equivalent: fresh directory over the same file.
    let directory = Directory::load(Box::new(store_at(&dir))).unwrap();
    assert_eq!(directory.len(), 2);

    let alice = directory.get("alice").unwrap();
    assert_eq!(alice.name().as_str(), "alice");
    let phones: Vec<&str> = alice.phones().iter().map(|p| p.as_str()).collect();
    assert_eq!(phones, vec!["5551234567", "5559876543"]);
    assert_eq!(alice.birthday().unwrap().as_str(), "1990-06-15");

    let bob = directory.get("bob").unwrap();
    assert!(bob.phones().is_empty());
    assert!(bob.birthday().is_none());
}

#[test]
fn test_delete_is_persisted() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut directory = Directory::load(Box::new(store_at(&dir))).unwrap();
        directory.add_record(Record::new("alice", None).unwrap()).unwrap();
        directory.add_record(Record::new("bob", None).unwrap()).unwrap();
        assert!(directory.delete("alice").unwrap());
    }

    let directory = Directory::load(Box::new(store_at(&dir))).unwrap();
    assert!(directory.get("alice").is_none());
    assert!(directory.get("bob").is_some());
}

#[test]
fn test_absent_store_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let directory = Directory::load(Box::new(store_at(&dir))).unwrap();
    assert!(directory.is_empty());
}

#[test]
fn test_corrupt_store_fails_load() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("book.dat"), "{\"version\":1,\"contacts\":").unwrap();

    let result = Directory::load(Box::new(store_at(&dir)));
    assert!(matches!(result, Err(StorageError::Corrupt(_))));
}

#[test]
fn test_future_version_fails_load() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("book.dat"),
        "{\"version\":2,\"contacts\":{}}",
    )
    .unwrap();

    let result = Directory::load(Box::new(store_at(&dir)));
    assert!(matches!(result, Err(StorageError::UnsupportedVersion(2))));
}

#[test]
fn test_store_with_invalid_record_data_fails_load() {
    let dir = tempfile::tempdir().unwrap();
    // Hand-edited store with a phone that no longer passes validation.
    std::fs::write(
        dir.path().join("book.dat"),
        "{\"version\":1,\"contacts\":{\"x\":{\"name\":\"x\",\"phones\":[\"555\"]}}}",
    )
    .unwrap();

    let result = Directory::load(Box::new(store_at(&dir)));
    assert!(matches!(result, Err(StorageError::Corrupt(_))));
}
