//! Integration tests running complete sessions over file and memory sources.

use std::fs;
use std::num::NonZeroUsize;

use engine::{DiffConfig, EngineError, FileSource, MemorySource, RollingDiff, SourceRole};
use proptest::prelude::*;
use tempfile::TempDir;

fn chunk_size(size: usize) -> NonZeroUsize {
    NonZeroUsize::new(size).unwrap()
}

fn write(dir: &TempDir, name: &str, contents: &[u8]) -> FileSource {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    FileSource::new(path)
}

#[test]
fn identical_files_produce_identical_delta() {
    let dir = tempfile::tempdir().expect("tempdir");
    let contents: Vec<u8> = (0..4096u32).map(|i| (i * 7 % 256) as u8).collect();
    let original = write(&dir, "original", &contents);
    let updated = write(&dir, "updated", &contents);

    let report = RollingDiff::new(DiffConfig::new(chunk_size(64), original, updated))
        .expect("session")
        .run()
        .expect("run");

    assert_eq!(report.signature.len(), 64);
    assert_eq!(report.signature.total_bytes(), 4096);
    assert!(report.delta.is_identical());
}

#[test]
fn file_and_memory_sources_agree() {
    let dir = tempfile::tempdir().expect("tempdir");
    let original = b"the quick brown fox jumps over the lazy dog";
    let updated = b"the quick red fox jumps over the lazy dog!";

    let from_files = RollingDiff::new(DiffConfig::new(
        chunk_size(4),
        write(&dir, "a", original),
        write(&dir, "b", updated),
    ))
    .expect("session")
    .run()
    .expect("run");

    let from_memory = RollingDiff::new(DiffConfig::new(
        chunk_size(4),
        MemorySource::new(original.to_vec()),
        MemorySource::new(updated.to_vec()),
    ))
    .expect("session")
    .run()
    .expect("run");

    assert_eq!(from_files, from_memory);
    assert!(!from_files.delta.missing_chunks().is_empty());
}

#[test]
fn missing_original_fails_on_open() {
    let dir = tempfile::tempdir().expect("tempdir");
    let updated = write(&dir, "updated", b"data");
    let config = DiffConfig::new(
        chunk_size(2),
        FileSource::new(dir.path().join("nope")),
        updated,
    );

    let err = RollingDiff::new(config).expect_err("must fail");
    match err {
        EngineError::Open { role, ref origin, .. } => {
            assert_eq!(role, SourceRole::Original);
            assert!(origin.ends_with("nope"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_updated_fails_before_signature() {
    let dir = tempfile::tempdir().expect("tempdir");
    let original = write(&dir, "original", b"data");
    let config = DiffConfig::new(
        chunk_size(2),
        original,
        FileSource::new(dir.path().join("gone")),
    );

    assert!(matches!(
        RollingDiff::new(config),
        Err(EngineError::Open {
            role: SourceRole::Updated,
            ..
        })
    ));
}

#[test]
fn empty_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let report = RollingDiff::new(DiffConfig::new(
        chunk_size(3),
        write(&dir, "a", b""),
        write(&dir, "b", b""),
    ))
    .expect("session")
    .run()
    .expect("run");

    assert!(report.signature.is_empty());
    assert!(report.delta.changes().is_empty());
    assert!(report.delta.missing_chunks().is_empty());
}

proptest! {
    #[test]
    fn sessions_are_deterministic(
        original in proptest::collection::vec(any::<u8>(), 0..256),
        updated in proptest::collection::vec(any::<u8>(), 0..256),
        size in 1usize..8,
    ) {
        let run = || {
            RollingDiff::new(DiffConfig::new(
                chunk_size(size),
                MemorySource::new(original.clone()),
                MemorySource::new(updated.clone()),
            ))
            .and_then(RollingDiff::run)
        };

        let first = run().expect("first run");
        let second = run().expect("second run");
        prop_assert_eq!(first, second);
    }
}
