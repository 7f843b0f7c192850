//! Integration tests for signature generation over real byte sources.
//!
//! Covers chunk boundaries, duplicate chunk bookkeeping in the index, file
//! backed sources and determinism of repeated generation.

use std::fs::File;
use std::io::{Cursor, Write};
use std::num::NonZeroUsize;

use checksums::RollingChecksum;
use proptest::prelude::*;
use signature::{Signature, generate_signature};

fn chunk_size(size: usize) -> NonZeroUsize {
    NonZeroUsize::new(size).expect("chunk size must be non-zero")
}

fn signature_of(data: &[u8], size: usize) -> Signature {
    generate_signature(Cursor::new(data), chunk_size(size)).expect("signature generation succeeds")
}

#[test]
fn chunk_windows_cover_the_stream_in_order() {
    let data: Vec<u8> = (0..1_135_u32).map(|i| (i % 251) as u8).collect();
    let signature = signature_of(&data, 512);

    assert_eq!(signature.len(), 3);
    assert_eq!(signature.total_bytes(), data.len() as u64);

    for (index, chunk) in signature.chunks().iter().enumerate() {
        let start = index * 512;
        let end = (start + 512).min(data.len());
        assert_eq!(chunk.window(), &data[start..end]);
        assert_eq!(chunk.checksum(), RollingChecksum::from_bytes(&data[start..end]).sum());
    }
    assert_eq!(signature.chunks()[2].len(), 111);
}

#[test]
fn repeated_chunks_are_indexed_in_stream_order() {
    let signature = signature_of(b"hellllllo", 2);

    // he | ll | ll | ll | o
    assert_eq!(signature.len(), 5);
    let ll = signature.chunks()[1].checksum();
    let positions: Vec<usize> = signature
        .index()
        .positions(ll)
        .expect("ll is indexed")
        .iter()
        .copied()
        .collect();
    assert_eq!(positions, vec![1, 2, 3]);
    assert_eq!(signature.index().len(), 3);
}

#[test]
fn chunk_size_larger_than_stream_yields_single_chunk() {
    let signature = signature_of(b"tiny", 4096);
    assert_eq!(signature.len(), 1);
    assert_eq!(signature.chunks()[0].window(), b"tiny");
}

#[test]
fn chunk_size_of_one_indexes_every_byte() {
    let signature = signature_of(b"abca", 1);
    assert_eq!(signature.len(), 4);
    assert_eq!(signature.index().len(), 3);
    assert_eq!(signature.unmatched_chunks(), vec![0, 1, 2, 3]);
}

#[test]
fn file_backed_source_matches_in_memory_source() {
    let data = b"The quick brown fox jumps over the lazy dog".repeat(40);
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(&data).expect("write temp file");
    file.flush().expect("flush temp file");

    let reader = File::open(file.path()).expect("open temp file");
    let from_file = generate_signature(reader, chunk_size(64)).expect("signature from file");

    assert_eq!(from_file, signature_of(&data, 64));
}

proptest! {
    #[test]
    fn generation_is_deterministic(data in prop::collection::vec(any::<u8>(), 0..=1024), size in 1usize..=64) {
        let first = signature_of(&data, size);
        let second = signature_of(&data, size);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), data.len().div_ceil(size));
        prop_assert_eq!(first.unmatched_chunks(), (0..first.len()).collect::<Vec<_>>());

        let rebuilt: Vec<u8> = first.chunks().iter().flat_map(|c| c.window().iter().copied()).collect();
        prop_assert_eq!(rebuilt, data);
    }
}
