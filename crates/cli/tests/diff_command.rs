//! End-to-end tests driving [`cli::run`] over files on disk.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

struct Fixture {
    _dir: TempDir,
    original: PathBuf,
    updated: PathBuf,
}

fn fixture(original: &[u8], updated: &[u8]) -> Fixture {
    let dir = tempfile::tempdir().expect("tempdir");
    let original_path = dir.path().join("original.txt");
    let updated_path = dir.path().join("updated.txt");
    fs::write(&original_path, original).expect("write original");
    fs::write(&updated_path, updated).expect("write updated");
    Fixture {
        _dir: dir,
        original: original_path,
        updated: updated_path,
    }
}

fn run(args: &[&str]) -> (i32, String, String) {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = cli::run(args.iter().copied(), &mut stdout, &mut stderr);
    (
        code,
        String::from_utf8(stdout).expect("utf-8 stdout"),
        String::from_utf8(stderr).expect("utf-8 stderr"),
    )
}

fn diff_args<'a>(fixture: &'a Fixture, extra: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec![
        "rdetective",
        "diff",
        "--original",
        fixture.original.to_str().expect("utf-8 path"),
        "--updated",
        fixture.updated.to_str().expect("utf-8 path"),
        "--log-level=error",
    ];
    args.extend_from_slice(extra);
    args
}

#[test]
fn text_report_for_changed_chunk() {
    let files = fixture(b"hello", b"heeello");
    let (code, stdout, stderr) = run(&diff_args(&files, &[]));

    assert_eq!(code, cli::EXIT_SUCCESS, "stderr: {stderr}");
    assert!(stdout.contains("chunk 1 is at position 2 and has new bytes prepended: \"ee\""));
    assert!(stdout.contains("chunk 2 is at position 6"));
    assert!(!stdout.contains("is missing"));
}

#[test]
fn text_report_for_removed_chunk() {
    let files = fixture(b"hello", b"heo");
    let (code, stdout, _) = run(&diff_args(&files, &[]));

    assert_eq!(code, cli::EXIT_SUCCESS);
    assert!(stdout.ends_with("chunk 1 is missing\n"));
}

#[test]
fn larger_chunk_size_is_honoured() {
    let files = fixture(b"abcdefgh", b"abcdXefgh");
    let (code, stdout, _) = run(&diff_args(&files, &["--chunk-size", "4"]));

    assert_eq!(code, cli::EXIT_SUCCESS);
    assert!(stdout.contains("chunk 0, hash"));
    assert!(stdout.contains("chunk 1 is at position 4 and has new bytes prepended: \"X\""));
}

#[test]
fn chunk_size_far_beyond_file_length() {
    let files = fixture(b"hello", b"hello");
    let (code, stdout, stderr) = run(&diff_args(&files, &["--chunk-size", "100000000000"]));

    assert_eq!(code, cli::EXIT_SUCCESS, "stderr: {stderr}");
    assert!(stdout.contains("chunk 0, hash "));
    assert!(stdout.contains("chunk 0 is at position 0"));
    assert!(!stdout.contains("is missing"));
}

#[cfg(feature = "json")]
#[test]
fn json_report_round_trips_through_serde_json() {
    let files = fixture(b"hello", b"llohe");
    let (code, stdout, _) = run(&diff_args(&files, &["--format=json"]));

    assert_eq!(code, cli::EXIT_SUCCESS);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("json output");
    assert_eq!(value["delta"]["missing_chunks"], serde_json::json!([2]));
    assert_eq!(value["delta"]["changes"][0]["chunk_index"], 1);
    assert_eq!(value["delta"]["changes"][1]["position"], 2);
}

#[test]
fn missing_file_is_a_runtime_failure() {
    let files = fixture(b"hello", b"hello");
    let absent = files.original.with_file_name("absent.txt");
    let (code, stdout, stderr) = run(&[
        "rdetective",
        "diff",
        "--original",
        absent.to_str().expect("utf-8 path"),
        "--updated",
        files.updated.to_str().expect("utf-8 path"),
        "--log-level=error",
    ]);

    assert_eq!(code, cli::EXIT_FAILURE);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("rdetective: error: failed to open original data"));
}

#[test]
fn no_subcommand_is_a_usage_error() {
    let (code, stdout, stderr) = run(&["rdetective"]);

    assert_eq!(code, cli::EXIT_USAGE);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Usage"));
}

#[test]
fn help_goes_to_stdout() {
    let (code, stdout, _) = run(&["rdetective", "diff", "--help"]);

    assert_eq!(code, cli::EXIT_SUCCESS);
    assert!(stdout.contains("--chunk-size"));
    assert!(stdout.contains("RDETECTIVE_CHUNK_SIZE"));
}

#[test]
fn version_subcommand_prints_banner() {
    let (code, stdout, stderr) = run(&["rdetective", "version"]);

    assert_eq!(code, cli::EXIT_SUCCESS);
    assert!(stdout.starts_with(&format!("rdetective {}", env!("CARGO_PKG_VERSION"))));
    assert!(stderr.is_empty());
}
