//! End-to-end tests running the strand binary on fixture files.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Create fixture files for the four-document example
fn create_fixture_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("file1"), "33").unwrap();
    fs::write(dir.path().join("file2"), "AA2222").unwrap();
    fs::write(dir.path().join("file3"), "BBB2222").unwrap();
    fs::write(dir.path().join("file4"), "CCC33333").unwrap();
    dir
}

fn files(dir: &Path, names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(|n| dir.join(n)).collect()
}

/// Run strand with given args, keeping its config inside `data_home`
fn run_strand(args: &[&str], paths: &[PathBuf], data_home: &Path) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_strand"))
        .arg("--quiet")
        .args(args)
        .args(paths)
        .env("XDG_DATA_HOME", data_home)
        .env("HOME", data_home)
        .output()
        .expect("Failed to run strand");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

#[test]
fn test_text_output() {
    let dir = create_fixture_dir();
    let paths = files(dir.path(), &["file1", "file2", "file3", "file4"]);

    let (stdout, stderr, ok) = run_strand(&["--color=never"], &paths, dir.path());

    assert!(ok, "strand failed: {}", stderr);
    assert!(stdout.contains("Longest strand: 2222"), "stdout: {}", stdout);
    assert!(stdout.contains("Length: 4 bytes"));
    assert!(stdout.contains("Shared by 2 of 4 files"));
    assert!(stdout.contains("file2 at offset 2"));
    assert!(stdout.contains("file3 at offset 3"));
}

#[test]
fn test_json_output() {
    let dir = create_fixture_dir();
    let paths = files(dir.path(), &["file1", "file2", "file3", "file4"]);

    let (stdout, stderr, ok) = run_strand(&["--json"], &paths, dir.path());
    assert!(ok, "strand failed: {}", stderr);

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    assert_eq!(json["length"], 4);
    assert_eq!(json["strand_text"], "2222");
    assert_eq!(json["total_documents"], 4);
    assert_eq!(json["documents"][0]["id"], 1);
    assert_eq!(json["documents"][1]["id"], 2);
    assert_eq!(json["occurrences"][0]["offset"], 2);
    assert_eq!(json["occurrences"][1]["offset"], 3);
}

#[test]
fn test_hex_mode() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a"), [0x01u8, 0xde, 0xad, 0xbe, 0xef]).unwrap();
    fs::write(dir.path().join("b"), [0xde, 0xad, 0xbe, 0xef, 0x02]).unwrap();
    let paths = files(dir.path(), &["a", "b"]);

    let (stdout, stderr, ok) = run_strand(&["--hex", "--json"], &paths, dir.path());
    assert!(ok, "strand failed: {}", stderr);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["strand_text"], "deadbeef");
    // Offsets count hex digits
    assert_eq!(json["occurrences"][0]["offset"], 2);
    assert_eq!(json["occurrences"][1]["offset"], 0);
}

#[test]
fn test_directory_input() {
    let dir = create_fixture_dir();
    let home = TempDir::new().unwrap();

    let (stdout, stderr, ok) =
        run_strand(&["--json"], &[dir.path().to_path_buf()], home.path());
    assert!(ok, "strand failed: {}", stderr);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["strand_text"], "2222");
}

#[test]
fn test_no_common_strand() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a"), "aaaa").unwrap();
    fs::write(dir.path().join("b"), "bbbb").unwrap();
    let paths = files(dir.path(), &["a", "b"]);

    let (stdout, _, ok) = run_strand(&["--color=never"], &paths, dir.path());

    assert!(ok);
    assert!(stdout.contains("No common strand found across 2 files"));
}

#[test]
fn test_single_file_is_rejected() {
    let dir = create_fixture_dir();
    let paths = files(dir.path(), &["file1"]);

    let (_, stderr, ok) = run_strand(&[], &paths, dir.path());

    assert!(!ok);
    assert!(stderr.contains("Need at least two files"), "stderr: {}", stderr);
}

#[test]
fn test_skipped_file_warning() {
    let dir = create_fixture_dir();
    let paths = files(dir.path(), &["file1", "file2", "file3", "file4"]);

    let (stdout, stderr, ok) = run_strand(&["--max-file-size", "6"], &paths, dir.path());

    // file3 (7 bytes) and file4 (8 bytes) are left out
    assert!(ok, "strand failed: {}", stderr);
    assert_eq!(stderr.matches("warning: skipping").count(), 2);
    assert!(stdout.contains("No common strand found across 2 files"));
}

#[test]
fn test_config_subcommand() {
    let dir = TempDir::new().unwrap();

    let (stdout, stderr, ok) = run_strand(&["config"], &[], dir.path());

    assert!(ok, "strand config failed: {}", stderr);
    assert!(stdout.contains("config.json"));
    assert!(stdout.contains("\"preview_bytes\": 64"));
}
