//! Integration tests for `primepath inspect`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::Command;

/// Path to the compiled `primepath` binary.
fn primepath_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("primepath");
    path
}

/// Path to a shared fixture file.
fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../../tests/fixtures");
    path.push(name);
    path
}

// ---------------------------------------------------------------------------
// inspect: human mode
// ---------------------------------------------------------------------------

#[test]
fn inspect_chain_reports_counts() {
    let out = Command::new(primepath_bin())
        .args(["inspect", fixture("chain.txt").to_str().expect("path")])
        .output()
        .expect("run primepath inspect");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("vertices:        3"), "stdout: {stdout}");
    assert!(stdout.contains("edges:           2"), "stdout: {stdout}");
    assert!(stdout.contains("sources:         1"), "stdout: {stdout}");
    assert!(stdout.contains("sinks:           1"), "stdout: {stdout}");
}

#[test]
fn inspect_self_loop_counted() {
    let out = Command::new(primepath_bin())
        .args(["inspect", fixture("self-loop.txt").to_str().expect("path")])
        .output()
        .expect("run primepath inspect");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("self_loops:      1"), "stdout: {stdout}");
    assert!(stdout.contains("sources:         0"), "stdout: {stdout}");
}

#[test]
fn inspect_parallel_edges_counted() {
    let out = Command::new(primepath_bin())
        .args(["inspect", fixture("parallel.txt").to_str().expect("path")])
        .output()
        .expect("run primepath inspect");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("parallel_edges:  1"), "stdout: {stdout}");
    assert!(stdout.contains("edges:           2"), "stdout: {stdout}");
}

// ---------------------------------------------------------------------------
// inspect: JSON mode
// ---------------------------------------------------------------------------

#[test]
fn inspect_json_contains_every_counter() {
    let out = Command::new(primepath_bin())
        .args([
            "inspect",
            "-f",
            "json",
            fixture("triangle.txt").to_str().expect("path"),
        ])
        .output()
        .expect("run primepath inspect -f json");
    let stdout = String::from_utf8_lossy(&out.stdout);
    let value: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("valid JSON from inspect");
    assert_eq!(value["vertex_count"], 3, "stdout: {stdout}");
    assert_eq!(value["edge_count"], 3, "stdout: {stdout}");
    assert_eq!(value["self_loop_count"], 0, "stdout: {stdout}");
    assert_eq!(value["parallel_edge_count"], 0, "stdout: {stdout}");
    assert_eq!(value["source_count"], 0, "stdout: {stdout}");
    assert_eq!(value["sink_count"], 0, "stdout: {stdout}");
}

// ---------------------------------------------------------------------------
// inspect: error cases
// ---------------------------------------------------------------------------

#[test]
fn inspect_nonexistent_file_exits_2() {
    let out = Command::new(primepath_bin())
        .args(["inspect", "/no/such/file/ever.txt"])
        .output()
        .expect("run primepath inspect nonexistent");
    assert_eq!(
        out.status.code(),
        Some(2),
        "expected exit 2 for nonexistent file"
    );
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("file not found"), "stderr: {stderr}");
}

#[test]
fn inspect_negative_vertex_exits_2() {
    use std::io::Write as _;
    let mut tmp = tempfile::NamedTempFile::new().expect("temp file");
    tmp.write_all(b"2 1\n-1 0\n").expect("write");
    let out = Command::new(primepath_bin())
        .args(["inspect", tmp.path().to_str().expect("path")])
        .output()
        .expect("run primepath inspect negative");
    assert_eq!(
        out.status.code(),
        Some(2),
        "expected exit 2 for a negative vertex id"
    );
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("not an unsigned integer"),
        "stderr: {stderr}"
    );
}
