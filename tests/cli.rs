// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use std::fs;
use std::path::Path;

const RESULTS: &str = "\
Manual Allocator || 1000 OPS || TOTAL: 1.2ms || AVERAGE: 1.2µs
Manual Allocator || 1000 OPS || TOTAL: 1.4ms || AVERAGE: 1.4µs
Standard Allocator || 10000 OPS || TOTAL: 15ms || AVERAGE: 1.5µs

Standard Allocator || 100 OPS
Standard Allocator || 100000 OPS || TOTAL: 160ms || AVERAGE: 1.6µs
";

fn benchgraph(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("benchgraph").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn entries(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

#[test]
fn no_arguments_prints_usage() {
    let dir = TempDir::new().unwrap();
    benchgraph(&dir)
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Usage: benchgraph"));
    assert_eq!(entries(dir.path()), 0);
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    benchgraph(&dir)
        .arg("missing.txt")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error: file 'missing.txt' not found."));
    assert_eq!(entries(dir.path()), 0);
}

#[test]
fn directory_is_not_a_file() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("results")).unwrap();
    benchgraph(&dir).arg("results").assert().code(1);
    assert_eq!(entries(dir.path()), 1);
}

#[test]
fn help_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    benchgraph(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn renders_two_charts() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("results.txt"), RESULTS).unwrap();

    benchgraph(&dir)
        .arg("results.txt")
        .assert()
        .success()
        .stderr(predicate::str::contains("Records: 4 Skipped: 1 Buckets: 3"));

    for name in &["results.txt_total.png", "results.txt_average.png"] {
        let bytes = fs::read(dir.path().join(name)).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"), "{} is not a PNG", name);
    }
    assert_eq!(entries(dir.path()), 3);
}

#[test]
fn bad_operation_count_is_fatal() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("results.txt"),
        "a || 10 OPS || TOTAL: 1s || AVERAGE: 1s\na || ten OPS || TOTAL: 1s || AVERAGE: 1s\n",
    )
    .unwrap();

    benchgraph(&dir)
        .arg("results.txt")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("line 2: invalid operation count \"ten\""));
    assert_eq!(entries(dir.path()), 1);
}

#[test]
fn missing_separator_is_fatal() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("results.txt"), "a || 10 OPS || 1s || AVERAGE: 1s\n").unwrap();

    benchgraph(&dir)
        .arg("results.txt")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("column 3 has no ':' separator"));
}

#[test]
fn config_file_sets_size() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("results.txt"), RESULTS).unwrap();
    fs::write(
        dir.path().join("benchgraph.toml"),
        "[general]\nlogging = \"warn\"\n\n[chart]\nwidth = 320\nheight = 200\n",
    )
    .unwrap();

    benchgraph(&dir)
        .args(&["--config", "benchgraph.toml", "results.txt"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert!(dir.path().join("results.txt_total.png").is_file());
    assert!(dir.path().join("results.txt_average.png").is_file());
}
