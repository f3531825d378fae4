//! 不需要真正 rsync 的 `capsync` 執行檔端對端測試

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn capsync() -> Command {
    Command::cargo_bin("capsync").unwrap()
}

#[test]
fn test_help_lists_flags() {
    capsync()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--capacity"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--quiet"));
}

#[test]
fn test_no_arguments_prints_usage() {
    capsync().assert().failure().code(2);
}

#[test]
fn test_same_location_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().to_str().unwrap();
    capsync()
        .args(["--src", path, "--dst", path, "--capacity", "1G", "--no-progress"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("同一位置"));
}

#[test]
fn test_missing_source_is_rejected() {
    let dst = tempdir().unwrap();
    let missing = dst.path().join("missing");
    capsync()
        .args([
            "--src",
            missing.to_str().unwrap(),
            "--dst",
            dst.path().to_str().unwrap(),
            "--capacity",
            "10",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("來源目錄無效"));
}

#[test]
fn test_invalid_capacity_is_rejected() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();
    capsync()
        .args([
            "--src",
            src.path().to_str().unwrap(),
            "--dst",
            dst.path().to_str().unwrap(),
            "--capacity",
            "5X",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("無效的容量"));
}

#[test]
fn test_quiet_failure_reports_only_exit_status() {
    let dir = tempdir().unwrap();
    let path = dir.path().to_str().unwrap();
    capsync()
        .args(["--src", path, "--dst", path, "--capacity", "1G", "--quiet"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_missing_transfer_program_fails_after_scan() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();
    fs::write(src.path().join("keep.txt"), b"hello").unwrap();
    capsync()
        .args([
            "--src",
            src.path().to_str().unwrap(),
            "--dst",
            dst.path().to_str().unwrap(),
            "--capacity",
            "1M",
            "--no-progress",
            "--rsync-path",
            "capsync-no-such-transfer-program",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("找不到同步程式"))
        .stderr(predicate::str::contains("來源共 1 個檔案"));
    assert_eq!(fs::read_dir(dst.path()).unwrap().count(), 0);
}
