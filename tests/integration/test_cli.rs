//! Integration tests for the treewalk binary

use crate::fixtures::{create_files, count_entries, write_file_sync};
use std::process::Command;
use tempfile::TempDir;

fn treewalk() -> Command {
    Command::new(env!("CARGO_BIN_EXE_treewalk"))
}

#[test]
fn test_help() {
    let output = treewalk().arg("--help").output().expect("run treewalk");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("USAGE"));
    assert!(stdout.contains("--ext"));
}

#[test]
fn test_lists_by_default() {
    let output = treewalk()
        .args(["tests/testdata", "--ext", ".log", "--quiet"])
        .output()
        .expect("run treewalk");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "tests/testdata/dir.log\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_delete_without_list_prints_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_files(root, ".log", 3).unwrap();
    create_files(root, ".gz", 2).unwrap();

    let output = treewalk()
        .arg("--root")
        .arg(root)
        .args(["--ext", ".log", "--del", "--quiet"])
        .output()
        .expect("run treewalk");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(count_entries(root), 2);
}

#[test]
fn test_log_file_records_deletions() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("tree");
    write_file_sync(root.join("old.log"), b"stale data").unwrap();
    let log_path = temp_dir.path().join("deleted.log");
    let report_path = temp_dir.path().join("report.json");

    let output = treewalk()
        .arg(&root)
        .args(["--ext", ".log", "--del", "--quiet", "--log"])
        .arg(&log_path)
        .arg("--report")
        .arg(&report_path)
        .env_remove("RUST_LOG")
        .output()
        .expect("run treewalk");

    assert!(output.status.success());
    assert!(!root.join("old.log").exists());

    let log = std::fs::read_to_string(&log_path).expect("log file written");
    assert!(log.contains("old.log"), "log was: {log}");

    let report = treewalk::io::report::read_report(&report_path).expect("report written");
    assert_eq!(report.deleted, 1);
}

#[test]
fn test_bad_arguments_exit_2() {
    let output = treewalk()
        .args(["--size", "ten"])
        .output()
        .expect("run treewalk");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--size"));
}

#[test]
fn test_missing_root_exits_1() {
    let output = treewalk()
        .args(["/definitely/does/not/exist/xyz123", "--quiet"])
        .output()
        .expect("run treewalk");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_help_after_other_arguments() {
    let output = treewalk()
        .args(["/tmp", "--ext", ".log", "-h"])
        .output()
        .expect("run treewalk");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("USAGE"));
}

#[test]
fn test_current_dir_root_prints_bare_paths() {
    let temp_dir = TempDir::new().unwrap();
    write_file_sync(temp_dir.path().join("testdata/a.log"), b"log").unwrap();

    for root in [".", "./", "./testdata", "testdata/"] {
        let output = treewalk()
            .current_dir(temp_dir.path())
            .args([root, "--ext", ".log", "--quiet"])
            .output()
            .expect("run treewalk");

        assert!(output.status.success(), "root {root}");
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            "testdata/a.log\n",
            "root {root}"
        );
    }

    let output = treewalk()
        .current_dir(temp_dir.path())
        .arg("--quiet")
        .output()
        .expect("run treewalk");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "testdata/a.log\n");
}

#[cfg(target_os = "linux")]
#[test]
fn test_full_stdout_stops_before_delete() {
    use std::process::Stdio;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_files(root, ".log", 3).unwrap();

    let full = std::fs::OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .expect("open /dev/full");

    let output = treewalk()
        .arg(root)
        .args(["--ext", ".log", "--list", "--del", "--quiet"])
        .stdout(Stdio::from(full))
        .output()
        .expect("run treewalk");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Output error"));
    assert_eq!(count_entries(root), 3, "no file may be deleted without being listed");
}
