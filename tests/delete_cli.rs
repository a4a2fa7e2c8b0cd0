use std::fs;
use std::process::Command;

use assert_cmd::cargo;
use assert_fs::prelude::*;

fn delete_cmd() -> Command {
    Command::new(cargo::cargo_bin!("fskit-delete"))
}

#[test]
fn deletes_files_and_reports_each_path() {
    let td = assert_fs::TempDir::new().unwrap();
    let one = td.child("one.txt");
    let two = td.child("two.txt");
    one.write_str("1").unwrap();
    two.write_str("2").unwrap();

    let out = delete_cmd()
        .arg(one.path())
        .arg(two.path())
        .output()
        .expect("spawn binary");

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.matches("Successfully deleted").count(), 2, "stdout: {stdout}");
    assert!(!one.path().exists());
    assert!(!two.path().exists());
}

#[test]
fn force_removes_populated_directory() {
    let td = assert_fs::TempDir::new().unwrap();
    let dir = td.child("dist");
    dir.create_dir_all().unwrap();
    dir.child("bundle.js").write_str("code").unwrap();

    let out = delete_cmd().arg(dir.path()).arg("-f").output().expect("spawn binary");

    assert!(out.status.success());
    assert!(!dir.path().exists());
}

#[test]
fn nonexistent_path_is_not_an_error() {
    let td = assert_fs::TempDir::new().unwrap();
    let missing = td.child("never-existed");

    for flags in [&[][..], &["-f"][..], &["-s"][..], &["-f", "-s"][..]] {
        let out = delete_cmd()
            .arg(missing.path())
            .args(flags)
            .output()
            .expect("spawn binary");
        assert!(out.status.success(), "flags {flags:?}");
        assert!(String::from_utf8_lossy(&out.stdout).contains("Already absent:"));
    }
}

#[test]
fn strict_mode_halts_batch_on_first_failure() {
    let td = assert_fs::TempDir::new().unwrap();
    let first = td.child("first.txt");
    let blocked = td.child("blocked");
    let third = td.child("third.txt");
    first.write_str("1").unwrap();
    blocked.create_dir_all().unwrap();
    blocked.child("inner.txt").write_str("x").unwrap();
    third.write_str("3").unwrap();

    // Without --force the populated directory fails; --strict must stop there.
    let out = delete_cmd()
        .arg(first.path())
        .arg(blocked.path())
        .arg(third.path())
        .arg("--strict")
        .output()
        .expect("spawn binary");

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Failed to delete:"), "stderr: {stderr}");
    assert!(!first.path().exists());
    assert!(blocked.path().exists());
    assert!(third.path().exists(), "strict batch must not reach the third path");
}

#[test]
fn default_mode_continues_past_failure() {
    let td = assert_fs::TempDir::new().unwrap();
    let first = td.child("first.txt");
    let blocked = td.child("blocked");
    let third = td.child("third.txt");
    first.write_str("1").unwrap();
    blocked.create_dir_all().unwrap();
    blocked.child("inner.txt").write_str("x").unwrap();
    third.write_str("3").unwrap();

    let out = delete_cmd()
        .arg(first.path())
        .arg(blocked.path())
        .arg(third.path())
        .output()
        .expect("spawn binary");

    assert!(out.status.success(), "best-effort batch still exits 0");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Skipping"), "swallowed failure must be announced: {stderr}");
    assert!(!first.path().exists());
    assert!(blocked.path().exists(), "failed path is skipped, not forced");
    assert!(!third.path().exists());
}

#[test]
fn missing_paths_fail_with_help() {
    let out = delete_cmd().output().expect("spawn binary");

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Missing required argument(s)"));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Usage: fskit-delete"));
}

#[test]
fn unknown_option_fails_with_help() {
    let out = delete_cmd()
        .args(["some-path", "--verbose"])
        .output()
        .expect("spawn binary");

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Unknown option: --verbose"));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Usage: fskit-delete"));
}

#[test]
fn deletes_relative_paths_from_cwd() {
    let td = assert_fs::TempDir::new().unwrap();
    fs::write(td.path().join("junk.tmp"), "x").unwrap();

    let out = delete_cmd()
        .current_dir(td.path())
        .arg("junk.tmp")
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    assert!(!td.path().join("junk.tmp").exists());
}
