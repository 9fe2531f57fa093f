use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn usersys() -> Command {
    Command::cargo_bin("usersys").unwrap()
}

#[test]
fn writes_user_plus_sys_per_input() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(
        tmp.path().join("time_peers_4.txt"),
        "real\t0m1.0s\nuser\t0m2.0s\nsys\t0m3.0s\n\nreal\t0m1.0s\nuser\t0m0.5s\nsys\t0m0.5s\n",
    )
    .unwrap();

    usersys()
        .current_dir(tmp.path())
        .arg("time_peers_4.txt")
        .assert()
        .success()
        .stdout("time_peers_4.txt\n");

    let output = fs::read_to_string(tmp.path().join("UserPlusSysTimes/UserSys_4.txt")).unwrap();
    assert_eq!(output, "5.0, 1.0");
}

#[test]
fn echoes_unrecognized_lines() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(
        tmp.path().join("time_1.txt"),
        "real 0m1.0s\nfoo 0m1.0s\nuser 0m2.0s\nsys 0m3.0s\n",
    )
    .unwrap();

    usersys()
        .current_dir(tmp.path())
        .args(["--output-dir", "out", "time_1.txt"])
        .assert()
        .success()
        .stdout("time_1.txt\nfoo 0m1.0s\n");

    let output = fs::read_to_string(tmp.path().join("out/UserSys_1.txt")).unwrap();
    assert_eq!(output, "5.0");
}

#[test]
fn malformed_input_fails_the_run() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("time_1.txt"), "real 0m1.0s\nuser 2.0\n").unwrap();
    fs::write(tmp.path().join("time_2.txt"), "real 0m1.0s\nuser 0m2.0s\nsys 0m3.0s\n").unwrap();

    usersys()
        .current_dir(tmp.path())
        .args(["time_1.txt", "time_2.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to parse time_1.txt"))
        .stderr(predicate::str::contains("line 2"));

    assert!(tmp.path().join("UserPlusSysTimes").is_dir());
    assert!(!tmp.path().join("UserPlusSysTimes/UserSys_2.txt").exists());
}

#[test]
fn missing_arguments_print_usage() {
    usersys()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
