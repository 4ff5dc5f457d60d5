// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Integration tests that invoke the day01 binary as a subprocess.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

#[allow(deprecated)]
fn day01() -> Command {
    Command::cargo_bin("day01").unwrap()
}

#[test]
fn reads_masses_from_stdin() {
    day01()
        .write_stdin("12\n14\n1969\n100756\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("part 1: 34241").and(predicate::str::contains("part 2: 51316")),
        );
}

#[test]
fn dash_means_stdin() {
    day01()
        .arg("-")
        .write_stdin("14\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("part 2: 2"));
}

#[test]
fn reads_masses_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "12").unwrap();
    file.flush().unwrap();
    day01()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("part 1: 2"));
}

#[test]
fn rejects_a_non_numeric_mass() {
    day01()
        .write_stdin("twelve\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid module mass"));
}

#[test]
fn missing_file_is_an_error() {
    day01()
        .arg("no-such-input.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}
