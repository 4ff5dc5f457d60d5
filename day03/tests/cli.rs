// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Integration tests that invoke the day03 binary as a subprocess.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[allow(deprecated)]
fn day03() -> Command {
    Command::cargo_bin("day03").unwrap()
}

fn input_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn reports_both_parts() {
    let file = input_file("R8,U5,L5,D3\nU7,R6,D4,L4\n");
    day03()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("part 1: 6").and(predicate::str::contains("part 2: 30")));
}

#[test]
fn larger_example() {
    let file = input_file(
        "R75,D30,R83,U83,L12,D49,R71,U7,L72\nU62,R66,U55,R34,D71,R55,D58,R83\n",
    );
    day03()
        .arg(file.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("part 1: 159").and(predicate::str::contains("part 2: 610")),
        );
}

#[test]
fn malformed_path_is_reported() {
    let file = input_file("R8,U5\nU7,X6\n");
    day03()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn one_wire_is_not_enough() {
    let file = input_file("R8,U5\n");
    day03()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly two wire paths"));
}

#[test]
fn wires_that_never_cross_are_an_error() {
    let file = input_file("R5\nL5\n");
    day03()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("never cross"));
}

#[test]
fn missing_file_is_an_error() {
    day03()
        .arg("no-such-wires.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
