//! End-to-end tests for the report output and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::{empty_workdir, workdir_with_export};

fn walkstat() -> Command {
    Command::cargo_bin("walkstat").expect("binary should build")
}

#[test]
fn reports_indoor_walks_in_document_order() {
    let dir = workdir_with_export("export.xml");

    walkstat()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(
            "2023-01-05 10:00:00,2023-01-05 10:30:00,250\n\
             2023-01-06 09:00:00,2023-01-06 09:20:00,130\n",
        );
}

#[test]
fn output_is_byte_identical_across_runs() {
    let dir = workdir_with_export("export.xml");

    let first = walkstat()
        .current_dir(dir.path())
        .output()
        .expect("first run");
    let second = walkstat()
        .current_dir(dir.path())
        .output()
        .expect("second run");

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn no_matching_workouts_produces_empty_output() {
    let dir = workdir_with_export("no_matches.xml");

    walkstat()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("");
}

#[test]
fn missing_export_file_fails_with_diagnostic() {
    let dir = empty_workdir();

    walkstat()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("export.xml"));
}

#[test]
fn malformed_export_fails_after_earlier_output() {
    let dir = workdir_with_export("malformed.xml");

    // Lines printed before the parse failure stand; the run still fails.
    walkstat()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout("2023-01-05 10:00:00,2023-01-05 10:30:00,250\n")
        .stderr(predicate::str::contains("malformed XML"));
}

#[test]
fn statistic_missing_sum_is_skipped_with_warning() {
    let dir = workdir_with_export("missing_sum.xml");

    walkstat()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("2023-01-06 09:00:00,2023-01-06 09:20:00,130\n")
        .stderr(predicate::str::contains("missing sum or date"));
}

#[test]
fn rejects_unexpected_arguments() {
    let dir = workdir_with_export("export.xml");

    walkstat()
        .current_dir(dir.path())
        .arg("--input")
        .assert()
        .failure();
}
