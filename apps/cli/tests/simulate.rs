use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn command_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp input file");
    file.write_all(contents.as_bytes())
        .expect("write temp input file");
    file
}

#[test]
fn simulates_a_six_month_portfolio_with_sip() {
    let file = command_file(
        "ALLOCATE 6000 3000 1000\n\
         SIP 2000 1000 500\n\
         CHANGE 4.00% 10.00% 2.00% JANUARY\n\
         CHANGE -10.00% 40.00% 0.00% FEBRUARY\n\
         CHANGE 12.50% 12.50% 12.50% MARCH\n\
         CHANGE 8.00% -3.00% 7.00% APRIL\n\
         CHANGE 13.00% 21.00% 10.50% MAY\n\
         CHANGE 10.00% 8.00% -5.00% JUNE\n\
         BALANCE MARCH\n\
         REBALANCE\n",
    );

    Command::cargo_bin("foliosim")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::eq("10593 7897 2272\n23619 11809 3936\n\n"));
}

#[test]
fn reports_sentinels_below_the_rebalance_limit() {
    let file = command_file(
        "ALLOCATE 8000 6200 2800\n\
         SIP 3000 2000 1000\n\
         CHANGE 11.00% 9.00% 4.00% JANUARY\n\
         CHANGE -6.00% 21.00% -3.00% FEBRUARY\n\
         CHANGE 12.50% 18.00% 12.50% MARCH\n\
         BALANCE MARCH\n\
         BALANCE APRIL\n\
         REBALANCE\n",
    );

    Command::cargo_bin("foliosim")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::eq(
            "15937 13684 5393\nNO_BALANCE\nCANNOT_RE_BALANCE\n\n",
        ));
}

#[test]
fn rebalance_limit_flag_lowers_the_threshold() {
    let file = command_file(
        "ALLOCATE 6000 3000 1000\n\
         CHANGE 10.00% 10.00% 10.00% JANUARY\n\
         REBALANCE\n",
    );

    Command::cargo_bin("foliosim")
        .unwrap()
        .arg("--rebalance-limit")
        .arg("1")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::eq("6600 3300 1100\n\n"));
}

#[test]
fn processes_multiple_files_with_a_blank_line_between_outputs() {
    let first = command_file(
        "ALLOCATE 6000 3000 1000\n\
         CHANGE 10.00% 10.00% 10.00% JANUARY\n\
         BALANCE JANUARY\n",
    );
    let second = command_file(
        "ALLOCATE 100 100 100\n\
         CHANGE 0.00% 0.00% 0.00% JUNE\n\
         BALANCE JUNE\n",
    );

    Command::cargo_bin("foliosim")
        .unwrap()
        .arg(first.path())
        .arg(second.path())
        .assert()
        .success()
        .stdout(predicate::eq("6600 3300 1100\n\n100 100 100\n\n"));
}

#[test]
fn fails_on_an_unknown_command() {
    let file = command_file("ALLOCATE 6000 3000 1000\nWITHDRAW 100\n");

    Command::cargo_bin("foliosim")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized command"));
}

#[test]
fn fails_when_allocate_is_missing() {
    let file = command_file("CHANGE 10.00% 10.00% 10.00% JANUARY\nBALANCE JANUARY\n");

    Command::cargo_bin("foliosim")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Required operation missing"));
}
