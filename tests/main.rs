mod adapter;

use assert_cmd::Command;
use predicates::prelude::*;
use producthunt_posts::PKG_VERSION;

#[test]
fn its_executable() {
    let mut cmd = Command::cargo_bin("producthunt-posts").unwrap();
    let result = cmd.arg("--help").assert().success();
    result.stdout(predicate::str::contains("--connection"));
}

#[test]
fn it_prints_its_version() {
    let mut cmd = Command::cargo_bin("producthunt-posts").unwrap();
    let result = cmd.arg("--version").assert().success();
    result.stdout(predicate::str::contains(PKG_VERSION));
}

#[test]
fn it_explains_error_codes() {
    let mut cmd = Command::cargo_bin("producthunt-posts").unwrap();
    let result = cmd.args(["--explain", "E002"]).assert().success();
    result.stdout(predicate::str::contains("comma separated string"));
}
