//! End-to-end CLI integration tests, driving the command loop over stdin.

use assert_cmd::Command;
use predicates::prelude::*;

fn memsim() -> Command {
    Command::cargo_bin("memsim").expect("binary not found")
}

#[test]
fn help_flag() {
    memsim()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("memory pool"));
}

#[test]
fn version_flag() {
    memsim()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("memsim"));
}

#[test]
fn alloc_reports_address() {
    memsim()
        .write_stdin("alloc 100\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "allocated 100 units at address 0",
        ));
}

#[test]
fn quiet_alloc_prints_bare_address() {
    memsim()
        .arg("--quiet")
        .write_stdin("alloc 100\nalloc 50\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("0\n101\n"));
}

#[test]
fn map_shows_split_blocks() {
    memsim()
        .write_stdin("alloc 100\nmap\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("allocated"))
        .stdout(predicate::str::contains("101"));
}

#[test]
fn stats_json_output() {
    memsim()
        .arg("--json")
        .write_stdin("alloc 100\nstats\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"capacity\": 640"))
        .stdout(predicate::str::contains("\"used\": 100"));
}

#[test]
fn failed_free_continues_loop() {
    memsim()
        .write_stdin("free 999\nalloc 10\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("no block starts at address 999"))
        .stdout(predicate::str::contains("allocated 10 units"));
}

#[test]
fn strict_mode_exits_on_bad_address() {
    memsim()
        .arg("--strict")
        .write_stdin("free 999\nalloc 10\nquit\n")
        .assert()
        .code(4)
        .stdout(predicate::str::contains("allocated").not());
}

#[test]
fn strict_mode_exits_on_oom() {
    memsim()
        .args(["--strict", "--quiet"])
        .write_stdin("alloc 1000\nquit\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("out of memory"));
}

#[test]
fn custom_capacity_and_overhead() {
    memsim()
        .args(["--capacity", "14", "--overhead", "1", "--quiet"])
        .write_stdin("alloc 10\nmap\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("11 2 free"));
}

#[test]
fn invalid_pool_geometry_fails_at_startup() {
    memsim()
        .args(["--capacity", "1", "--overhead", "1"])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to initialize pool"));
}

#[test]
fn eof_terminates_cleanly() {
    memsim().arg("--quiet").write_stdin("alloc 10\n").assert().success();
}
