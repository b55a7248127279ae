//! Integration tests for CLI argument handling and plain-output commands.

use predicates::prelude::*;

use super::helpers::termsaver;

#[test]
fn help_describes_the_tool() {
    termsaver()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("screensaver"))
        .stdout(predicate::str::contains("scripts"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_prints_package_version() {
    termsaver()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn scripts_lists_builtin_terminals() {
    termsaver()
        .arg("scripts")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyst@soc-lab:~$"))
        .stdout(predicate::str::contains("tcpdump -i eth0 -n port 445"))
        .stdout(predicate::str::contains("analyst@honeypot:~$"));
}

#[test]
fn config_path_prints_config_location() {
    termsaver()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("termsaver"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn completions_generates_bash_script() {
    termsaver()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("termsaver"));
}

#[test]
fn play_refuses_without_a_tty() {
    // Test harness pipes stdout, so the screensaver must refuse to start
    // instead of writing escape sequences into the pipe.
    termsaver()
        .arg("play")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TTY"));
}

#[test]
fn unknown_subcommand_fails_with_usage() {
    termsaver()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage").or(predicate::str::contains("usage")));
}
