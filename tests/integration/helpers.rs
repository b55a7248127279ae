//! Shared helpers for integration tests.

use assert_cmd::Command;

/// A command invoking the termsaver binary under test.
pub fn termsaver() -> Command {
    Command::cargo_bin("termsaver").expect("binary should build")
}
