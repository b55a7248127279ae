//! Integration tests for script file loading through the library API.

use std::io::Write;

use tempfile::NamedTempFile;

use termsaver::script::{load_script_file, Anchor};
use termsaver::ScriptError;

fn script_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn full_script_file_round_trip() {
    let file = script_file(
        r#"
        [[terminal]]
        title = "ops@edge:~$"
        position = { anchor = "top-right", x = 6, y = 12 }

        [[terminal.command]]
        input = "journalctl -f -u nginx"
        output = ["[*] tailing unit nginx.service"]
        delay_ms = 1500

        [[terminal.command]]
        input = "systemctl restart nginx"
        output = ["[+] restarted"]
        clear = true

        [[terminal]]
        title = "dev@build:~$"

        [[terminal.command]]
        input = "cargo build --release"
        "#,
    );

    let specs = load_script_file(file.path()).unwrap();
    assert_eq!(specs.len(), 2);

    assert_eq!(specs[0].title, "ops@edge:~$");
    assert_eq!(specs[0].position.anchor, Anchor::TopRight);
    assert_eq!(specs[0].script.len(), 2);
    assert!(specs[0].script.commands[1].clear);

    // Second terminal uses defaults for position and command fields
    assert_eq!(specs[1].id, 2);
    assert_eq!(specs[1].position.anchor, Anchor::TopLeft);
    assert!(!specs[1].script.commands[0].clear);
}

#[test]
fn empty_file_reports_no_terminals() {
    let file = script_file("");
    assert!(matches!(
        load_script_file(file.path()),
        Err(ScriptError::NoTerminals)
    ));
}

#[test]
fn parse_errors_name_the_problem() {
    let file = script_file("[[terminal]]\ntitle = 42\n");
    let err = load_script_file(file.path()).unwrap_err();
    assert!(matches!(err, ScriptError::ParseError(_)));
    // The message should point at the offending field
    assert!(err.to_string().to_lowercase().contains("invalid"));
}
