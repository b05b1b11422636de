//! End-to-end tests for the `jumpfuzz` binary.
#![cfg(feature = "cli")]

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

const CANDIDATES: &str = "\
src/tui/header.rs
README.md
src/reader.rs
docs/readme.txt
Cargo.toml
";

fn jumpfuzz() -> Command {
    Command::cargo_bin("jumpfuzz").unwrap()
}

#[test]
fn ranks_stdin_best_first() {
    jumpfuzz()
        .args(["--query", "reader"])
        .write_stdin(CANDIDATES)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("src/reader.rs\n"))
        .stdout(predicate::str::contains("Cargo.toml").not());
}

#[test]
fn exits_one_when_nothing_matches() {
    jumpfuzz()
        .args(["-q", "zzz"])
        .write_stdin(CANDIDATES)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn case_sensitive_flag() {
    jumpfuzz()
        .args(["-q", "readme", "--case-sensitive"])
        .write_stdin(CANDIDATES)
        .assert()
        .success()
        .stdout("docs/readme.txt\n");
}

#[test]
fn prints_score_and_positions() {
    jumpfuzz()
        .args(["-q", "fm", "--print-score", "--print-positions"])
        .write_stdin("fuzzy_match.ts\n")
        .assert()
        .success()
        .stdout("53\tfuzzy_match.ts\t0,6\n");
}

#[test]
fn limit_and_empty_query() {
    jumpfuzz()
        .args(["-n", "2"])
        .write_stdin(CANDIDATES)
        .assert()
        .success()
        .stdout("src/tui/header.rs\nREADME.md\n");
}

#[test]
fn reads_candidates_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CANDIDATES.as_bytes()).unwrap();
    jumpfuzz()
        .arg("--input")
        .arg(file.path())
        .args(["-q", "cargo"])
        .assert()
        .success()
        .stdout("Cargo.toml\n");
}

#[test]
fn invalid_utf8_lines_do_not_abort() {
    jumpfuzz()
        .args(["-q", "rs"])
        .write_stdin(b"good/path.rs\n\xff\xfebad.rs\nother.rs\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("good/path.rs\n"))
        .stdout(predicate::str::contains("other.rs\n"))
        .stdout(predicate::str::contains("\u{fffd}\u{fffd}bad.rs\n"));
}

#[test]
fn missing_input_file_is_an_error() {
    jumpfuzz()
        .args(["--input", "/nonexistent/candidates.txt", "-q", "a"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to open"));
}
