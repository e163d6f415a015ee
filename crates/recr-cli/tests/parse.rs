//! End-to-end tests for the parse command.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const RECEIPT_TEXT: &str = "FARM SUPPLY CO\n\
09/15/2024\n\
FERTILIZER BAG      2   25.99   51.98\n\
GARDEN TOOL SET     1   31.34   31.34\n\
SUBTOTAL 83.32\n\
TAX 6.67\n\
TOTAL 89.99\n";

fn recr() -> Command {
    Command::cargo_bin("recr").unwrap()
}

#[test]
fn test_parse_outputs_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("receipt.txt");
    fs::write(&input, RECEIPT_TEXT).unwrap();

    recr()
        .arg("parse")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("FARM SUPPLY CO"))
        .stdout(predicate::str::contains("2024-09-15"))
        .stdout(predicate::str::contains("89.99"))
        .stdout(predicate::str::contains("\"confidence\": \"high\""));
}

#[test]
fn test_parse_text_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("receipt.txt");
    fs::write(&input, RECEIPT_TEXT).unwrap();

    recr()
        .arg("parse")
        .arg(&input)
        .args(["--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vendor: FARM SUPPLY CO"))
        .stdout(predicate::str::contains("Total:    89.99"))
        .stdout(predicate::str::contains("Confidence: high"));
}

#[test]
fn test_parse_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("receipt.txt");
    let output = dir.path().join("receipt.json");
    fs::write(&input, RECEIPT_TEXT).unwrap();

    recr()
        .arg("parse")
        .arg(&input)
        .args(["--output", output.to_str().unwrap()])
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("FARM SUPPLY CO"));
}

#[test]
fn test_parse_missing_input_fails() {
    recr()
        .arg("parse")
        .arg("no-such-file.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
