// siftsh/tests/cli_integration_tests.rs
//! Integration tests for the siftsh binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn siftsh_cmd() -> Command {
    Command::cargo_bin("siftsh").expect("siftsh binary should build")
}

#[test]
fn scan_safe_input_from_stdin_masks_sensitive_values() {
    siftsh_cmd()
        .args(["-q", "scan"])
        .write_stdin("Email john@example.com, site https://example.com, tag #sale, price $20")
        .assert()
        .success()
        .stdout(predicate::str::contains("Safe: true"))
        .stdout(predicate::str::contains("j***@example.com"))
        .stdout(predicate::str::contains("https://example.com"))
        .stdout(predicate::str::contains("#sale"))
        .stdout(predicate::str::contains("END OF REPORT"))
        .stdout(predicate::str::contains("john@example.com").not());
}

#[test]
fn scan_unsafe_input_halts_and_refuses_extracted_data() {
    siftsh_cmd()
        .args(["-q", "scan"])
        .write_stdin("Contact john@example.com #offer <script>alert(1)</script>")
        .assert()
        .success()
        .stdout(predicate::str::contains("Safe: false"))
        .stdout(predicate::str::contains("script_tag"))
        .stdout(predicate::str::contains("Processing halted"))
        .stdout(predicate::str::contains("EXTRACTED DATA").not())
        .stdout(predicate::str::contains("john@example.com").not());
}

#[test]
fn scan_reads_input_file_and_writes_masked_json_report() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("sample_input.txt");
    let report_path = dir.path().join("extraction_report.json");
    fs::write(
        &input_path,
        "Pay 4111111111111111 or mail billing@example.com",
    )
    .unwrap();

    siftsh_cmd()
        .args(["-q", "scan", "-i"])
        .arg(&input_path)
        .arg("--json")
        .arg(&report_path)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["security_status"]["is_safe"], true);
    assert!(json["generated_at"].is_string());

    // The persisted report is always masked.
    let cards = json["extracted_data"]["credit_card"].as_array().unwrap();
    assert_eq!(cards[0], "****-****-****-1111");
    let emails = json["extracted_data"]["email"].as_array().unwrap();
    assert_eq!(emails[0], "b***@example.com");
}

#[test]
fn scan_show_raw_displays_unmasked_values() {
    siftsh_cmd()
        .args(["-q", "scan", "--show-raw"])
        .write_stdin("mail john@example.com")
        .assert()
        .success()
        .stdout(predicate::str::contains("john@example.com"));
}

#[test]
fn scan_missing_input_file_fails_with_context() {
    siftsh_cmd()
        .args(["-q", "scan", "-i", "definitely_not_here.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn mask_command_masks_credit_card() {
    siftsh_cmd()
        .args(["mask", "-c", "credit_card", "4111-1111-1111-1111"])
        .assert()
        .success()
        .stdout(predicate::str::diff("****-****-****-1111\n"));
}

#[test]
fn mask_command_masks_email() {
    siftsh_cmd()
        .args(["mask", "-c", "email", "john@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::diff("j***@example.com\n"));
}

#[test]
fn unsafe_json_report_has_halt_message_and_no_data() {
    let dir = tempdir().unwrap();
    let report_path = dir.path().join("report.json");

    siftsh_cmd()
        .args(["-q", "scan", "--json"])
        .arg(&report_path)
        .write_stdin("try eval(payload) now")
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["security_status"]["is_safe"], false);
    assert_eq!(
        json["message"],
        "Input contains potentially dangerous content. Extraction aborted."
    );
    assert!(json["extracted_data"].as_object().unwrap().is_empty());
}
