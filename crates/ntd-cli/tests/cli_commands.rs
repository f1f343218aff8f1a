//! End-to-end tests for the `ntd` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CLASSIC: [&str; 3] = ["2,2,4,4,9,9", "1,1,6,6,8,8", "3,3,5,5,7,7"];

const ZERO_KEY: &str = "0000000000000000000000000000000000000000000000000000000000000000";
const HMAC_OF_0: &str = "9979E4C3EE19965F9ECC6DCA6B3954B10C18C1BFA105C512CC3AE58BE85DB71C";

fn ntd() -> Command {
    Command::cargo_bin("ntd").unwrap()
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_requires_three_dice() {
    ntd()
        .args(["play", "1,2,3,4,5,6", "1,2,3,4,5,6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 3 dice"));
}

#[test]
fn play_requires_six_faces() {
    ntd()
        .args(["play", "1,2,3,4,5,6", "1,2,3,4,5", "1,2,3,4,5,6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly 6"));
}

#[test]
fn play_rejects_non_integer_faces() {
    ntd()
        .args(["play", "1,2,3,4,5,a", "1,2,3,4,5,6", "1,2,3,4,5,6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid face value 'a'"));
}

#[test]
fn play_accepts_negative_faces() {
    ntd()
        .args(["play", "-1,2,3,4,5,6", "1,2,3,4,5,6", "1,2,3,4,5,6"])
        .write_stdin("x\n")
        .assert()
        .success();
}

#[test]
fn play_shows_commitment_before_asking() {
    ntd()
        .arg("play")
        .args(CLASSIC)
        .write_stdin("X\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Let's determine who makes the first move.")
                .and(predicate::str::is_match(r"range 0\.\.1 \(HMAC=[0-9A-F]{64}\)").unwrap())
                .and(predicate::str::contains("KEY=").not()),
        );
}

#[test]
fn play_help_shows_probability_table() {
    ntd()
        .arg("play")
        .args(CLASSIC)
        .write_stdin("?\nx\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Probability of the win for the user")
                .and(predicate::str::contains("0.5556"))
                .and(predicate::str::contains("- (0.3333)")),
        );
}

#[test]
fn play_reprompts_on_invalid_input() {
    ntd()
        .arg("play")
        .args(CLASSIC)
        .write_stdin("7\nX\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input"));
}

#[test]
fn play_ends_quietly_at_end_of_input() {
    ntd().arg("play").args(CLASSIC).write_stdin("").assert().success();
}

#[test]
fn play_full_game() {
    // Works whoever moves first: a refused die choice falls through to the next line.
    ntd()
        .arg("play")
        .args(CLASSIC)
        .write_stdin("0\n0\n1\n0\n0\n0\n")
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(r"My selection: [01] \(KEY=[0-9A-F]{64}\)\.")
                .unwrap()
                .and(predicate::str::is_match(r"The result is \d \+ \d = \d \(mod 6\)\.").unwrap())
                .and(predicate::str::contains("My throw is"))
                .and(predicate::str::contains("Your throw is")),
        );
}

#[test]
fn play_reads_dice_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dice.txt");
    fs::write(&path, "# classic set\n2,2,4,4,9,9\n\n1,1,6,6,8,8\n3,3,5,5,7,7\n").unwrap();

    ntd()
        .args(["play", "-f", path.to_str().unwrap()])
        .write_stdin("?\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("3,3,5,5,7,7"));
}

#[test]
fn play_custom_rules() {
    ntd()
        .args(["play", "--faces", "3", "--min-dice", "2", "1,2,3", "2,3,4"])
        .write_stdin("x\n")
        .assert()
        .success();
}

// ---------------------------------------------------------------------------
// odds
// ---------------------------------------------------------------------------

#[test]
fn odds_table() {
    ntd()
        .arg("odds")
        .args(CLASSIC)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("0.5556")
                .and(predicate::str::contains("0.4444"))
                .and(predicate::str::contains("non-transitive"))
                .and(predicate::str::contains(
                    "Best answer to [2,2,4,4,9,9]: [3,3,5,5,7,7] wins 0.5556",
                )),
        );
}

#[test]
fn odds_json() {
    let output = ntd()
        .args(["odds", "--format", "json"])
        .args(CLASSIC)
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["dice"][0], serde_json::json!([2, 2, 4, 4, 9, 9]));
    let win = doc["win"][0][1].as_f64().unwrap();
    assert!((win - 20.0 / 36.0).abs() < 1e-9);
    assert_eq!(doc["tie"][0][1].as_f64(), Some(0.0));
    assert_eq!(doc["non_transitive"], true);
}

#[test]
fn odds_transitive_set() {
    ntd()
        .args(["odds", "1,1,1", "2,2,2", "3,3,3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("transitive: the \"beats\" relation has no cycle"));
}

#[test]
fn odds_unknown_format() {
    ntd()
        .args(["odds", "--format", "xml", "1,2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format 'xml'"));
}

#[test]
fn odds_without_dice() {
    ntd()
        .arg("odds")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no dice given"));
}

// ---------------------------------------------------------------------------
// verify
// ---------------------------------------------------------------------------

#[test]
fn verify_matching_hmac() {
    ntd()
        .args(["verify", "--key", ZERO_KEY, "--value", "0", "--hmac", HMAC_OF_0])
        .assert()
        .success()
        .stdout(predicate::str::contains("Verified"));
}

#[test]
fn verify_lowercase_hex() {
    ntd()
        .args([
            "verify",
            "--key",
            ZERO_KEY,
            "--value",
            "0",
            "--hmac",
            &HMAC_OF_0.to_lowercase(),
        ])
        .assert()
        .success();
}

#[test]
fn verify_mismatch_fails() {
    ntd()
        .args(["verify", "--key", ZERO_KEY, "--value", "1", "--hmac", HMAC_OF_0])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not match"));
}

#[test]
fn verify_bad_hex_fails() {
    ntd()
        .args(["verify", "--key", "not-hex", "--value", "0", "--hmac", HMAC_OF_0])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hex in key"));
}
