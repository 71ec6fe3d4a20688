//! Integration tests for the `twenty` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Write a two-character catalogue that one question can split.
fn tiny_catalogue(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("tiny.json");
    fs::write(
        &path,
        r#"{
    "easy": {
        "Alpha": { "hints": ["First letter."], "traits": ["god"] },
        "Beta": { "hints": ["Second letter."], "traits": [] }
    }
}"#,
    )
    .unwrap();
    path
}

fn twenty() -> Command {
    let mut cmd = Command::cargo_bin("twenty").unwrap();
    cmd.env_remove("TWENTY_ORACLE_URL");
    cmd
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_shows_builtin_characters() {
    twenty()
        .arg("list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Spider-Man")
                .and(predicate::str::contains("Scarlet Witch"))
                .and(predicate::str::contains("17 characters")),
        );
}

#[test]
fn list_filters_by_difficulty() {
    twenty()
        .args(["list", "hard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6 characters").and(predicate::str::contains("Vision")))
        .stdout(predicate::str::contains("Spider-Man").not());
}

#[test]
fn list_rejects_unknown_difficulty() {
    twenty()
        .args(["list", "nightmare"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown difficulty"));
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_prints_traits_and_hints() {
    twenty()
        .args(["show", "thor"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Thor")
                .and(predicate::str::contains("Medium"))
                .and(predicate::str::contains("hammer"))
                .and(predicate::str::contains("Only the worthy may lift my weapon.")),
        );
}

#[test]
fn show_unknown_character_fails() {
    twenty()
        .args(["show", "Howard the Duck"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("character not found"));
}

// ---------------------------------------------------------------------------
// check / export
// ---------------------------------------------------------------------------

#[test]
fn check_passes_for_builtin() {
    twenty()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"));
}

#[test]
fn check_reports_indistinguishable_characters() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("twins.json");
    fs::write(
        &path,
        r#"{"easy": {"Alpha": {"traits": ["god"]}, "Omega": {"traits": ["god"]}}}"#,
    )
    .unwrap();

    twenty()
        .args(["check", "-c", path.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Alpha and Omega"))
        .stderr(predicate::str::contains("cannot be told apart"));
}

#[test]
fn missing_catalogue_file_fails() {
    twenty()
        .args(["list", "-c", "/nonexistent/catalogue.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn export_writes_loadable_catalogue() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("catalogue.json");

    twenty()
        .args(["export", "-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 17 characters"));

    twenty()
        .args(["list", "-c", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("17 characters"));
}

#[test]
fn export_to_stdout_is_json() {
    twenty()
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Iron Man\"").and(predicate::str::contains("\"easy\"")));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_human_guesses_with_hint_and_win() {
    twenty()
        .args(["play", "--as", "Hulk"])
        .write_stdin("hint\nguess Iron Man\nguess Hulk\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("I've picked a character from the Easy list")
                .and(predicate::str::contains("Hint 1:"))
                .and(predicate::str::contains("You have 4 guesses left"))
                .and(predicate::str::contains("You win!")),
        );
}

#[test]
fn play_question_without_oracle_reports_failure() {
    twenty()
        .args(["play", "--as", "Hulk"])
        .write_stdin("Are you green?\nstatus\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Unable to answer: no oracle configured")
                .and(predicate::str::contains("20 questions left")),
        );
}

#[test]
fn play_runs_out_of_guesses() {
    twenty()
        .args(["play", "--as", "Hulk", "--attempts", "2"])
        .write_stdin("guess Thor\nguess Loki\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You're out of guesses! The character was Hulk."));
}

#[test]
fn play_system_guesses_tiny_catalogue() {
    let dir = TempDir::new().unwrap();
    let catalogue = tiny_catalogue(&dir);

    twenty()
        .args(["play", "-c", catalogue.to_str().unwrap(), "--mode", "me", "--as", "Alpha"])
        .write_stdin("maybe\ny\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You are Alpha from the Easy list")
                .and(predicate::str::contains("Question 1:"))
                .and(predicate::str::contains("answer with y or n"))
                .and(predicate::str::contains("My final guess is Alpha!"))
                .and(predicate::str::contains("I got it! You were Alpha.")),
        );
}

#[test]
fn play_writes_markdown_transcript() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("game.md");

    twenty()
        .args(["play", "--as", "Hulk", "-t", out.to_str().unwrap()])
        .write_stdin("guess Hulk\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transcript written"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("# Twenty Questions Transcript"));
    assert!(content.contains("## Win"));
}

#[test]
fn play_writes_plain_transcript_for_txt() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("game.txt");

    twenty()
        .args(["play", "--as", "Hulk", "-t", out.to_str().unwrap()])
        .write_stdin("guess Thor\n")
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("Twenty Questions Transcript"));
    assert!(content.contains("Is it Thor?"));
}

#[test]
fn play_unknown_secret_fails() {
    twenty()
        .args(["play", "--as", "Thor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown character"));
}

#[test]
fn play_rejects_unknown_mode() {
    twenty()
        .args(["play", "--mode", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown mode"));
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_builtin_always_wins() {
    twenty()
        .arg("simulate")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Win rate")
                .and(predicate::str::contains("100.0%"))
                .and(predicate::str::contains("(17/17)")),
        );
}

#[test]
fn simulate_best_split_on_custom_catalogue() {
    let dir = TempDir::new().unwrap();
    let catalogue = tiny_catalogue(&dir);

    twenty()
        .args([
            "simulate",
            "-c",
            catalogue.to_str().unwrap(),
            "--strategy",
            "best-split",
            "--rounds",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("(6/6)"));
}
