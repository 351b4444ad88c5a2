//! Integration tests for the markrank CLI
//!
//! These tests run the markrank binary against files in a temporary directory.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

/// Get a Command for markrank, isolated from any user configuration
fn markrank(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("markrank");
    cmd.env("MARKRANK_CONFIG_DIR", config_dir)
        .env_remove("MARKRANK_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("MARKRANK_LOG");
    cmd
}

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: tempdir().unwrap(),
        }
    }

    fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn cmd(&self) -> Command {
        markrank(self.dir.path())
    }
}

const UNITS: &str = "Quiz,50\nExam,100\n";
const RECORDS: &str = "Alice,40,80\nBob,25,\n";

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: markrank"))
        .stdout(predicate::str::contains("--units"))
        .stdout(predicate::str::contains("--strict"));
}

#[test]
fn test_version_flag() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("markrank "));
}

// ============================================================================
// Ranking
// ============================================================================

#[test]
fn test_ranks_from_flags() {
    let fx = Fixture::new();
    let units = fx.file("units.txt", UNITS);
    let records = fx.file("records.txt", RECORDS);

    fx.cmd()
        .arg("--units")
        .arg(&units)
        .arg("--records")
        .arg(&records)
        .assert()
        .success()
        .stdout(predicate::str::diff("Alice: 0.800\nBob: 0.500\n"));
}

#[test]
fn test_ranks_from_prompts() {
    let fx = Fixture::new();
    let units = fx.file("units.txt", UNITS);
    let records = fx.file("records.txt", RECORDS);

    fx.cmd()
        .write_stdin(format!("{}\n{}\n", units.display(), records.display()))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Please enter the name of the units file : ",
        ))
        .stdout(predicate::str::contains(
            "Please enter the name of the student records file : ",
        ))
        .stdout(predicate::str::ends_with("Alice: 0.800\nBob: 0.500\n"));
}

#[test]
fn test_quiet_suppresses_prompts() {
    let fx = Fixture::new();
    let units = fx.file("units.txt", UNITS);
    let records = fx.file("records.txt", RECORDS);

    fx.cmd()
        .arg("--quiet")
        .write_stdin(format!("{}\n{}\n", units.display(), records.display()))
        .assert()
        .success()
        .stdout(predicate::str::diff("Alice: 0.800\nBob: 0.500\n"));
}

#[test]
fn test_short_record_is_dropped() {
    let fx = Fixture::new();
    let units = fx.file("units.txt", UNITS);
    let records = fx.file("records.txt", "Alice,40,80\nCarl,30\nBob,25,\n");

    fx.cmd()
        .arg("-u")
        .arg(&units)
        .arg("-r")
        .arg(&records)
        .assert()
        .success()
        .stdout(predicate::str::contains("Carl").not());
}

#[test]
fn test_student_without_scores_is_listed_first() {
    let fx = Fixture::new();
    let units = fx.file("units.txt", UNITS);
    let records = fx.file("records.txt", "Alice,50,100\nGhost,,\n");

    fx.cmd()
        .arg("-u")
        .arg(&units)
        .arg("-r")
        .arg(&records)
        .assert()
        .success()
        .stdout(predicate::str::diff("Ghost: inf\nAlice: 1.000\n"));
}

#[test]
fn test_output_is_stable_across_runs() {
    let fx = Fixture::new();
    let units = fx.file("units.txt", UNITS);
    let records = fx.file("records.txt", "Amy,25,50\nZoe,25,50\nMax,,\n");

    let run = || {
        fx.cmd()
            .arg("-u")
            .arg(&units)
            .arg("-r")
            .arg(&records)
            .output()
            .unwrap()
            .stdout
    };

    let first = run();
    assert_eq!(first, run());
    assert_eq!(
        String::from_utf8(first).unwrap(),
        "Max: inf\nZoe: 0.500\nAmy: 0.500\n"
    );
}

// ============================================================================
// Unopenable inputs
// ============================================================================

#[test]
fn test_missing_units_file() {
    let fx = Fixture::new();
    let missing = fx.path("missing-units.txt");

    fx.cmd()
        .arg("--quiet")
        .arg("-u")
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "Could not open the units file {} for reading\n",
            missing.display()
        )));
}

#[test]
fn test_missing_units_file_never_asks_for_records() {
    let fx = Fixture::new();
    let missing = fx.path("missing-units.txt");

    fx.cmd()
        .write_stdin(format!("{}\n", missing.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("student records file").not())
        .stdout(predicate::str::contains("Could not open the units file"));
}

#[test]
fn test_missing_records_file() {
    let fx = Fixture::new();
    let units = fx.file("units.txt", UNITS);
    let missing = fx.path("missing-records.txt");

    fx.cmd()
        .arg("-u")
        .arg(&units)
        .arg("-r")
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "Could not open the students records file {} for reading\n",
            missing.display()
        )));
}

// ============================================================================
// Fatal input errors
// ============================================================================

#[test]
fn test_non_numeric_score_fails() {
    let fx = Fixture::new();
    let units = fx.file("units.txt", UNITS);
    let records = fx.file("records.txt", "Alice,forty,80\n");

    fx.cmd()
        .arg("-u")
        .arg(&units)
        .arg("-r")
        .arg(&records)
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("could not convert string to float"));
}

#[test]
fn test_zero_max_score_fails() {
    let fx = Fixture::new();
    let units = fx.file("units.txt", "Quiz,0\n");
    let records = fx.file("records.txt", "Alice,10\n");

    fx.cmd()
        .arg("-u")
        .arg(&units)
        .arg("-r")
        .arg(&records)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("division by zero"));
}

#[test]
fn test_strict_flag_rejects_short_record() {
    let fx = Fixture::new();
    let units = fx.file("units.txt", UNITS);
    let records = fx.file("records.txt", "Alice,40,80\nCarl,30\n");

    fx.cmd()
        .arg("--strict")
        .arg("-u")
        .arg(&units)
        .arg("-r")
        .arg(&records)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("records line 2"));
}

#[test]
fn test_json_error_envelope() {
    let fx = Fixture::new();
    let units = fx.file("units.txt", "Quiz,many\n");
    let records = fx.file("records.txt", RECORDS);

    let output = fx
        .cmd()
        .args(["--format", "json"])
        .arg("-u")
        .arg(&units)
        .arg("-r")
        .arg(&records)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "invalid_number");
}

// ============================================================================
// Formats and configuration
// ============================================================================

#[test]
fn test_json_format() {
    let fx = Fixture::new();
    let units = fx.file("units.txt", UNITS);
    let records = fx.file("records.txt", RECORDS);

    let output = fx
        .cmd()
        .args(["--format", "json"])
        .arg("-u")
        .arg(&units)
        .arg("-r")
        .arg(&records)
        .output()
        .unwrap();

    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows[0]["name"], "Alice");
    assert_eq!(rows[0]["rank"], 1);
    assert_eq!(rows[1]["name"], "Bob");
    assert_eq!(rows[1]["mean"], 0.5);
}

#[test]
fn test_config_file_sets_precision() {
    let fx = Fixture::new();
    fx.file("config.toml", "precision = 1\n");
    let units = fx.file("units.txt", UNITS);
    let records = fx.file("records.txt", RECORDS);

    fx.cmd()
        .arg("-u")
        .arg(&units)
        .arg("-r")
        .arg(&records)
        .assert()
        .success()
        .stdout(predicate::str::diff("Alice: 0.8\nBob: 0.5\n"));
}

#[test]
fn test_precision_flag_overrides_config() {
    let fx = Fixture::new();
    fx.file("config.toml", "precision = 1\n");
    let units = fx.file("units.txt", UNITS);
    let records = fx.file("records.txt", RECORDS);

    fx.cmd()
        .args(["--precision", "2"])
        .arg("-u")
        .arg(&units)
        .arg("-r")
        .arg(&records)
        .assert()
        .success()
        .stdout(predicate::str::diff("Alice: 0.80\nBob: 0.50\n"));
}

#[test]
fn test_explicit_config_must_exist() {
    let fx = Fixture::new();
    let units = fx.file("units.txt", UNITS);
    let records = fx.file("records.txt", RECORDS);

    fx.cmd()
        .arg("--config")
        .arg(fx.path("absent.toml"))
        .arg("-u")
        .arg(&units)
        .arg("-r")
        .arg(&records)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid config"));
}
