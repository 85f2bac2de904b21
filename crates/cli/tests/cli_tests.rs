//! CLI integration tests
use std::path::{Path, PathBuf};

use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("lexiscore")
}

fn fixture(name: &str) -> PathBuf {
    Path::new(&format!("../../tests/fixtures/{}", name)).canonicalize().unwrap()
}

fn site_fixture(site: &str) -> PathBuf {
    fixture(&format!("sites/{}/article.html", site))
}

/// Writes an input CSV into `dir` and returns its path.
fn write_input(dir: &Path, rows: &[(&str, PathBuf)]) -> PathBuf {
    let mut content = String::from("URL_ID,URL\n");
    for (id, path) in rows {
        content.push_str(&format!("{},{}\n", id, path.display()));
    }
    let input = dir.join("Input.csv");
    std::fs::write(&input, content).unwrap();
    input
}

/// A command running inside `dir` against the fixture lexicons.
fn batch_cmd(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cmd();
    cmd.current_dir(dir).arg("--data-dir").arg(fixture("lexicons"));
    cmd
}

#[test]
fn test_cli_csv_report() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(tmp.path(), &[("1", site_fixture("growth")), ("2", site_fixture("decline"))]);

    batch_cmd(tmp.path())
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("Report written"));

    let report = std::fs::read_to_string(tmp.path().join("Output.csv")).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("URL_ID,URL,POSITIVE SCORE,NEGATIVE SCORE,POLARITY SCORE"));
    assert!(lines[0].ends_with("PERSONAL PRONOUNS,AVG WORD LENGTH"));
    assert!(lines[1].starts_with("1,"));
    assert!(lines[1].ends_with(",5,2,0.4285713673469475,0.36842103324099823,5.0,63.1578947368421,27.263157894736846,5.0,12,19,2.0,2,6.0"));
    assert!(lines[2].starts_with("2,"));

    let text = std::fs::read_to_string(tmp.path().join("text_files/1.txt")).unwrap();
    assert!(text.starts_with("Title: Quarterly Growth Report | Insights\n\n"));
}

#[test]
fn test_cli_json_report() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(tmp.path(), &[("101", site_fixture("decline"))]);

    batch_cmd(tmp.path())
        .args(["-o", "out/report.json"])
        .arg(&input)
        .assert()
        .success();

    let content = std::fs::read_to_string(tmp.path().join("out/report.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["URL_ID"], "101");
    assert_eq!(records[0]["WORD COUNT"], 10);
    assert_eq!(records[0]["NEGATIVE SCORE"], 2);
    assert_eq!(records[0]["PERSONAL PRONOUNS"], 1);
}

#[test]
fn test_cli_explicit_format_overrides_extension() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(tmp.path(), &[("1", site_fixture("decline"))]);

    batch_cmd(tmp.path())
        .args(["-f", "json", "-o", "report.txt"])
        .arg(&input)
        .assert()
        .success();

    let content = std::fs::read_to_string(tmp.path().join("report.txt")).unwrap();
    assert!(content.trim_start().starts_with('['));
}

#[test]
fn test_cli_skips_failing_rows() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(
        tmp.path(),
        &[
            ("1", fixture("no_content.html")),
            ("2", site_fixture("growth")),
            ("3", tmp.path().join("missing.html")),
        ],
    );

    batch_cmd(tmp.path())
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("td-post-content"));

    let report = std::fs::read_to_string(tmp.path().join("Output.csv")).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("2,"));
    assert!(!tmp.path().join("text_files/1.txt").exists());
}

#[test]
fn test_cli_keep_stopwords() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(tmp.path(), &[("1", site_fixture("growth"))]);

    batch_cmd(tmp.path())
        .args(["--keep-stopwords", "--no-text-files", "-o", "Output.json"])
        .arg(&input)
        .assert()
        .success();

    let content = std::fs::read_to_string(tmp.path().join("Output.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json[0]["WORD COUNT"], 34);
    assert_eq!(json[0]["AVG SENTENCE LENGTH"], 8.0);
    assert!(!tmp.path().join("text_files").exists());
}

#[test]
fn test_cli_empty_input() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(tmp.path(), &[]);

    batch_cmd(tmp.path()).arg(&input).assert().success();

    let report = std::fs::read_to_string(tmp.path().join("Output.csv")).unwrap();
    assert_eq!(report.lines().count(), 1);
}

#[test]
fn test_cli_missing_input_file() {
    let tmp = TempDir::new().unwrap();

    batch_cmd(tmp.path())
        .arg("nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input"));

    assert!(!tmp.path().join("Output.csv").exists());
}

#[test]
fn test_cli_missing_lexicons() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(tmp.path(), &[("1", site_fixture("growth"))]);

    cmd()
        .current_dir(tmp.path())
        .env("HOME", tmp.path())
        .env("XDG_DATA_HOME", tmp.path().join("data"))
        .arg("--data-dir")
        .arg(tmp.path().join("no_lexicons"))
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load lexicons"));
}

#[test]
fn test_cli_verbose() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(tmp.path(), &[("1", site_fixture("growth"))]);

    batch_cmd(tmp.path())
        .arg("-v")
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("Lexiscore"))
        .stderr(predicate::str::contains("[3/4]"));
}

#[test]
fn test_cli_requires_input() {
    cmd().assert().failure();
}

#[test]
fn test_cli_completions() {
    cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lexiscore"));
}

#[test]
fn test_generated_completions_use_cli_flag_names() {
    let script = std::fs::read_to_string(concat!(env!("OUT_DIR"), "/completions/lexiscore.bash")).unwrap();
    for flag in [
        "--data-dir",
        "--text-dir",
        "--no-text-files",
        "--keep-stopwords",
        "--no-lemmatize",
        "--content-selector",
        "--user-agent",
    ] {
        assert!(script.contains(flag), "{flag}");
        assert!(!script.contains(&format!("--{}", flag[2..].replace('-', "_"))), "{flag}");
    }
}
