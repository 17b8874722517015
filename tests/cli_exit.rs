// tests/cli_exit.rs - Exit code tests
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn temp() -> TempDir {
    tempfile::tempdir().unwrap()
}

fn tubetally(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tubetally").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_exit_0_writes_outputs() {
    let d = temp();
    fs::write(
        d.path().join("wh.json"),
        r#"[{"title": "Watched A", "time": "2022-05-01T10:00:00Z",
             "subtitles": [{"name": "Chan A", "url": "http://x"}]}]"#,
    )
    .unwrap();

    tubetally(&d)
        .args(["--in", "wh.json", "--outdir", "reports"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote JSON outputs to:"))
        .stdout(predicate::str::contains("reports"));

    assert!(d.path().join("reports/top_channels_2022.json").is_file());
    assert!(d.path().join("reports/summary.json").is_file());
}

#[test]
fn test_exit_2_missing_input_flag() {
    let d = temp();
    tubetally(&d)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("input file is required"));
    assert!(!d.path().join("out").exists());
}

#[test]
fn test_exit_2_start_after_end() {
    let d = temp();
    tubetally(&d)
        .args(["--in", "wh.json", "--start", "2025", "--end", "2020"])
        .assert()
        .code(2);
}

#[test]
fn test_exit_2_bad_flag_value() {
    let d = temp();
    tubetally(&d).args(["--in", "wh.json", "--top", "many"]).assert().code(2);
}

#[test]
fn test_exit_1_missing_file() {
    let d = temp();
    tubetally(&d)
        .args(["--in", "absent.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("absent.json"));
}

#[test]
fn test_exit_1_not_an_array() {
    let d = temp();
    fs::write(d.path().join("wh.json"), r#"{"title": "Watched A"}"#).unwrap();
    tubetally(&d)
        .args(["--in", "wh.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("expected top-level JSON array"));
    assert!(!d.path().join("out").exists());
}

#[test]
fn test_config_file_supplies_input() {
    let d = temp();
    fs::write(d.path().join("wh.json"), "[]").unwrap();
    fs::write(
        d.path().join("tubetally.toml"),
        "input = \"wh.json\"\noutdir = \"from-config\"\nstart = 2021\nend = 2021\n",
    )
    .unwrap();

    tubetally(&d).assert().success();
    assert!(d.path().join("from-config/top_channels_2021.json").is_file());
    assert!(!d.path().join("from-config/top_channels_2022.json").exists());
}

#[test]
fn test_verbose_prints_table() {
    let d = temp();
    fs::write(d.path().join("wh.json"), "[]").unwrap();
    tubetally(&d)
        .args(["--in", "wh.json", "--start", "2022", "--end", "2022", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2022"))
        .stdout(predicate::str::contains("0 records"));
}
