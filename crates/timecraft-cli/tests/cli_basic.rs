//! Basic CLI E2E tests.
//!
//! Tests run the built binary with an isolated config directory and verify
//! outputs.

use indoc::indoc;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

const SCHEDULE: &str = indoc! {r#"
    {
      "schedule": [
        { "id": "a", "task": "Gym", "date": "2024-07-27",
          "startTime": "9:00 AM", "endTime": "10:00 AM" },
        { "id": "b", "task": "Call", "date": "2024-07-27",
          "startTime": "9:30 AM", "endTime": "10:30 AM" },
        { "id": "c", "task": "Shop", "date": "2024-07-27",
          "startTime": "10:00 AM", "endTime": "11:00 AM" },
        { "id": "d", "task": "Brunch", "date": "2024-07-28",
          "startTime": "11:30 AM", "endTime": "1:00 PM" },
        { "id": "x", "task": "Broken", "date": "2024-07-28",
          "startTime": "soon", "endTime": "1:00 PM" }
      ]
    }
"#};

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_timecraft-cli"))
        .args(args)
        .env("TIMECRAFT_HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn write_schedule(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("schedule.json");
    std::fs::write(&path, SCHEDULE).unwrap();
    path
}

#[test]
fn test_layout_json() {
    let home = TempDir::new().unwrap();
    let file = write_schedule(&home);
    let (stdout, stderr, code) = run_cli(
        home.path(),
        &["layout", file.to_str().unwrap(), "--date", "2024-07-27", "--json"],
    );
    assert_eq!(code, 0, "layout failed: {stderr}");

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["totalLanes"], 2);
    assert_eq!(json["placements"]["a"]["laneIndex"], 0);
    assert_eq!(json["placements"]["b"]["laneIndex"], 1);
    assert_eq!(json["placements"]["c"]["laneIndex"], 0);
    assert!(json["placements"].get("d").is_none());
    assert!(!stderr.contains("skipped"));
}

#[test]
fn test_layout_single_date_reports_skipped() {
    let home = TempDir::new().unwrap();
    let file = write_schedule(&home);
    let (stdout, stderr, code) = run_cli(
        home.path(),
        &["layout", file.to_str().unwrap(), "--date", "2024-07-28", "--json"],
    );
    assert_eq!(code, 0, "layout failed: {stderr}");

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["totalLanes"], 1);
    assert_eq!(json["placements"]["d"]["laneIndex"], 0);
    assert!(json["placements"].get("x").is_none());
    assert!(stderr.contains("skipped 1 item"));
}

#[test]
fn test_layout_unknown_date_fails() {
    let home = TempDir::new().unwrap();
    let file = write_schedule(&home);
    let (_, stderr, code) = run_cli(
        home.path(),
        &["layout", file.to_str().unwrap(), "--date", "2024-08-01"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("no items on 2024-08-01"));
}

#[test]
fn test_layout_multi_date_defaults_to_per_day() {
    let home = TempDir::new().unwrap();
    let file = write_schedule(&home);
    let (stdout, stderr, code) = run_cli(home.path(), &["layout", file.to_str().unwrap(), "--json"]);
    assert_eq!(code, 0, "layout failed: {stderr}");

    // Items from different dates never share a lane batch.
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(json.get("totalLanes").is_none());
    assert_eq!(json["days"][0]["layout"]["totalLanes"], 2);
    assert_eq!(json["days"][1]["layout"]["totalLanes"], 1);
    assert_eq!(json["days"][1]["layout"]["placements"]["d"]["laneIndex"], 0);
    assert!(stderr.contains("skipped 1 item"));
}

#[test]
fn test_layout_by_day_json() {
    let home = TempDir::new().unwrap();
    let file = write_schedule(&home);
    let (stdout, stderr, code) = run_cli(
        home.path(),
        &["layout", file.to_str().unwrap(), "--by-day", "--json"],
    );
    assert_eq!(code, 0);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["maxLanes"], 2);
    assert_eq!(json["days"][0]["date"], "2024-07-27");
    assert_eq!(json["days"][1]["date"], "2024-07-28");
    assert_eq!(json["days"][1]["layout"]["totalLanes"], 1);
    assert!(stderr.contains("skipped 1 item"));
}

#[test]
fn test_layout_table_from_stdin() {
    let home = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_timecraft-cli"))
        .args(["layout", "-"])
        .env("TIMECRAFT_HOME", home.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(SCHEDULE.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2024-07-27 (2 lanes)"));
    assert!(stdout.contains("2024-07-28 (1 lanes)"));
    assert!(stdout.contains("9:30 AM"));
    assert!(stdout.contains("Brunch"));
}

#[test]
fn test_layout_table_keeps_repeated_ids_apart() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("dup.json");
    std::fs::write(
        &path,
        indoc! {r#"
            [
              { "id": "dup", "task": "First", "date": "2024-07-27",
                "startTime": "9:00 AM", "endTime": "10:00 AM" },
              { "id": "dup", "task": "Second", "date": "2024-07-27",
                "startTime": "9:30 AM", "endTime": "10:30 AM" }
            ]
        "#},
    )
    .unwrap();

    let (stdout, stderr, code) = run_cli(home.path(), &["layout", path.to_str().unwrap()]);
    assert_eq!(code, 0, "layout failed: {stderr}");
    assert!(stdout.contains("2 items in 2 lanes"));

    let rows: Vec<&str> = stdout.lines().filter(|l| l.contains("dup")).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains("lane 0") && rows[0].contains("First"));
    assert!(rows[1].contains("lane 1") && rows[1].contains("Second"));
}

#[test]
fn test_layout_missing_file_fails() {
    let home = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["layout", "/nonexistent/schedule.json"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_window() {
    let home = TempDir::new().unwrap();
    let file = write_schedule(&home);
    let (stdout, _, code) = run_cli(home.path(), &["window", file.to_str().unwrap(), "--json"]);
    assert_eq!(code, 0);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["startHour"], 9);
    assert_eq!(json["endHour"], 13);
    assert_eq!(json["totalMinutes"], 240);
    assert_eq!(json["hours"][0], "9am");
    assert_eq!(json["hours"][3], "12pm");
}

#[test]
fn test_time_parse() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["time", "parse", "1:05 PM"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "785");

    let (stdout, _, code) = run_cli(home.path(), &["time", "parse", "12:00 am"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "0");

    let (stdout, _, code) = run_cli(home.path(), &["time", "parse", "Start: 9:00 AM EST"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "540");

    let (_, stderr, code) = run_cli(home.path(), &["time", "parse", "25:00"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("invalid time"));
}

#[test]
fn test_time_format() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["time", "format", "720"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "12:00 PM");

    let (_, _, code) = run_cli(home.path(), &["time", "format", "1440"]);
    assert_eq!(code, 1);
}

#[test]
fn test_config_set_get_reset() {
    let home = TempDir::new().unwrap();

    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "window.min_span_hours"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "4");
    assert!(home.path().join("config.toml").exists());

    let (_, _, code) = run_cli(home.path(), &["config", "set", "window.min_span_hours", "2"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(home.path(), &["config", "get", "window.min_span_hours"]);
    assert_eq!(stdout.trim(), "2");

    let (_, stderr, code) = run_cli(home.path(), &["config", "set", "window.bogus", "1"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown config key"));

    let (_, _, code) = run_cli(home.path(), &["config", "reset"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(home.path(), &["config", "get", "window.min_span_hours"]);
    assert_eq!(stdout.trim(), "4");
}

#[test]
fn test_config_changes_window() {
    let home = TempDir::new().unwrap();
    let file = write_schedule(&home);
    let (_, _, code) = run_cli(home.path(), &["config", "set", "window.min_span_hours", "8"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(home.path(), &["window", file.to_str().unwrap(), "--json"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["endHour"], 17);
}
