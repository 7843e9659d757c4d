use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;

const BACKLOG: &str = "\
task_id,story_points,KSP
0,3,5
1,2,3
2,8,2
3,5,9
4,2,1
5,2,3
";

fn run(args: &[&str]) -> Output {
    let exe = env!("CARGO_BIN_EXE_sprintpack");
    Command::new(exe)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run failed")
}

fn write_backlog(dir: &Path, body: &str) -> String {
    let path = dir.join("backlog.csv");
    fs::write(&path, body).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn prints_selected_positions() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_backlog(dir.path(), BACKLOG);
    let output = run(&[&file, "13"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0, 1, 3, 5");
}

#[test]
fn zero_capacity_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_backlog(dir.path(), BACKLOG);
    let output = run(&[&file, "0"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn ids_flag_prints_task_ids() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_backlog(
        dir.path(),
        "task_id,story_points,KSP\n101,3,5\n102,2,3\n103,8,2\n",
    );
    let output = run(&[&file, "5", "--ids"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "101, 102");
}

#[test]
fn json_summary() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_backlog(dir.path(), BACKLOG);
    let output = run(&[&file, "13", "--json"]);
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["capacity"].as_u64(), Some(13));
    assert_eq!(json["total_value"].as_u64(), Some(20));
    assert_eq!(json["total_cost"].as_u64(), Some(12));
    let selected: Vec<u64> = json["selected"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_u64().unwrap())
        .collect();
    assert_eq!(selected, vec![0, 1, 3, 5]);
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.csv");
    let output = run(&[missing.to_str().unwrap(), "10"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Check that the file exists"));
}

#[test]
fn non_integer_capacity_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_backlog(dir.path(), BACKLOG);
    let output = run(&[&file, "lots"]);
    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
}

#[test]
fn missing_capacity_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_backlog(dir.path(), BACKLOG);
    let output = run(&[&file]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CAPACITY"));
}

#[test]
fn negative_capacity_is_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_backlog(dir.path(), BACKLOG);
    let output = run(&[&file, "-3"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must not be negative"));
}

#[test]
fn malformed_cell_names_column() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_backlog(dir.path(), "task_id,story_points,KSP\n1,2,high\n");
    let output = run(&[&file, "4"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("KSP"));
    assert!(stderr.contains("not an integer"));
}

#[test]
fn oversized_table_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_backlog(dir.path(), BACKLOG);
    let output = run(&[&file, "1000", "--max-cells", "100"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--max-cells"));
}
