use regex::Regex;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    _dir: TempDir,
    tasks_path: PathBuf,
}

impl TestContext {
    fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let tasks_path = dir.path().join("tasks.json");
        fs::write(&tasks_path, contents).expect("Failed to write tasks");
        Self {
            _dir: dir,
            tasks_path,
        }
    }
}

fn keypath(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_keypath"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

const TASKS: &str = r#"[
    {"alphabet": "abcdef", "rowLength": 3, "startingFocus": "a", "word": "bd"},
    {"alphabet": "abcdefg", "rowLength": 3, "startingFocus": "g", "word": "b"}
]"#;

#[test]
fn solve_prints_json_results() {
    let ctx = TestContext::new(TASKS);
    let output = keypath(&["solve", ctx.tasks_path.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let results: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(results[0]["distance"], 3);
    assert_eq!(
        results[0]["path"],
        serde_json::json!(["r", "p", "u", "l", "p"])
    );
    assert_eq!(results[1]["startingFocus"], "g");
    assert_eq!(results[1]["path"], serde_json::json!(["d", "r", "p"]));
}

#[test]
fn fail_fast_exits_non_zero() {
    let ctx = TestContext::new(
        r#"[{"alphabet": "abc", "rowLength": 3, "startingFocus": "a", "word": "z"}]"#,
    );
    let output = keypath(&["solve", ctx.tasks_path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn isolate_reports_failures_inline() {
    let ctx = TestContext::new(
        r#"[
            {"alphabet": "abc", "rowLength": 0, "startingFocus": "a", "word": "b"},
            {"alphabet": "abc", "rowLength": 3, "startingFocus": "a", "word": "c"}
        ]"#,
    );
    let output = keypath(&[
        "solve",
        ctx.tasks_path.to_str().unwrap(),
        "--policy",
        "isolate",
        "--sequential",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let results: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert!(results[0]["error"]
        .as_str()
        .unwrap()
        .contains("rowLength must be positive"));
    assert_eq!(results[1]["path"], serde_json::json!(["l", "p"]));
}

#[test]
fn trace_reports_distance_and_path() {
    let output = keypath(&[
        "trace",
        "--alphabet",
        "abcdefg",
        "--row-length",
        "3",
        "--focus",
        "b",
        "--word",
        "gb",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let distance = Regex::new(r"Distance: (\d+)").unwrap();
    let path = Regex::new(r"Path: ([udlrp]+)").unwrap();

    let d: usize = distance.captures(&stdout).unwrap()[1].parse().unwrap();
    assert_eq!(d, 4);
    assert_eq!(&path.captures(&stdout).unwrap()[1], "lupdrp");
}
