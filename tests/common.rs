use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;

pub fn pareto() -> Command {
    cargo_bin_cmd!("pareto")
}

/// Two-criteria diamond: A reaches D via B (2,5), via C (5,2) or directly (3,3)
#[allow(dead_code)]
pub const DIAMOND: &str = r#"{
  "dimensions": 2,
  "edges": [
    {"from": "A", "to": "B", "cost": [1, 4]},
    {"from": "A", "to": "C", "cost": [4, 1]},
    {"from": "B", "to": "D", "cost": [1, 1]},
    {"from": "C", "to": "D", "cost": [1, 1]},
    {"from": "A", "to": "D", "cost": [3, 3]}
  ]
}"#;

#[allow(dead_code)]
pub fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Parse stdout as a single JSON document
#[allow(dead_code)]
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}

/// Find the structured error envelope among stderr lines
#[allow(dead_code)]
pub fn stderr_error(output: &Output) -> serde_json::Value {
    String::from_utf8_lossy(&output.stderr)
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .find(|value| value.get("error").is_some())
        .expect("no JSON error envelope on stderr")
}
