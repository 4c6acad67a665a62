//! Integration tests for `pareto generate` and `pareto edge`

mod common;

use common::{pareto, stderr_error, stdout_json};
use predicates::prelude::*;
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn search_json(graph: &Path, source: &str, target: Option<&str>) -> serde_json::Value {
    let mut cmd = pareto();
    cmd.args(["--format", "json", "search"])
        .arg(graph)
        .args(["--source", source]);
    if let Some(target) = target {
        cmd.args(["--target", target]);
    }
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "search failed: {:?}", output);
    stdout_json(&output)
}

// ============================================================================
// generate
// ============================================================================

#[test]
fn test_generate_chain_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chain.json");

    pareto()
        .arg("generate")
        .arg(&path)
        .args(["--nodes", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated chain graph: 10 nodes, 9 edges"));

    let report = search_json(&path, "N0", Some("N9"));
    let paths = report["frontiers"][0]["paths"].as_array().unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0]["hops"], 9);
}

#[test]
fn test_generate_refuses_overwrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chain.json");

    pareto().arg("generate").arg(&path).assert().success();
    pareto()
        .arg("generate")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));
    pareto()
        .arg("generate")
        .arg(&path)
        .args(["--force", "--nodes", "4"])
        .assert()
        .success();
}

/// A forced regenerate that fails validation leaves the existing file intact
#[test]
fn test_generate_force_keeps_file_on_error() {
    let dir = tempdir().unwrap();
    let json_path = dir.path().join("keep.json");
    let db_path = dir.path().join("keep.db");

    for path in [&json_path, &db_path] {
        pareto()
            .arg("generate")
            .arg(path)
            .args(["--nodes", "4"])
            .assert()
            .success();
    }
    let before = fs::read_to_string(&json_path).unwrap();

    pareto()
        .arg("generate")
        .arg(&json_path)
        .args(["--force", "--dimensions", "2"])
        .assert()
        .code(2);
    assert_eq!(fs::read_to_string(&json_path).unwrap(), before);

    pareto()
        .arg("generate")
        .arg(&db_path)
        .args(["--force", "--kind", "random", "--nodes", "0"])
        .assert()
        .code(2);
    let report = search_json(&db_path, "N0", Some("N3"));
    assert_eq!(report["frontiers"][0]["paths"][0]["hops"], 3);

    // No partial files are left next to the outputs
    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".partial"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn test_generate_force_replaces_database() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("graph.db");

    pareto()
        .arg("generate")
        .arg(&db)
        .args(["--nodes", "3"])
        .assert()
        .success();
    pareto()
        .arg("generate")
        .arg(&db)
        .args(["--force", "--nodes", "6"])
        .assert()
        .success();

    let conn = Connection::open(&db).unwrap();
    let edges: i64 = conn
        .query_row("SELECT COUNT(*) FROM edges", [], |r| r.get(0))
        .unwrap();
    assert_eq!(edges, 5);
}

#[test]
fn test_generate_chain_rejects_other_dimensions() {
    let dir = tempdir().unwrap();
    pareto()
        .arg("generate")
        .arg(dir.path().join("chain.json"))
        .args(["--dimensions", "2"])
        .assert()
        .code(2);
}

#[test]
fn test_generate_random_json_output() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("random.db");

    let output = pareto()
        .args(["--format", "json", "generate"])
        .arg(&path)
        .args(["--kind", "random", "--nodes", "20", "--degree", "2", "--dimensions", "4"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let created = stdout_json(&output);
    assert_eq!(created["status"], "created");
    assert_eq!(created["kind"], "random");
    assert_eq!(created["nodes"], 20);
    assert_eq!(created["edges"], 40);
    assert_eq!(created["dimensions"], 4);

    let conn = Connection::open(&path).unwrap();
    let edges: i64 = conn
        .query_row("SELECT COUNT(*) FROM edges", [], |r| r.get(0))
        .unwrap();
    assert_eq!(edges, 40);
}

/// The same seeded graph searched from JSON and from SQLite gives identical frontiers
#[test]
fn test_sqlite_and_json_backends_agree() {
    let dir = tempdir().unwrap();
    let json_path = dir.path().join("random.json");
    let db_path = dir.path().join("random.db");

    for path in [&json_path, &db_path] {
        pareto()
            .arg("generate")
            .arg(path)
            .args(["--kind", "random", "--nodes", "30", "--degree", "3", "--seed", "11"])
            .assert()
            .success();
    }

    let from_json = search_json(&json_path, "N0", None);
    let from_db = search_json(&db_path, "N0", None);
    assert_eq!(from_json["frontiers"], from_db["frontiers"]);
    assert_eq!(
        from_json["stats"]["expansions"],
        from_db["stats"]["expansions"]
    );
}

// ============================================================================
// edge add / remove
// ============================================================================

#[test]
fn test_edge_add_and_remove() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("chain.db");

    pareto()
        .arg("generate")
        .arg(&db)
        .args(["--nodes", "3"])
        .assert()
        .success();

    // Chain cost to N2 is (1,1,1) + (2,3,4) = (3,4,5)
    let report = search_json(&db, "N0", Some("N2"));
    assert_eq!(report["frontiers"][0]["paths"][0]["hops"], 2);

    pareto()
        .args(["edge", "add"])
        .arg(&db)
        .args(["N0", "N2", "1", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added edge N0 -> N2 (1, 1, 1)"));

    // The direct edge dominates the chain
    let report = search_json(&db, "N0", Some("N2"));
    let paths = report["frontiers"][0]["paths"].as_array().unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0]["hops"], 1);

    let conn = Connection::open(&db).unwrap();
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM edges WHERE source_id = 'N0' AND target_id = 'N2'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(count, 1);
    drop(conn);

    pareto()
        .args(["edge", "remove"])
        .arg(&db)
        .args(["N0", "N2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 edge N0 -> N2"));

    let output = pareto()
        .args(["--format", "json", "edge", "remove"])
        .arg(&db)
        .args(["N0", "N2"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stderr_error(&output)["error"]["type"], "edge_not_found");
}

#[test]
fn test_edge_add_creates_endpoints() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("chain.db");

    pareto()
        .arg("generate")
        .arg(&db)
        .args(["--nodes", "2"])
        .assert()
        .success();

    let output = pareto()
        .args(["--format", "json", "edge", "add"])
        .arg(&db)
        .args(["N1", "X", "0.5", "0", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["status"], "added");

    let report = search_json(&db, "N0", Some("X"));
    let cost: Vec<f64> =
        serde_json::from_value(report["frontiers"][0]["paths"][0]["cost"].clone()).unwrap();
    assert_eq!(cost, vec![1.5, 1.0, 3.0]);
}

#[test]
fn test_edge_add_rejects_bad_cost() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("chain.db");

    pareto()
        .arg("generate")
        .arg(&db)
        .args(["--nodes", "2"])
        .assert()
        .success();

    // Wrong arity
    pareto()
        .args(["edge", "add"])
        .arg(&db)
        .args(["N0", "N1", "1", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid cost"));

    // Negative component
    pareto()
        .args(["edge", "add"])
        .arg(&db)
        .args(["N0", "N1", "1", "-2", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("negative"));
}

#[test]
fn test_edge_remove_unknown_node() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("chain.db");

    pareto()
        .arg("generate")
        .arg(&db)
        .args(["--nodes", "2"])
        .assert()
        .success();

    pareto()
        .args(["edge", "remove"])
        .arg(&db)
        .args(["N0", "Q"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown node: Q"));
}

#[test]
fn test_edge_requires_existing_database() {
    let dir = tempdir().unwrap();

    pareto()
        .args(["edge", "add"])
        .arg(dir.path().join("missing.db"))
        .args(["A", "B", "1", "1", "1"])
        .assert()
        .code(2);
}

/// A cost corrupted behind the tool's back surfaces as a data error during search
#[test]
fn test_search_reports_corrupt_stored_cost() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("chain.db");

    pareto()
        .arg("generate")
        .arg(&db)
        .args(["--nodes", "3"])
        .assert()
        .success();

    let conn = Connection::open(&db).unwrap();
    conn.execute(
        "UPDATE edges SET cost = '[1, -5, 1]' WHERE source_id = 'N1'",
        [],
    )
    .unwrap();
    drop(conn);

    pareto()
        .arg("search")
        .arg(&db)
        .args(["--source", "N0"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid cost"));
}
