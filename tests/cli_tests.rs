//! Integration tests for the edgewise CLI
//!
//! These tests run the edgewise binary against graphs built from flags.

mod common;

use common::{edgewise, stderr_json, stdout_json, DIAMOND, TREE};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    edgewise()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: edgewise"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("connected"));
}

#[test]
fn test_version_flag() {
    edgewise()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("edgewise"));
}

#[test]
fn test_no_command_prints_banner() {
    edgewise()
        .assert()
        .success()
        .stdout(predicate::str::contains("edgewise --help"));
}

// ============================================================================
// show / neighbors
// ============================================================================

#[test]
fn test_show_human() {
    edgewise()
        .args(["--vertex", "a", "--edge", "a:b", "--edge", "b:c", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{a, b, c}, {(a, b), (b, c)}"))
        .stdout(predicate::str::contains("3 vertices, 2 edges"));
}

#[test]
fn test_show_quiet_omits_summary() {
    edgewise()
        .args(["--quiet", "--edge", "a:b", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vertices").not());
}

#[test]
fn test_show_json() {
    let output = edgewise()
        .args(["--format", "json"])
        .args(DIAMOND)
        .arg("show")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["vertex_count"], 4);
    assert_eq!(json["edge_count"], 4);
    assert_eq!(json["vertices"], serde_json::json!(["a", "b", "c", "d"]));

    let edges = json["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 4);
    assert_eq!(edges[0]["a"], "a");
    assert_eq!(edges[0]["b"], "b");
    assert_eq!(edges[1]["b"], "c");
    assert_eq!(edges[1]["weight"], 4.0);
}

#[test]
fn test_neighbors() {
    edgewise()
        .args(["--edge", "a:b:2", "--vertex", "c", "neighbors", "b", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("b -- a (weight 2)"));

    edgewise()
        .args(["--edge", "a:b:2", "--vertex", "c", "neighbors", "a", "c"])
        .assert()
        .success()
        .stdout("false\n");
}

// ============================================================================
// Traversals
// ============================================================================

#[test]
fn test_bfs_order() {
    edgewise()
        .args(TREE)
        .args(["bfs", "a"])
        .assert()
        .success()
        .stdout("a\nb\nc\ne\nd\n");
}

#[test]
fn test_dfs_order() {
    edgewise()
        .args(TREE)
        .args(["dfs", "a"])
        .assert()
        .success()
        .stdout("a\nb\ne\nc\nd\n");
}

#[test]
fn test_bfs_json_skips_unreachable() {
    let output = edgewise()
        .args(["--format", "json", "--vertex", "z"])
        .args(TREE)
        .args(["bfs", "d"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["traversal"], "bfs");
    assert_eq!(json["order"], serde_json::json!(["d", "c", "b", "a", "e"]));
}

#[test]
fn test_walk_missing_start_exit_code_3() {
    edgewise()
        .args(TREE)
        .args(["dfs", "zz"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_connected() {
    edgewise()
        .args(TREE)
        .arg("connected")
        .assert()
        .success()
        .stdout("true\n");

    edgewise()
        .args(TREE)
        .args(["--vertex", "island", "connected"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_connected_empty_graph_exit_code_3() {
    edgewise()
        .arg("connected")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graph is empty"));
}

// ============================================================================
// Shortest paths
// ============================================================================

#[test]
fn test_path_unweighted() {
    edgewise()
        .args(DIAMOND)
        .args(["path", "a", "d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a -> c -> d"))
        .stdout(predicate::str::contains("hops: 2"));
}

#[test]
fn test_path_weighted_all_strategies() {
    for strategy in ["auto", "binary-heap", "linear-scan"] {
        edgewise()
            .args(DIAMOND)
            .args(["path", "a", "d", "--weighted", "--strategy", strategy])
            .assert()
            .success()
            .stdout(predicate::str::contains("a -> b -> c -> d"))
            .stdout(predicate::str::contains("cost: 3"));
    }
}

#[test]
fn test_path_weighted_json() {
    let output = edgewise()
        .args(["--format", "json"])
        .args(DIAMOND)
        .args(["path", "d", "a", "--weighted", "--strategy", "linear"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["found"], true);
    assert_eq!(json["path"], serde_json::json!(["d", "c", "b", "a"]));
    assert_eq!(json["hops"], 3);
    assert_eq!(json["cost"], 3.0);
    assert_eq!(json["strategy"], "linear-scan");
}

#[test]
fn test_path_same_endpoint() {
    edgewise()
        .args(DIAMOND)
        .args(["path", "b", "b", "--weighted"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cost: 0"));
}

#[test]
fn test_path_unreachable_is_not_an_error() {
    edgewise()
        .args(DIAMOND)
        .args(["--vertex", "z", "path", "a", "z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no path from a to z"));

    let output = edgewise()
        .args(["--format", "json", "--vertex", "z"])
        .args(DIAMOND)
        .args(["path", "z", "a", "--weighted"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["found"], false);
    assert_eq!(json["path"], serde_json::json!([]));
    assert!(json["cost"].is_null());
}

#[test]
fn test_path_missing_element_json_envelope() {
    let output = edgewise()
        .args(["--format", "json"])
        .args(DIAMOND)
        .args(["path", "a", "zz"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json = stderr_json(&output);
    assert_eq!(json["error"]["type"], "not_found");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_strategy_requires_weighted() {
    edgewise()
        .args(DIAMOND)
        .args(["path", "a", "d", "--strategy", "linear-scan"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_strategy_json_usage_error() {
    let output = edgewise()
        .args(["--format", "json"])
        .args(DIAMOND)
        .args(["path", "a", "d", "--weighted", "--strategy", "fibonacci"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr_json(&output)["error"]["type"], "usage_error");
}

// ============================================================================
// Graph construction errors
// ============================================================================

#[test]
fn test_invalid_edges_exit_code_2() {
    for edge in ["a:b:-1", "a:b:0", "a:a"] {
        edgewise()
            .args(["--edge", edge, "show"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("error: invalid"));
    }
}

#[test]
fn test_malformed_edge_flag() {
    edgewise()
        .args(["--edge", "a", "show"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("A:B"));
}

#[test]
fn test_duplicate_edge_exit_code_2() {
    edgewise()
        .args(["--edge", "a:b", "--edge", "b:a", "show"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already connected"));
}

#[test]
fn test_duplicate_vertex_exit_code_3() {
    edgewise()
        .args(["--vertex", "a", "--vertex", "a", "show"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already in graph"));
}

#[test]
fn test_quiet_suppresses_human_errors() {
    edgewise()
        .args(["--quiet", "--vertex", "a", "--vertex", "a", "show"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_selects_queue_strategy() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("edgewise.toml");
    std::fs::write(&path, "queue = \"linear-scan\"\n").unwrap();

    let output = edgewise()
        .args(["--format", "json", "--config"])
        .arg(&path)
        .args(DIAMOND)
        .args(["path", "a", "d", "--weighted"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["strategy"], "linear-scan");
    assert_eq!(json["cost"], 3.0);
}

#[test]
fn test_invalid_config_exit_code_1() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("edgewise.toml");
    std::fs::write(&path, "queue = \"fibonacci\"\n").unwrap();

    edgewise()
        .arg("--config")
        .arg(&path)
        .args(DIAMOND)
        .arg("show")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML"));
}

#[test]
fn test_missing_config_file() {
    let dir = tempdir().unwrap();

    edgewise()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("show")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_missing_config_file_json_envelope() {
    let dir = tempdir().unwrap();

    let output = edgewise()
        .args(["--format", "json", "--config"])
        .arg(dir.path().join("absent.toml"))
        .arg("show")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json = stderr_json(&output);
    assert_eq!(json["error"]["type"], "io_error");
    assert_eq!(json["error"]["code"], 1);
}
