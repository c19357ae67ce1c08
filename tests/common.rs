use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::process::Output;

pub fn edgewise() -> Command {
    cargo_bin_cmd!("edgewise")
}

/// a-b(1), b-c(1), a-c(4), c-d(1)
#[allow(dead_code)]
pub const DIAMOND: [&str; 8] = [
    "--edge", "a:b:1", "--edge", "b:c:1", "--edge", "a:c:4", "--edge", "c:d:1",
];

/// a-b, b-c, c-d, b-e with unit weights
#[allow(dead_code)]
pub const TREE: [&str; 8] = [
    "--edge", "a:b", "--edge", "b:c", "--edge", "c:d", "--edge", "b:e",
];

#[allow(dead_code)]
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}

#[allow(dead_code)]
pub fn stderr_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stderr).expect("stderr is not valid JSON")
}
