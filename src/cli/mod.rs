//! CLI argument parsing for edgewise
//!
//! The graph is described entirely by global flags (`--vertex`, `--edge`)
//! and queried by a subcommand. Nothing is persisted between runs.

pub mod args;
pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{PathArgs, WalkArgs};
pub use output::OutputFormat;
use parse::{parse_edge, EdgeSpec};

/// Edgewise - query an undirected weighted graph from the command line
#[derive(Parser, Debug)]
#[command(name = "edgewise")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Add a vertex (can be specified multiple times)
    #[arg(long = "vertex", global = true, action = clap::ArgAction::Append)]
    pub vertices: Vec<String>,

    /// Add an edge as A:B or A:B:WEIGHT; missing endpoints are added
    #[arg(
        long = "edge",
        short = 'e',
        global = true,
        action = clap::ArgAction::Append,
        value_parser = parse_edge
    )]
    pub edges: Vec<EdgeSpec>,

    /// Engine configuration file (TOML)
    #[arg(long, global = true, env = "EDGEWISE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter directive or level (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the vertices and edges of the graph
    Show,

    /// Check whether two elements share an edge
    Neighbors {
        a: String,
        b: String,
    },

    /// Breadth-first traversal order from a start element
    Bfs(WalkArgs),

    /// Depth-first traversal order from a start element
    Dfs(WalkArgs),

    /// Check whether every vertex is reachable from the first one
    Connected,

    /// Shortest path between two elements
    Path(PathArgs),
}
