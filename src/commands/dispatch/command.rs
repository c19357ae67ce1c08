//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use edgewise_core::config::EngineConfig;
use edgewise_core::error::Result;
use edgewise_core::graph::Graph;
use tracing::debug;

/// Build the graph described by `--config`, `--vertex` and `--edge`.
///
/// Vertices are added in flag order, then edges; an edge endpoint that was
/// not listed with `--vertex` is added when the edge is.
pub fn build_graph(cli: &Cli) -> Result<Graph<String>> {
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let mut graph = Graph::with_config(config);

    for element in &cli.vertices {
        graph.add_vertex(element.clone())?;
    }
    for edge in &cli.edges {
        for endpoint in [&edge.a, &edge.b] {
            if !graph.contains(endpoint) {
                graph.add_vertex(endpoint.clone())?;
            }
        }
        graph.connect_weighted(&edge.a, &edge.b, edge.weight)?;
    }

    Ok(graph)
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    pub fn build_graph(&self) -> Result<Graph<String>> {
        let graph = build_graph(self.cli)?;
        debug!(
            elapsed = ?self.start.elapsed(),
            vertices = graph.len(),
            edges = graph.edge_count(),
            "build_graph"
        );
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("edgewise {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Query an undirected weighted graph from the command line.");
        println!();
        println!("Run `edgewise --help` for usage information.");
        Ok(())
    }
}
