//! `edgewise connected` command - check that the graph is one component

use crate::cli::{Cli, OutputFormat};
use edgewise_core::error::Result;
use edgewise_core::graph::Graph;

/// Execute the connected command. An empty graph is an error.
pub fn execute(cli: &Cli, graph: &mut Graph<String>) -> Result<()> {
    let connected = graph.is_connected()?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "connected": connected,
                "vertex_count": graph.len(),
                "edge_count": graph.edge_count(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => println!("{}", connected),
    }

    Ok(())
}
