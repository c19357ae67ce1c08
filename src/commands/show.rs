//! `edgewise show` command - print the graph

use std::collections::HashSet;

use crate::cli::{Cli, OutputFormat};
use edgewise_core::error::Result;
use edgewise_core::graph::Graph;

/// Execute the show command
pub fn execute(cli: &Cli, graph: &Graph<String>) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let mut edges = Vec::new();
            let mut seen = HashSet::new();
            // Each edge is listed once, from the endpoint added first
            graph.for_each_vertex(|v| {
                for (n, weight) in v.neighbors() {
                    if !seen.contains(&n.id()) {
                        edges.push(serde_json::json!({
                            "a": v.element(),
                            "b": n.element(),
                            "weight": weight,
                        }));
                    }
                }
                seen.insert(v.id());
            });

            let output = serde_json::json!({
                "vertex_count": graph.len(),
                "edge_count": graph.edge_count(),
                "vertices": graph.iter().collect::<Vec<_>>(),
                "edges": edges,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", graph);
            if !cli.quiet {
                println!("{} vertices, {} edges", graph.len(), graph.edge_count());
            }
        }
    }

    Ok(())
}
