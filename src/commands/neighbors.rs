//! `edgewise neighbors` command - check adjacency of two elements

use crate::cli::{Cli, OutputFormat};
use edgewise_core::error::Result;
use edgewise_core::graph::Graph;

/// Execute the neighbors command
pub fn execute(cli: &Cli, graph: &Graph<String>, a: &str, b: &str) -> Result<()> {
    let (a, b) = (a.to_string(), b.to_string());
    let adjacent = graph.are_neighbors(&a, &b);
    let weight = if adjacent {
        Some(graph.edge_weight(&a, &b)?)
    } else {
        None
    };

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "a": a,
                "b": b,
                "neighbors": adjacent,
                "weight": weight,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match weight {
            Some(w) if !cli.quiet => println!("{} -- {} (weight {})", a, b, w),
            Some(_) => println!("true"),
            None => println!("false"),
        },
    }

    Ok(())
}
