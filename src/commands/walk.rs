//! `edgewise bfs` / `edgewise dfs` commands - traversal order from a start element

use std::fmt;

use crate::cli::{Cli, OutputFormat};
use edgewise_core::error::Result;
use edgewise_core::graph::Graph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Breadth,
    Depth,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Breadth => write!(f, "bfs"),
            Order::Depth => write!(f, "dfs"),
        }
    }
}

/// Execute a traversal and print the visit order
pub fn execute(cli: &Cli, graph: &mut Graph<String>, start: &str, order: Order) -> Result<()> {
    let start = start.to_string();
    let mut visited: Vec<String> = Vec::new();
    match order {
        Order::Breadth => graph.bfs(&start, |v| visited.push(v.element().clone()))?,
        Order::Depth => graph.dfs(&start, |v| visited.push(v.element().clone()))?,
    }

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "traversal": order.to_string(),
                "start": start,
                "order": visited,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for element in &visited {
                println!("{}", element);
            }
        }
    }

    Ok(())
}
