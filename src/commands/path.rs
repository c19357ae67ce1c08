//! `edgewise path` command - shortest path between two elements
//!
//! - `edgewise path A B` - fewest edges
//! - `edgewise path A B --weighted [--strategy S]` - least total weight

use crate::cli::{Cli, OutputFormat, PathArgs};
use edgewise_core::error::Result;
use edgewise_core::graph::Graph;

/// Execute the path command
pub fn execute(cli: &Cli, graph: &mut Graph<String>, args: &PathArgs) -> Result<()> {
    let strategy = args.strategy.unwrap_or(graph.config().queue);
    let ids = if args.weighted {
        graph.shortest_path_weighted_with(&args.from, &args.to, strategy)?
    } else {
        graph.shortest_path_unweighted(&args.from, &args.to)?
    };

    let cost = graph.path_weight(&ids)?;
    let elements: Vec<&String> = ids.iter().filter_map(|id| graph.element(*id)).collect();
    let found = !elements.is_empty();

    match cli.format {
        OutputFormat::Json => {
            let mut output = serde_json::json!({
                "from": args.from,
                "to": args.to,
                "weighted": args.weighted,
                "found": found,
                "path": elements,
                "hops": found.then(|| elements.len() - 1),
                "cost": found.then_some(cost),
            });
            if args.weighted {
                if let Some(obj) = output.as_object_mut() {
                    obj.insert("strategy".to_string(), serde_json::json!(strategy.to_string()));
                }
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !found {
                println!("no path from {} to {}", args.from, args.to);
                return Ok(());
            }
            let rendered: Vec<&str> = elements.iter().map(|e| e.as_str()).collect();
            println!("{}", rendered.join(" -> "));
            if !cli.quiet {
                if args.weighted {
                    println!("cost: {}", cost);
                } else {
                    println!("hops: {}", elements.len() - 1);
                }
            }
        }
    }

    Ok(())
}
