//! Command implementations for all edgewise commands

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use edgewise_core::error::Result;
use tracing::debug;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let mut graph = ctx.build_graph()?;
        let cli = ctx.cli;

        let result = match self {
            Commands::Show => commands::show::execute(cli, &graph),
            Commands::Neighbors { a, b } => commands::neighbors::execute(cli, &graph, a, b),
            Commands::Bfs(args) => {
                commands::walk::execute(cli, &mut graph, &args.start, commands::walk::Order::Breadth)
            }
            Commands::Dfs(args) => {
                commands::walk::execute(cli, &mut graph, &args.start, commands::walk::Order::Depth)
            }
            Commands::Connected => commands::connected::execute(cli, &mut graph),
            Commands::Path(args) => commands::path::execute(cli, &mut graph, args),
        };

        debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        result
    }
}
