use super::parse::parse_strategy;
use clap::Args;
use edgewise_core::heap::QueueStrategy;

#[derive(Args, Debug, Clone)]
pub struct WalkArgs {
    /// Element to start from
    pub start: String,
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Source element
    pub from: String,

    /// Destination element
    pub to: String,

    /// Minimise total edge weight instead of hop count
    #[arg(long, short)]
    pub weighted: bool,

    /// Priority queue backend for weighted paths (auto, binary-heap, linear-scan)
    #[arg(long, requires = "weighted", value_parser = parse_strategy)]
    pub strategy: Option<QueueStrategy>,
}
