//! Edgewise Core Library
//!
//! In-memory undirected graph engine: a vertex store with weighted edges,
//! breadth-first and depth-first traversal, and shortest paths by hop count
//! or by total weight over an indexable priority queue.

pub mod config;
pub mod error;
pub mod graph;
pub mod heap;
pub mod logging;

pub use config::EngineConfig;
pub use error::{GraphError, Result};
pub use graph::{Color, Graph, VertexId, VertexView};
pub use heap::QueueStrategy;
