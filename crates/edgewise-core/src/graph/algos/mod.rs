//! Shortest-path algorithms
//!
//! - `bfs`: unweighted shortest paths (hop count)
//! - `dijkstra`: weighted shortest paths over an indexable priority queue
//! - `shared`: backward path reconstruction used by both

pub mod bfs;
pub mod dijkstra;
pub mod shared;
