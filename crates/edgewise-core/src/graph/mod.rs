//! Undirected weighted graphs with traversal and path-finding
//!
//! - `store`: vertex arena, edges and mutators
//! - `traversal`: BFS/DFS walks over a pluggable frontier, connectivity
//! - `algos`: unweighted (BFS) and weighted (Dijkstra) shortest paths

pub mod algos;
pub mod store;
pub mod traversal;
pub mod types;

pub use store::{Graph, Iter};
pub use traversal::Frontier;
pub use types::{Color, VertexId, VertexView};
