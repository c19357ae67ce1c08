use std::collections::VecDeque;
use std::fmt;

use crate::error::Result;
use crate::graph::algos::shared::follows_unweighted;
use crate::graph::types::VertexId;
use crate::graph::Graph;

/// Distance marker for vertices the search has not reached
const UNKNOWN: f64 = -1.0;

impl<T> Graph<T> {
    /// Label every vertex with its hop count from `source`; unreachable
    /// vertices keep `UNKNOWN`.
    fn hop_distances(&mut self, source: usize) {
        for vertex in &mut self.vertices {
            vertex.distance = UNKNOWN;
        }
        self.vertices[source].distance = 0.0;

        let mut queue = VecDeque::new();
        queue.push_back(source);
        while let Some(u) = queue.pop_front() {
            let next = self.vertices[u].distance + 1.0;
            for k in 0..self.vertices[u].neighbors.len() {
                let v = self.vertices[u].neighbors[k].target;
                if self.vertices[v].distance == UNKNOWN {
                    self.vertices[v].distance = next;
                    queue.push_back(v);
                }
            }
        }
    }
}

impl<T: PartialEq + fmt::Debug> Graph<T> {
    /// Path with the fewest edges from `from` to `to`, ignoring weights.
    ///
    /// Returns an empty path when `to` is unreachable and a single-vertex
    /// path when both ends are the same element.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn shortest_path_unweighted(&mut self, from: &T, to: &T) -> Result<Vec<VertexId>> {
        let s = self.require(from)?;
        let t = self.require(to)?;
        if s == t {
            return Ok(vec![self.handle(s)]);
        }

        self.hop_distances(s);
        let path = if self.vertices[t].distance == UNKNOWN {
            Vec::new()
        } else {
            self.reconstruct_path(s, t, follows_unweighted)
        };
        self.reset_transient();

        tracing::debug!(hops = path.len().saturating_sub(1), found = !path.is_empty(), "unweighted_path");
        Ok(path)
    }

    /// Number of edges on a shortest unweighted path, or `None` if unreachable
    pub fn distance_unweighted(&mut self, from: &T, to: &T) -> Result<Option<usize>> {
        let s = self.require(from)?;
        let t = self.require(to)?;

        self.hop_distances(s);
        let distance = self.vertices[t].distance;
        self.reset_transient();

        Ok((distance != UNKNOWN).then_some(distance as usize))
    }
}
