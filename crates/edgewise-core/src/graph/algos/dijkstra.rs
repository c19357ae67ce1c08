use std::fmt;
use std::time::Instant;

use crate::error::Result;
use crate::graph::algos::shared::follows_weighted;
use crate::graph::types::VertexId;
use crate::graph::Graph;
use crate::heap::{DijkstraQueue, IndexedQueue, QueueStrategy};
use crate::trace_time;

impl<T> Graph<T> {
    /// Label every vertex with its weighted distance from `source`;
    /// unreachable vertices keep `f64::INFINITY`.
    fn weighted_distances(&mut self, source: usize, strategy: QueueStrategy) -> Result<()> {
        for vertex in &mut self.vertices {
            vertex.distance = f64::INFINITY;
        }
        self.vertices[source].distance = 0.0;

        let strategy = strategy.resolve(self.len(), self.edge_count(), self.config().dense_slack);
        tracing::debug!(
            vertices = self.len(),
            edges = self.edge_count(),
            queue = %strategy,
            "dijkstra"
        );

        // The queue orders the vertex arena itself, so slots never leave the crate
        let n = self.vertices.len();
        let mut queue = DijkstraQueue::build(strategy, &mut self.vertices, 0..n);
        while !queue.is_empty() {
            let u = queue.pop_min(&mut self.vertices)?;
            let du = self.vertices[u].distance;
            // Everything left in the queue is unreachable too
            if du == f64::INFINITY {
                break;
            }
            for k in 0..self.vertices[u].neighbors.len() {
                let neighbor = self.vertices[u].neighbors[k];
                let candidate = du + neighbor.weight;
                if candidate < self.vertices[neighbor.target].distance {
                    self.vertices[neighbor.target].distance = candidate;
                    queue.decrease_key(&mut self.vertices, neighbor.target);
                }
            }
        }
        Ok(())
    }
}

impl<T: PartialEq + fmt::Debug> Graph<T> {
    /// Minimum-weight path from `from` to `to`, using the configured queue strategy.
    ///
    /// Returns an empty path when `to` is unreachable and a single-vertex
    /// path when both ends are the same element.
    pub fn shortest_path_weighted(&mut self, from: &T, to: &T) -> Result<Vec<VertexId>> {
        let strategy = self.config().queue;
        self.shortest_path_weighted_with(from, to, strategy)
    }

    /// Like [`Graph::shortest_path_weighted`] with an explicit queue strategy
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn shortest_path_weighted_with(
        &mut self,
        from: &T,
        to: &T,
        strategy: QueueStrategy,
    ) -> Result<Vec<VertexId>> {
        let s = self.require(from)?;
        let t = self.require(to)?;
        if s == t {
            return Ok(vec![self.handle(s)]);
        }

        let start = Instant::now();
        let result = self.weighted_distances(s, strategy);
        trace_time!(start, "weighted_distances", vertices = self.len());
        let path = match result {
            Ok(()) if self.vertices[t].distance.is_finite() => {
                self.reconstruct_path(s, t, follows_weighted)
            }
            Ok(()) => Vec::new(),
            Err(e) => {
                self.reset_transient();
                return Err(e);
            }
        };
        self.reset_transient();

        tracing::debug!(hops = path.len().saturating_sub(1), found = !path.is_empty(), "weighted_path");
        Ok(path)
    }

    /// Total weight of a minimum-weight path, or `None` if unreachable
    pub fn distance_weighted(&mut self, from: &T, to: &T) -> Result<Option<f64>> {
        let s = self.require(from)?;
        let t = self.require(to)?;
        let strategy = self.config().queue;

        let result = self.weighted_distances(s, strategy);
        let distance = self.vertices[t].distance;
        self.reset_transient();
        result?;

        Ok(distance.is_finite().then_some(distance))
    }
}

#[cfg(test)]
mod tests;
