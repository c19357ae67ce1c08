use crate::graph::types::VertexId;
use crate::graph::{Color, Graph};

impl<T> Graph<T> {
    /// Walk back from `target` to `source` using the tentative distances left
    /// by a shortest-path run, then reverse into source-to-target order.
    ///
    /// `follows(current, candidate, weight)` receives the distance of the
    /// current vertex, the distance of one of its neighbors and the weight of
    /// the edge between them; it returns true when the neighbor can precede
    /// the current vertex on a shortest path.
    ///
    /// Rounding can leave neighbors at equal distances that all pass
    /// `follows`, so the walk is depth-first: vertices already tried are
    /// marked `Visited` and never re-entered, and a dead end backs up to the
    /// previous vertex. Callers reset colors afterwards.
    pub(crate) fn reconstruct_path<P>(&mut self, source: usize, target: usize, follows: P) -> Vec<VertexId>
    where
        P: Fn(f64, f64, f64) -> bool,
    {
        self.vertices[target].color = Color::Visited;
        // Each entry holds a vertex and the index of its next untried neighbor
        let mut stack = vec![(target, 0usize)];

        while let Some((current, cursor)) = stack.last_mut() {
            let current = *current;
            if current == source {
                return stack.iter().rev().map(|&(v, _)| self.handle(v)).collect();
            }

            let distance = self.vertices[current].distance;
            let neighbors = &self.vertices[current].neighbors;
            let step = neighbors[*cursor..].iter().position(|n| {
                let candidate = &self.vertices[n.target];
                candidate.color != Color::Visited
                    && follows(distance, candidate.distance, n.weight)
            });
            match step {
                Some(offset) => {
                    let previous = neighbors[*cursor + offset].target;
                    *cursor += offset + 1;
                    self.vertices[previous].color = Color::Visited;
                    stack.push((previous, 0));
                }
                None => {
                    stack.pop();
                }
            }
        }

        tracing::warn!(source, target, "path reconstruction did not reach the source");
        Vec::new()
    }
}

/// Predecessor test for hop-count distances
pub(crate) fn follows_unweighted(current: f64, candidate: f64, _weight: f64) -> bool {
    current == candidate + 1.0
}

/// Predecessor test for weighted distances
pub(crate) fn follows_weighted(current: f64, candidate: f64, weight: f64) -> bool {
    current == candidate + weight
}
