use std::fmt;

use super::Graph;
use crate::heap::SlotArena;

/// Opaque handle to a vertex in a [`Graph`].
///
/// Handles survive the removal of other vertices. A handle to a removed
/// vertex is rejected rather than aliased to a different vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexId {
    pub(crate) index: usize,
    pub(crate) key: u64,
}

/// Transient visitation marker used while a traversal runs.
///
/// Every vertex is `Neutral` between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Neutral,
    /// Not yet reached by the running traversal
    Unvisited,
    /// Reached (queued or already processed)
    Visited,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Neutral => write!(f, "neutral"),
            Color::Unvisited => write!(f, "unvisited"),
            Color::Visited => write!(f, "visited"),
        }
    }
}

/// One directed half of an undirected weighted edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Neighbor {
    pub(crate) target: usize,
    pub(crate) weight: f64,
}

/// Arena record for a vertex
#[derive(Debug, Clone)]
pub(crate) struct Vertex<T> {
    pub(crate) element: T,
    pub(crate) key: u64,
    pub(crate) color: Color,
    pub(crate) distance: f64,
    pub(crate) slot: Option<usize>,
    pub(crate) neighbors: Vec<Neighbor>,
}

impl<T> Vertex<T> {
    pub(crate) fn new(element: T, key: u64) -> Self {
        Self {
            element,
            key,
            color: Color::Neutral,
            distance: 0.0,
            slot: None,
            neighbors: Vec::new(),
        }
    }

    pub(crate) fn reset_transient(&mut self) {
        self.color = Color::Neutral;
        self.distance = 0.0;
        self.slot = None;
    }
}

/// Queue keys are the tentative distances stored on each vertex.
///
/// Implemented on the crate-private arena rather than on `Graph`, so only
/// the shortest-path code can move vertex slots.
impl<T> SlotArena for Vec<Vertex<T>> {
    fn less(&self, a: usize, b: usize) -> bool {
        self[a].distance < self[b].distance
    }

    fn slot(&self, item: usize) -> Option<usize> {
        self.get(item).and_then(|v| v.slot)
    }

    fn set_slot(&mut self, item: usize, slot: Option<usize>) {
        self[item].slot = slot;
    }
}

/// Borrowed, read-only view of a vertex
#[derive(Debug)]
pub struct VertexView<'g, T> {
    pub(crate) graph: &'g Graph<T>,
    pub(crate) index: usize,
}

impl<T> Clone for VertexView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VertexView<'_, T> {}

impl<'g, T> VertexView<'g, T> {
    fn vertex(&self) -> &'g Vertex<T> {
        &self.graph.vertices[self.index]
    }

    pub fn id(&self) -> VertexId {
        self.graph.handle(self.index)
    }

    pub fn element(&self) -> &'g T {
        &self.vertex().element
    }

    pub fn degree(&self) -> usize {
        self.vertex().neighbors.len()
    }

    pub fn color(&self) -> Color {
        self.vertex().color
    }

    /// Tentative distance left by a running shortest-path search; 0 between calls
    pub fn distance(&self) -> f64 {
        self.vertex().distance
    }

    /// Adjacent vertices with the weight of the connecting edge, in connection order
    pub fn neighbors(&self) -> impl Iterator<Item = (VertexView<'g, T>, f64)> + 'g {
        let graph = self.graph;
        self.vertex().neighbors.iter().map(move |n| {
            (
                VertexView {
                    graph,
                    index: n.target,
                },
                n.weight,
            )
        })
    }
}
