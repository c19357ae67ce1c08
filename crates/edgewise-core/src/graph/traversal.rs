use std::collections::VecDeque;
use std::fmt;

use crate::error::{GraphError, Result};
use crate::graph::types::{Color, VertexId, VertexView};
use crate::graph::Graph;

/// Pending-work container driving a traversal.
///
/// The pop discipline decides the walk: FIFO gives breadth-first order,
/// LIFO gives depth-first order.
pub trait Frontier {
    fn push(&mut self, item: usize);
    fn pop(&mut self) -> Option<usize>;
    fn is_empty(&self) -> bool;
}

impl Frontier for VecDeque<usize> {
    fn push(&mut self, item: usize) {
        self.push_back(item);
    }

    fn pop(&mut self) -> Option<usize> {
        self.pop_front()
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

impl Frontier for Vec<usize> {
    fn push(&mut self, item: usize) {
        Vec::push(self, item);
    }

    fn pop(&mut self) -> Option<usize> {
        Vec::pop(self)
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<T> Graph<T> {
    /// Visit every vertex reachable from `start` exactly once.
    ///
    /// Leaves reached vertices `Visited` and the rest `Unvisited`; callers
    /// restore neutral colors.
    fn walk<F, Q>(&mut self, start: usize, action: &mut F, frontier: &mut Q)
    where
        F: FnMut(VertexView<'_, T>),
        Q: Frontier,
    {
        for vertex in &mut self.vertices {
            vertex.color = Color::Unvisited;
        }
        self.vertices[start].color = Color::Visited;
        frontier.push(start);

        while let Some(u) = frontier.pop() {
            action(VertexView {
                graph: &*self,
                index: u,
            });
            for k in 0..self.vertices[u].neighbors.len() {
                let v = self.vertices[u].neighbors[k].target;
                if self.vertices[v].color == Color::Unvisited {
                    self.vertices[v].color = Color::Visited;
                    frontier.push(v);
                }
            }
        }
    }

    fn walk_and_reset<F, Q>(&mut self, start: usize, mut action: F, mut frontier: Q)
    where
        F: FnMut(VertexView<'_, T>),
        Q: Frontier,
    {
        self.walk(start, &mut action, &mut frontier);
        self.reset_transient();
    }

    /// True if every vertex is reachable from the first one.
    ///
    /// Fails with `EmptyStructure` on a graph without vertices.
    pub fn is_connected(&mut self) -> Result<bool> {
        if self.vertices.is_empty() {
            return Err(GraphError::empty_structure("graph"));
        }
        self.walk(0, &mut |_| {}, &mut VecDeque::<usize>::new());
        let connected = self.vertices.iter().all(|v| v.color == Color::Visited);
        self.reset_transient();
        tracing::debug!(vertices = self.vertices.len(), connected, "is_connected");
        Ok(connected)
    }
}

impl<T: PartialEq + fmt::Debug> Graph<T> {
    /// Breadth-first walk from `start`, calling `action` once per reachable vertex
    pub fn bfs<F>(&mut self, start: &T, action: F) -> Result<()>
    where
        F: FnMut(VertexView<'_, T>),
    {
        let s = self.require(start)?;
        self.walk_and_reset(s, action, VecDeque::<usize>::new());
        Ok(())
    }

    /// Depth-first walk from `start`, calling `action` once per reachable vertex
    pub fn dfs<F>(&mut self, start: &T, action: F) -> Result<()>
    where
        F: FnMut(VertexView<'_, T>),
    {
        let s = self.require(start)?;
        self.walk_and_reset(s, action, Vec::<usize>::new());
        Ok(())
    }

    /// Handles of every vertex reachable from `start`, in breadth-first order
    pub fn reachable_from(&mut self, start: &T) -> Result<Vec<VertexId>> {
        let mut reached = Vec::new();
        self.bfs(start, |v| reached.push(v.id()))?;
        Ok(reached)
    }
}
