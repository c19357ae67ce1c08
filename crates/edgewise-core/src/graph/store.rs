use std::fmt;

use crate::bail_invalid;
use crate::config::EngineConfig;
use crate::error::{GraphError, Result};
use crate::graph::types::{Color, Neighbor, Vertex, VertexId, VertexView};

/// Undirected graph over elements of type `T`.
///
/// Vertices are kept in insertion order. Every edge is stored as two
/// reciprocal neighbor records carrying the same positive weight. Lookups
/// by element are linear scans.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    pub(crate) vertices: Vec<Vertex<T>>,
    edges: usize,
    next_key: u64,
    config: EngineConfig,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl<T> Graph<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            vertices: Vec::new(),
            edges: 0,
            next_key: 0,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config;
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Elements in insertion order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.vertices.iter(),
        }
    }

    /// Run `action` on every vertex in insertion order
    pub fn for_each_vertex<F>(&self, mut action: F)
    where
        F: FnMut(VertexView<'_, T>),
    {
        for index in 0..self.vertices.len() {
            action(VertexView { graph: self, index });
        }
    }

    /// Remove every vertex and edge
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges = 0;
    }

    /// Read-only view of the vertex behind a handle
    pub fn view(&self, id: VertexId) -> Result<VertexView<'_, T>> {
        let index = self.resolve(id)?;
        Ok(VertexView { graph: self, index })
    }

    /// Element behind a handle, if the vertex still exists
    pub fn element(&self, id: VertexId) -> Option<&T> {
        self.resolve(id).ok().map(|i| &self.vertices[i].element)
    }

    /// Overwrite the traversal color of a vertex
    pub fn set_color(&mut self, id: VertexId, color: Color) -> Result<()> {
        let index = self.resolve(id)?;
        self.vertices[index].color = color;
        Ok(())
    }

    pub(crate) fn handle(&self, index: usize) -> VertexId {
        VertexId {
            index,
            key: self.vertices[index].key,
        }
    }

    /// Arena index for a handle. The cached index is tried first; after
    /// removals shift the arena the vertex is found by its key.
    pub(crate) fn resolve(&self, id: VertexId) -> Result<usize> {
        match self.vertices.get(id.index) {
            Some(v) if v.key == id.key => Ok(id.index),
            _ => self
                .vertices
                .iter()
                .position(|v| v.key == id.key)
                .ok_or_else(|| GraphError::invalid_argument("vertex handle", "vertex was removed")),
        }
    }

    pub(crate) fn neighbor_position(&self, from: usize, to: usize) -> Option<usize> {
        self.vertices[from]
            .neighbors
            .iter()
            .position(|n| n.target == to)
    }

    pub(crate) fn reset_transient(&mut self) {
        for vertex in &mut self.vertices {
            vertex.reset_transient();
        }
    }
}

impl<T: PartialEq> Graph<T> {
    pub(crate) fn find(&self, element: &T) -> Option<usize> {
        self.vertices.iter().position(|v| v.element == *element)
    }

    pub fn contains(&self, element: &T) -> bool {
        self.find(element).is_some()
    }

    /// True if both elements are in the graph and share an edge
    pub fn are_neighbors(&self, a: &T, b: &T) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(v), Some(u)) => self.neighbor_position(v, u).is_some(),
            _ => false,
        }
    }
}

fn check_weight(weight: f64) -> Result<()> {
    if !weight.is_finite() || weight <= 0.0 {
        bail_invalid!("edge weight", weight);
    }
    Ok(())
}

impl<T: PartialEq + fmt::Debug> Graph<T> {
    pub(crate) fn require(&self, element: &T) -> Result<usize> {
        self.find(element)
            .ok_or_else(|| GraphError::not_found("element", format!("{:?}", element)))
    }

    /// Handle for the vertex holding `element`
    pub fn vertex(&self, element: &T) -> Result<VertexId> {
        let index = self.require(element)?;
        Ok(self.handle(index))
    }

    /// Add a new, unconnected vertex
    pub fn add_vertex(&mut self, element: T) -> Result<VertexId> {
        if self.contains(&element) {
            return Err(GraphError::duplicate(format!("{:?}", element)));
        }
        tracing::trace!(element = ?element, vertices = self.vertices.len() + 1, "add_vertex");

        let key = self.next_key;
        self.next_key += 1;
        self.vertices.push(Vertex::new(element, key));
        Ok(self.handle(self.vertices.len() - 1))
    }

    /// Connect two elements with an edge of weight 1
    pub fn connect(&mut self, a: &T, b: &T) -> Result<()> {
        self.connect_weighted(a, b, 1.0)
    }

    /// Connect two elements with an edge of the given positive weight
    pub fn connect_weighted(&mut self, a: &T, b: &T, weight: f64) -> Result<()> {
        if a == b {
            bail_invalid!("edge", format!("self-loop on {:?}", a));
        }
        let v = self.require(a)?;
        let u = self.require(b)?;
        if self.neighbor_position(v, u).is_some() {
            bail_invalid!("edge", format!("{:?} and {:?} are already connected", a, b));
        }
        check_weight(weight)?;

        self.vertices[v].neighbors.push(Neighbor { target: u, weight });
        self.vertices[u].neighbors.push(Neighbor { target: v, weight });
        self.edges += 1;
        tracing::trace!(a = ?a, b = ?b, weight, edges = self.edges, "connect");
        Ok(())
    }

    /// Remove the edge between two elements
    pub fn disconnect(&mut self, a: &T, b: &T) -> Result<()> {
        let v = self.require(a)?;
        let u = self.require(b)?;
        let (Some(vu), Some(uv)) = (self.neighbor_position(v, u), self.neighbor_position(u, v))
        else {
            bail_invalid!("edge", format!("{:?} and {:?} are not connected", a, b));
        };

        self.vertices[v].neighbors.remove(vu);
        self.vertices[u].neighbors.remove(uv);
        self.edges -= 1;
        tracing::trace!(a = ?a, b = ?b, edges = self.edges, "disconnect");
        Ok(())
    }

    /// Remove a vertex and every edge incident to it
    pub fn remove_vertex(&mut self, element: &T) -> Result<()> {
        let p = self.require(element)?;
        let removed = self.vertices.remove(p);

        let shifted = |i: usize| if i > p { i - 1 } else { i };
        for record in &removed.neighbors {
            let target = shifted(record.target);
            self.vertices[target].neighbors.retain(|n| n.target != p);
            self.edges -= 1;
        }
        for vertex in &mut self.vertices {
            for n in &mut vertex.neighbors {
                n.target = shifted(n.target);
            }
        }

        tracing::trace!(
            element = ?element,
            removed_edges = removed.neighbors.len(),
            edges = self.edges,
            "remove_vertex"
        );
        Ok(())
    }

    /// Weight of the edge between two elements
    pub fn edge_weight(&self, a: &T, b: &T) -> Result<f64> {
        let v = self.require(a)?;
        let u = self.require(b)?;
        match self.neighbor_position(v, u) {
            Some(i) => Ok(self.vertices[v].neighbors[i].weight),
            None => Err(GraphError::invalid_argument(
                "edge",
                format!("{:?} and {:?} are not connected", a, b),
            )),
        }
    }

    /// Change the weight of an existing edge on both endpoints
    pub fn set_edge_weight(&mut self, a: &T, b: &T, weight: f64) -> Result<()> {
        let v = self.require(a)?;
        let u = self.require(b)?;
        let (Some(vu), Some(uv)) = (self.neighbor_position(v, u), self.neighbor_position(u, v))
        else {
            bail_invalid!("edge", format!("{:?} and {:?} are not connected", a, b));
        };
        check_weight(weight)?;

        self.vertices[v].neighbors[vu].weight = weight;
        self.vertices[u].neighbors[uv].weight = weight;
        Ok(())
    }

    /// Total weight along a sequence of handles. Consecutive vertices must be adjacent.
    pub fn path_weight(&self, path: &[VertexId]) -> Result<f64> {
        let indices = path
            .iter()
            .map(|&id| self.resolve(id))
            .collect::<Result<Vec<_>>>()?;

        let mut total = 0.0;
        for pair in indices.windows(2) {
            let (v, u) = (pair[0], pair[1]);
            match self.neighbor_position(v, u) {
                Some(i) => total += self.vertices[v].neighbors[i].weight,
                None => bail_invalid!(
                    "path",
                    format!(
                        "{:?} and {:?} are not connected",
                        self.vertices[v].element, self.vertices[u].element
                    )
                ),
            }
        }
        Ok(total)
    }
}

/// Iterator over a graph's elements in insertion order
#[derive(Debug, Clone)]
pub struct Iter<'g, T> {
    inner: std::slice::Iter<'g, Vertex<T>>,
}

impl<'g, T> Iterator for Iter<'g, T> {
    type Item = &'g T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|v| &v.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'g, T> IntoIterator for &'g Graph<T> {
    type Item = &'g T;
    type IntoIter = Iter<'g, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two graphs are equal when they hold the same elements and the same
/// adjacency, regardless of insertion order or edge weights.
impl<T: PartialEq> PartialEq for Graph<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() || self.edges != other.edges {
            return false;
        }
        self.vertices.iter().all(|v| {
            other.contains(&v.element)
                && v.neighbors
                    .iter()
                    .all(|n| other.are_neighbors(&v.element, &self.vertices[n.target].element))
        })
    }
}

/// Renders as `{a, b, c}, {(a, b), (b, c)}`, listing each edge once
impl<T: fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v.element)?;
        }
        write!(f, "}}, {{")?;
        let mut first = true;
        for (i, v) in self.vertices.iter().enumerate() {
            for n in v.neighbors.iter().filter(|n| n.target > i) {
                if !first {
                    write!(f, ", ")?;
                }
                first = false;
                write!(f, "({}, {})", v.element, self.vertices[n.target].element)?;
            }
        }
        write!(f, "}}")
    }
}
