//! Directed graph of courses with requisite payloads on the edges.
//!
//! Vertices live in a dense table and are addressed by [`VertexId`]. Each
//! vertex keeps a hash-keyed map of its outgoing edges (destination ->
//! payload) and a set of incoming sources, so edge lookup and insertion are
//! expected O(1).

use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Handle to a vertex: an index into the graph's vertex table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Read-only view of a directed edge.
#[derive(Debug)]
pub struct Edge<'a, R> {
    source: VertexId,
    destination: VertexId,
    payload: &'a R,
}

// Manual impls: a derive would demand `R: Clone`.
impl<R> Clone for Edge<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Edge<'_, R> {}

impl<'a, R> Edge<'a, R> {
    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn destination(&self) -> VertexId {
        self.destination
    }

    pub fn payload(&self) -> &'a R {
        self.payload
    }

    /// The `(source, destination)` pair identifying this edge.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.source, self.destination)
    }
}

/// Outcome of [`DependencyGraph::insert_edge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeInsertion<R> {
    /// No edge existed for the pair.
    Inserted,
    /// An edge existed; its old payload is returned.
    Replaced(R),
}

#[derive(Debug, Clone)]
struct VertexData<K, R> {
    label: K,
    outgoing: HashMap<VertexId, R>,
    incoming: HashSet<VertexId>,
}

/// Directed graph keyed by dense vertex indices.
#[derive(Debug, Clone)]
pub struct DependencyGraph<K, R> {
    vertices: Vec<VertexData<K, R>>,
    edge_count: usize,
}

impl<K, R> Default for DependencyGraph<K, R> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<K, R> DependencyGraph<K, R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Add a vertex carrying `label` and return its handle.
    pub fn insert_vertex(&mut self, label: K) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(VertexData {
            label,
            outgoing: HashMap::new(),
            incoming: HashSet::new(),
        });
        id
    }

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        v.0 < self.vertices.len()
    }

    pub fn label(&self, v: VertexId) -> Option<&K> {
        self.vertices.get(v.0).map(|data| &data.label)
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId)
    }

    /// Insert the directed edge `u -> v`, replacing the payload if the pair
    /// is already linked.
    pub fn insert_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        payload: R,
    ) -> Result<EdgeInsertion<R>> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        let previous = self.vertices[u.0].outgoing.insert(v, payload);
        match previous {
            Some(old) => Ok(EdgeInsertion::Replaced(old)),
            None => {
                self.vertices[v.0].incoming.insert(u);
                self.edge_count += 1;
                Ok(EdgeInsertion::Inserted)
            }
        }
    }

    /// Remove the edge `u -> v`, returning its payload.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> Option<R> {
        let payload = self.vertices.get_mut(u.0)?.outgoing.remove(&v)?;
        if let Some(dest) = self.vertices.get_mut(v.0) {
            dest.incoming.remove(&u);
        }
        self.edge_count -= 1;
        Some(payload)
    }

    /// The edge `u -> v`, if any. Direction matters: `v -> u` is a different edge.
    pub fn get_edge(&self, u: VertexId, v: VertexId) -> Option<Edge<'_, R>> {
        let payload = self.vertices.get(u.0)?.outgoing.get(&v)?;
        Some(Edge {
            source: u,
            destination: v,
            payload,
        })
    }

    /// Edges whose source is `u`. Unknown vertices have none.
    pub fn outgoing_edges(&self, u: VertexId) -> impl Iterator<Item = Edge<'_, R>> + '_ {
        self.vertices
            .get(u.0)
            .into_iter()
            .flat_map(move |data| {
                data.outgoing.iter().map(move |(&v, payload)| Edge {
                    source: u,
                    destination: v,
                    payload,
                })
            })
    }

    /// Edges whose destination is `v`.
    pub fn incoming_edges(&self, v: VertexId) -> impl Iterator<Item = Edge<'_, R>> + '_ {
        self.vertices
            .get(v.0)
            .into_iter()
            .flat_map(move |data| data.incoming.iter())
            .filter_map(move |&u| self.get_edge(u, v))
    }

    pub fn out_degree(&self, u: VertexId) -> usize {
        self.vertices.get(u.0).map_or(0, |data| data.outgoing.len())
    }

    pub fn in_degree(&self, v: VertexId) -> usize {
        self.vertices.get(v.0).map_or(0, |data| data.incoming.len())
    }

    /// Every edge in the graph, grouped by source vertex.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_, R>> + '_ {
        self.vertices().flat_map(move |u| self.outgoing_edges(u))
    }

    /// The endpoint of `edge` that is not `u`, or `None` if `u` is not an endpoint.
    pub fn opposite(&self, u: VertexId, edge: &Edge<'_, R>) -> Option<VertexId> {
        if edge.source == u {
            Some(edge.destination)
        } else if edge.destination == u {
            Some(edge.source)
        } else {
            None
        }
    }

    pub(crate) fn check_vertex(&self, v: VertexId) -> Result<()> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(Error::UnknownVertex(v.0))
        }
    }
}

impl<K: fmt::Display + Ord, R> fmt::Display for DependencyGraph<K, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph: {} vertices, {} edges",
            self.vertex_count(),
            self.edge_count()
        )?;

        let mut lines: Vec<(&K, &K)> = self
            .edges()
            .filter_map(|e| Some((self.label(e.source)?, self.label(e.destination)?)))
            .collect();
        lines.sort();

        for (source, destination) in lines {
            writeln!(f, "  {source} -> {destination}")?;
        }
        Ok(())
    }
}
