//! Cycle detection in the requisite graph.
//!
//! [`CycleGuard`] walks every vertex reachable from a start vertex in
//! depth-first order and records the DFS forest (the edge that discovered
//! each vertex) along with every back edge it meets. A back edge points at a
//! vertex whose exploration has not finished yet, i.e. an ancestor on the
//! current path, and therefore closes a cycle. Edges into vertices that are
//! already finished are forward or cross edges and are ignored, which keeps
//! diamond-shaped graphs from being reported as cyclic.
//!
//! The walk uses an explicit stack of frames instead of recursion, so long
//! prerequisite chains are bounded by memory rather than call depth.

use super::dependency::{DependencyGraph, VertexId};
use crate::error::Result;
use std::collections::HashMap;

/// Visitation state of a vertex during the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unknown,
    /// On the current path; no discovery edge recorded yet.
    Active,
    Finished,
}

/// One level of the explicit DFS stack.
#[derive(Debug)]
struct Frame {
    vertex: VertexId,
    neighbours: Vec<VertexId>,
    cursor: usize,
    discovered_by: Option<(VertexId, VertexId)>,
}

impl Frame {
    fn enter<K, R>(
        graph: &DependencyGraph<K, R>,
        vertex: VertexId,
        discovered_by: Option<(VertexId, VertexId)>,
    ) -> Self {
        let mut neighbours: Vec<VertexId> = graph
            .outgoing_edges(vertex)
            .map(|e| e.destination())
            .collect();
        // Stable visiting order keeps reported cycles reproducible.
        neighbours.sort_unstable();
        Frame {
            vertex,
            neighbours,
            cursor: 0,
            discovered_by,
        }
    }
}

/// Result of a depth-first walk.
#[derive(Debug, Clone)]
pub struct DfsForest {
    marks: Vec<Mark>,
    forest: HashMap<VertexId, (VertexId, VertexId)>,
    back_edges: Vec<(VertexId, VertexId)>,
    cycle: Option<Vec<VertexId>>,
}

impl DfsForest {
    fn new(vertex_count: usize) -> Self {
        Self {
            marks: vec![Mark::Unknown; vertex_count],
            forest: HashMap::new(),
            back_edges: Vec::new(),
            cycle: None,
        }
    }

    /// No back edge was found.
    pub fn is_acyclic(&self) -> bool {
        self.back_edges.is_empty()
    }

    pub fn back_edges(&self) -> &[(VertexId, VertexId)] {
        &self.back_edges
    }

    /// The tree edge that discovered `v`. Roots have none.
    pub fn discovery_edge(&self, v: VertexId) -> Option<(VertexId, VertexId)> {
        self.forest.get(&v).copied()
    }

    pub fn is_known(&self, v: VertexId) -> bool {
        self.marks
            .get(v.index())
            .is_some_and(|mark| *mark != Mark::Unknown)
    }

    pub fn known_count(&self) -> usize {
        self.marks.iter().filter(|m| **m != Mark::Unknown).count()
    }

    /// First cycle found, as a closed path `[a, b, ..., a]`.
    pub fn cycle(&self) -> Option<&[VertexId]> {
        self.cycle.as_deref()
    }

    fn explore<K, R>(&mut self, graph: &DependencyGraph<K, R>, root: VertexId) {
        if self.marks[root.index()] != Mark::Unknown {
            return;
        }

        self.marks[root.index()] = Mark::Active;
        let mut stack = vec![Frame::enter(graph, root, None)];

        while let Some(frame) = stack.last_mut() {
            if let Some(&next) = frame.neighbours.get(frame.cursor) {
                frame.cursor += 1;
                let current = frame.vertex;

                match self.marks[next.index()] {
                    Mark::Unknown => {
                        self.marks[next.index()] = Mark::Active;
                        stack.push(Frame::enter(graph, next, Some((current, next))));
                    }
                    Mark::Active => {
                        self.back_edges.push((current, next));
                        if self.cycle.is_none() {
                            self.cycle = Some(active_path(&stack, next));
                        }
                    }
                    Mark::Finished => {}
                }
            } else {
                let vertex = frame.vertex;
                let discovered_by = frame.discovered_by;
                stack.pop();

                self.marks[vertex.index()] = Mark::Finished;
                if let Some(edge) = discovered_by {
                    self.forest.insert(vertex, edge);
                }
            }
        }
    }
}

/// Path from `ancestor` down the active stack, closed back at `ancestor`.
fn active_path(stack: &[Frame], ancestor: VertexId) -> Vec<VertexId> {
    let start = stack
        .iter()
        .position(|f| f.vertex == ancestor)
        .unwrap_or(0);
    let mut path: Vec<VertexId> = stack[start..].iter().map(|f| f.vertex).collect();
    path.push(ancestor);
    path
}

/// Depth-first cycle detector over a [`DependencyGraph`].
pub struct CycleGuard;

impl CycleGuard {
    /// Walk everything reachable from `start`.
    pub fn run<K, R>(graph: &DependencyGraph<K, R>, start: VertexId) -> Result<DfsForest> {
        graph.check_vertex(start)?;

        let mut forest = DfsForest::new(graph.vertex_count());
        forest.explore(graph, start);

        tracing::trace!(
            start = start.index(),
            visited = forest.known_count(),
            back_edges = forest.back_edges.len(),
            "dfs finished"
        );
        Ok(forest)
    }

    /// Walk the whole graph, starting a new tree at every unvisited vertex.
    pub fn run_all<K, R>(graph: &DependencyGraph<K, R>) -> DfsForest {
        let mut forest = DfsForest::new(graph.vertex_count());
        for v in graph.vertices() {
            forest.explore(graph, v);
        }
        forest
    }
}
