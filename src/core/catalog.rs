//! The course catalog: registry plus requisite graph.

use super::course::{Course, CourseNumber};
use super::registry::CourseRegistry;
use super::requisite::CourseRequisite;
use crate::config::{CatalogConfig, DuplicatePolicy};
use crate::error::{Error, Result};
use crate::graph::{CycleGuard, DependencyGraph, VertexId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Borrowed view of a requisite edge, resolved to course identifiers.
#[derive(Debug, PartialEq, Eq)]
pub struct Requisite<'a, K, R> {
    prerequisite: &'a K,
    dependent: &'a K,
    payload: &'a R,
}

impl<K, R> Clone for Requisite<'_, K, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, R> Copy for Requisite<'_, K, R> {}

impl<'a, K, R> Requisite<'a, K, R> {
    /// The course that must come first.
    pub fn prerequisite(&self) -> &'a K {
        self.prerequisite
    }

    /// The course that requires [`prerequisite`](Self::prerequisite).
    pub fn dependent(&self) -> &'a K {
        self.dependent
    }

    pub fn payload(&self) -> &'a R {
        self.payload
    }

    pub fn to_snapshot(&self) -> RequisiteSnapshot<K, R>
    where
        K: Clone,
        R: Clone,
    {
        RequisiteSnapshot {
            prerequisite: self.prerequisite.clone(),
            dependent: self.dependent.clone(),
            payload: self.payload.clone(),
        }
    }
}

/// Owned copy of a requisite edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequisiteSnapshot<K = CourseNumber, R = CourseRequisite> {
    pub prerequisite: K,
    pub dependent: K,
    pub payload: R,
}

/// Course catalog with a prerequisite graph that is always acyclic.
#[derive(Debug, Clone)]
pub struct CourseCatalog<K = CourseNumber, R = CourseRequisite> {
    config: CatalogConfig,
    registry: CourseRegistry<K>,
    graph: DependencyGraph<K, R>,
}

impl<K, R> Default for CourseCatalog<K, R> {
    fn default() -> Self {
        Self {
            config: CatalogConfig::default(),
            registry: CourseRegistry::default(),
            graph: DependencyGraph::default(),
        }
    }
}

impl<K: Ord + Clone + fmt::Display, R> CourseCatalog<K, R> {
    /// An empty catalog with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn get_course(&self, id: &K) -> Option<&Course<K>> {
        self.registry.get(id)
    }

    /// Add a course, or rename it if the identifier is already known.
    pub fn add_course(&mut self, id: K, name: impl Into<String>) -> &Course<K> {
        self.registry.put(id, name, &mut self.graph)
    }

    /// The edge `prerequisite -> dependent`, if one exists.
    ///
    /// Both courses must exist.
    pub fn get_requisite(
        &self,
        prerequisite: &K,
        dependent: &K,
    ) -> Result<Option<Requisite<'_, K, R>>> {
        let u = self.vertex_of(prerequisite, Error::CourseNotFound)?;
        let v = self.vertex_of(dependent, Error::CourseNotFound)?;
        Ok(self.requisite_at(u, v))
    }

    /// Make `prerequisite` a requisite of `dependent`.
    ///
    /// Fails with `InvalidCourseIdentifier` if either course is missing and
    /// with `CircularPrerequisite` if the edge would close a cycle. A failed
    /// call leaves the graph exactly as it was.
    pub fn add_prerequisite(
        &mut self,
        prerequisite: &K,
        dependent: &K,
        payload: R,
    ) -> Result<Requisite<'_, K, R>> {
        let u = self.vertex_of(prerequisite, Error::InvalidCourseIdentifier)?;
        let v = self.vertex_of(dependent, Error::InvalidCourseIdentifier)?;

        if self.graph.get_edge(u, v).is_some() {
            match self.config.duplicate_requisites {
                DuplicatePolicy::Reject => {
                    tracing::warn!(%prerequisite, %dependent, "requisite already exists");
                    return Err(Error::DuplicateRequisite {
                        prerequisite: prerequisite.to_string(),
                        dependent: dependent.to_string(),
                    });
                }
                DuplicatePolicy::Overwrite => {
                    // The edge was already part of an acyclic graph.
                    self.graph.insert_edge(u, v, payload)?;
                    tracing::debug!(%prerequisite, %dependent, "requisite payload replaced");
                    return self.inserted(u, v);
                }
            }
        }

        self.graph.insert_edge(u, v, payload)?;

        let forest = CycleGuard::run(&self.graph, u)?;
        if !forest.is_acyclic() {
            let cycle = forest
                .cycle()
                .unwrap_or_default()
                .iter()
                .filter_map(|&w| self.graph.label(w).map(ToString::to_string))
                .collect::<Vec<_>>();
            self.graph.remove_edge(u, v);

            tracing::warn!(%prerequisite, %dependent, "rejected circular prerequisite");
            return Err(Error::CircularPrerequisite {
                prerequisite: prerequisite.to_string(),
                dependent: dependent.to_string(),
                cycle,
            });
        }

        tracing::debug!(%prerequisite, %dependent, "requisite added");
        self.inserted(u, v)
    }

    /// Courses in identifier order.
    pub fn courses(&self) -> impl Iterator<Item = &Course<K>> + '_ {
        self.registry.iter()
    }

    pub fn course_count(&self) -> usize {
        self.registry.len()
    }

    pub fn requisite_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All requisites, ordered by (prerequisite, dependent).
    pub fn requisites(&self) -> Vec<Requisite<'_, K, R>> {
        let mut all: Vec<Requisite<'_, K, R>> = self
            .graph
            .edges()
            .filter_map(|e| self.requisite_at(e.source(), e.destination()))
            .collect();
        all.sort_by(|a, b| {
            a.prerequisite
                .cmp(b.prerequisite)
                .then_with(|| a.dependent.cmp(b.dependent))
        });
        all
    }

    /// Direct prerequisites of `id`, sorted.
    pub fn prerequisites_of(&self, id: &K) -> Result<Vec<&K>> {
        let v = self.vertex_of(id, Error::CourseNotFound)?;
        let mut found: Vec<&K> = self
            .graph
            .incoming_edges(v)
            .filter_map(|e| self.graph.label(e.source()))
            .collect();
        found.sort();
        Ok(found)
    }

    /// Courses that list `id` as a direct requisite, sorted.
    pub fn dependents_of(&self, id: &K) -> Result<Vec<&K>> {
        let u = self.vertex_of(id, Error::CourseNotFound)?;
        let mut found: Vec<&K> = self
            .graph
            .outgoing_edges(u)
            .filter_map(|e| self.graph.label(e.destination()))
            .collect();
        found.sort();
        Ok(found)
    }

    /// Full-graph check: no cycle anywhere.
    pub fn is_acyclic(&self) -> bool {
        CycleGuard::run_all(&self.graph).is_acyclic()
    }

    /// The underlying graph, read-only.
    pub fn graph(&self) -> &DependencyGraph<K, R> {
        &self.graph
    }

    fn vertex_of(&self, id: &K, missing: fn(String) -> Error) -> Result<VertexId> {
        self.registry
            .get(id)
            .map(Course::vertex)
            .ok_or_else(|| missing(id.to_string()))
    }

    fn requisite_at(&self, u: VertexId, v: VertexId) -> Option<Requisite<'_, K, R>> {
        let edge = self.graph.get_edge(u, v)?;
        Some(Requisite {
            prerequisite: self.graph.label(u)?,
            dependent: self.graph.label(v)?,
            payload: edge.payload(),
        })
    }

    fn inserted(&self, u: VertexId, v: VertexId) -> Result<Requisite<'_, K, R>> {
        self.requisite_at(u, v).ok_or(Error::UnknownVertex(v.index()))
    }
}

impl<K: Ord + Clone + fmt::Display, R> fmt::Display for CourseCatalog<K, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Courses:")?;
        for course in self.courses() {
            writeln!(f, "{course}")?;
        }
        write!(f, "{}", self.graph)
    }
}
