//! Ordered registry of courses.

use super::course::Course;
use crate::graph::DependencyGraph;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

/// Courses keyed by identifier, iterated in identifier order.
///
/// The registry is the only place a course's name can change, and the only
/// place vertices are created for courses: one vertex per identifier.
#[derive(Debug, Clone)]
pub struct CourseRegistry<K> {
    courses: BTreeMap<K, Course<K>>,
}

impl<K> Default for CourseRegistry<K> {
    fn default() -> Self {
        Self {
            courses: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Clone + fmt::Display> CourseRegistry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &K) -> Option<&Course<K>> {
        self.courses.get(id)
    }

    pub fn contains(&self, id: &K) -> bool {
        self.courses.contains_key(id)
    }

    /// Insert a course or rename an existing one.
    ///
    /// A new identifier gets a fresh vertex in `graph`; a known identifier
    /// keeps its vertex and only has its name overwritten.
    pub fn put<R>(
        &mut self,
        id: K,
        name: impl Into<String>,
        graph: &mut DependencyGraph<K, R>,
    ) -> &Course<K> {
        let name = name.into();
        match self.courses.entry(id) {
            Entry::Occupied(entry) => {
                let course = entry.into_mut();
                tracing::debug!(course = %course.identifier(), name = %name, "renaming course");
                course.set_name(name);
                course
            }
            Entry::Vacant(entry) => {
                let identifier = entry.key().clone();
                let vertex = graph.insert_vertex(identifier.clone());
                tracing::debug!(course = %identifier, vertex = vertex.index(), "adding course");
                entry.insert(Course::new(identifier, name, vertex))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Courses in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Course<K>> + '_ {
        self.courses.values()
    }
}
