//! Thread-safe handle to a [`CourseCatalog`].
//!
//! Registry and graph form one consistency unit, so a single reader/writer
//! lock guards the whole catalog. Writers hold it for the full call,
//! including the cycle check and any rollback, so readers never observe an
//! edge that is later retracted.

use super::catalog::{CourseCatalog, RequisiteSnapshot};
use super::course::{Course, CourseNumber};
use super::requisite::CourseRequisite;
use crate::config::CatalogConfig;
use crate::error::Result;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Cloneable, shareable catalog. Clones refer to the same catalog.
pub struct SharedCatalog<K = CourseNumber, R = CourseRequisite> {
    inner: Arc<RwLock<CourseCatalog<K, R>>>,
}

impl<K, R> Clone for SharedCatalog<K, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: fmt::Debug, R: fmt::Debug> fmt::Debug for SharedCatalog<K, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedCatalog")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<K, R> Default for SharedCatalog<K, R> {
    fn default() -> Self {
        Self::from_catalog(CourseCatalog::default())
    }
}

impl<K, R> From<CourseCatalog<K, R>> for SharedCatalog<K, R> {
    fn from(catalog: CourseCatalog<K, R>) -> Self {
        Self::from_catalog(catalog)
    }
}

impl<K, R> SharedCatalog<K, R> {
    pub fn from_catalog(catalog: CourseCatalog<K, R>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }
}

impl<K: Ord + Clone + fmt::Display, R: Clone> SharedCatalog<K, R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self::from_catalog(CourseCatalog::with_config(config))
    }

    pub fn add_course(&self, id: K, name: impl Into<String>) -> Course<K> {
        self.inner.write().add_course(id, name).clone()
    }

    pub fn add_prerequisite(
        &self,
        prerequisite: &K,
        dependent: &K,
        payload: R,
    ) -> Result<RequisiteSnapshot<K, R>> {
        let mut catalog = self.inner.write();
        catalog
            .add_prerequisite(prerequisite, dependent, payload)
            .map(|edge| edge.to_snapshot())
    }

    pub fn get_course(&self, id: &K) -> Option<Course<K>> {
        self.inner.read().get_course(id).cloned()
    }

    pub fn get_requisite(
        &self,
        prerequisite: &K,
        dependent: &K,
    ) -> Result<Option<RequisiteSnapshot<K, R>>> {
        let catalog = self.inner.read();
        let edge = catalog.get_requisite(prerequisite, dependent)?;
        Ok(edge.map(|e| e.to_snapshot()))
    }

    pub fn course_count(&self) -> usize {
        self.inner.read().course_count()
    }

    pub fn requisite_count(&self) -> usize {
        self.inner.read().requisite_count()
    }

    /// Run `f` against the catalog under the read lock.
    pub fn read<T>(&self, f: impl FnOnce(&CourseCatalog<K, R>) -> T) -> T {
        f(&*self.inner.read())
    }

    /// Diagnostic listing, rendered under the read lock.
    pub fn render(&self) -> String {
        self.inner.read().to_string()
    }
}
