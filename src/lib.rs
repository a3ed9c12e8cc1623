//! # coursegraph - course catalog with prerequisite DAG
//!
//! Courses are kept in an ordered registry and linked by prerequisite edges
//! in a directed graph. Every prerequisite insertion is checked by a
//! depth-first search and rejected if it would close a cycle, so the graph
//! stays a DAG at all times.
//!
//! The crate also ships two sorting helpers (`heap_sort`, `merge_sort`).

pub mod config;
pub mod core;
pub mod error;
pub mod graph;
pub mod sort;

// Re-export commonly used types
pub use config::{CatalogConfig, DuplicatePolicy};
pub use crate::core::{
    Course, CourseCatalog, CourseNumber, CourseRequisite, Requisite, RequisiteKind,
    RequisiteSnapshot, SharedCatalog,
};
pub use error::{Error, Result};
pub use graph::{CycleGuard, DependencyGraph, DfsForest, Edge, VertexId};
pub use sort::{heap_sort, merge_sort};
