//! Graph engine: the directed requisite graph and cycle detection.

pub mod cycle;
pub mod dependency;

pub use cycle::{CycleGuard, DfsForest};
pub use dependency::{DependencyGraph, Edge, EdgeInsertion, VertexId};
