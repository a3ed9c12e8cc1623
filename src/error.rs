//! Error types for the course catalog.

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the course catalog.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A query referenced a course that was never added.
    #[error("Course {0} not found")]
    CourseNotFound(String),

    /// A prerequisite referenced a course that was never added.
    #[error("Invalid course {0}: add the course before linking it")]
    InvalidCourseIdentifier(String),

    /// The prerequisite would close a cycle. The graph is left untouched.
    #[error("Adding {prerequisite} -> {dependent} would create a cycle: {path}", path = format_cycle(cycle))]
    CircularPrerequisite {
        prerequisite: String,
        dependent: String,
        cycle: Vec<String>,
    },

    /// The pair is already linked and the policy rejects re-insertion.
    #[error("{prerequisite} is already a requisite of {dependent}")]
    DuplicateRequisite {
        prerequisite: String,
        dependent: String,
    },

    /// A vertex id that does not belong to the graph.
    #[error("Vertex {0} does not exist in the dependency graph")]
    UnknownVertex(usize),

    /// Sorting was asked to work on an absent sequence.
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),

    /// Text that does not parse as a course number.
    #[error("Invalid course number: {0:?}")]
    InvalidCourseNumber(String),

    /// Configuration value that cannot be understood.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Format a cycle path as `A → B → A`.
pub fn format_cycle(path: &[String]) -> String {
    path.join(" → ")
}
