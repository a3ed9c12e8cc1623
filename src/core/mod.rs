//! Domain records and the catalog that ties registry and graph together.

pub mod catalog;
pub mod course;
pub mod registry;
pub mod requisite;
pub mod shared;

pub use catalog::{CourseCatalog, Requisite, RequisiteSnapshot};
pub use course::{Course, CourseNumber};
pub use registry::CourseRegistry;
pub use requisite::{CourseRequisite, RequisiteKind};
pub use shared::SharedCatalog;
