//! Course identifiers and course records.

use crate::error::{Error, Result};
use crate::graph::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Department code plus number, e.g. `EECS 2011`.
///
/// Ordered by department first, then number. Serialized as its display
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseNumber {
    department: String,
    number: u32,
}

impl CourseNumber {
    /// Build a course number. The department code is upper-cased.
    pub fn new(department: &str, number: u32) -> Result<Self> {
        let department = department.trim();
        if !department.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::InvalidCourseNumber(format!("{department} {number}")));
        }
        Ok(Self {
            department: department.to_ascii_uppercase(),
            number,
        })
    }

    /// A course number with no department, e.g. `101`.
    pub fn bare(number: u32) -> Self {
        Self {
            department: String::new(),
            number,
        }
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn number(&self) -> u32 {
        self.number
    }
}

impl fmt::Display for CourseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.department.is_empty() {
            write!(f, "{}", self.number)
        } else {
            write!(f, "{} {}", self.department, self.number)
        }
    }
}

impl FromStr for CourseNumber {
    type Err = Error;

    /// Accepts `EECS 2011`, `EECS2011` and `101`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| Error::InvalidCourseNumber(s.to_string()))?;
        let (department, digits) = trimmed.split_at(split);

        let number = digits
            .parse::<u32>()
            .map_err(|_| Error::InvalidCourseNumber(s.to_string()))?;
        CourseNumber::new(department, number).map_err(|_| Error::InvalidCourseNumber(s.to_string()))
    }
}

impl TryFrom<String> for CourseNumber {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<CourseNumber> for String {
    fn from(number: CourseNumber) -> Self {
        number.to_string()
    }
}

/// A course in the catalog.
///
/// The registry owns every `Course`; callers only ever see shared
/// references or clones, so renames go through the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course<K = CourseNumber> {
    identifier: K,
    name: String,
    vertex: VertexId,
}

impl<K> Course<K> {
    pub(crate) fn new(identifier: K, name: String, vertex: VertexId) -> Self {
        Self {
            identifier,
            name,
            vertex,
        }
    }

    pub fn identifier(&self) -> &K {
        &self.identifier
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The graph vertex bound to this course.
    pub fn vertex(&self) -> VertexId {
        self.vertex
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl<K: fmt::Display> fmt::Display for Course<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.identifier, self.name)
    }
}
