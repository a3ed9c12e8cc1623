use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the prerequisite course relates to the dependent course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequisiteKind {
    /// Must be completed first.
    #[default]
    Prerequisite,
    /// May be taken in the same term.
    Corequisite,
}

impl RequisiteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequisiteKind::Prerequisite => "prerequisite",
            RequisiteKind::Corequisite => "corequisite",
        }
    }
}

impl fmt::Display for RequisiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for RequisiteKind {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        match s {
            "prerequisite" => Ok(RequisiteKind::Prerequisite),
            "corequisite" => Ok(RequisiteKind::Corequisite),
            _ => Err(Error::Config(format!("Invalid requisite kind: {s}"))),
        }
    }
}

/// Metadata carried on a requisite edge. The catalog stores it as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRequisite {
    pub kind: RequisiteKind,
    pub minimum_grade: Option<String>,
}

impl CourseRequisite {
    pub fn prerequisite() -> Self {
        Self::default()
    }

    pub fn corequisite() -> Self {
        Self {
            kind: RequisiteKind::Corequisite,
            minimum_grade: None,
        }
    }

    pub fn with_minimum_grade(mut self, grade: impl Into<String>) -> Self {
        self.minimum_grade = Some(grade.into());
        self
    }
}

impl fmt::Display for CourseRequisite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.minimum_grade {
            Some(grade) => write!(f, "{} (min grade {grade})", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}
