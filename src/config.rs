//! Catalog configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment variable read by [`CatalogConfig::from_env`].
pub const DUPLICATE_POLICY_ENV: &str = "COURSEGRAPH_DUPLICATE_REQUISITES";

/// What to do when a requisite is added for a pair that is already linked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail with `Error::DuplicateRequisite`.
    #[default]
    Reject,
    /// Replace the stored payload and keep the edge.
    Overwrite,
}

impl DuplicatePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicatePolicy::Reject => "reject",
            DuplicatePolicy::Overwrite => "overwrite",
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for DuplicatePolicy {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(DuplicatePolicy::Reject),
            "overwrite" => Ok(DuplicatePolicy::Overwrite),
            other => Err(Error::Config(format!(
                "unknown duplicate requisite policy: {other}"
            ))),
        }
    }
}

/// Settings for a [`CourseCatalog`](crate::CourseCatalog).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct CatalogConfig {
    pub duplicate_requisites: DuplicatePolicy,
}

impl CatalogConfig {
    pub fn with_duplicate_requisites(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_requisites = policy;
        self
    }

    /// Parse a JSON document. Missing keys fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a config from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CatalogConfig::default();
        if let Some(value) = lookup(DUPLICATE_POLICY_ENV) {
            config.duplicate_requisites = DuplicatePolicy::try_from(value.as_str())?;
        }
        Ok(config)
    }
}
