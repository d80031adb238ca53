//! Entities of the remote knowledge graph.

use serde::{Deserialize, Serialize};

use crate::DATASET_KIND;

/// Kind tag attached to every entity: a major category plus an optional
/// sub-category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityKind {
    pub major: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minor: Option<String>,
}

impl EntityKind {
    #[must_use]
    pub fn new(major: impl Into<String>) -> Self {
        Self {
            major: major.into(),
            minor: None,
        }
    }

    #[must_use]
    pub fn with_minor(mut self, minor: impl Into<String>) -> Self {
        self.minor = Some(minor.into());
        self
    }

    /// Placeholder kind for entities whose record carries no `kind`.
    #[must_use]
    pub fn unknown() -> Self {
        Self::new("UNKNOWN")
    }

    /// Datasets are leaves of the category tree.
    #[must_use]
    pub fn is_dataset(&self) -> bool {
        self.major == DATASET_KIND
    }
}

/// Entity record as located inside a decoded search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityInfo {
    pub id: String,
    pub name: String,
    pub kind: EntityKind,
    #[serde(default)]
    pub created: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminated: Option<String>,
}
