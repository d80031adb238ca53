//! Exploration settings.

use serde::{Deserialize, Serialize};

const fn default_max_depth() -> usize {
    10
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExploreConfig {
    /// Deepest level fetched below a top-level category.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}
