//! The category tree produced by one exploration.

use serde::{Deserialize, Serialize};

use crate::entity::{EntityInfo, EntityKind};
use crate::relation::{Direction, RelationResult};

/// A node of the discovered category/dataset tree.
///
/// Datasets are always leaves: [`CategoryNode::push_child`] refuses to attach
/// children to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryNode {
    pub id: String,
    pub name: String,
    pub kind: EntityKind,
    pub children: Vec<CategoryNode>,
    pub is_dataset: bool,
    pub is_category: bool,
    pub depth: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_direction: Option<Direction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

impl CategoryNode {
    /// Build a childless node for `entity` at `depth`. The name falls back to
    /// the id when the entity has none.
    #[must_use]
    pub fn from_entity(entity: EntityInfo, depth: usize) -> Self {
        let is_dataset = entity.kind.is_dataset();
        let name = if entity.name.is_empty() {
            entity.id.clone()
        } else {
            entity.name
        };
        Self {
            id: entity.id,
            name,
            kind: entity.kind,
            children: Vec::new(),
            is_dataset,
            is_category: !is_dataset,
            depth,
            relation_id: None,
            relation_name: None,
            relation_direction: None,
            start_time: None,
            end_time: None,
        }
    }

    /// Record the edge this node was reached through.
    pub fn attach_relation(&mut self, relation: &RelationResult) {
        self.relation_id = Some(relation.id.clone());
        self.relation_name = Some(relation.name.clone());
        self.relation_direction = Some(relation.direction);
        self.start_time.clone_from(&relation.start_time);
        self.end_time.clone_from(&relation.end_time);
    }

    /// Append a child. Returns `false` (and drops the child) for datasets.
    pub fn push_child(&mut self, child: Self) -> bool {
        if self.is_dataset {
            return false;
        }
        self.children.push(child);
        true
    }

    /// Depth-first, pre-order iterator over this node and its descendants.
    pub fn iter(&self) -> impl Iterator<Item = &Self> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }
}

/// Outcome of one exploration from a root entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreResult {
    pub entity_id: String,
    pub categories: Vec<CategoryNode>,
    /// Raw top-level `AS_CATEGORY` relations, kept for diagnostics.
    pub relations: Vec<RelationResult>,
    pub loading: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExploreResult {
    /// A result for `entity_id` that has not been filled in yet.
    #[must_use]
    pub fn pending(entity_id: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            categories: Vec::new(),
            relations: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// Finish successfully with the discovered categories.
    #[must_use]
    pub fn complete(mut self, categories: Vec<CategoryNode>) -> Self {
        self.categories = categories;
        self.loading = false;
        self
    }

    /// Finish with an error. Any categories gathered so far are discarded.
    #[must_use]
    pub fn fail(mut self, message: impl Into<String>) -> Self {
        self.categories.clear();
        self.error = Some(message.into());
        self.loading = false;
        self
    }

    /// True when the result ended through cancellation rather than failure.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.error.as_deref() == Some(crate::CANCELLED)
    }

    /// Every node of every category tree, depth-first.
    pub fn nodes(&self) -> impl Iterator<Item = &CategoryNode> {
        self.categories.iter().flat_map(CategoryNode::iter)
    }
}
