//! Recursive category tree discovery.

use futures::future::{BoxFuture, join_all};
use ogx_core::{AS_CATEGORY, CANCELLED, CategoryNode, ExploreResult, RelationsRequest};

use crate::cancel::CancelToken;
use crate::context::TraversalContext;
use crate::rules::ChildRelationRules;
use crate::source::GraphSource;

/// Default bound on the distance from a top-level category.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Tunables of a [`GraphExplorer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploreOptions {
    /// Nodes deeper than this are not fetched. Top-level categories sit at
    /// depth 0.
    pub max_depth: usize,
    pub rules: ChildRelationRules,
}

impl Default for ExploreOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            rules: ChildRelationRules::default(),
        }
    }
}

/// Discovers the category/dataset tree below a root entity.
#[derive(Debug, Clone)]
pub struct GraphExplorer<S> {
    source: S,
    options: ExploreOptions,
}

impl<S: GraphSource> GraphExplorer<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_options(source, ExploreOptions::default())
    }

    #[must_use]
    pub const fn with_options(source: S, options: ExploreOptions) -> Self {
        Self { source, options }
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub const fn options(&self) -> &ExploreOptions {
        &self.options
    }

    /// Explore the tree below `entity_id`.
    ///
    /// The root's `AS_CATEGORY` relations are the top-level branches; each is
    /// explored concurrently with a shared visited set, so a node reachable
    /// through several parents appears once, under whichever parent entered
    /// it first. Lookups that fail or come back empty drop that node only.
    ///
    /// The result carries an error only when the top-level relation fetch
    /// fails or `cancel` fires; a cancelled result never has categories.
    pub async fn explore(&self, entity_id: &str, cancel: &CancelToken) -> ExploreResult {
        let mut result = ExploreResult::pending(entity_id);
        if cancel.is_cancelled() {
            tracing::debug!(entity_id, "exploration cancelled before start");
            return result.fail(CANCELLED);
        }

        let request = RelationsRequest::named(AS_CATEGORY);
        let fetched = cancel
            .run_until_cancelled(self.source.relations(entity_id, &request))
            .await;
        let relations = match fetched {
            None => return result.fail(CANCELLED),
            Some(Err(error)) => {
                tracing::warn!(entity_id, %error, "failed to fetch top-level categories");
                return result.fail(error.to_string());
            }
            Some(Ok(relations)) => relations,
        };
        tracing::debug!(entity_id, count = relations.len(), "top-level category relations");
        result.relations.clone_from(&relations);

        let ctx = TraversalContext::new(cancel.clone(), self.options.max_depth);
        let ctx = &ctx;
        let branches = join_all(relations.iter().map(|rel| async move {
            let mut node = self.explore_node(ctx, rel.related_entity_id.clone(), 0).await?;
            node.attach_relation(rel);
            node.relation_name = Some(AS_CATEGORY.to_string());
            Some(node)
        }))
        .await;

        if cancel.is_cancelled() {
            tracing::debug!(entity_id, "exploration cancelled, discarding partial tree");
            return result.fail(CANCELLED);
        }

        let categories: Vec<CategoryNode> = branches.into_iter().flatten().collect();
        tracing::info!(
            entity_id,
            categories = categories.len(),
            visited = ctx.visited_count(),
            "exploration complete"
        );
        result.complete(categories)
    }

    fn explore_node<'a>(
        &'a self,
        ctx: &'a TraversalContext,
        node_id: String,
        depth: usize,
    ) -> BoxFuture<'a, Option<CategoryNode>> {
        Box::pin(async move {
            if !ctx.try_enter(&node_id, depth) {
                return None;
            }
            tracing::debug!(entity_id = %node_id, depth, "exploring node");

            let entity = match ctx
                .cancel()
                .run_until_cancelled(self.source.find_entity(&node_id))
                .await?
            {
                Ok(Some(entity)) => entity,
                Ok(None) => {
                    tracing::debug!(entity_id = %node_id, "entity not found, dropping node");
                    return None;
                }
                Err(error) => {
                    tracing::warn!(
                        entity_id = %node_id,
                        %error,
                        "entity lookup failed, dropping node"
                    );
                    return None;
                }
            };

            let mut node = CategoryNode::from_entity(entity, depth);
            if node.is_dataset {
                tracing::debug!(entity_id = %node_id, depth, "reached dataset");
                return Some(node);
            }

            let all = RelationsRequest::default();
            let relations = match ctx
                .cancel()
                .run_until_cancelled(self.source.relations(&node_id, &all))
                .await?
            {
                Ok(relations) => relations,
                Err(error) => {
                    tracing::warn!(
                        entity_id = %node_id,
                        %error,
                        "relation fetch failed, node kept without children"
                    );
                    Vec::new()
                }
            };

            let selected = self.options.rules.select(&relations);
            tracing::debug!(
                entity_id = %node_id,
                relations = relations.len(),
                children = selected.len(),
                "child relations selected"
            );

            let children = join_all(selected.into_iter().map(|rel| async move {
                let mut child = self
                    .explore_node(ctx, rel.related_entity_id.clone(), depth + 1)
                    .await?;
                child.attach_relation(rel);
                Some(child)
            }))
            .await;

            for child in children.into_iter().flatten() {
                node.push_child(child);
            }
            Some(node)
        })
    }
}
