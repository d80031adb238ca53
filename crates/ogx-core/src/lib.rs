//! # ogx-core
//!
//! Shared data model for the ogx entity explorer.
//!
//! This crate holds the types every other ogx crate speaks:
//! - Entities and their `kind` tags ([`EntityKind`], [`EntityInfo`])
//! - Graph edges as returned by the read API ([`RelationResult`], [`Direction`])
//! - The discovered category tree ([`CategoryNode`], [`ExploreResult`])
//! - Request bodies for search, relations and attribute queries
//! - Cross-cutting validation errors

pub mod entity;
pub mod errors;
pub mod relation;
pub mod requests;
pub mod tree;

pub use entity::{EntityInfo, EntityKind};
pub use errors::CoreError;
pub use relation::{Direction, RelationResult};
pub use requests::{
    AttributeQuery, EntitySearchRequest, KindFilter, RelationFilter, RelationsRequest,
};
pub use tree::{CategoryNode, ExploreResult};

/// Kind major tag that marks an entity as a dataset (always a tree leaf).
pub const DATASET_KIND: &str = "Dataset";

/// Relation name linking a root entity to its top-level categories.
pub const AS_CATEGORY: &str = "AS_CATEGORY";

/// Error message reported on an exploration that was cancelled.
pub const CANCELLED: &str = "Cancelled";
