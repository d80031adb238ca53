//! The graph service seam the explorer walks.

use std::fmt::Display;
use std::future::Future;

use ogx_client::{ClientError, ReadApiClient};
use ogx_core::{EntityInfo, RelationResult, RelationsRequest};

/// Entity lookups and relation listings, as needed by
/// [`GraphExplorer`](crate::GraphExplorer).
pub trait GraphSource: Send + Sync {
    type Error: Display + Send;

    /// Metadata of one entity; `Ok(None)` when the service has no record.
    fn find_entity(
        &self,
        entity_id: &str,
    ) -> impl Future<Output = Result<Option<EntityInfo>, Self::Error>> + Send;

    /// Relations of one entity matching `request`.
    fn relations(
        &self,
        entity_id: &str,
        request: &RelationsRequest,
    ) -> impl Future<Output = Result<Vec<RelationResult>, Self::Error>> + Send;
}

impl GraphSource for ReadApiClient {
    type Error = ClientError;

    async fn find_entity(&self, entity_id: &str) -> Result<Option<EntityInfo>, ClientError> {
        Self::find_entity(self, entity_id).await
    }

    async fn relations(
        &self,
        entity_id: &str,
        request: &RelationsRequest,
    ) -> Result<Vec<RelationResult>, ClientError> {
        Self::relations(self, entity_id, request).await
    }
}
