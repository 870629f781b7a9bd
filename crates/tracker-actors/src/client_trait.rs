//! # ActorClient Trait
//!
//! Shared read operations for resource-specific client wrappers.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Implemented by domain clients (`ProductClient`, `OrderClient`, …) to inherit the
/// unscoped reads every resource supports.
///
/// Mutations stay on the wrappers themselves, because most of them carry
/// domain rules (ownership, stock) that a blanket default would bypass.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic `ResourceClient`.
    fn inner(&self) -> &ResourceClient<T>;

    /// Translate runtime failures into the resource error type.
    fn map_error(e: FrameworkError<T::Error>) -> Self::Error;

    /// Fetch a document by id without any ownership check.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Every document in the collection, ordered by id.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
