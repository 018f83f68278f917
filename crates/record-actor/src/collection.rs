//! # CollectionClient Trait
//!
//! Shared read operations for collection-specific client wrappers, built on top
//! of a generic [`RecordClient`].
use crate::{Record, RecordClient, StoreError};
use async_trait::async_trait;

/// Trait for collection-specific clients to inherit the standard reads.
///
/// Implementors supply the inner client and an error mapping; `get` and `list`
/// come for free.
///
/// ```rust
/// use record_actor::{CollectionClient, Record, RecordClient, StoreError};
///
/// #[derive(Clone, Debug)] struct Tag { label: String }
/// #[derive(Debug)] struct TagCreate;
/// #[derive(Debug)] enum TagAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct TagError(String);
///
/// impl Record for Tag {
///     type Id = u32; type Create = TagCreate; type Action = TagAction;
///     type ActionResult = (); type Error = TagError;
///     fn from_create_params(_: u32, _: TagCreate) -> Result<Self, TagError> {
///         Ok(Self { label: String::new() })
///     }
///     fn apply(&mut self, action: TagAction) -> Result<(), TagError> { match action {} }
/// }
///
/// struct TagClient { inner: RecordClient<Tag> }
///
/// impl CollectionClient<Tag> for TagClient {
///     type Error = TagError;
///     fn inner(&self) -> &RecordClient<Tag> { &self.inner }
///     fn map_error(e: StoreError) -> TagError { TagError(e.to_string()) }
/// }
///
/// async fn usage(client: TagClient) {
///     let _ = client.get(1).await;
///     let _ = client.list().await;
/// }
/// ```
#[async_trait]
pub trait CollectionClient<T: Record>: Send + Sync {
    /// The collection-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic RecordClient.
    fn inner(&self) -> &RecordClient<T>;

    /// Map store errors to the collection error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch one row by key.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch the whole collection in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
