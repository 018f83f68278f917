//! # Product Client
//!
//! Wraps a `RecordClient<Product>`; reads come from [`CollectionClient`].
use crate::backend::RecordError;
use crate::model::{Product, ProductCreate, ProductId};
use async_trait::async_trait;
use record_actor::{CollectionClient, RecordClient, StoreError};
use tracing::{debug, instrument};

/// Client for the product collection.
#[derive(Clone)]
pub struct ProductClient {
    inner: RecordClient<Product>,
}

impl ProductClient {
    pub fn new(inner: RecordClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, RecordError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(RecordError::from)
    }
}

#[async_trait]
impl CollectionClient<Product> for ProductClient {
    type Error = RecordError;

    fn inner(&self) -> &RecordClient<Product> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        RecordError::from(e)
    }
}
