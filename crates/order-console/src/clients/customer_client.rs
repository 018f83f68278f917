//! # Customer Client
//!
//! Wraps a `RecordClient<Customer>`; reads come from [`CollectionClient`].
use crate::backend::RecordError;
use crate::model::{Customer, CustomerCreate, CustomerId};
use async_trait::async_trait;
use record_actor::{CollectionClient, RecordClient, StoreError};
use tracing::{debug, instrument};

/// Client for the customer collection.
#[derive(Clone)]
pub struct CustomerClient {
    inner: RecordClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: RecordClient<Customer>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_customer(&self, params: CustomerCreate) -> Result<CustomerId, RecordError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(RecordError::from)
    }
}

#[async_trait]
impl CollectionClient<Customer> for CustomerClient {
    type Error = RecordError;

    fn inner(&self) -> &RecordClient<Customer> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        RecordError::from(e)
    }
}
