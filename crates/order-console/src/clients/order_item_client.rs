//! # Order Line Client
//!
//! Wraps a `RecordClient<OrderItem>`. Line keys are internal to the backend, so
//! creation returns nothing the caller needs to keep.
use crate::backend::RecordError;
use crate::model::{OrderItem, OrderItemCreate};
use async_trait::async_trait;
use record_actor::{CollectionClient, RecordClient, StoreError};
use tracing::{debug, instrument};

/// Client for the order-line collection.
#[derive(Clone)]
pub struct OrderItemClient {
    inner: RecordClient<OrderItem>,
}

impl OrderItemClient {
    pub fn new(inner: RecordClient<OrderItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn add_line(&self, params: OrderItemCreate) -> Result<(), RecordError> {
        debug!("Sending request");
        self.inner
            .create(params)
            .await
            .map(|_| ())
            .map_err(RecordError::from)
    }
}

#[async_trait]
impl CollectionClient<OrderItem> for OrderItemClient {
    type Error = RecordError;

    fn inner(&self) -> &RecordClient<OrderItem> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        RecordError::from(e)
    }
}
