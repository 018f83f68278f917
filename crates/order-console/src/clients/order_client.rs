//! # Order Client
//!
//! Wraps a `RecordClient<Order>` and exposes the single write path the
//! console uses: the order status.
use crate::backend::{OrderAction, OrderActionResult, RecordError};
use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use async_trait::async_trait;
use record_actor::{CollectionClient, RecordClient, StoreError};
use tracing::{debug, info, instrument};

/// Client for the order collection.
#[derive(Clone)]
pub struct OrderClient {
    inner: RecordClient<Order>,
}

impl OrderClient {
    pub fn new(inner: RecordClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderId, RecordError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(RecordError::from)
    }

    /// Replace an order's status.
    ///
    /// Returns the status the order had before the change.
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<OrderStatus, RecordError> {
        debug!("Sending status change to actor");
        let OrderActionResult::SetStatus(previous) = self
            .inner
            .perform_action(id, OrderAction::SetStatus(status))
            .await
            .map_err(RecordError::from)?;
        info!(%previous, %status, "Status changed");
        Ok(previous)
    }
}

#[async_trait]
impl CollectionClient<Order> for OrderClient {
    type Error = RecordError;

    fn inner(&self) -> &RecordClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        RecordError::from(e)
    }
}
