//! # Order Console
//!
//! The core behind the order management screen:
//!
//! - [`fetcher`] - reads the four collections concurrently, all or nothing
//! - [`aggregator`] - joins them into display-ready [`OrderView`]s
//! - [`board`] - owns the current view list
//! - [`mutator`] - optimistic status changes with rollback
//! - [`dashboard`] - headline figures
//!
//! [`OrderConsole`] ties them to one [`CatalogService`].
//!
//! ```rust,ignore
//! let console = OrderConsole::new(Arc::new(catalog));
//! console.refresh().await?;
//! let change = console.change_status(&"o1".into(), OrderStatus::Completed).await?;
//! assert_eq!(change.previous, OrderStatus::Pending);
//! ```

pub mod aggregator;
pub mod board;
pub mod dashboard;
pub mod error;
pub mod fetcher;
pub mod mutator;

pub use aggregator::aggregate;
pub use board::{OrderBoard, PendingChange, Rollback};
pub use dashboard::DashboardStats;
pub use error::{Collection, ConsoleError};
pub use fetcher::{fetch_collections, Collections};

use crate::model::{OrderId, OrderStatus, OrderView};
use crate::service::CatalogService;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Outcome of a confirmed status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub order_id: OrderId,
    pub previous: OrderStatus,
    pub current: OrderStatus,
    /// Whether a follow-up refresh succeeded after the write.
    pub reconciled: bool,
}

pub struct OrderConsole {
    service: Arc<dyn CatalogService>,
    board: OrderBoard,
    refresh_after_mutation: bool,
}

impl OrderConsole {
    pub fn new(service: Arc<dyn CatalogService>) -> Self {
        Self {
            service,
            board: OrderBoard::new(),
            refresh_after_mutation: true,
        }
    }

    pub fn refresh_after_mutation(mut self, enabled: bool) -> Self {
        self.refresh_after_mutation = enabled;
        self
    }

    pub fn board(&self) -> &OrderBoard {
        &self.board
    }

    /// Re-reads every collection and rebuilds the board.
    ///
    /// On failure the board keeps the list it had.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<Arc<Vec<OrderView>>, ConsoleError> {
        let collections = fetch_collections(self.service.as_ref()).await?;
        let views = aggregate(&collections);
        let installed = self.board.install_catalog(
            views,
            collections.customers.len(),
            collections.products.len(),
        );
        info!(size = installed.len(), "Board refreshed");
        Ok(installed)
    }

    /// Changes one order's status, showing it immediately and undoing it if
    /// the service refuses.
    pub async fn change_status(
        &self,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Result<StatusChange, ConsoleError> {
        let previous =
            mutator::change_status(&self.board, self.service.as_ref(), order_id, status).await?;

        let reconciled = if self.refresh_after_mutation {
            match self.refresh().await {
                Ok(_) => true,
                Err(e) => {
                    warn!(%order_id, error = %e, "Refresh after status change failed");
                    false
                }
            }
        } else {
            false
        };

        Ok(StatusChange {
            order_id: order_id.clone(),
            previous,
            current: status,
            reconciled,
        })
    }

    /// [`change_status`](Self::change_status) with the status given by its
    /// wire name.
    pub async fn change_status_named(
        &self,
        order_id: &OrderId,
        status: &str,
    ) -> Result<StatusChange, ConsoleError> {
        let status: OrderStatus = status.parse()?;
        self.change_status(order_id, status).await
    }

    /// The current list. Never altered by later writes.
    pub fn orders(&self) -> Arc<Vec<OrderView>> {
        self.board.snapshot()
    }

    pub fn order(&self, order_id: &OrderId) -> Option<OrderView> {
        self.board.get(order_id)
    }

    pub fn dashboard(&self) -> DashboardStats {
        self.board.dashboard()
    }
}
