//! # Catalog Service
//!
//! The console's view of the remote data service: four collection reads and
//! one status write. Nothing in the console core knows which implementation it
//! is talking to.
//!
//! - [`ActorCatalog`] - the in-process backend, one record actor per collection
//! - [`HttpCatalog`] - a REST backend reached over HTTP
//!
//! Each call is one logical request/response; there is no streaming and no
//! pagination contract.

pub mod actor;
pub mod http;

pub use actor::ActorCatalog;
pub use http::HttpCatalog;

use crate::backend::RecordError;
use crate::model::{Customer, Order, OrderId, OrderItem, OrderStatus, Product};
use async_trait::async_trait;
use thiserror::Error;

/// Errors returned by a catalog service call.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The backend answered but refused or failed the request.
    #[error("{resource} request failed: {message}")]
    Backend {
        resource: &'static str,
        message: String,
    },

    /// The addressed record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be read as the expected collection.
    #[error("could not decode {resource}: {message}")]
    Decode {
        resource: &'static str,
        message: String,
    },
}

impl ServiceError {
    pub(crate) fn from_record(resource: &'static str, e: RecordError) -> Self {
        match e {
            RecordError::NotFound(id) => ServiceError::NotFound(id),
            other => ServiceError::Backend {
                resource,
                message: other.to_string(),
            },
        }
    }
}

/// The remote data service contract.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn list_customers(&self) -> Result<Vec<Customer>, ServiceError>;

    async fn list_products(&self) -> Result<Vec<Product>, ServiceError>;

    async fn list_orders(&self) -> Result<Vec<Order>, ServiceError>;

    async fn list_order_items(&self) -> Result<Vec<OrderItem>, ServiceError>;

    /// Persist a new status for one order.
    async fn set_order_status(&self, order_id: &OrderId, status: OrderStatus)
        -> Result<(), ServiceError>;
}
