use crate::model::{OrderId, OrderStatus, ParseStatusError};
use crate::service::ServiceError;
use std::fmt::Display;
use thiserror::Error;

/// One of the four collections the console reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Customers,
    Products,
    Orders,
    OrderItems,
}

impl Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Collection::Customers => "customers",
            Collection::Products => "products",
            Collection::Orders => "orders",
            Collection::OrderItems => "order items",
        })
    }
}

#[derive(Debug, Error)]
pub enum ConsoleError {
    /// A collection read failed; the whole batch was discarded.
    #[error("failed to fetch {collection}: {source}")]
    Fetch {
        collection: Collection,
        source: ServiceError,
    },

    /// The remote status write failed; the board was restored.
    #[error("status change for order {order_id} failed: {source}")]
    Mutation {
        order_id: OrderId,
        source: ServiceError,
    },

    #[error("unknown order: {0}")]
    UnknownOrder(OrderId),

    #[error("order {order_id} is already {status}")]
    NoOpTransition {
        order_id: OrderId,
        status: OrderStatus,
    },

    #[error("a status change for order {0} is already in flight")]
    MutationInFlight(OrderId),

    #[error(transparent)]
    InvalidStatus(#[from] ParseStatusError),
}
