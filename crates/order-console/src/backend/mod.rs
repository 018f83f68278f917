//! # In-process Catalog Backend
//!
//! An in-memory stand-in for the remote data service: one
//! [`RecordActor`](record_actor::RecordActor) per collection.
//!
//! ## Structure
//!
//! - [`records`] - [`Record`](record_actor::Record) implementations for the four collections
//! - [`actions`] - [`OrderAction`], the status write path
//! - [`error`] - [`RecordError`]
//! - factory functions that create an actor together with its typed client
//!
//! ## Usage
//!
//! ```rust
//! use order_console::backend;
//! use order_console::model::CustomerCreate;
//! use record_actor::CollectionClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, customers) = backend::customer_actor(32);
//!     tokio::spawn(actor.run());
//!
//!     let id = customers
//!         .create_customer(CustomerCreate { name: "Alice".to_string() })
//!         .await?;
//!     assert_eq!(id.to_string(), "c1");
//!     assert_eq!(customers.list().await?.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod error;
pub mod records;

pub use actions::*;
pub use error::*;

use crate::clients::{CustomerClient, OrderClient, OrderItemClient, ProductClient};
use crate::model::{Customer, Order, OrderItem, Product};
use record_actor::RecordActor;

/// Creates the customer actor and its client.
pub fn customer_actor(buffer_size: usize) -> (RecordActor<Customer>, CustomerClient) {
    let (actor, inner) = RecordActor::new(buffer_size);
    (actor, CustomerClient::new(inner))
}

/// Creates the product actor and its client.
pub fn product_actor(buffer_size: usize) -> (RecordActor<Product>, ProductClient) {
    let (actor, inner) = RecordActor::new(buffer_size);
    (actor, ProductClient::new(inner))
}

/// Creates the order actor and its client.
pub fn order_actor(buffer_size: usize) -> (RecordActor<Order>, OrderClient) {
    let (actor, inner) = RecordActor::new(buffer_size);
    (actor, OrderClient::new(inner))
}

/// Creates the order-line actor and its client.
pub fn order_item_actor(buffer_size: usize) -> (RecordActor<OrderItem>, OrderItemClient) {
    let (actor, inner) = RecordActor::new(buffer_size);
    (actor, OrderItemClient::new(inner))
}
