//! Typed wrappers around [`RecordClient`](record_actor::RecordClient), one per
//! catalog collection.

pub mod customer_client;
pub mod order_client;
pub mod order_item_client;
pub mod product_client;

pub use customer_client::*;
pub use order_client::*;
pub use order_item_client::*;
pub use product_client::*;
