//! Plain data records exchanged with the catalog service, and the derived
//! order views built from them.

pub mod customer;
pub mod order;
pub mod order_item;
pub mod product;
pub mod view;

pub use customer::*;
pub use order::*;
pub use order_item::*;
pub use product::*;
pub use view::*;
