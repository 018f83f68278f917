use crate::model::{OrderId, ProductId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One line of one order. Many lines belong to one [`Order`](crate::model::Order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: u64,
}

impl OrderItem {
    pub fn new(
        order_id: impl Into<OrderId>,
        product_id: impl Into<ProductId>,
        quantity: u32,
        price: u64,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            product_id: product_id.into(),
            quantity,
            price,
        }
    }
}

/// Storage key the in-process backend files order lines under.
///
/// Lines have no identity of their own on the wire; this key never leaves the
/// backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(pub u32);

impl From<u32> for LineId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line_{}", self.0)
    }
}

/// Payload for adding an order line to the in-process backend.
#[derive(Debug, Clone)]
pub struct OrderItemCreate {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: u64,
}
