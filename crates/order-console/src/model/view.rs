//! Display-ready projections of orders.
//!
//! An [`OrderView`] is an [`Order`] joined with its customer's name and its
//! resolved lines. Views are never persisted: every refresh rebuilds them from
//! scratch, and the optimistic mutator is the only other writer.

use crate::model::{CustomerId, Order, OrderId, OrderItem, OrderStatus, ProductId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Shown when an order references a customer the service did not return.
pub const UNKNOWN_CUSTOMER: &str = "unknown customer";

/// Shown when a line references a product the service did not return.
pub const PRODUCT_NOT_FOUND: &str = "product not found";

/// An order line with its product name resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItemView {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: u64,
    pub product_name: String,
}

impl OrderItemView {
    pub fn new(item: &OrderItem, product_name: impl Into<String>) -> Self {
        Self {
            order_id: item.order_id.clone(),
            product_id: item.product_id.clone(),
            quantity: item.quantity,
            price: item.price,
            product_name: product_name.into(),
        }
    }

    /// Line total, `price × quantity`.
    pub fn subtotal(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity))
    }
}

/// An order with its customer name and lines resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderView {
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub order_date: DateTime<Utc>,
    pub total_amount: u64,
    pub status: OrderStatus,
    pub payment_method: String,
    pub customer_name: String,
    pub items: Vec<OrderItemView>,
}

impl OrderView {
    pub fn new(order: &Order, customer_name: impl Into<String>, items: Vec<OrderItemView>) -> Self {
        Self {
            order_id: order.order_id.clone(),
            customer_id: order.customer_id.clone(),
            order_date: order.order_date,
            total_amount: order.total_amount,
            status: order.status,
            payment_method: order.payment_method.clone(),
            customer_name: customer_name.into(),
            items,
        }
    }

    /// Same view with a different status; every other field is copied.
    pub fn with_status(&self, status: OrderStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtotal_multiplies_price_by_quantity() {
        let item = OrderItem::new("o1", "p1", 3, 100);
        let view = OrderItemView::new(&item, "Pen");
        assert_eq!(view.subtotal(), 300);
    }

    #[test]
    fn test_with_status_changes_only_status() {
        let order = Order {
            order_id: "o1".into(),
            customer_id: "c1".into(),
            order_date: DateTime::<Utc>::from_timestamp(1_714_557_600, 0).unwrap(),
            total_amount: 300,
            status: OrderStatus::Pending,
            payment_method: "cash".to_string(),
        };
        let view = OrderView::new(&order, "Alice", Vec::new());
        let changed = view.with_status(OrderStatus::Completed);

        assert_eq!(changed.status, OrderStatus::Completed);
        assert_eq!(changed.with_status(OrderStatus::Pending), view);
    }
}
