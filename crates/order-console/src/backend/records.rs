//! [`Record`] implementations that let the catalog collections live in
//! [`RecordActor`](record_actor::RecordActor)s.
//!
//! Customers, products and order lines are read-only once created, so their
//! action type is uninhabited. Orders accept [`OrderAction::SetStatus`].

use super::actions::{OrderAction, OrderActionResult};
use super::error::RecordError;
use crate::model::{
    Customer, CustomerCreate, CustomerId, LineId, Order, OrderCreate, OrderId, OrderItem,
    OrderItemCreate, Product, ProductCreate, ProductId,
};
use record_actor::Record;
use std::convert::Infallible;

fn require_name(kind: &str, name: &str) -> Result<(), RecordError> {
    if name.trim().is_empty() {
        return Err(RecordError::ValidationError(format!("{kind} name must not be empty")));
    }
    Ok(())
}

impl Record for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Action = Infallible;
    type ActionResult = ();
    type Error = RecordError;

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, RecordError> {
        require_name("customer", &params.name)?;
        Ok(Self::new(id, params.name))
    }

    fn apply(&mut self, action: Infallible) -> Result<(), RecordError> {
        match action {}
    }
}

impl Record for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Action = Infallible;
    type ActionResult = ();
    type Error = RecordError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, RecordError> {
        require_name("product", &params.name)?;
        Ok(Self::new(id, params.name, params.price))
    }

    fn apply(&mut self, action: Infallible) -> Result<(), RecordError> {
        match action {}
    }
}

impl Record for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Error = RecordError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, RecordError> {
        Ok(Self {
            order_id: id,
            customer_id: params.customer_id,
            order_date: params.order_date,
            total_amount: params.total_amount,
            status: params.status,
            payment_method: params.payment_method,
        })
    }

    /// # Actions
    /// - `SetStatus`: replaces the status and returns the previous one
    fn apply(&mut self, action: OrderAction) -> Result<OrderActionResult, RecordError> {
        match action {
            OrderAction::SetStatus(status) => {
                let previous = std::mem::replace(&mut self.status, status);
                Ok(OrderActionResult::SetStatus(previous))
            }
        }
    }
}

impl Record for OrderItem {
    type Id = LineId;
    type Create = OrderItemCreate;
    type Action = Infallible;
    type ActionResult = ();
    type Error = RecordError;

    /// Lines with a zero quantity are rejected.
    fn from_create_params(_id: LineId, params: OrderItemCreate) -> Result<Self, RecordError> {
        if params.quantity == 0 {
            return Err(RecordError::ValidationError(format!(
                "line for order {} has zero quantity",
                params.order_id
            )));
        }
        Ok(Self::new(
            params.order_id,
            params.product_id,
            params.quantity,
            params.price,
        ))
    }

    fn apply(&mut self, action: Infallible) -> Result<(), RecordError> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderStatus;
    use chrono::Utc;

    #[test]
    fn test_set_status_returns_previous() {
        let mut order = Order::from_create_params(
            OrderId::from(1),
            OrderCreate {
                customer_id: CustomerId::from(1),
                order_date: Utc::now(),
                total_amount: 300,
                status: OrderStatus::Pending,
                payment_method: "cash".to_string(),
            },
        )
        .unwrap();
        assert_eq!(order.order_id, OrderId::from("o1"));

        let result = order.apply(OrderAction::SetStatus(OrderStatus::Completed));
        assert_eq!(result, Ok(OrderActionResult::SetStatus(OrderStatus::Pending)));
        assert_eq!(order.status, OrderStatus::Completed);
    }

    #[test]
    fn test_zero_quantity_line_is_rejected() {
        let result = OrderItem::from_create_params(
            LineId(1),
            OrderItemCreate {
                order_id: "o1".into(),
                product_id: "p1".into(),
                quantity: 0,
                price: 100,
            },
        );
        assert!(matches!(result, Err(RecordError::ValidationError(_))));
    }

    #[test]
    fn test_blank_names_are_rejected() {
        let customer = Customer::from_create_params(
            CustomerId::from(1),
            CustomerCreate {
                name: "  ".to_string(),
            },
        );
        assert!(customer.is_err());

        let product = Product::from_create_params(
            ProductId::from(1),
            ProductCreate {
                name: "Pen".to_string(),
                price: 100,
            },
        )
        .unwrap();
        assert_eq!(product.product_id, ProductId::from("p1"));
    }
}
