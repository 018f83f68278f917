#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use order_console::lifecycle::CatalogSystem;
use order_console::model::{
    CustomerCreate, Order, OrderCreate, OrderItemCreate, OrderStatus, ProductCreate,
};

pub fn order(id: &str, customer: &str, status: OrderStatus, total_amount: u64) -> Order {
    Order {
        order_id: id.into(),
        customer_id: customer.into(),
        order_date: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        total_amount,
        status,
        payment_method: "cash".to_string(),
    }
}

/// Alice (c1) bought three Pens (p1, 100 each) in order o1, still pending.
pub async fn alice_and_pen() -> CatalogSystem {
    let system = CatalogSystem::new(16);

    let alice = system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Alice".to_string(),
        })
        .await
        .unwrap();
    let pen = system
        .product_client
        .create_product(ProductCreate {
            name: "Pen".to_string(),
            price: 100,
        })
        .await
        .unwrap();
    let order_id = system
        .order_client
        .place_order(OrderCreate {
            customer_id: alice,
            order_date: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
            total_amount: 300,
            status: OrderStatus::Pending,
            payment_method: "cash".to_string(),
        })
        .await
        .unwrap();
    system
        .order_item_client
        .add_line(OrderItemCreate {
            order_id,
            product_id: pen,
            quantity: 3,
            price: 100,
        })
        .await
        .unwrap();

    system
}
