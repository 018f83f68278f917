use super::{CatalogService, ServiceError};
use crate::clients::{CustomerClient, OrderClient, OrderItemClient, ProductClient};
use crate::model::{Customer, Order, OrderId, OrderItem, OrderStatus, Product};
use async_trait::async_trait;
use record_actor::CollectionClient;

/// [`CatalogService`] backed by the in-process record actors.
#[derive(Clone)]
pub struct ActorCatalog {
    customers: CustomerClient,
    products: ProductClient,
    orders: OrderClient,
    order_items: OrderItemClient,
}

impl ActorCatalog {
    pub fn new(
        customers: CustomerClient,
        products: ProductClient,
        orders: OrderClient,
        order_items: OrderItemClient,
    ) -> Self {
        Self {
            customers,
            products,
            orders,
            order_items,
        }
    }
}

#[async_trait]
impl CatalogService for ActorCatalog {
    async fn list_customers(&self) -> Result<Vec<Customer>, ServiceError> {
        self.customers
            .list()
            .await
            .map_err(|e| ServiceError::from_record("customers", e))
    }

    async fn list_products(&self) -> Result<Vec<Product>, ServiceError> {
        self.products
            .list()
            .await
            .map_err(|e| ServiceError::from_record("products", e))
    }

    async fn list_orders(&self) -> Result<Vec<Order>, ServiceError> {
        self.orders
            .list()
            .await
            .map_err(|e| ServiceError::from_record("orders", e))
    }

    async fn list_order_items(&self) -> Result<Vec<OrderItem>, ServiceError> {
        self.order_items
            .list()
            .await
            .map_err(|e| ServiceError::from_record("order items", e))
    }

    async fn set_order_status(
        &self,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), ServiceError> {
        self.orders
            .set_status(order_id.clone(), status)
            .await
            .map(|_| ())
            .map_err(|e| ServiceError::from_record("orders", e))
    }
}
