use super::error::{Collection, ConsoleError};
use crate::model::{Customer, Order, OrderItem, Product};
use crate::service::{CatalogService, ServiceError};
use tracing::{debug, warn};

/// The four source collections from one successful fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collections {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
}

fn failed(collection: Collection) -> impl Fn(ServiceError) -> ConsoleError {
    move |source| {
        warn!(%collection, error = %source, "Fetch failed");
        ConsoleError::Fetch { collection, source }
    }
}

/// Requests all four collections concurrently.
///
/// All or nothing: the first failure cancels the outstanding reads and is
/// returned naming the collection that failed. No retry.
pub async fn fetch_collections(service: &dyn CatalogService) -> Result<Collections, ConsoleError> {
    let (customers, products, orders, order_items) = tokio::try_join!(
        async {
            service
                .list_customers()
                .await
                .map_err(failed(Collection::Customers))
        },
        async {
            service
                .list_products()
                .await
                .map_err(failed(Collection::Products))
        },
        async {
            service
                .list_orders()
                .await
                .map_err(failed(Collection::Orders))
        },
        async {
            service
                .list_order_items()
                .await
                .map_err(failed(Collection::OrderItems))
        },
    )?;

    debug!(
        customers = customers.len(),
        products = products.len(),
        orders = orders.len(),
        order_items = order_items.len(),
        "Fetched collections"
    );

    Ok(Collections {
        customers,
        products,
        orders,
        order_items,
    })
}
