use crate::backend::{self, RecordError};
use crate::clients::{CustomerClient, OrderClient, OrderItemClient, ProductClient};
use crate::model::{
    CustomerCreate, OrderCreate, OrderItemCreate, OrderStatus, ProductCreate,
};
use crate::service::ActorCatalog;
use chrono::{Duration, Utc};
use tracing::{error, info, instrument};

/// Runs the in-process catalog backend.
///
/// Spawns one record actor per collection and keeps their task handles so
/// [`shutdown`](Self::shutdown) can wait for them to drain.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new(32);
/// system.seed_demo().await?;
///
/// let console = OrderConsole::new(Arc::new(system.catalog()));
/// console.refresh().await?;
///
/// drop(console);
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    pub customer_client: CustomerClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    pub order_item_client: OrderItemClient,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogSystem {
    /// Spawns the four actors, each with a mailbox of `buffer_size`.
    pub fn new(buffer_size: usize) -> Self {
        let (customer_actor, customer_client) = backend::customer_actor(buffer_size);
        let (product_actor, product_client) = backend::product_actor(buffer_size);
        let (order_actor, order_client) = backend::order_actor(buffer_size);
        let (order_item_actor, order_item_client) = backend::order_item_actor(buffer_size);

        let handles = vec![
            tokio::spawn(customer_actor.run()),
            tokio::spawn(product_actor.run()),
            tokio::spawn(order_actor.run()),
            tokio::spawn(order_item_actor.run()),
        ];

        Self {
            customer_client,
            product_client,
            order_client,
            order_item_client,
            handles,
        }
    }

    /// A [`CatalogService`](crate::service::CatalogService) over this
    /// system's actors.
    pub fn catalog(&self) -> ActorCatalog {
        ActorCatalog::new(
            self.customer_client.clone(),
            self.product_client.clone(),
            self.order_client.clone(),
            self.order_item_client.clone(),
        )
    }

    /// Loads a small sample shop: three customers, three products and four
    /// orders, one of which points at a customer that does not exist.
    #[instrument(skip(self))]
    pub async fn seed_demo(&self) -> Result<(), RecordError> {
        let alice = self
            .customer_client
            .create_customer(CustomerCreate { name: "Alice".to_string() })
            .await?;
        let bob = self
            .customer_client
            .create_customer(CustomerCreate { name: "Bob".to_string() })
            .await?;
        self.customer_client
            .create_customer(CustomerCreate { name: "Citra".to_string() })
            .await?;

        let pen = self
            .product_client
            .create_product(ProductCreate { name: "Pen".to_string(), price: 100 })
            .await?;
        let notebook = self
            .product_client
            .create_product(ProductCreate { name: "Notebook".to_string(), price: 450 })
            .await?;
        self.product_client
            .create_product(ProductCreate { name: "Stapler".to_string(), price: 1200 })
            .await?;

        let now = Utc::now();
        let orders = [
            (alice.clone(), 300, OrderStatus::Pending, "cash", vec![(pen.clone(), 3, 100)]),
            (
                bob,
                1000,
                OrderStatus::Completed,
                "transfer",
                vec![(notebook.clone(), 2, 450), (pen.clone(), 1, 100)],
            ),
            (alice, 450, OrderStatus::Cancelled, "card", vec![(notebook, 1, 450)]),
            ("c404".into(), 200, OrderStatus::Pending, "cash", vec![(pen, 2, 100)]),
        ];

        for (days_ago, (customer_id, total_amount, status, payment_method, lines)) in
            orders.into_iter().enumerate()
        {
            let order_id = self
                .order_client
                .place_order(OrderCreate {
                    customer_id,
                    order_date: now - Duration::days(days_ago as i64),
                    total_amount,
                    status,
                    payment_method: payment_method.to_string(),
                })
                .await?;
            for (product_id, quantity, price) in lines {
                self.order_item_client
                    .add_line(OrderItemCreate {
                        order_id: order_id.clone(),
                        product_id,
                        quantity,
                        price,
                    })
                    .await?;
            }
        }

        info!("Demo catalog seeded");
        Ok(())
    }

    /// Drops every client held by the system and waits for the actors to
    /// finish.
    ///
    /// Actors only stop once every client clone is gone, so callers must
    /// drop any [`ActorCatalog`] or console they built first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog...");

        drop(self.customer_client);
        drop(self.product_client);
        drop(self.order_client);
        drop(self.order_item_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
