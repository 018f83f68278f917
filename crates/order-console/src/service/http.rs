//! REST client for a remote catalog service.
//!
//! | Call | Request |
//! |------|---------|
//! | `list_customers` | `GET {base}/customers` |
//! | `list_products` | `GET {base}/products` |
//! | `list_orders` | `GET {base}/orders` |
//! | `list_order_items` | `GET {base}/order-items` |
//! | `set_order_status` | `PATCH {base}/orders/{id}` with `{"status": "..."}` |
//!
//! Every request carries `Accept: application/json` and, when a token is
//! configured, `Authorization: Bearer <token>`. Collections are plain JSON
//! arrays. Order lines with a zero quantity are rejected as undecodable, the
//! same as the in-process backend refuses to store them.

use super::{CatalogService, ServiceError};
use crate::config::ConsoleConfig;
use crate::model::{Customer, Order, OrderId, OrderItem, OrderStatus, Product};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

#[derive(Serialize)]
struct StatusPatch {
    status: OrderStatus,
}

/// [`CatalogService`] over HTTP.
#[derive(Clone)]
pub struct HttpCatalog {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpCatalog {
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ServiceError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http: builder.build()?,
            base_url,
            token,
        })
    }

    /// Builds a client from the loaded configuration, or `None` when no API
    /// URL is configured.
    pub fn from_config(config: &ConsoleConfig) -> Result<Option<Self>, ServiceError> {
        let Some(base_url) = config.api_base_url.as_deref() else {
            return Ok(None);
        };
        let timeout = config.request_timeout_secs.map(Duration::from_secs);
        Self::new(base_url, config.api_token.clone(), timeout).map(Some)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header(ACCEPT, "application/json");
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn check(
        resource: &'static str,
        path: &str,
        response: Response,
    ) -> Result<Response, ServiceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(ServiceError::NotFound(path.to_string()));
        }
        let body = response.text().await.unwrap_or_default();
        warn!(resource, %status, "Service refused request");
        Err(ServiceError::Backend {
            resource,
            message: format!("{status} {}", body.trim()).trim_end().to_string(),
        })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        path: &str,
    ) -> Result<Vec<T>, ServiceError> {
        let response = self.request(Method::GET, path).send().await?;
        let body = Self::check(resource, path, response).await?.bytes().await?;
        let rows: Vec<T> = serde_json::from_slice(&body).map_err(|e| ServiceError::Decode {
            resource,
            message: e.to_string(),
        })?;
        debug!(resource, size = rows.len(), "Fetched");
        Ok(rows)
    }
}

#[async_trait]
impl CatalogService for HttpCatalog {
    #[instrument(skip(self))]
    async fn list_customers(&self) -> Result<Vec<Customer>, ServiceError> {
        self.fetch("customers", "/customers").await
    }

    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, ServiceError> {
        self.fetch("products", "/products").await
    }

    #[instrument(skip(self))]
    async fn list_orders(&self) -> Result<Vec<Order>, ServiceError> {
        self.fetch("orders", "/orders").await
    }

    #[instrument(skip(self))]
    async fn list_order_items(&self) -> Result<Vec<OrderItem>, ServiceError> {
        let items: Vec<OrderItem> = self.fetch("order items", "/order-items").await?;
        if let Some(item) = items.iter().find(|item| item.quantity == 0) {
            warn!(order_id = %item.order_id, product_id = %item.product_id, "Order line without quantity");
            return Err(ServiceError::Decode {
                resource: "order items",
                message: format!(
                    "line {}/{} has quantity 0",
                    item.order_id, item.product_id
                ),
            });
        }
        Ok(items)
    }

    #[instrument(skip(self))]
    async fn set_order_status(
        &self,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), ServiceError> {
        let path = format!("/orders/{order_id}");
        let response = self
            .request(Method::PATCH, &path)
            .json(&StatusPatch { status })
            .send()
            .await?;
        Self::check("orders", &path, response).await?;
        debug!(%order_id, %status, "Status written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Path, State};
    use axum::http::HeaderMap;
    use axum::routing::{get, patch};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    #[derive(Clone, Default)]
    struct Seen {
        headers: Arc<Mutex<Vec<HeaderMap>>>,
        patches: Arc<Mutex<Vec<(String, Value)>>>,
    }

    async fn customers(State(seen): State<Seen>, headers: HeaderMap) -> Json<Value> {
        seen.headers.lock().unwrap().push(headers);
        Json(json!([
            { "customer_id": "c1", "name": "Alice" },
            { "customer_id": "c2", "name": "Bob" }
        ]))
    }

    async fn orders() -> Json<Value> {
        Json(json!([{
            "order_id": "o1",
            "customer_id": "c1",
            "order_date": "2024-05-01T10:00:00Z",
            "total_amount": 300,
            "status": "pending",
            "payment_method": "cash"
        }]))
    }

    async fn broken_products() -> Json<Value> {
        Json(json!({ "message": "not a list" }))
    }

    async fn order_items() -> (StatusCode, &'static str) {
        (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable")
    }

    async fn empty_line_items() -> Json<Value> {
        Json(json!([
            { "order_id": "o1", "product_id": "p1", "quantity": 2, "price": 100 },
            { "order_id": "o2", "product_id": "p3", "quantity": 0, "price": 1200 }
        ]))
    }

    async fn patch_order(
        State(seen): State<Seen>,
        Path(id): Path<String>,
        Json(body): Json<Value>,
    ) -> StatusCode {
        if id == "o404" {
            return StatusCode::NOT_FOUND;
        }
        seen.patches.lock().unwrap().push((id, body));
        StatusCode::NO_CONTENT
    }

    async fn spawn_catalog_server() -> (String, Seen) {
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let seen = Seen::default();
        let app = Router::new()
            .route("/api/customers", get(customers))
            .route("/api/products", get(broken_products))
            .route("/api/orders", get(orders))
            .route("/api/order-items", get(order_items))
            .route("/api/v0/order-items", get(empty_line_items))
            .route("/api/orders/:id", patch(patch_order))
            .with_state(seen.clone());
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        (format!("http://{addr}/api"), seen)
    }

    #[tokio::test]
    async fn test_lists_send_accept_and_bearer_headers() {
        let (base_url, seen) = spawn_catalog_server().await;
        let catalog = HttpCatalog::new(base_url, Some("secret".to_string()), None).unwrap();

        let customers = catalog.list_customers().await.unwrap();
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].name, "Alice");

        let headers = seen.headers.lock().unwrap();
        assert_eq!(headers[0]["accept"], "application/json");
        assert_eq!(headers[0]["authorization"], "Bearer secret");
    }

    #[tokio::test]
    async fn test_orders_decode_with_status() {
        let (base_url, _seen) = spawn_catalog_server().await;
        let catalog = HttpCatalog::new(format!("{base_url}/"), None, None).unwrap();

        let orders = catalog.list_orders().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].order_id, OrderId::from("o1"));
        assert_eq!(orders[0].status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_non_array_body_is_a_decode_error() {
        let (base_url, _seen) = spawn_catalog_server().await;
        let catalog = HttpCatalog::new(base_url, None, None).unwrap();

        let result = catalog.list_products().await;
        assert!(matches!(
            result,
            Err(ServiceError::Decode { resource: "products", .. })
        ));
    }

    #[tokio::test]
    async fn test_server_error_is_a_backend_error() {
        let (base_url, _seen) = spawn_catalog_server().await;
        let catalog = HttpCatalog::new(base_url, None, None).unwrap();

        match catalog.list_order_items().await {
            Err(ServiceError::Backend { resource, message }) => {
                assert_eq!(resource, "order items");
                assert!(message.starts_with("500"));
                assert!(message.contains("database unavailable"));
            }
            other => panic!("expected backend error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_zero_quantity_line_is_a_decode_error() {
        let (base_url, _seen) = spawn_catalog_server().await;
        let catalog = HttpCatalog::new(format!("{base_url}/v0"), None, None).unwrap();

        match catalog.list_order_items().await {
            Err(ServiceError::Decode { resource, message }) => {
                assert_eq!(resource, "order items");
                assert!(message.contains("o2/p3"));
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_set_status_patches_lowercase_status() {
        let (base_url, seen) = spawn_catalog_server().await;
        let catalog = HttpCatalog::new(base_url, None, None).unwrap();

        catalog
            .set_order_status(&OrderId::from("o1"), OrderStatus::Completed)
            .await
            .unwrap();

        let patches = seen.patches.lock().unwrap();
        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].0, "o1");
        assert_eq!(patches[0].1, json!({ "status": "completed" }));
    }

    #[tokio::test]
    async fn test_set_status_on_missing_order_is_not_found() {
        let (base_url, _seen) = spawn_catalog_server().await;
        let catalog = HttpCatalog::new(base_url, None, None).unwrap();

        let result = catalog
            .set_order_status(&OrderId::from("o404"), OrderStatus::Cancelled)
            .await;
        assert!(matches!(result, Err(ServiceError::NotFound(path)) if path == "/orders/o404"));
    }

    #[test]
    fn test_from_config_without_url_is_none() {
        let config = ConsoleConfig::default();
        assert!(HttpCatalog::from_config(&config).unwrap().is_none());
    }
}
