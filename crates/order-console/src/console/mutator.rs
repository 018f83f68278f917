use super::board::{OrderBoard, Rollback};
use super::error::ConsoleError;
use crate::model::{OrderId, OrderStatus};
use crate::service::CatalogService;
use tracing::{info, instrument, warn};

/// Optimistically changes one order's status.
///
/// The board shows `status` as soon as this is called. If the remote write
/// fails, the board goes back to what it showed before and the service error
/// is returned as [`ConsoleError::Mutation`]. On success the status that was
/// replaced is returned.
#[instrument(skip(board, service))]
pub async fn change_status(
    board: &OrderBoard,
    service: &dyn CatalogService,
    order_id: &OrderId,
    status: OrderStatus,
) -> Result<OrderStatus, ConsoleError> {
    let pending = board.begin(order_id, status)?;

    match service.set_order_status(order_id, status).await {
        Ok(()) => {
            let previous = pending.commit();
            info!(%previous, "Status change confirmed");
            Ok(previous)
        }
        Err(source) => {
            let rollback = pending.rollback();
            warn!(error = %source, ?rollback, "Status change failed");
            Err(ConsoleError::Mutation {
                order_id: order_id.clone(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Customer, Order, OrderItem, OrderView, Product};
    use crate::service::ServiceError;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    /// Accepts or refuses every write, recording the ones it sees.
    struct Writes {
        refuse: bool,
        seen: Mutex<Vec<(OrderId, OrderStatus)>>,
    }

    #[async_trait]
    impl CatalogService for Writes {
        async fn list_customers(&self) -> Result<Vec<Customer>, ServiceError> {
            Ok(vec![])
        }
        async fn list_products(&self) -> Result<Vec<Product>, ServiceError> {
            Ok(vec![])
        }
        async fn list_orders(&self) -> Result<Vec<Order>, ServiceError> {
            Ok(vec![])
        }
        async fn list_order_items(&self) -> Result<Vec<OrderItem>, ServiceError> {
            Ok(vec![])
        }
        async fn set_order_status(
            &self,
            order_id: &OrderId,
            status: OrderStatus,
        ) -> Result<(), ServiceError> {
            self.seen.lock().unwrap().push((order_id.clone(), status));
            if self.refuse {
                return Err(ServiceError::Backend {
                    resource: "orders",
                    message: "refused".to_string(),
                });
            }
            Ok(())
        }
    }

    fn writes(refuse: bool) -> Writes {
        Writes {
            refuse,
            seen: Mutex::new(vec![]),
        }
    }

    fn board_with_pending_order() -> OrderBoard {
        let order = Order {
            order_id: "o1".into(),
            customer_id: "c1".into(),
            order_date: Utc::now(),
            total_amount: 300,
            status: OrderStatus::Pending,
            payment_method: "cash".to_string(),
        };
        let board = OrderBoard::new();
        board.install(vec![OrderView::new(&order, "Alice", vec![])]);
        board
    }

    #[tokio::test]
    async fn test_successful_write_keeps_new_status() {
        let board = board_with_pending_order();
        let service = writes(false);

        let previous = change_status(&board, &service, &"o1".into(), OrderStatus::Completed)
            .await
            .unwrap();

        assert_eq!(previous, OrderStatus::Pending);
        assert_eq!(board.snapshot()[0].status, OrderStatus::Completed);
        assert_eq!(
            *service.seen.lock().unwrap(),
            vec![(OrderId::from("o1"), OrderStatus::Completed)]
        );
    }

    #[tokio::test]
    async fn test_failed_write_restores_snapshot() {
        let board = board_with_pending_order();
        let before = board.snapshot();
        let service = writes(true);

        let result = change_status(&board, &service, &"o1".into(), OrderStatus::Cancelled).await;

        assert!(matches!(result, Err(ConsoleError::Mutation { .. })));
        assert!(Arc::ptr_eq(&board.snapshot(), &before));
        assert!(!board.is_in_flight(&"o1".into()));
    }

    #[tokio::test]
    async fn test_no_op_never_reaches_the_service() {
        let board = board_with_pending_order();
        let before = board.snapshot();
        let service = writes(false);

        let result = change_status(&board, &service, &"o1".into(), OrderStatus::Pending).await;

        assert!(matches!(result, Err(ConsoleError::NoOpTransition { .. })));
        assert!(Arc::ptr_eq(&board.snapshot(), &before));
        assert!(service.seen.lock().unwrap().is_empty());
    }
}
