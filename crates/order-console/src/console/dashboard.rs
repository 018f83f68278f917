use crate::model::OrderView;
use serde::Serialize;

/// Number of orders shown under "recent orders".
pub const RECENT_ORDERS: usize = 5;

/// Headline figures for the landing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub product_count: usize,
    pub customer_count: usize,
    pub order_count: usize,
    /// Sum of every order's `total_amount`.
    pub total_sales: u64,
    /// The first [`RECENT_ORDERS`] orders in board order.
    pub recent_orders: Vec<OrderView>,
}

impl DashboardStats {
    pub fn compute(customer_count: usize, product_count: usize, views: &[OrderView]) -> Self {
        Self {
            product_count,
            customer_count,
            order_count: views.len(),
            total_sales: views
                .iter()
                .fold(0u64, |sum, view| sum.saturating_add(view.total_amount)),
            recent_orders: views.iter().take(RECENT_ORDERS).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Order, OrderStatus};
    use chrono::Utc;

    fn views(totals: &[u64]) -> Vec<OrderView> {
        totals
            .iter()
            .enumerate()
            .map(|(i, &total_amount)| {
                let order = Order {
                    order_id: format!("o{}", i + 1).as_str().into(),
                    customer_id: "c1".into(),
                    order_date: Utc::now(),
                    total_amount,
                    status: OrderStatus::Pending,
                    payment_method: "cash".to_string(),
                };
                OrderView::new(&order, "Alice", vec![])
            })
            .collect()
    }

    #[test]
    fn test_sums_sales_and_keeps_first_five() {
        let views = views(&[100, 200, 300, 400, 500, 600, 700]);
        let stats = DashboardStats::compute(2, 3, &views);

        assert_eq!(stats.customer_count, 2);
        assert_eq!(stats.product_count, 3);
        assert_eq!(stats.order_count, 7);
        assert_eq!(stats.total_sales, 2800);
        assert_eq!(stats.recent_orders.len(), RECENT_ORDERS);
        assert_eq!(stats.recent_orders[0].order_id.0, "o1");
        assert_eq!(stats.recent_orders[4].order_id.0, "o5");
    }

    #[test]
    fn test_empty_board() {
        let stats = DashboardStats::compute(0, 0, &[]);
        assert_eq!(stats.total_sales, 0);
        assert!(stats.recent_orders.is_empty());
    }
}
