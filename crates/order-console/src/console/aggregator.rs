//! The join from raw collections to [`OrderView`]s.

use super::fetcher::Collections;
use crate::model::{
    CustomerId, OrderId, OrderItem, OrderItemView, OrderView, ProductId, PRODUCT_NOT_FOUND,
    UNKNOWN_CUSTOMER,
};
use std::collections::HashMap;
use tracing::debug;

/// Joins orders with customer names and resolved lines.
///
/// Output order follows `collections.orders`. References with no matching
/// customer or product fall back to [`UNKNOWN_CUSTOMER`] and
/// [`PRODUCT_NOT_FOUND`]. Each lookup table is built once, so the cost is
/// linear in the total number of records.
pub fn aggregate(collections: &Collections) -> Vec<OrderView> {
    let customer_names: HashMap<&CustomerId, &str> = collections
        .customers
        .iter()
        .map(|c| (&c.customer_id, c.name.as_str()))
        .collect();
    let product_names: HashMap<&ProductId, &str> = collections
        .products
        .iter()
        .map(|p| (&p.product_id, p.name.as_str()))
        .collect();

    let mut lines_by_order: HashMap<&OrderId, Vec<&OrderItem>> = HashMap::new();
    for item in &collections.order_items {
        lines_by_order.entry(&item.order_id).or_default().push(item);
    }

    let mut missing_customers = 0usize;
    let mut missing_products = 0usize;

    let views: Vec<OrderView> = collections
        .orders
        .iter()
        .map(|order| {
            let customer_name = customer_names
                .get(&order.customer_id)
                .copied()
                .unwrap_or_else(|| {
                    missing_customers += 1;
                    UNKNOWN_CUSTOMER
                });

            let items: Vec<OrderItemView> = lines_by_order
                .get(&order.order_id)
                .map(|lines| {
                    lines
                        .iter()
                        .map(|item| {
                            let product_name = product_names
                                .get(&item.product_id)
                                .copied()
                                .unwrap_or_else(|| {
                                    missing_products += 1;
                                    PRODUCT_NOT_FOUND
                                });
                            OrderItemView::new(item, product_name)
                        })
                        .collect()
                })
                .unwrap_or_default();

            OrderView::new(order, customer_name, items)
        })
        .collect();

    if missing_customers > 0 || missing_products > 0 {
        debug!(missing_customers, missing_products, "Dangling references");
    }
    debug!(size = views.len(), "Aggregated");
    views
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Customer, Order, OrderStatus, Product};
    use chrono::{TimeZone, Utc};

    fn order(id: &str, customer: &str) -> Order {
        Order {
            order_id: id.into(),
            customer_id: customer.into(),
            order_date: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
            total_amount: 300,
            status: OrderStatus::Pending,
            payment_method: "cash".to_string(),
        }
    }

    #[test]
    fn test_joins_names_and_lines() {
        let collections = Collections {
            customers: vec![Customer::new("c1", "Alice")],
            products: vec![Product::new("p1", "Pen", 100)],
            orders: vec![order("o1", "c1")],
            order_items: vec![OrderItem::new("o1", "p1", 3, 100)],
        };

        let views = aggregate(&collections);
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].customer_name, "Alice");
        assert_eq!(views[0].items.len(), 1);
        assert_eq!(views[0].items[0].product_name, "Pen");
        assert_eq!(views[0].items[0].subtotal(), 300);
    }

    #[test]
    fn test_dangling_references_use_defaults() {
        let collections = Collections {
            customers: vec![],
            products: vec![],
            orders: vec![order("o1", "c9")],
            order_items: vec![OrderItem::new("o1", "p9", 1, 50)],
        };

        let views = aggregate(&collections);
        assert_eq!(views[0].customer_name, UNKNOWN_CUSTOMER);
        assert_eq!(views[0].items[0].product_name, PRODUCT_NOT_FOUND);
    }

    #[test]
    fn test_output_follows_order_sequence_and_drops_orphan_lines() {
        let collections = Collections {
            customers: vec![Customer::new("c1", "Alice"), Customer::new("c2", "Bob")],
            products: vec![Product::new("p1", "Pen", 100)],
            orders: vec![order("o3", "c2"), order("o1", "c1"), order("o2", "c1")],
            order_items: vec![
                OrderItem::new("o2", "p1", 1, 100),
                OrderItem::new("o7", "p1", 2, 100),
                OrderItem::new("o2", "p1", 4, 90),
            ],
        };

        let views = aggregate(&collections);
        let ids: Vec<&str> = views.iter().map(|v| v.order_id.0.as_str()).collect();
        assert_eq!(ids, ["o3", "o1", "o2"]);

        assert!(views[0].items.is_empty());
        assert!(views[1].items.is_empty());
        let quantities: Vec<u32> = views[2].items.iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, [1, 4]);
    }

    #[test]
    fn test_each_reference_resolves_to_its_own_record() {
        let collections = Collections {
            customers: vec![
                Customer::new("c1", "Alice"),
                Customer::new("c2", "Bob"),
                Customer::new("c3", "Citra"),
            ],
            products: vec![
                Product::new("p1", "Pen", 100),
                Product::new("p2", "Notebook", 450),
                Product::new("p3", "Stapler", 1200),
            ],
            orders: vec![order("o1", "c2"), order("o2", "c3"), order("o3", "c1")],
            order_items: vec![
                OrderItem::new("o2", "p3", 1, 1200),
                OrderItem::new("o1", "p2", 2, 450),
                OrderItem::new("o3", "p1", 5, 100),
                OrderItem::new("o1", "p1", 1, 100),
                OrderItem::new("o2", "p2", 3, 450),
            ],
        };

        let views = aggregate(&collections);
        let customers: Vec<(&str, &str)> = views
            .iter()
            .map(|v| (v.order_id.0.as_str(), v.customer_name.as_str()))
            .collect();
        assert_eq!(customers, [("o1", "Bob"), ("o2", "Citra"), ("o3", "Alice")]);

        let lines: Vec<Vec<(&str, &str, u32)>> = views
            .iter()
            .map(|v| {
                v.items
                    .iter()
                    .map(|i| (i.product_id.0.as_str(), i.product_name.as_str(), i.quantity))
                    .collect()
            })
            .collect();
        assert_eq!(
            lines,
            [
                vec![("p2", "Notebook", 2), ("p1", "Pen", 1)],
                vec![("p3", "Stapler", 1), ("p2", "Notebook", 3)],
                vec![("p1", "Pen", 5)],
            ]
        );
        for view in &views {
            assert!(view.items.iter().all(|i| i.order_id == view.order_id));
        }
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        assert!(aggregate(&Collections::default()).is_empty());
    }
}
