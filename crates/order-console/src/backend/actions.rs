//! Custom actions for order records.
//!
//! Orders are the only backend records with a write path: their status.

use crate::model::OrderStatus;

/// Mutations the order actor accepts.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Replace the order's status.
    SetStatus(OrderStatus),
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// Carries the status the order had before the change.
    SetStatus(OrderStatus),
}
