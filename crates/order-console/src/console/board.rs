//! # Order Board
//!
//! The single owner of the current [`OrderView`] list. Readers get a cheap
//! `Arc` snapshot; every write replaces the list wholesale under a short,
//! synchronous lock that is never held across an `.await`.
//!
//! A status change goes through [`OrderBoard::begin`], which installs the
//! optimistic list and returns a [`PendingChange`]. The change is then either
//! committed or rolled back. While it is outstanding the order is marked in
//! flight, and any list installed by a refresh keeps showing the optimistic
//! status for it.

use super::dashboard::DashboardStats;
use super::error::ConsoleError;
use crate::model::{OrderId, OrderStatus, OrderView};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

#[derive(Default)]
struct BoardState {
    views: Arc<Vec<OrderView>>,
    index: HashMap<OrderId, usize>,
    /// Orders with an outstanding write, mapped to the status being written.
    in_flight: HashMap<OrderId, OrderStatus>,
    /// Collection sizes from the fetch that produced `views`.
    customer_count: usize,
    product_count: usize,
}

impl BoardState {
    fn replace(&mut self, views: Vec<OrderView>) {
        self.index = views
            .iter()
            .enumerate()
            .map(|(i, view)| (view.order_id.clone(), i))
            .collect();
        self.views = Arc::new(views);
    }

    /// Copy of the current list with one order's status replaced.
    fn with_status(&self, position: usize, status: OrderStatus) -> Vec<OrderView> {
        let mut views = Vec::with_capacity(self.views.len());
        views.extend_from_slice(&self.views[..position]);
        views.push(self.views[position].with_status(status));
        views.extend_from_slice(&self.views[position + 1..]);
        views
    }
}

/// How a rolled-back change was undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rollback {
    /// Nothing else touched the board; the pre-change list is back in place.
    Restored,
    /// Another writer replaced the list meanwhile; only this order's status
    /// was reverted.
    Reverted,
    /// The order no longer shows the optimistic status, or is gone.
    Untouched,
}

#[derive(Default)]
pub struct OrderBoard {
    state: Mutex<BoardState>,
}

impl OrderBoard {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current list. Later writes never alter a snapshot already handed out.
    pub fn snapshot(&self) -> Arc<Vec<OrderView>> {
        Arc::clone(&self.state().views)
    }

    pub fn get(&self, order_id: &OrderId) -> Option<OrderView> {
        let state = self.state();
        state.index.get(order_id).map(|&i| state.views[i].clone())
    }

    /// Replaces the whole list with freshly aggregated views.
    ///
    /// Orders with a write in flight keep their optimistic status.
    pub fn install(&self, views: Vec<OrderView>) -> Arc<Vec<OrderView>> {
        let mut state = self.state();
        Self::install_locked(&mut state, views)
    }

    /// [`install`](Self::install), recording the customer and product counts
    /// of the same fetch under the same lock.
    pub fn install_catalog(
        &self,
        views: Vec<OrderView>,
        customer_count: usize,
        product_count: usize,
    ) -> Arc<Vec<OrderView>> {
        let mut state = self.state();
        state.customer_count = customer_count;
        state.product_count = product_count;
        Self::install_locked(&mut state, views)
    }

    fn install_locked(state: &mut BoardState, mut views: Vec<OrderView>) -> Arc<Vec<OrderView>> {
        if !state.in_flight.is_empty() {
            for view in views.iter_mut() {
                if let Some(&status) = state.in_flight.get(&view.order_id) {
                    view.status = status;
                }
            }
        }
        state.replace(views);
        debug!(size = state.views.len(), "Board installed");
        Arc::clone(&state.views)
    }

    /// Installs the optimistic list for a status change.
    ///
    /// Fails without touching the board if the order is unknown, already has
    /// the requested status, or already has a change in flight.
    pub fn begin(&self, order_id: &OrderId, status: OrderStatus) -> Result<PendingChange<'_>, ConsoleError> {
        let mut state = self.state();
        let Some(&position) = state.index.get(order_id) else {
            return Err(ConsoleError::UnknownOrder(order_id.clone()));
        };
        if state.in_flight.contains_key(order_id) {
            return Err(ConsoleError::MutationInFlight(order_id.clone()));
        }
        let previous = state.views[position].status;
        if previous == status {
            return Err(ConsoleError::NoOpTransition {
                order_id: order_id.clone(),
                status,
            });
        }

        let snapshot = Arc::clone(&state.views);
        let optimistic = Arc::new(state.with_status(position, status));
        state.views = Arc::clone(&optimistic);
        state.in_flight.insert(order_id.clone(), status);
        info!(%order_id, %previous, %status, "Optimistic status applied");

        Ok(PendingChange {
            board: self,
            order_id: order_id.clone(),
            previous,
            status,
            snapshot,
            optimistic,
        })
    }

    /// Headline figures, read from one consistent state.
    pub fn dashboard(&self) -> DashboardStats {
        let state = self.state();
        DashboardStats::compute(state.customer_count, state.product_count, &state.views)
    }

    pub fn is_in_flight(&self, order_id: &OrderId) -> bool {
        self.state().in_flight.contains_key(order_id)
    }
}

/// An optimistic status change awaiting the outcome of its remote write.
///
/// Dropping it without calling [`commit`](Self::commit) or
/// [`rollback`](Self::rollback) releases the in-flight mark and leaves the
/// optimistic status in place.
pub struct PendingChange<'a> {
    board: &'a OrderBoard,
    order_id: OrderId,
    previous: OrderStatus,
    status: OrderStatus,
    snapshot: Arc<Vec<OrderView>>,
    optimistic: Arc<Vec<OrderView>>,
}

impl PendingChange<'_> {
    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn previous(&self) -> OrderStatus {
        self.previous
    }

    /// The list as it was immediately before the optimistic change.
    pub fn snapshot(&self) -> &Arc<Vec<OrderView>> {
        &self.snapshot
    }

    /// Keeps the optimistic status. Returns the status it replaced.
    pub fn commit(self) -> OrderStatus {
        debug!(order_id = %self.order_id, status = %self.status, "Status change committed");
        self.previous
    }

    pub fn rollback(self) -> Rollback {
        let mut state = self.board.state();

        if Arc::ptr_eq(&state.views, &self.optimistic) {
            state.views = Arc::clone(&self.snapshot);
            warn!(order_id = %self.order_id, "Rolled back to snapshot");
            return Rollback::Restored;
        }

        let position = match state.index.get(&self.order_id) {
            Some(&i) if state.views[i].status == self.status => i,
            _ => {
                warn!(order_id = %self.order_id, "Rollback found the order changed elsewhere");
                return Rollback::Untouched;
            }
        };
        let views = state.with_status(position, self.previous);
        state.views = Arc::new(views);
        warn!(order_id = %self.order_id, status = %self.previous, "Reverted status");
        Rollback::Reverted
    }
}

impl Drop for PendingChange<'_> {
    fn drop(&mut self) {
        self.board.state().in_flight.remove(&self.order_id);
    }
}
