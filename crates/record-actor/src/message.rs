//! # Record Messages
//!
//! Messages exchanged between a [`RecordClient`](crate::RecordClient) and its
//! [`RecordActor`](crate::RecordActor).

use crate::error::StoreError;
use crate::record::Record;
use tokio::sync::oneshot;

/// One-shot reply channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request sent to a record actor.
///
/// The variants model a collection-style resource:
///
/// - **Create**: allocate a key and store a new row built from [`Record::Create`].
/// - **Get**: read one row by key.
/// - **List**: read the whole collection, in insertion order.
/// - **Action**: apply a [`Record::Action`] to one row.
#[derive(Debug)]
pub enum RecordRequest<T: Record> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
