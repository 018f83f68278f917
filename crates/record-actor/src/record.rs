//! # Record Trait
//!
//! The `Record` trait is the contract every stored collection row (customer, product,
//! order, order line, ...) implements so a generic [`RecordActor`](crate::RecordActor)
//! can own it. It fixes the identifier type, the creation payload, and the
//! record-specific actions the owning actor can apply.
//!
//! # Associated Types
//! Each record names its own `Id`, `Create` payload, `Action` and `Error`. A
//! `Customer` row is created from a `CustomerCreate` payload and the compiler
//! refuses a `ProductCreate` sent to the customer actor.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored row must implement to be owned by a `RecordActor`.
///
/// Records are plain values. The actor hands out clones on reads, so `Clone`
/// is required, and the store keeps them keyed by `Id`.
pub trait Record: Clone + Send + Sync + 'static {
    /// The key the actor stores the row under.
    /// Must be convertible from `u32` so the actor can allocate keys itself.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The payload required to create a new row.
    type Create: Send + Sync + Debug;

    /// Record-specific mutations (e.g. `SetStatus`).
    type Action: Send + Sync + Debug;

    /// The value an applied action returns.
    type ActionResult: Send + Sync + Debug;

    /// The error type for this record.
    ///
    /// One error enum per record rather than one per action: callers match on a
    /// single type and the actor boxes it into
    /// [`StoreError::RecordError`](crate::StoreError::RecordError).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the row from its allocated key and the creation payload.
    /// Returning an error rejects the row; nothing is stored.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Apply a record-specific action in place.
    ///
    /// The actor only commits the row if this returns `Ok`; a failed action
    /// leaves the stored row as it was before the call.
    fn apply(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}
