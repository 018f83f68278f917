//! # Record Actor
//!
//! Generic building blocks for owning collections of records behind Tokio
//! actors. Each collection (customers, products, orders, ...) lives in its own
//! actor task; the rest of the program talks to it through a cheap, cloneable
//! client.
//!
//! ## Layers
//!
//! 1. **Record layer** ([`Record`]) - the row type, its creation payload and its actions.
//! 2. **Runtime layer** ([`RecordActor`]) - the task that owns the rows and serves requests.
//! 3. **Interface layer** ([`RecordClient`], [`CollectionClient`]) - typed request/response calls.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task.
//! - Requests to one actor are processed **sequentially**, so the store needs no locks.
//! - Different actors run in parallel; a caller can await several of them at once.
//! - An actor stops when the last client is dropped.
//!
//! ## Requests
//!
//! Collections are read-mostly: [`RecordRequest`] offers `Create`, `Get`,
//! `List` (insertion order) and `Action` (a record-specific mutation that is
//! committed only when it succeeds).
//!
//! ## Testing
//!
//! The [`mock`] module answers a real `RecordClient` from scripted
//! expectations, or hands the raw request channel to the test so replies can
//! be delayed or failed on demand.

pub mod actor;
pub mod client;
pub mod collection;
pub mod error;
pub mod message;
pub mod mock;
pub mod record;

pub use actor::RecordActor;
pub use client::RecordClient;
pub use collection::CollectionClient;
pub use error::StoreError;
pub use message::{RecordRequest, Response};
pub use record::Record;
