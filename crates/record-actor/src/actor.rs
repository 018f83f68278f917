//! # Record Actor
//!
//! The `RecordActor` owns one collection of rows and serves every request for
//! it from a single Tokio task. Requests are processed one at a time, so the
//! store needs no locking: exclusive ownership inside the task is the
//! synchronisation.

use crate::client::RecordClient;
use crate::error::StoreError;
use crate::message::RecordRequest;
use crate::record::Record;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns a collection of `T` rows.
///
/// # Usage Pattern
///
/// 1. **Create**: `RecordActor::new()` returns the actor (server) and a client.
/// 2. **Run**: spawn `actor.run()` on the runtime.
/// 3. **Use**: clone the client freely; dropping every clone stops the actor.
///
/// ```rust
/// use record_actor::{Record, RecordActor};
///
/// #[derive(Clone, Debug)] struct Tag { label: String }
/// #[derive(Debug)] struct TagCreate { label: String }
/// #[derive(Debug)] enum TagAction { Rename(String) }
/// #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
///
/// impl Record for Tag {
///     type Id = u32;
///     type Create = TagCreate;
///     type Action = TagAction;
///     type ActionResult = ();
///     type Error = TagError;
///
///     fn from_create_params(_id: u32, params: TagCreate) -> Result<Self, TagError> {
///         Ok(Self { label: params.label })
///     }
///     fn apply(&mut self, action: TagAction) -> Result<(), TagError> {
///         match action { TagAction::Rename(label) => self.label = label }
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = RecordActor::<Tag>::new(10);
///     tokio::spawn(actor.run());
///
///     let id = client.create(TagCreate { label: "urgent".into() }).await.unwrap();
///     client.perform_action(id, TagAction::Rename("later".into())).await.unwrap();
///     let tags = client.list().await.unwrap();
///     assert_eq!(tags[0].label, "later");
/// }
/// ```
///
/// # Implementation Details
///
/// Rows live in a `HashMap` keyed by `T::Id`; a side vector remembers insertion
/// order so `List` returns the collection in the order rows were created.
/// Keys are allocated from a `u32` counter starting at 1.
///
/// * **Create**: allocate key, build via `T::from_create_params`, store.
/// * **Get**: clone of the row, or `None`.
/// * **List**: clones of every row in insertion order.
/// * **Action**: apply to a working copy; commit it only if the action succeeds.
pub struct RecordActor<T: Record> {
    receiver: mpsc::Receiver<RecordRequest<T>>,
    store: HashMap<T::Id, T>,
    insertion_order: Vec<T::Id>,
    next_id: u32,
}

impl<T: Record> RecordActor<T> {
    /// Creates a new `RecordActor` and its associated `RecordClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full,
    /// client calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, RecordClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            insertion_order: Vec::new(),
            next_id: 1,
        };
        (actor, RecordClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // "Customer" rather than "order_console::model::customer::Customer"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RecordRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    match T::from_create_params(id.clone(), params) {
                        Ok(record) => {
                            self.next_id += 1;
                            self.store.insert(id.clone(), record);
                            self.insertion_order.push(id.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(StoreError::RecordError(Box::new(e))));
                        }
                    }
                }
                RecordRequest::Get { id, respond_to } => {
                    let record = self.store.get(&id).cloned();
                    let found = record.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(record));
                }
                RecordRequest::List { respond_to } => {
                    let records: Vec<T> = self
                        .insertion_order
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    debug!(entity_type, size = records.len(), "List");
                    let _ = respond_to.send(Ok(records));
                }
                RecordRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };

                    let mut working = current.clone();
                    match working.apply(action) {
                        Ok(result) => {
                            self.store.insert(id.clone(), working);
                            info!(entity_type, %id, "Action ok");
                            let _ = respond_to.send(Ok(result));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            let _ = respond_to.send(Err(StoreError::RecordError(Box::new(e))));
                        }
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
