use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Opaque customer identifier issued by the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub String);

impl From<u32> for CustomerId {
    fn from(id: u32) -> Self {
        Self(format!("c{}", id))
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered customer. Read-only from the console's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub name: String,
}

impl Customer {
    pub fn new(customer_id: impl Into<CustomerId>, name: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            name: name.into(),
        }
    }
}

/// Payload for registering a customer with the in-process backend.
#[derive(Debug, Clone)]
pub struct CustomerCreate {
    pub name: String,
}
