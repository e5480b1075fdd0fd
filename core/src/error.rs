//! Error types for the grocery list client and controller.
//!
//! # Design
//! Every failed round trip, whether the server answered with a non-2xx
//! status or the request never completed, collapses into
//! `ApiError::Transport` carrying only the operation that failed. Its message
//! is fixed per operation; status codes and bodies are logged, not kept.

use thiserror::Error;

/// The logical remote store operation a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Human-readable failure message reported for this operation.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "Failed to get grocery list",
            Operation::Create => "Failed to add grocery item",
            Operation::Update => "Failed to update grocery item",
            Operation::Delete => "Failed to delete grocery item",
        }
    }
}

/// Errors returned by `GroceryClient`, `RemoteStore` and `GroceryController`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx status or network failure for the given operation.
    #[error("{}", .0.failure_message())]
    Transport(Operation),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// `add_item` was called with an empty name.
    #[error("item name must not be empty")]
    EmptyName,

    /// `submit_edit` was called while no item is being edited.
    #[error("no item is being edited")]
    NoEditTarget,
}
