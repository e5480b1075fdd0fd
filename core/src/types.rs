//! Domain DTOs for the grocery list API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates. Field
//! names on the wire are exactly `id`, `name`, `amount` and `bought`.

use serde::{Deserialize, Serialize};

/// A single grocery item as stored by the remote store.
///
/// `id` is assigned by the server and never changes. While an item exists its
/// `amount` is at least 1; decrementing past that deletes the item instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroceryItem {
    pub id: u64,
    pub name: String,
    pub amount: u32,
    pub bought: bool,
}

/// Request payload for creating a new item. The server assigns the `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewGroceryItem {
    pub name: String,
    pub amount: u32,
    pub bought: bool,
}

impl NewGroceryItem {
    /// A fresh entry: one unit, not yet bought.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            amount: 1,
            bought: false,
        }
    }
}

/// Partial update for an existing item. Only the fields present in the JSON
/// are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroceryItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bought: Option<bool>,
}

impl GroceryItemPatch {
    pub fn name(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn amount(amount: u32) -> Self {
        Self {
            amount: Some(amount),
            ..Self::default()
        }
    }

    pub fn bought(bought: bool) -> Self {
        Self {
            bought: Some(bought),
            ..Self::default()
        }
    }
}
