//! Client core for the grocery list service.
//!
//! # Overview
//! Two layers, consumed leaf to root:
//! - the remote store client: `GroceryClient` builds `HttpRequest` values and
//!   parses `HttpResponse` values without touching the network, and
//!   `RemoteStore` runs them through a `Transport`;
//! - the view-model: `GroceryController` holds the list snapshot and pending
//!   UI state and turns user commands into remote mutations, each followed by
//!   a full refresh.
//!
//! # Design
//! - `GroceryClient` is stateless, it holds only `base_url`.
//! - All I/O goes through the `Transport` trait; `UreqTransport` is the
//!   network implementation and tests substitute scripted ones.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod remote;
pub mod transport;
pub mod types;

pub use client::GroceryClient;
pub use config::ClientConfig;
pub use controller::{EditSurface, EditTarget, GroceryController};
pub use error::{ApiError, Operation};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use remote::RemoteStore;
pub use transport::{Transport, UreqTransport};
pub use types::{GroceryItem, GroceryItemPatch, NewGroceryItem};
