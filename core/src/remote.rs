//! The remote store: one network round trip per logical operation.
//!
//! # Design
//! `RemoteStore` pairs the stateless `GroceryClient` with a `Transport`. It
//! does not retry, cache or batch. A request that never produced a response
//! fails with the same `ApiError::Transport` as a non-2xx status.

use tracing::warn;

use crate::client::GroceryClient;
use crate::error::{ApiError, Operation};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{GroceryItem, GroceryItemPatch, NewGroceryItem};

#[derive(Debug, Clone)]
pub struct RemoteStore<T> {
    client: GroceryClient,
    transport: T,
}

impl<T: Transport> RemoteStore<T> {
    pub fn new(client: GroceryClient, transport: T) -> Self {
        Self { client, transport }
    }

    /// The full collection, in server order.
    pub fn list(&self) -> Result<Vec<GroceryItem>, ApiError> {
        let response = self.round_trip(self.client.build_list(), Operation::List)?;
        self.client.parse_list(response)
    }

    pub fn create(&self, item: &NewGroceryItem) -> Result<Vec<GroceryItem>, ApiError> {
        let request = self.client.build_create(item)?;
        let response = self.round_trip(request, Operation::Create)?;
        self.client.parse_create(response)
    }

    pub fn update(&self, id: u64, patch: &GroceryItemPatch) -> Result<Vec<GroceryItem>, ApiError> {
        let request = self.client.build_update(id, patch)?;
        let response = self.round_trip(request, Operation::Update)?;
        self.client.parse_update(response)
    }

    pub fn delete(&self, id: u64) -> Result<Vec<GroceryItem>, ApiError> {
        let response = self.round_trip(self.client.build_delete(id), Operation::Delete)?;
        self.client.parse_delete(response)
    }

    fn round_trip(&self, request: HttpRequest, op: Operation) -> Result<HttpResponse, ApiError> {
        self.transport.execute(request).map_err(|e| {
            warn!(error = %e, "{}", op.failure_message());
            ApiError::Transport(op)
        })
    }
}
