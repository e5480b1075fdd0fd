//! Stateless HTTP request builder and response parser for the grocery API.
//!
//! # Design
//! `GroceryClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`. Every
//! successful response carries the full collection, so all four parsers
//! return `Vec<GroceryItem>`.

use tracing::warn;

use crate::error::{ApiError, Operation};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{GroceryItem, GroceryItemPatch, NewGroceryItem};

const RESOURCE: &str = "groceryList";

/// Synchronous, stateless client for the grocery API.
#[derive(Debug, Clone)]
pub struct GroceryClient {
    base_url: String,
}

impl GroceryClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, input: &NewGroceryItem) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_url(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_update(&self, id: u64, patch: &GroceryItemPatch) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Patch,
            path: self.item_url(id),
            headers: json_headers(),
            body: Some(to_json(patch)?),
        })
    }

    pub fn build_delete(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<GroceryItem>, ApiError> {
        parse_collection(response, Operation::List)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Vec<GroceryItem>, ApiError> {
        parse_collection(response, Operation::Create)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Vec<GroceryItem>, ApiError> {
        parse_collection(response, Operation::Update)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<Vec<GroceryItem>, ApiError> {
        parse_collection(response, Operation::Delete)
    }

    fn collection_url(&self) -> String {
        format!("{}/{RESOURCE}", self.base_url)
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/{RESOURCE}/{id}", self.base_url)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Serialization(e.to_string()))
}

/// Success is decided by status class alone; the body of a failed response is
/// logged and dropped.
fn parse_collection(response: HttpResponse, op: Operation) -> Result<Vec<GroceryItem>, ApiError> {
    if !response.is_success() {
        warn!(status = response.status, body = %response.body, "{}", op.failure_message());
        return Err(ApiError::Transport(op));
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
