//! Client configuration loaded from the environment.

use std::env;

use tracing::info;

use crate::client::GroceryClient;
use crate::controller::GroceryController;
use crate::remote::RemoteStore;
use crate::transport::UreqTransport;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";
pub const BASE_URL_VAR: &str = "GROCERY_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    /// Reads `GROCERY_API_URL`, falling back to `DEFAULT_BASE_URL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(BASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| {
                info!("{BASE_URL_VAR} not set, using default: {DEFAULT_BASE_URL}");
                DEFAULT_BASE_URL.to_string()
            });
        Self { base_url }
    }

    /// A controller talking to `base_url` over ureq.
    pub fn connect(&self) -> GroceryController<UreqTransport> {
        let store = RemoteStore::new(GroceryClient::new(&self.base_url), UreqTransport::new());
        GroceryController::new(store)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
