use crate::analytics::Visit;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[cfg(any(test, feature = "mocks"))]
use mockall::automock;

/// A stored short-link mapping. Created out-of-band; this service only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub long_url: String,
    pub short_url: String,
}

#[cfg_attr(any(test, feature = "mocks"), automock)]
#[async_trait]
pub trait LinkStore: Debug {
    async fn find_page(&self, short_url: &str) -> Result<Option<Page>, String>;
    async fn record_visit(&self, visit: Visit) -> Result<(), String>;
}

#[cfg_attr(any(test, feature = "mocks"), automock)]
#[async_trait]
pub trait VideoSearch: Debug {
    async fn search(&self, api_key: &str, query: &str) -> Result<String, String>;
}
