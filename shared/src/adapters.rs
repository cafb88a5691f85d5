use crate::analytics::Visit;
use crate::core::{LinkStore, Page, VideoSearch};
use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::Database;
use tokio::sync::OnceCell;

pub const YOUTUBE_API_URL: &str = "https://youtube.googleapis.com/youtube/v3";

const DB_NAME: &str = "urlShortener";
const PAGES_COLLECTION: &str = "pages";
const STATISTICS_COLLECTION: &str = "statistics";

#[derive(Debug)]
pub struct MongoLinkStore {
    uri: String,
    database: OnceCell<Database>,
}

impl MongoLinkStore {
    pub fn new(uri: String) -> Self {
        Self {
            uri,
            database: OnceCell::new(),
        }
    }

    /// Connecting is deferred to the first store call, so a handler can
    /// refuse requests on missing configuration without touching the network.
    /// Once initialized the handle is shared read-only across invocations.
    async fn database(&self) -> Result<&Database, String> {
        self.database
            .get_or_try_init(|| async {
                let client = mongodb::Client::with_uri_str(&self.uri)
                    .await
                    .map_err(|e| format!("Error connecting to document store: {:?}", e))?;
                Ok(client.database(DB_NAME))
            })
            .await
    }
}

#[async_trait]
impl LinkStore for MongoLinkStore {
    async fn find_page(&self, short_url: &str) -> Result<Option<Page>, String> {
        let database = self.database().await?;
        database
            .collection::<Page>(PAGES_COLLECTION)
            .find_one(doc! { "shortUrl": short_url })
            .await
            .map_err(|e| format!("Error looking up short url: {:?}", e))
    }

    async fn record_visit(&self, visit: Visit) -> Result<(), String> {
        let database = self.database().await?;
        database
            .collection::<Visit>(STATISTICS_COLLECTION)
            .insert_one(&visit)
            .await
            .map(|_| ())
            .map_err(|e| format!("Error recording visit: {:?}", e))
    }
}

#[derive(Debug, Clone)]
pub struct YouTubeSearchClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl YouTubeSearchClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self::with_base_url(http_client, YOUTUBE_API_URL.to_string())
    }

    pub fn with_base_url(http_client: reqwest::Client, base_url: String) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    // Parameter order is fixed: key, part, maxResult, q.
    fn search_request(&self, api_key: &str, query: &str) -> reqwest::RequestBuilder {
        self.http_client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("key", api_key),
                ("part", "snippet"),
                ("maxResult", "10"),
                ("q", query),
            ])
    }
}

#[async_trait]
impl VideoSearch for YouTubeSearchClient {
    async fn search(&self, api_key: &str, query: &str) -> Result<String, String> {
        let response = self
            .search_request(api_key, query)
            .send()
            .await
            .map_err(|e| format!("Error calling search API: {:?}", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Error reading search API response: {:?}", e))?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(body)
        }
    }
}
