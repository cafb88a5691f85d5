use figment::providers::Env;
use figment::Figment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct Config {
    pub uri_mongodb: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Env::raw().only(&["URI_MONGODB"]))
            .extract()
    }

    /// An empty connection string counts as absent.
    pub fn uri_mongodb(&self) -> Option<&str> {
        self.uri_mongodb.as_deref().filter(|uri| !uri.is_empty())
    }
}
