use figment::providers::Env;
use figment::Figment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct Config {
    pub youtube_key: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Env::raw().only(&["YOUTUBE_KEY"]))
            .extract()
    }

    /// An empty key counts as absent.
    pub fn youtube_key(&self) -> Option<&str> {
        self.youtube_key.as_deref().filter(|key| !key.is_empty())
    }
}
