use config::Config;
use http_handler::{function_handler, HandlerDeps};
use lambda_http::{run, service_fn, tracing, Error};
use shared::adapters::YouTubeSearchClient;

mod config;
mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();
    let config = Config::load()?;
    let http_client = shared::Client::builder()
        .timeout(std::time::Duration::from_secs(2))
        .build()?;
    let search_client = YouTubeSearchClient::new(http_client);
    let deps = HandlerDeps {
        search_client,
        config,
    };

    run(service_fn(|event| function_handler(&deps, event))).await
}
