use config::Config;
use http_handler::{function_handler, HandlerDeps};
use lambda_http::{run, service_fn, tracing, Error};
use shared::adapters::MongoLinkStore;

mod config;
mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();
    let config = Config::load()?;
    // The store connects lazily; with no URI configured the handler answers
    // 501 before ever calling it.
    let link_store = MongoLinkStore::new(config.uri_mongodb().unwrap_or_default().to_string());
    let deps = HandlerDeps { link_store, config };

    run(service_fn(|event| function_handler(&deps, event))).await
}
