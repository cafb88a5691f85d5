use crate::config::Config;
use lambda_http::http::StatusCode;
use lambda_http::{tracing, Error, IntoResponse, Request, RequestExt};
use shared::core::VideoSearch;
use shared::utils::{api_response, not_implemented_response, text_response};

pub(crate) const BAD_REQUEST_MESSAGE: &str = "Search param not provided";

pub(crate) struct HandlerDeps<S: VideoSearch> {
    pub search_client: S,
    pub config: Config,
}

pub(crate) async fn function_handler<S: VideoSearch>(
    deps: &HandlerDeps<S>,
    event: Request,
) -> Result<impl IntoResponse, Error> {
    tracing::info!("Received event: {:?}", event);

    let api_key = match deps.config.youtube_key() {
        Some(key) => key,
        None => return not_implemented_response(),
    };

    let search = event
        .query_string_parameters_ref()
        .and_then(|params| params.first("search"))
        .unwrap_or("");

    if search.is_empty() {
        return text_response(&StatusCode::BAD_REQUEST, BAD_REQUEST_MESSAGE);
    }

    match deps.search_client.search(api_key, search).await {
        Ok(payload) => api_response(&StatusCode::OK, &payload),
        Err(e) => {
            tracing::error!("Search API call failed: {:?}", e);
            text_response(&StatusCode::UNPROCESSABLE_ENTITY, &e)
        }
    }
}
